use crate::error::{FuzzyError, IndexKind, Result};

/// Crisp input values, by input index
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inputs(pub(crate) Vec<f64>);

impl Inputs {
    pub fn new(len: usize) -> Self {
        Inputs(vec![0.; len])
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.0.len();
        let slot = self.0.get_mut(index).ok_or(FuzzyError::InvalidIndex {
            kind: IndexKind::Input,
            index,
            len,
        })?;

        *slot = value;

        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

#[test]
fn test_set() {
    let mut inputs = Inputs::new(2);

    inputs.set(1, 0.5).unwrap();
    assert_eq!(inputs.as_slice(), &[0., 0.5]);
    assert_eq!(
        inputs.set(2, 1.),
        Err(FuzzyError::InvalidIndex {
            kind: IndexKind::Input,
            index: 2,
            len: 2
        })
    );
}
