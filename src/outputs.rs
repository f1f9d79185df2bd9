use crate::error::{FuzzyError, IndexKind, Result};

/// Crisp results of the last successful evaluation, by output index
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outputs(Vec<f64>);

impl Outputs {
    pub(crate) fn new(defuzzificated: Vec<f64>) -> Self {
        Self(defuzzificated)
    }

    pub(crate) fn zeroed(len: usize) -> Self {
        Self(vec![0.; len])
    }

    pub fn get(&self, index: usize) -> Result<f64> {
        self.0.get(index).copied().ok_or(FuzzyError::InvalidIndex {
            kind: IndexKind::Output,
            index,
            len: self.0.len(),
        })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

#[test]
fn test_get() {
    let outputs = Outputs::new(vec![1.5, -0.25]);

    assert_eq!(outputs.get(1), Ok(-0.25));
    assert_eq!(Outputs::zeroed(1).get(0), Ok(0.));
    assert!(matches!(
        outputs.get(2),
        Err(FuzzyError::InvalidIndex { kind: IndexKind::Output, .. })
    ));
}
