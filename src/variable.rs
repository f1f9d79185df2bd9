use std::fmt;

use crate::error::{FuzzyError, IndexKind, NameKind, Result};
use crate::terms::MembershipFunction;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VariableKind {
    Input,
    Output,
}

impl VariableKind {
    pub(crate) fn variable_name_kind(self) -> NameKind {
        match self {
            Self::Input => NameKind::InputVariable,
            Self::Output => NameKind::OutputVariable,
        }
    }

    pub(crate) fn term_name_kind(self) -> NameKind {
        match self {
            Self::Input => NameKind::InputTerm,
            Self::Output => NameKind::OutputTerm,
        }
    }

    pub(crate) fn index_kind(self) -> IndexKind {
        match self {
            Self::Input => IndexKind::Input,
            Self::Output => IndexKind::Output,
        }
    }

    pub(crate) fn term_index_kind(self) -> IndexKind {
        match self {
            Self::Input => IndexKind::InputTerm,
            Self::Output => IndexKind::OutputTerm,
        }
    }
}

/// A named input or output dimension and its fuzzy terms.
///
/// Terms live in slots allocated up front; rules and inference results refer
/// to them by slot index. A slot stays empty until a term is set into it.
#[derive(Clone, Debug)]
pub struct LinguisticVariable {
    kind: VariableKind,
    index: usize,
    name: String,
    terms: Vec<Option<MembershipFunction>>,
}

impl LinguisticVariable {
    pub(crate) fn new(kind: VariableKind, index: usize, name: impl Into<String>, n_terms: usize) -> Self {
        Self {
            kind,
            index,
            name: name.into(),
            terms: vec![None; n_terms],
        }
    }

    /// A variable slot which has not been initialised yet
    pub(crate) fn unnamed(kind: VariableKind, index: usize) -> Self {
        Self::new(kind, index, "", 0)
    }

    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of term slots, set or not
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn term(&self, index: usize) -> Option<&MembershipFunction> {
        self.terms.get(index).and_then(Option::as_ref)
    }

    /// Set terms in slot order, paired with their slot index
    pub fn terms(&self) -> impl Iterator<Item = (usize, &MembershipFunction)> {
        self.terms
            .iter()
            .enumerate()
            .filter_map(|(i, term)| term.as_ref().map(|term| (i, term)))
    }

    pub fn term_index(&self, name: &str) -> Option<usize> {
        self.terms().find(|(_, term)| term.name() == name).map(|(i, _)| i)
    }

    pub(crate) fn set_term(&mut self, index: usize, term: MembershipFunction) -> Result<()> {
        let len = self.terms.len();

        if index >= len {
            return Err(FuzzyError::InvalidIndex {
                kind: self.kind.term_index_kind(),
                index,
                len,
            });
        }

        if self.term_index(term.name()).is_some_and(|i| i != index) {
            return Err(FuzzyError::DuplicateName {
                kind: self.kind.term_name_kind(),
                name: term.name().to_owned(),
            });
        }

        self.terms[index] = Some(term);

        Ok(())
    }
}

/// Index of the variable called `name`. Uninitialised (unnamed) variables
/// never match.
pub(crate) fn find_variable(vars: &[LinguisticVariable], name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }

    vars.iter().position(|var| var.name == name)
}

impl fmt::Display for LinguisticVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            VariableKind::Input => "Input",
            VariableKind::Output => "Output",
        };

        writeln!(
            f,
            "{kind} set for {} {} named \"{}\":",
            kind.to_lowercase(),
            self.index,
            self.name
        )?;

        for (i, term) in self.terms() {
            writeln!(f, "Fuzzy set {i} named {term}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
fn speed() -> LinguisticVariable {
    let mut var = LinguisticVariable::new(VariableKind::Input, 1, "speed", 3);

    var.set_term(0, MembershipFunction::new(-1., 0., 1., "slow").unwrap()).unwrap();
    var.set_term(2, MembershipFunction::new(1., 2., 3., "fast").unwrap()).unwrap();
    var
}

#[test]
fn test_term_lookup() {
    let var = speed();

    assert_eq!(var.len(), 3);
    assert_eq!(var.term_index("slow"), Some(0));
    assert_eq!(var.term_index("fast"), Some(2));
    assert_eq!(var.term_index("medium"), None);
    // Empty slots never match, not even the empty name
    assert_eq!(var.term_index(""), None);
    assert!(var.term(1).is_none());
    assert_eq!(var.terms().map(|(i, _)| i).collect::<Vec<_>>(), vec![0, 2]);
}

#[test]
fn test_set_term_errors() {
    let mut var = speed();
    let slow = MembershipFunction::new(-2., 0., 2., "slow").unwrap();

    assert_eq!(
        var.set_term(3, slow.clone()),
        Err(FuzzyError::InvalidIndex {
            kind: IndexKind::InputTerm,
            index: 3,
            len: 3
        })
    );
    assert_eq!(
        var.set_term(1, slow.clone()),
        Err(FuzzyError::DuplicateName {
            kind: NameKind::InputTerm,
            name: "slow".into()
        })
    );
    // Re-setting a slot under its own name is fine
    assert!(var.set_term(0, slow).is_ok());
    assert_eq!(var.term(0).map(|t| t.right()), Some(2.));
}

#[test]
fn test_find_variable() {
    let vars = [
        LinguisticVariable::new(VariableKind::Input, 0, "distance", 3),
        speed(),
    ];

    assert_eq!(find_variable(&vars, "speed"), Some(1));
    assert_eq!(find_variable(&vars, "throttle"), None);
}

#[test]
fn test_display() {
    assert_eq!(
        speed().to_string(),
        "Input set for input 1 named \"speed\":\n\
         Fuzzy set 0 named \"slow\": [-1,0],[0,1],[1,0]\n\
         Fuzzy set 2 named \"fast\": [1,0],[2,1],[3,0]\n"
    );
}
