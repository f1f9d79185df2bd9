use std::fmt;

use thiserror::Error;

/// Which table an out of range index was aimed at
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IndexKind {
    Input,
    Output,
    InputTerm,
    OutputTerm,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Input => "input",
            Self::Output => "output",
            Self::InputTerm => "input term",
            Self::OutputTerm => "output term",
        })
    }
}

/// What kind of name failed to resolve (or collided)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameKind {
    InputVariable,
    OutputVariable,
    InputTerm,
    OutputTerm,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InputVariable => "input variable",
            Self::OutputVariable => "output variable",
            Self::InputTerm => "input term",
            Self::OutputTerm => "output term",
        })
    }
}

/// The token the rule parser was waiting for when it gave up
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Expected {
    If,
    Is,
    AndOrThen,
    InputName,
    InputTerm,
    OutputName,
    OutputTerm,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::If => "'if'",
            Self::Is => "'is'",
            Self::AndOrThen => "'and' or 'then'",
            Self::InputName => "an input name",
            Self::InputTerm => "an input term",
            Self::OutputName => "an output name",
            Self::OutputTerm => "an output term",
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FuzzyError {
    #[error("{kind} index {index} out of range (len {len})")]
    InvalidIndex { kind: IndexKind, index: usize, len: usize },

    #[error("requested {requested} {what}, maximum is {max}")]
    CapacityExceeded {
        what: &'static str,
        requested: usize,
        max: usize,
    },

    #[error("unknown {kind} \"{name}\"")]
    UnknownName { kind: NameKind, name: String },

    #[error("{kind} \"{name}\" already exists")]
    DuplicateName { kind: NameKind, name: String },

    #[error("degenerate membership function \"{name}\": [{left}, {top}, {right}]")]
    DegenerateMembershipFunction {
        name: String,
        left: f64,
        top: f64,
        right: f64,
    },

    #[error("invalid rule \"{rule}\": expected {expected}, found \"{token}\"")]
    RuleSyntax {
        rule: String,
        token: String,
        expected: Expected,
    },

    #[error("{kind} {index} of \"{variable}\" was never set")]
    UndefinedTerm {
        kind: NameKind,
        variable: String,
        index: usize,
    },

    #[error("integration step {0} must be positive and finite")]
    InvalidStep(f64),

    #[error("no rule fired for output {0}")]
    NoActiveRules(usize),

    #[error("aggregated surface of output {0} is zero at every sample")]
    EmptySurface(usize),

    #[error("output {output} spans {from} to {to}, too wide to sample with step {step}")]
    RangeTooWide { output: usize, from: f64, to: f64, step: f64 },
}

pub type Result<T> = std::result::Result<T, FuzzyError>;
