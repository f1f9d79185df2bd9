//! The rule language: `if VAR is TERM (and VAR is TERM)* then VAR is TERM`.
//!
//! Tokens are separated by single spaces and matched case-sensitively. The
//! output term runs to the end of the text, spaces included.

use crate::error::{Expected, FuzzyError, NameKind, Result};
use crate::variable::{find_variable, LinguisticVariable};

/// `input is term`, by index
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Clause {
    pub variable: usize,
    pub term: usize,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsedRule {
    pub antecedents: Vec<Clause>,
    pub consequent: Clause,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum State {
    ExpectIf,
    ExpectInputName,
    ExpectInputIs,
    ExpectInputTerm,
    ExpectAndOrThen,
    ExpectOutputName,
    ExpectOutputIs,
    ExpectOutputTerm,
    Done,
}

impl State {
    fn expected(self) -> Expected {
        match self {
            Self::ExpectIf => Expected::If,
            Self::ExpectInputName => Expected::InputName,
            Self::ExpectInputIs | Self::ExpectOutputIs => Expected::Is,
            Self::ExpectInputTerm => Expected::InputTerm,
            Self::ExpectAndOrThen => Expected::AndOrThen,
            Self::ExpectOutputName => Expected::OutputName,
            // Never waited on, parsing is over
            Self::ExpectOutputTerm | Self::Done => Expected::OutputTerm,
        }
    }

    /// Transition table. Name states accept any token here; whether the name
    /// resolves is checked by the parser.
    fn next(self, token: &str) -> Option<State> {
        use State::*;

        match (self, token) {
            (ExpectIf, "if") => Some(ExpectInputName),
            (ExpectInputName, _) => Some(ExpectInputIs),
            (ExpectInputIs, "is") => Some(ExpectInputTerm),
            (ExpectInputTerm, _) => Some(ExpectAndOrThen),
            (ExpectAndOrThen, "and") => Some(ExpectInputName),
            (ExpectAndOrThen, "then") => Some(ExpectOutputName),
            (ExpectOutputName, _) => Some(ExpectOutputIs),
            (ExpectOutputIs, "is") => Some(ExpectOutputTerm),
            (ExpectOutputTerm, _) => Some(Done),
            _ => None,
        }
    }
}

/// Parses `text`, resolving every name against `inputs` and `outputs` as it
/// goes.
pub fn parse_rule(text: &str, inputs: &[LinguisticVariable], outputs: &[LinguisticVariable]) -> Result<ParsedRule> {
    let syntax_error = |token: &str, state: State| FuzzyError::RuleSyntax {
        rule: text.to_owned(),
        token: token.to_owned(),
        expected: state.expected(),
    };
    let unknown = |kind: NameKind, token: &str| FuzzyError::UnknownName {
        kind,
        name: token.to_owned(),
    };

    let mut state = State::ExpectIf;
    let mut rest = Some(text);
    let mut antecedents = Vec::new();
    let mut input = 0;
    let mut output = 0;
    let mut consequent = None;

    while state != State::Done {
        let Some(remaining) = rest else {
            // Ran out of text before the output term
            return Err(syntax_error("", state));
        };

        let token = if state == State::ExpectOutputTerm {
            rest = None;
            remaining
        } else {
            match remaining.split_once(' ') {
                Some((token, tail)) => {
                    rest = Some(tail);
                    token
                },
                None => {
                    rest = None;
                    remaining
                },
            }
        };

        match state {
            State::ExpectInputName => {
                input = find_variable(inputs, token).ok_or_else(|| unknown(NameKind::InputVariable, token))?;
            },
            State::ExpectInputTerm => {
                let term = inputs[input]
                    .term_index(token)
                    .ok_or_else(|| unknown(NameKind::InputTerm, token))?;

                antecedents.push(Clause { variable: input, term });
            },
            State::ExpectOutputName => {
                output = find_variable(outputs, token).ok_or_else(|| unknown(NameKind::OutputVariable, token))?;
            },
            State::ExpectOutputTerm => {
                let term = outputs[output]
                    .term_index(token)
                    .ok_or_else(|| unknown(NameKind::OutputTerm, token))?;

                consequent = Some(Clause { variable: output, term });
            },
            _ => {},
        }

        state = state.next(token).ok_or_else(|| syntax_error(token, state))?;
    }

    let consequent = consequent.ok_or_else(|| syntax_error("", State::ExpectOutputTerm))?;

    Ok(ParsedRule {
        antecedents,
        consequent,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn variables() -> (Vec<LinguisticVariable>, Vec<LinguisticVariable>) {
        use crate::terms::MembershipFunction;
        use crate::variable::VariableKind;

        let build = |kind: VariableKind, index: usize, name: &str| {
            let mut var = LinguisticVariable::new(kind, index, name, 3);

            for (i, (l, t, r, term)) in [
                (-2., -1., 0., "negative"),
                (-1., 0., 1., "zero"),
                (0., 1., 2., "positive"),
            ]
            .into_iter()
            .enumerate()
            {
                var.set_term(i, MembershipFunction::new(l, t, r, term).unwrap()).unwrap();
            }

            var
        };

        (
            vec![build(VariableKind::Input, 0, "x"), build(VariableKind::Input, 1, "w")],
            vec![build(VariableKind::Output, 0, "y")],
        )
    }

    #[test]
    fn test_parse_single_clause() {
        let (inputs, outputs) = variables();
        let rule = parse_rule("if x is negative then y is positive", &inputs, &outputs).unwrap();

        assert_eq!(rule.antecedents, vec![Clause { variable: 0, term: 0 }]);
        assert_eq!(rule.consequent, Clause { variable: 0, term: 2 });
    }

    #[test]
    fn test_parse_conjunction() {
        let (inputs, outputs) = variables();
        let rule = parse_rule("if x is zero and w is positive and x is negative then y is zero", &inputs, &outputs).unwrap();

        assert_eq!(
            rule.antecedents,
            vec![
                Clause { variable: 0, term: 1 },
                Clause { variable: 1, term: 2 },
                Clause { variable: 0, term: 0 },
            ]
        );
        assert_eq!(rule.consequent, Clause { variable: 0, term: 1 });
    }

    #[test]
    fn test_parse_keyword_errors() {
        let (inputs, outputs) = variables();
        let expect = |text: &str, token: &str, expected: Expected| {
            assert_eq!(
                parse_rule(text, &inputs, &outputs),
                Err(FuzzyError::RuleSyntax {
                    rule: text.into(),
                    token: token.into(),
                    expected
                }),
                "{text}"
            );
        };

        expect("if x iz negative then y is zero", "iz", Expected::Is);
        expect("If x is negative then y is zero", "If", Expected::If);
        expect("if x is negative or w is zero then y is zero", "or", Expected::AndOrThen);
        expect("if x is negative then y are zero", "are", Expected::Is);
        // Premature end of text
        expect("if x is negative", "", Expected::AndOrThen);
        expect("if x is negative then y is", "", Expected::OutputTerm);
        expect("", "", Expected::If);
        // A doubled space puts an empty token where a keyword belongs
        expect("if x  is zero then y is zero", "", Expected::Is);
    }

    #[test]
    fn test_parse_unknown_names() {
        let (inputs, outputs) = variables();
        let unknown = |text: &str| match parse_rule(text, &inputs, &outputs) {
            Err(FuzzyError::UnknownName { kind, name }) => (kind, name),
            other => panic!("{text}: {other:?}"),
        };

        assert_eq!(
            unknown("if x is huge then y is zero"),
            (NameKind::InputTerm, "huge".into())
        );
        assert_eq!(
            unknown("if z is zero then y is zero"),
            (NameKind::InputVariable, "z".into())
        );
        // Inputs and outputs are separate namespaces
        assert_eq!(
            unknown("if y is zero then y is zero"),
            (NameKind::InputVariable, "y".into())
        );
        assert_eq!(
            unknown("if x is zero then x is zero"),
            (NameKind::OutputVariable, "x".into())
        );
        // The output term swallows the rest of the line, trailing space included
        assert_eq!(
            unknown("if x is zero then y is zero "),
            (NameKind::OutputTerm, "zero ".into())
        );
        // Doubled spaces yield an empty token
        assert_eq!(
            unknown("if x is  zero then y is zero"),
            (NameKind::InputTerm, "".into())
        );
    }
}
