use log::{debug, trace};

use crate::config::{COG_STEP, MAX_SAMPLES};
use crate::dsl::{Clause, ParsedRule};
use crate::error::{FuzzyError, IndexKind, Result};
use crate::inputs::Inputs;
use crate::linspace::Linspace;
use crate::ops::{aggregation, centre_of_gravity, conjunction};
use crate::outputs::Outputs;
use crate::terms::MembershipFunction;
use crate::variable::LinguisticVariable;

/// Degree to which an input value belongs to one of its variable's terms
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Membership {
    pub term: usize,
    pub degree: f64,
}

/// A rule which fired, recorded against its consequent
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Firing {
    pub term: usize,
    pub strength: f64,
}

/// Degrees of every term of `var` whose open support contains `x`, in term
/// order. Terms with degree zero are left out.
pub fn fuzzify(var: &LinguisticVariable, x: f64) -> Vec<Membership> {
    var.terms()
        .filter_map(|(term, function)| {
            let degree = function.membership(x);

            // NaN inputs belong nowhere
            if degree.is_nan() || degree <= 0. {
                return None;
            }

            debug!("{} - {}: x={}, A(x)={}", var.name(), function.name(), x, degree);

            Some(Membership { term, degree })
        })
        .collect()
}

/// Fires `rule` if every antecedent term is active in `fuzzified`, with the
/// smallest antecedent degree as its strength.
pub fn infer(rule: &ParsedRule, fuzzified: &[Vec<Membership>]) -> Option<(Clause, f64)> {
    let degrees = rule
        .antecedents
        .iter()
        .map(|clause| {
            fuzzified
                .get(clause.variable)?
                .iter()
                .find(|membership| membership.term == clause.term)
                .map(|membership| membership.degree)
        })
        .collect::<Option<Vec<_>>>()?;

    conjunction(degrees).map(|strength| (rule.consequent, strength))
}

/// Min conjunction, min implication, max aggregation and centre of gravity
/// defuzzification, integrated with a fixed step.
#[derive(Clone, Copy, Debug)]
pub struct MamdaniInference {
    step: f64,
    max_samples: usize,
}

impl Default for MamdaniInference {
    fn default() -> Self {
        Self::new(COG_STEP)
    }
}

impl MamdaniInference {
    pub fn new(step: f64) -> Self {
        Self {
            step,
            max_samples: MAX_SAMPLES,
        }
    }

    pub fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples;
        self
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn max_samples(&self) -> usize {
        self.max_samples
    }

    /// Crisp value of `output` given the rules that fired for it
    pub fn defuzzify(&self, output: &LinguisticVariable, firings: &[Firing]) -> Result<f64> {
        if firings.is_empty() {
            return Err(FuzzyError::NoActiveRules(output.index()));
        }

        let clipped = firings
            .iter()
            .map(|firing| {
                let function = output.term(firing.term).ok_or_else(|| FuzzyError::UndefinedTerm {
                    kind: output.kind().term_name_kind(),
                    variable: output.name().to_owned(),
                    index: firing.term,
                })?;

                Ok((function, firing.strength))
            })
            .collect::<Result<Vec<(&MembershipFunction, f64)>>>()?;

        let from = clipped.iter().map(|(f, _)| f.left()).fold(f64::INFINITY, f64::min);
        let to = clipped.iter().map(|(f, _)| f.right()).fold(f64::NEG_INFINITY, f64::max);

        debug!("{}: range({} to {})", output.name(), from, to);

        let surface = |x: f64| {
            clipped
                .iter()
                .map(|(function, strength)| function.clipped(x, *strength))
                .fold(0., aggregation)
        };
        let samples = Linspace::with_step(from, to, self.step)
            .filter(|xs| xs.len() <= self.max_samples)
            .ok_or(FuzzyError::RangeTooWide {
                output: output.index(),
                from,
                to,
                step: self.step,
            })?
            .map(|x| (x, surface(x)));

        centre_of_gravity(samples).ok_or(FuzzyError::EmptySurface(output.index()))
    }

    /// Runs fuzzification, inference and defuzzification over the whole
    /// system. Nothing is kept between calls.
    pub fn eval(
        &self,
        inputs: &[LinguisticVariable],
        outputs: &[LinguisticVariable],
        rules: &[ParsedRule],
        values: &Inputs,
    ) -> Result<Outputs> {
        let fuzzified = inputs
            .iter()
            .zip(values.as_slice())
            .map(|(var, x)| fuzzify(var, *x))
            .collect::<Vec<_>>();

        let mut inferred = vec![Vec::new(); outputs.len()];

        for (i, rule) in rules.iter().enumerate() {
            let Some((consequent, strength)) = infer(rule, &fuzzified) else {
                trace!("rule {i} did not fire");
                continue;
            };

            let len = inferred.len();
            let firings = inferred
                .get_mut(consequent.variable)
                .ok_or(FuzzyError::InvalidIndex {
                    kind: IndexKind::Output,
                    index: consequent.variable,
                    len,
                })?;

            debug!(
                "rule {i} -> passed ({}({}) - {}: {})",
                outputs[consequent.variable].name(),
                consequent.variable,
                consequent.term,
                strength
            );

            firings.push(Firing {
                term: consequent.term,
                strength,
            });
        }

        outputs
            .iter()
            .zip(&inferred)
            .map(|(var, firings)| self.defuzzify(var, firings))
            .collect::<Result<Vec<_>>>()
            .map(Outputs::new)
    }
}
