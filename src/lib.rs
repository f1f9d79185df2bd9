//! Mamdani fuzzy inference over triangular terms and textual rules.
//!
//! A [`FuzzySystem`] is built up by naming its input and output variables,
//! giving each a set of triangular terms and adding rules such as
//! `if distance is small and speed is fast then throttle is negative`.
//! Each call to [`FuzzySystem::calculate_output`] fuzzifies the current
//! inputs, fires every rule whose antecedents all hold (minimum of their
//! degrees), and defuzzifies each output as the centre of gravity of the
//! maximum of its clipped consequents.
//!
//! ```
//! use fuzzy_mamdani::FuzzySystem;
//!
//! # fn main() -> Result<(), fuzzy_mamdani::FuzzyError> {
//! let mut system = FuzzySystem::new(1, 1)?;
//!
//! system.init_input_variable(0, 3, "x")?;
//! system.set_input_term(0, 0, -2., -1., 0., "negative")?;
//! system.set_input_term(1, 0, -1., 0., 1., "zero")?;
//! system.set_input_term(2, 0, 0., 1., 2., "positive")?;
//!
//! system.init_output_variable(0, 3, "y")?;
//! system.set_output_term(0, 0, -2., -1., 0., "negative")?;
//! system.set_output_term(1, 0, -1., 0., 1., "zero")?;
//! system.set_output_term(2, 0, 0., 1., 2., "positive")?;
//!
//! system.add_rule("if x is negative then y is positive")?;
//! system.add_rule("if x is zero then y is zero")?;
//! system.add_rule("if x is positive then y is negative")?;
//!
//! system.set_input(0, 0.5)?;
//! system.calculate_output()?;
//!
//! assert!(system.get_output(0)? < 0.);
//! # Ok(())
//! # }
//! ```

use std::fmt;

use log::debug;

mod config;
mod dsl;
mod error;
mod inference;
mod inputs;
mod linspace;
mod math;
pub mod ops;
mod outputs;
mod rules;
mod terms;
mod variable;

pub use config::{Config, Limits, COG_STEP, MAX_SAMPLES};
pub use dsl::{parse_rule, Clause, ParsedRule};
pub use error::{Expected, FuzzyError, IndexKind, NameKind, Result};
pub use inference::{fuzzify, infer, Firing, MamdaniInference, Membership};
pub use inputs::Inputs;
pub use outputs::Outputs;
pub use rules::Rules;
pub use terms::MembershipFunction;
pub use variable::{LinguisticVariable, VariableKind};

use variable::find_variable;

/// A fuzzy system with a fixed number of inputs and outputs.
///
/// Setup calls that fail leave the system as it was. A failed
/// [`calculate_output`](Self::calculate_output) keeps the previous outputs.
#[derive(Clone, Debug)]
pub struct FuzzySystem {
    config: Config,
    model: MamdaniInference,
    inputs: Vec<LinguisticVariable>,
    outputs: Vec<LinguisticVariable>,
    input_values: Inputs,
    output_values: Outputs,
    rules: Rules,
}

impl FuzzySystem {
    pub fn new(n_inputs: usize, n_outputs: usize) -> Result<Self> {
        Self::with_config(n_inputs, n_outputs, Config::default())
    }

    pub fn with_config(n_inputs: usize, n_outputs: usize, config: Config) -> Result<Self> {
        config.validate()?;
        Limits::check("inputs", n_inputs, config.limits.max_inputs)?;
        Limits::check("outputs", n_outputs, config.limits.max_outputs)?;

        Ok(Self {
            config,
            model: MamdaniInference::new(config.cog_step).with_max_samples(config.limits.max_samples),
            inputs: (0..n_inputs)
                .map(|i| LinguisticVariable::unnamed(VariableKind::Input, i))
                .collect(),
            outputs: (0..n_outputs)
                .map(|i| LinguisticVariable::unnamed(VariableKind::Output, i))
                .collect(),
            input_values: Inputs::new(n_inputs),
            output_values: Outputs::zeroed(n_outputs),
            rules: Rules::new(),
        })
    }

    /// Discards the whole configuration and starts over with new counts
    pub fn init(&mut self, n_inputs: usize, n_outputs: usize) -> Result<()> {
        *self = Self::with_config(n_inputs, n_outputs, self.config)?;

        Ok(())
    }

    /// Names input `index` and gives it `n_terms` empty term slots. Any terms
    /// it had before are dropped.
    pub fn init_input_variable(&mut self, index: usize, n_terms: usize, name: &str) -> Result<()> {
        init_variable(&mut self.inputs, VariableKind::Input, index, n_terms, name, &self.config.limits)?;
        self.rules.invalidate();

        Ok(())
    }

    pub fn init_output_variable(&mut self, index: usize, n_terms: usize, name: &str) -> Result<()> {
        init_variable(&mut self.outputs, VariableKind::Output, index, n_terms, name, &self.config.limits)?;
        self.rules.invalidate();

        Ok(())
    }

    /// Defines term `term_index` of input `var_index`
    pub fn set_input_term(
        &mut self,
        term_index: usize,
        var_index: usize,
        left: f64,
        top: f64,
        right: f64,
        name: &str,
    ) -> Result<()> {
        set_term(&mut self.inputs, VariableKind::Input, term_index, var_index, left, top, right, name)?;
        self.rules.invalidate();

        Ok(())
    }

    /// Defines term `term_index` of output `var_index`
    pub fn set_output_term(
        &mut self,
        term_index: usize,
        var_index: usize,
        left: f64,
        top: f64,
        right: f64,
        name: &str,
    ) -> Result<()> {
        set_term(&mut self.outputs, VariableKind::Output, term_index, var_index, left, top, right, name)?;
        self.rules.invalidate();

        Ok(())
    }

    /// Parses and appends a rule. Every name it uses must already exist.
    pub fn add_rule(&mut self, text: &str) -> Result<()> {
        Limits::check("rules", self.rules.len() + 1, self.config.limits.max_rules)?;

        self.rules.add(text, &self.inputs, &self.outputs)
    }

    pub fn set_input(&mut self, index: usize, value: f64) -> Result<()> {
        self.input_values.set(index, value)
    }

    /// Runs one fuzzification, inference and defuzzification cycle
    pub fn calculate_output(&mut self) -> Result<()> {
        debug!("calculating outputs for inputs {:?}", self.input_values.as_slice());

        let rules = self.rules.parsed(&self.inputs, &self.outputs)?;
        let outputs = self
            .model
            .eval(&self.inputs, &self.outputs, rules, &self.input_values)?;

        self.output_values = outputs;

        Ok(())
    }

    /// Value of output `index` from the last successful calculation, zero
    /// before the first one
    pub fn get_output(&self, index: usize) -> Result<f64> {
        self.output_values.get(index)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn inputs(&self) -> &[LinguisticVariable] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[LinguisticVariable] {
        &self.outputs
    }

    pub fn input(&self, index: usize) -> Option<&LinguisticVariable> {
        self.inputs.get(index)
    }

    pub fn output(&self, index: usize) -> Option<&LinguisticVariable> {
        self.outputs.get(index)
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn input_values(&self) -> &Inputs {
        &self.input_values
    }

    pub fn output_values(&self) -> &Outputs {
        &self.output_values
    }
}

fn init_variable(
    vars: &mut [LinguisticVariable],
    kind: VariableKind,
    index: usize,
    n_terms: usize,
    name: &str,
    limits: &Limits,
) -> Result<()> {
    if index >= vars.len() {
        return Err(FuzzyError::InvalidIndex {
            kind: kind.index_kind(),
            index,
            len: vars.len(),
        });
    }

    Limits::check("terms", n_terms, limits.max_terms)?;

    if find_variable(vars, name).is_some_and(|i| i != index) {
        return Err(FuzzyError::DuplicateName {
            kind: kind.variable_name_kind(),
            name: name.to_owned(),
        });
    }

    vars[index] = LinguisticVariable::new(kind, index, name, n_terms);

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn set_term(
    vars: &mut [LinguisticVariable],
    kind: VariableKind,
    term_index: usize,
    var_index: usize,
    left: f64,
    top: f64,
    right: f64,
    name: &str,
) -> Result<()> {
    let len = vars.len();
    let var = vars.get_mut(var_index).ok_or(FuzzyError::InvalidIndex {
        kind: kind.index_kind(),
        index: var_index,
        len,
    })?;

    var.set_term(term_index, MembershipFunction::new(left, top, right, name)?)
}

impl fmt::Display for FuzzySystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+----------------------------------------+")?;
        writeln!(f, "|              Fuzzy system              |")?;
        writeln!(f, "+----------------------------------------+")?;
        writeln!(f)?;

        for var in self.inputs.iter().chain(&self.outputs) {
            writeln!(f, "{var}")?;
        }

        write!(f, "{}", self.rules)
    }
}
