use crate::error::{FuzzyError, Result};

/// Integration step used when searching for the centre of gravity
pub const COG_STEP: f64 = 0.02;

/// Default bound on the samples of one centre of gravity search, a range of
/// about 20000 at the default step
pub const MAX_SAMPLES: usize = 1 << 20;

/// Hard upper bounds on the size of a system.
///
/// The defaults suit small embedded controllers; use [`Limits::unbounded`]
/// when no such bound is wanted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub max_inputs: usize,
    pub max_outputs: usize,
    /// Terms per linguistic variable
    pub max_terms: usize,
    pub max_rules: usize,
    /// Samples taken when integrating one output
    pub max_samples: usize,
}

impl Limits {
    pub fn unbounded() -> Self {
        Self {
            max_inputs: usize::MAX,
            max_outputs: usize::MAX,
            max_terms: usize::MAX,
            max_rules: usize::MAX,
            max_samples: usize::MAX,
        }
    }

    pub(crate) fn check(what: &'static str, requested: usize, max: usize) -> Result<()> {
        if requested > max {
            return Err(FuzzyError::CapacityExceeded { what, requested, max });
        }

        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_inputs: 4,
            max_outputs: 2,
            max_terms: 16,
            max_rules: 256,
            max_samples: MAX_SAMPLES,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub cog_step: f64,
    pub limits: Limits,
}

impl Config {
    pub fn unbounded() -> Self {
        Self {
            limits: Limits::unbounded(),
            ..Self::default()
        }
    }

    pub fn with_step(mut self, cog_step: f64) -> Self {
        self.cog_step = cog_step;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.cog_step.is_finite() || self.cog_step <= 0. {
            return Err(FuzzyError::InvalidStep(self.cog_step));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cog_step: COG_STEP,
            limits: Limits::default(),
        }
    }
}

#[test]
fn test_config_validation() {
    assert!(Config::default().validate().is_ok());
    assert_eq!(
        Config::default().with_step(0.).validate(),
        Err(FuzzyError::InvalidStep(0.))
    );
    assert!(Config::default().with_step(f64::NAN).validate().is_err());
    assert!(Config::default().with_step(-0.5).validate().is_err());
}

#[test]
fn test_limits_check() {
    assert!(Limits::check("inputs", 4, 4).is_ok());
    assert_eq!(
        Limits::check("inputs", 5, 4),
        Err(FuzzyError::CapacityExceeded {
            what: "inputs",
            requested: 5,
            max: 4
        })
    );
}
