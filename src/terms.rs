use std::fmt;

use crate::error::{FuzzyError, Result};
use crate::math::triangular;

/// A named fuzzy set with a triangular membership function
#[derive(Clone, Debug, PartialEq)]
pub struct MembershipFunction {
    left: f64,
    top: f64,
    right: f64,
    name: String,
}

impl MembershipFunction {
    /// Fails with [`FuzzyError::DegenerateMembershipFunction`] unless
    /// `left <= top <= right`, `left < right` and all points are finite.
    pub fn new(left: f64, top: f64, right: f64, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let finite = left.is_finite() && top.is_finite() && right.is_finite();

        if !finite || left > top || top > right || left == right {
            return Err(FuzzyError::DegenerateMembershipFunction {
                name,
                left,
                top,
                right,
            });
        }

        Ok(Self { left, top, right, name })
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Degree to which `x` belongs to this set, zero outside the open
    /// interval `(left, right)`
    pub fn membership(&self, x: f64) -> f64 {
        triangular(x, self.left, self.top, self.right)
    }

    /// Membership clipped at `strength`
    pub(crate) fn clipped(&self, x: f64, strength: f64) -> f64 {
        crate::ops::implication(self.membership(x), strength)
    }
}

impl fmt::Display for MembershipFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\": [{},0],[{},1],[{},0]",
            self.name, self.left, self.top, self.right
        )
    }
}

#[test]
fn test_membership() {
    let zero = MembershipFunction::new(-1., 0., 1., "zero").unwrap();

    assert_eq!(zero.membership(-0.5), 0.5);
    assert_eq!(zero.membership(0.5), 0.5);
    assert_eq!(zero.membership(0.), 1.);
    assert_eq!(zero.membership(-1.), 0.);
    assert_eq!(zero.membership(1.), 0.);
    assert_eq!(zero.membership(-3.), 0.);
    assert_eq!(zero.clipped(0., 0.3), 0.3);
    assert_eq!(zero.clipped(0.5, 0.9), 0.5);
}

#[test]
fn test_degenerate() {
    assert!(MembershipFunction::new(0., 0., 1., "shoulder").is_ok());
    assert!(MembershipFunction::new(0., 1., 1., "shoulder").is_ok());

    for (l, t, r) in [(1., 0., 2.), (0., 2., 1.), (1., 1., 1.), (f64::NAN, 0., 1.), (0., 0., f64::INFINITY)] {
        let err = MembershipFunction::new(l, t, r, "bad").unwrap_err();

        assert!(matches!(err, FuzzyError::DegenerateMembershipFunction { .. }));
    }
}

#[test]
fn test_display() {
    let neg = MembershipFunction::new(-2., -1., 0., "negative").unwrap();

    assert_eq!(neg.to_string(), "\"negative\": [-2,0],[-1,1],[0,0]");
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::MembershipFunction;

    proptest! {
        #[test]
        fn membership_stays_in_unit_interval(
            left in -100.0f64..100.,
            a in 0.001f64..50.,
            b in 0.001f64..50.,
            x in -300.0f64..300.,
        ) {
            let f = MembershipFunction::new(left, left + a, left + a + b, "t").unwrap();
            let m = f.membership(x);

            prop_assert!((0. ..=1.).contains(&m));
            if x <= f.left() || x >= f.right() {
                prop_assert_eq!(m, 0.);
            }
            prop_assert_eq!(f.membership(f.top()), 1.);
        }
    }
}
