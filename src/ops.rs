//! The fixed Mamdani operator set: minimum conjunction, clipping implication,
//! maximum aggregation and centre of gravity defuzzification.

use num::Float;

/// Combines the degrees of the propositions in a rule premise
pub fn conjunction<F: Float>(degrees: impl IntoIterator<Item = F>) -> Option<F> {
    degrees.into_iter().reduce(F::min)
}

/// Clips a consequent membership value at the rule's firing strength
pub fn implication<F: Float>(membership: F, strength: F) -> F {
    F::min(membership, strength)
}

/// Combines the clipped consequents of several rules at one point
pub fn aggregation<F: Float>(u: F, v: F) -> F {
    F::max(u, v)
}

/// x coordinate of the centre of gravity of sampled `(x, membership)` pairs.
///
/// `None` when the sampled area is zero.
pub fn centre_of_gravity<F: Float>(samples: impl IntoIterator<Item = (F, F)>) -> Option<F> {
    let (num, den) = samples
        .into_iter()
        .fold((F::zero(), F::zero()), |(num, den), (x, m)| (num + x * m, den + m));

    if den == F::zero() {
        None
    } else {
        Some(num / den)
    }
}

#[test]
fn test_conjunction() {
    assert_eq!(conjunction([0.3, 0.7]), Some(0.3));
    assert_eq!(conjunction([0.7, 0.3, 0.9]), Some(0.3));
    assert_eq!(conjunction([1.0]), Some(1.0));
    assert_eq!(conjunction(std::iter::empty::<f64>()), None);
}

#[test]
fn test_implication_aggregation() {
    assert_eq!(implication(0.8, 0.5), 0.5);
    assert_eq!(implication(0.2, 0.5), 0.2);
    assert_eq!(aggregation(0.2, 0.5), 0.5);
    assert_eq!(aggregation(0.5, 0.5), 0.5);
}

#[test]
fn test_centre_of_gravity() {
    assert_eq!(centre_of_gravity([(-1., 0.5), (0., 1.), (1., 0.5)]), Some(0.));
    assert_eq!(centre_of_gravity([(2., 1.), (4., 1.)]), Some(3.));
    assert_eq!(centre_of_gravity([(2., 0.), (4., 0.)]), None);
    assert_eq!(centre_of_gravity(std::iter::empty::<(f64, f64)>()), None);
}
