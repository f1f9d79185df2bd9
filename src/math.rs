use num::Float;

/// Degree of membership of `x` in the triangle `(left, 0) (top, 1) (right, 0)`.
///
/// The support is open: `x == left` and `x == right` are outside. A shoulder
/// (`left == top` or `top == right`) never divides by its zero-width side
/// since that side lies entirely on an excluded endpoint.
pub(crate) fn triangular<F: Float>(x: F, left: F, top: F, right: F) -> F {
    if x <= left || x >= right {
        return F::zero();
    }

    if x <= top {
        // Rising edge
        (x - left) / (top - left)
    } else {
        // Falling edge
        (x - top) / (top - right) + F::one()
    }
}

#[test]
fn test_triangular() {
    assert_eq!(triangular(-0.5, -1., 0., 1.), 0.5);
    assert_eq!(triangular(0.5, -1., 0., 1.), 0.5);
    assert_eq!(triangular(0., -1., 0., 1.), 1.);
    assert_eq!(triangular(-1., -1., 0., 1.), 0.);
    assert_eq!(triangular(1., -1., 0., 1.), 0.);
    assert_eq!(triangular(7., -1., 0., 1.), 0.);

    // Works with f32 too
    assert_eq!(triangular(1.5f32, 1., 2., 3.), 0.5);
}

#[test]
fn test_triangular_shoulders() {
    // Right triangle leaning left: apex on the left edge
    assert_eq!(triangular(0., 0., 0., 2.), 0.);
    assert_eq!(triangular(0.5, 0., 0., 2.), 0.75);
    assert!(triangular(1e-9, 0., 0., 2.) > 0.99);

    // Apex on the right edge
    assert_eq!(triangular(1.5, 0., 2., 2.), 0.75);
    assert_eq!(triangular(2., 0., 2., 2.), 0.);
}
