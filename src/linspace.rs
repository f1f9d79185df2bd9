use num::Float;

/// Evenly spaced samples `start, start + step, ...`
///
/// Every sample is computed from its index rather than by repeated addition,
/// so long scans do not drift.
pub(crate) struct Linspace<F> {
    start: F,
    step: F,
    index: usize,
    len: usize,
}

impl<F: Float> Linspace<F> {
    /// Samples from `min` in increments of `step`, up to and including the
    /// last sample that does not exceed `max`. Empty if `max < min`.
    ///
    /// `None` if the number of samples does not fit in a `usize`.
    pub(crate) fn with_step(min: F, max: F, step: F) -> Option<Self> {
        let len = if max < min || step <= F::zero() {
            0
        } else {
            // Nudge before flooring so 1.0 / 0.02 lands on 50, not 49
            let steps = (max - min) / step + F::epsilon().sqrt();
            steps.floor().to_usize()?.checked_add(1)?
        };

        Some(Linspace {
            start: min,
            step,
            index: 0,
            len,
        })
    }
}

impl<F: Float> Iterator for Linspace<F> {
    type Item = F;

    #[inline]
    fn next(&mut self) -> Option<F> {
        if self.index >= self.len {
            None
        } else {
            let i = self.index;
            self.index += 1;
            Some(self.start + self.step * F::from(i)?)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl<F: Float> ExactSizeIterator for Linspace<F> {}

#[test]
fn test_linspace_with_step() {
    let samples = |min: f64, max: f64, step: f64| Linspace::with_step(min, max, step).unwrap();

    assert_eq!(samples(-1., 1., 0.5).collect::<Vec<_>>(), vec![-1., -0.5, 0., 0.5, 1.]);
    assert_eq!(samples(0., 1., 0.02).len(), 51);
    assert_eq!(samples(0., 0., 0.02).collect::<Vec<_>>(), vec![0.]);
    assert_eq!(samples(1., 0., 0.02).count(), 0);
    assert_eq!(samples(0., 1., 0.).count(), 0);
}

#[test]
fn test_linspace_too_wide() {
    assert!(Linspace::with_step(-1e20, 1e20, 0.02).is_none());
    assert!(Linspace::with_step(0., f64::INFINITY, 0.02).is_none());
    assert!(Linspace::with_step(0f32, 1e9, 0.02).is_some());
}
