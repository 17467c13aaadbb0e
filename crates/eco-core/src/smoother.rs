//! Fixed-coefficient one-pole smoothing.
//!
//! Control values that jump between audio blocks produce audible clicks
//! ("zipper noise") when applied directly. [`SmoothedValue`] drives a
//! state variable toward a target with a one-pole lowpass:
//!
//! ```text
//! y[n] = y[n-1] + coeff * (target - y[n-1])
//! ```
//!
//! The coefficient is supplied directly rather than derived from a time
//! constant, for callers that fix the smoothing rate per sample.

/// A scalar state smoothed toward a target with a one-pole lowpass.
///
/// The state moves a fixed fraction `coeff` of the remaining distance per
/// [`advance`](Self::advance) call, so it approaches the target
/// exponentially and never overshoots.
#[derive(Debug, Clone)]
pub struct SmoothedValue {
    /// Current smoothed value
    current: f32,
    /// Target value being approached
    target: f32,
    /// Per-sample smoothing coefficient in (0, 1]
    coeff: f32,
}

impl SmoothedValue {
    /// Creates a smoother at `initial`, moving `coeff` of the remaining
    /// distance toward the target per advance.
    ///
    /// A coefficient of `1.0` disables smoothing (the state snaps to the
    /// target on the next advance).
    ///
    /// # Panics
    ///
    /// Panics if `coeff` is outside `(0, 1]`.
    pub fn new(initial: f32, coeff: f32) -> Self {
        assert!(
            coeff > 0.0 && coeff <= 1.0,
            "Smoothing coefficient must be in (0, 1]"
        );

        Self {
            current: initial,
            target: initial,
            coeff,
        }
    }

    /// Sets the target value the state will approach.
    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Sets the target and snaps the state to it immediately.
    #[inline]
    pub fn set_immediate(&mut self, value: f32) {
        self.target = value;
        self.current = value;
    }

    /// Advances the state one step toward the target and returns it.
    #[inline]
    pub fn advance(&mut self) -> f32 {
        self.current += self.coeff * (self.target - self.current);
        self.current
    }

    /// Returns the current state without advancing.
    #[inline]
    pub fn get(&self) -> f32 {
        self.current
    }

    /// Returns the target value.
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Skips the state ahead to the target.
    #[inline]
    pub fn snap_to_target(&mut self) {
        self.current = self.target;
    }

    /// Whether the state has effectively reached the target.
    #[inline]
    pub fn is_settled(&self) -> bool {
        (self.current - self.target).abs() < 1e-6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_coeff_snaps() {
        let mut value = SmoothedValue::new(0.0, 1.0);
        value.set_target(0.5);
        assert_eq!(value.advance(), 0.5);
    }

    #[test]
    fn converges_toward_target() {
        let mut value = SmoothedValue::new(0.0, 1e-2);
        value.set_target(1.0);

        for _ in 0..2000 {
            value.advance();
        }
        assert!(
            (value.get() - 1.0).abs() < 1e-4,
            "should converge, got {}",
            value.get()
        );
    }

    #[test]
    fn never_overshoots() {
        let mut value = SmoothedValue::new(0.0, 1e-4);
        value.set_target(100.0);

        let mut prev = value.get();
        for _ in 0..100_000 {
            let v = value.advance();
            assert!(v >= prev, "moved away from target: {prev} -> {v}");
            assert!(v <= 100.0, "overshot target: {v}");
            prev = v;
        }
    }

    #[test]
    fn first_step_fraction_matches_coeff() {
        let mut value = SmoothedValue::new(0.0, 1e-4);
        value.set_target(10_000.0);
        let first = value.advance();
        assert!((first - 1.0).abs() < 1e-3, "expected ~1.0, got {first}");
    }

    #[test]
    fn snap_and_settled() {
        let mut value = SmoothedValue::new(0.0, 1e-4);
        value.set_target(2.0);
        assert!(!value.is_settled());

        value.snap_to_target();
        assert!(value.is_settled());
        assert_eq!(value.get(), 2.0);
    }

    #[test]
    #[should_panic]
    fn zero_coeff_panics() {
        let _value = SmoothedValue::new(0.0, 0.0);
    }
}
