//! Live parameter store shared between a control thread and the audio
//! thread.
//!
//! [`DelayParams`] holds the three delay controls in lock-free atomics
//! (`f32` bits in an `AtomicU32`). A UI or automation thread calls the
//! setters; the engine loads each value once per audio sample. Each scalar
//! is read and written tear-free on its own, but no consistency is
//! promised *across* the three values: the engine may observe a new mix
//! alongside an old feedback within one sample. That relaxed contract is
//! deliberate; a rare stale single-scalar read is inaudible.
//!
//! Setters clamp to the declared [`ParamSpec`] range, so the engine never
//! observes an out-of-range value.

use core::sync::atomic::{AtomicU32, Ordering};

/// Declared range and default of one control parameter.
///
/// This is the contract with the parameter layer: hosts and UIs validate
/// and display against it, and [`DelayParams`] setters clamp with it.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Display name.
    pub name: &'static str,
    /// Inclusive lower bound.
    pub min: f32,
    /// Inclusive upper bound.
    pub max: f32,
    /// Initial value.
    pub default: f32,
}

impl ParamSpec {
    /// Clamps `value` into the declared range.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

/// Lock-free store for the three live delay controls.
///
/// | Parameter | Range | Default |
/// |-----------|-------------|---------|
/// | Dry/wet | 0.0 – 1.0 | 0.5 |
/// | Feedback | 0.0 – 0.98 | 0.5 |
/// | Delay time | 0.01 – 2.0 s | 1.0 s |
///
/// `DelayParams` is `Sync`; share it behind an `Arc` (or a plain
/// reference with a scoped thread) between the control side and the
/// audio side.
#[derive(Debug)]
pub struct DelayParams {
    dry_wet: AtomicU32,
    feedback: AtomicU32,
    delay_secs: AtomicU32,
}

impl DelayParams {
    /// Dry/wet mix: linear crossfade between input and delayed signal.
    pub const DRY_WET: ParamSpec = ParamSpec {
        name: "Dry Wet",
        min: 0.0,
        max: 1.0,
        default: 0.5,
    };

    /// Feedback gain applied to the delayed signal before re-injection.
    /// Capped below unity so echoes always decay.
    pub const FEEDBACK: ParamSpec = ParamSpec {
        name: "Feedback",
        min: 0.0,
        max: 0.98,
        default: 0.5,
    };

    /// Target delay time in seconds. The upper bound matches the
    /// engine's buffer capacity constant.
    pub const DELAY_SECS: ParamSpec = ParamSpec {
        name: "Delay Time",
        min: 0.01,
        max: 2.0,
        default: 1.0,
    };

    /// Creates a store with every parameter at its default.
    pub fn new() -> Self {
        Self {
            dry_wet: AtomicU32::new(Self::DRY_WET.default.to_bits()),
            feedback: AtomicU32::new(Self::FEEDBACK.default.to_bits()),
            delay_secs: AtomicU32::new(Self::DELAY_SECS.default.to_bits()),
        }
    }

    /// Current dry/wet mix in \[0, 1\].
    #[inline]
    pub fn dry_wet(&self) -> f32 {
        f32::from_bits(self.dry_wet.load(Ordering::Acquire))
    }

    /// Sets the dry/wet mix, clamped to \[0, 1\].
    pub fn set_dry_wet(&self, value: f32) {
        self.dry_wet
            .store(Self::DRY_WET.clamp(value).to_bits(), Ordering::Release);
    }

    /// Current feedback gain in \[0, 0.98\].
    #[inline]
    pub fn feedback(&self) -> f32 {
        f32::from_bits(self.feedback.load(Ordering::Acquire))
    }

    /// Sets the feedback gain, clamped to \[0, 0.98\].
    pub fn set_feedback(&self, value: f32) {
        self.feedback
            .store(Self::FEEDBACK.clamp(value).to_bits(), Ordering::Release);
    }

    /// Current target delay time in seconds, in \[0.01, 2.0\].
    #[inline]
    pub fn delay_secs(&self) -> f32 {
        f32::from_bits(self.delay_secs.load(Ordering::Acquire))
    }

    /// Sets the target delay time in seconds, clamped to \[0.01, 2.0\].
    pub fn set_delay_secs(&self, value: f32) {
        self.delay_secs
            .store(Self::DELAY_SECS.clamp(value).to_bits(), Ordering::Release);
    }
}

impl Default for DelayParams {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_defaults() {
        let params = DelayParams::new();
        assert_eq!(params.dry_wet(), 0.5);
        assert_eq!(params.feedback(), 0.5);
        assert_eq!(params.delay_secs(), 1.0);
    }

    #[test]
    fn setters_clamp_to_range() {
        let params = DelayParams::new();

        params.set_dry_wet(1.5);
        assert_eq!(params.dry_wet(), 1.0);

        params.set_feedback(2.0);
        assert_eq!(params.feedback(), 0.98);

        params.set_delay_secs(-1.0);
        assert_eq!(params.delay_secs(), 0.01);

        params.set_delay_secs(99.0);
        assert_eq!(params.delay_secs(), 2.0);
    }

    #[test]
    fn in_range_values_pass_through() {
        let params = DelayParams::new();
        params.set_dry_wet(0.25);
        params.set_feedback(0.75);
        params.set_delay_secs(0.375);

        assert_eq!(params.dry_wet(), 0.25);
        assert_eq!(params.feedback(), 0.75);
        assert_eq!(params.delay_secs(), 0.375);
    }

    #[test]
    fn shared_across_threads() {
        use std::sync::Arc;

        let params = Arc::new(DelayParams::new());
        let writer = Arc::clone(&params);

        let handle = std::thread::spawn(move || {
            writer.set_feedback(0.9);
        });
        handle.join().unwrap();

        assert_eq!(params.feedback(), 0.9);
    }
}
