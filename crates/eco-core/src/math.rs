//! Mathematical utility functions for DSP.
//!
//! Allocation-free helpers shared across the workspace, suitable for
//! `no_std` use.

use libm::{expf, logf};

/// Convert decibels to linear gain.
///
/// # Example
/// ```rust
/// use eco_core::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 0.001);
/// assert!((db_to_linear(-6.02) - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    // 10^(dB/20) = e^(dB * ln(10)/20)
    const FACTOR: f32 = core::f32::consts::LN_10 / 20.0;
    expf(db * FACTOR)
}

/// Convert linear gain to decibels.
///
/// Inputs at or below zero are floored to avoid `-inf`.
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    // 20 * log10(linear) = 20 * ln(linear) / ln(10)
    const FACTOR: f32 = 20.0 / core::f32::consts::LN_10;
    logf(linear.max(1e-10)) * FACTOR
}

/// Convert a duration in seconds to samples at the given sample rate.
#[inline]
pub fn secs_to_samples(secs: f32, sample_rate: f32) -> f32 {
    secs * sample_rate
}

/// Flush subnormal (denormalized) floats to zero.
///
/// Subnormal floats (~1e-38 to 1e-45) cause severe CPU performance
/// degradation on most architectures. This function replaces values below
/// 1e-20 with zero, providing margin before the IEEE 754 subnormal range
/// begins.
///
/// Use this in feedback loops where signal can decay indefinitely toward
/// zero.
#[allow(clippy::inline_always)]
#[inline(always)]
pub fn flush_denormal(x: f32) -> f32 {
    if x.abs() < 1e-20 { 0.0 } else { x }
}

/// Crossfade between dry and wet signals.
///
/// Computes `dry * (1 - mix) + wet * mix`: a plain linear crossfade, not
/// an equal-power pan law.
///
/// # Arguments
///
/// * `dry` - Unprocessed signal
/// * `wet` - Processed signal
/// * `mix` - Blend factor in \[0.0, 1.0\]: 0.0 = all dry, 1.0 = all wet
#[inline]
pub fn wet_dry_mix(dry: f32, wet: f32, mix: f32) -> f32 {
    dry * (1.0 - mix) + wet * mix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_linear_roundtrip() {
        let original = 0.5;
        let db = linear_to_db(original);
        let back = db_to_linear(db);
        assert!(
            (original - back).abs() < 1e-5,
            "roundtrip failed: {original} -> {db} -> {back}"
        );
    }

    #[test]
    fn db_known_values() {
        assert!((db_to_linear(0.0) - 1.0).abs() < 1e-6);
        assert!((db_to_linear(-6.0206) - 0.5).abs() < 0.001);
    }

    #[test]
    fn linear_to_db_floors_zero() {
        assert!(linear_to_db(0.0).is_finite());
    }

    #[test]
    fn secs_to_samples_at_44100() {
        assert_eq!(secs_to_samples(1.0, 44100.0), 44100.0);
        assert_eq!(secs_to_samples(0.5, 44100.0), 22050.0);
    }

    #[test]
    fn flush_denormal_behavior() {
        assert_eq!(flush_denormal(1e-30), 0.0);
        assert_eq!(flush_denormal(-1e-30), 0.0);
        assert_eq!(flush_denormal(1e-10), 1e-10);
        assert_eq!(flush_denormal(0.5), 0.5);
    }

    #[test]
    fn wet_dry_mix_extremes() {
        assert_eq!(wet_dry_mix(1.0, 0.25, 0.0), 1.0);
        assert_eq!(wet_dry_mix(1.0, 0.25, 1.0), 0.25);
        assert!((wet_dry_mix(1.0, 0.0, 0.5) - 0.5).abs() < 1e-6);
    }
}
