//! The stereo feedback delay engine.

use crate::DelayParams;
use eco_core::{DelayLine, SmoothedValue, flush_denormal, secs_to_samples, wet_dry_mix};

/// Per-channel delay state: one circular buffer plus the feedback value
/// carried over from the previous sample.
#[derive(Debug, Clone)]
struct ChannelState {
    line: DelayLine,
    feedback: f32,
}

impl ChannelState {
    fn new(capacity: usize) -> Self {
        Self {
            line: DelayLine::new(capacity),
            feedback: 0.0,
        }
    }
}

/// Stereo feedback delay with a smoothed, fractional delay time.
///
/// The engine owns two independent delay lines (left, right) and a single
/// smoothed delay-time state shared by both channels, so delay-time
/// modulation stays stereo-coherent while feedback tails remain
/// independent per channel.
///
/// # Lifecycle
///
/// Call [`configure`](Self::configure) once the sample rate is known
/// (and again whenever it changes), then [`process_block`](Self::process_block)
/// once per audio block. Configuration allocates; block processing never
/// does.
///
/// # Example
///
/// ```rust
/// use eco_engine::{DelayEngine, DelayParams};
///
/// let params = DelayParams::new();
/// params.set_delay_secs(0.25);
/// params.set_feedback(0.4);
/// params.set_dry_wet(0.5);
///
/// let mut engine = DelayEngine::new();
/// engine.configure(48000.0, DelayEngine::MAX_DELAY_SECS, &params);
///
/// let mut left = vec![0.0f32; 256];
/// let mut right = vec![0.0f32; 256];
/// engine.process_block(&mut left, &mut right, &params);
/// ```
#[derive(Debug, Clone)]
pub struct DelayEngine {
    /// Left and right channel state; `None` until first configure.
    channels: Option<[ChannelState; 2]>,
    /// Current delay length in samples, smoothed toward the live target.
    /// One instance shared by both channels.
    time_samples: SmoothedValue,
    sample_rate: f64,
}

impl DelayEngine {
    /// Maximum representable delay time, fixed for the session. The
    /// delay-time parameter range ([`DelayParams::DELAY_SECS`]) tops out
    /// here.
    pub const MAX_DELAY_SECS: f64 = 2.0;

    /// One-pole coefficient for the delay-time smoother, applied once
    /// per sample. The value trades responsiveness to time changes
    /// against pitch-bend artifacts while the read head glides.
    pub const TIME_SMOOTHING_COEFF: f32 = 1e-4;

    /// Creates an unconfigured engine.
    ///
    /// [`configure`](Self::configure) must run before the first
    /// [`process_block`](Self::process_block) call.
    pub fn new() -> Self {
        Self {
            channels: None,
            time_samples: SmoothedValue::new(0.0, Self::TIME_SMOOTHING_COEFF),
            sample_rate: 0.0,
        }
    }

    /// Allocates and resets the engine for `sample_rate`.
    ///
    /// Both channel buffers are sized to `floor(sample_rate *
    /// max_delay_secs)` samples and zero-filled, write heads and feedback
    /// state are rewound, and the smoothed delay time snaps to the
    /// current target in `params` so the first block starts already on
    /// time (no ramp-up from zero).
    ///
    /// Safe to call repeatedly, e.g. on a sample-rate change: the
    /// previous buffers are dropped and any delayed content is
    /// discarded. This is the only operation that allocates; never call
    /// it concurrently with [`process_block`](Self::process_block) on
    /// the same engine.
    ///
    /// # Panics
    ///
    /// Panics if `sample_rate` or `max_delay_secs` is not positive.
    /// Invalid buffer geometry must not reach the audio path.
    pub fn configure(&mut self, sample_rate: f64, max_delay_secs: f64, params: &DelayParams) {
        assert!(sample_rate > 0.0, "sample rate must be positive");
        assert!(max_delay_secs > 0.0, "maximum delay time must be positive");

        let capacity = (sample_rate * max_delay_secs) as usize;
        self.channels = Some([ChannelState::new(capacity), ChannelState::new(capacity)]);
        self.sample_rate = sample_rate;

        let target = secs_to_samples(params.delay_secs(), sample_rate as f32);
        self.time_samples.set_immediate(Self::clamp_to_line(target, capacity));
    }

    /// Processes one stereo block in place.
    ///
    /// For every sample, in order: advance the shared delay-time
    /// smoother toward the live target, write input plus the previous
    /// sample's feedback into each channel's line, read the delayed
    /// signal at the smoothed (fractional) position, refresh the
    /// feedback state, advance the write heads, and crossfade dry
    /// against wet into the output slot.
    ///
    /// Parameters are sampled from `params` once per audio sample, so
    /// control changes land with at most one sample of latency. The loop
    /// performs no allocation, locking, or I/O.
    ///
    /// # Panics
    ///
    /// Panics if the engine was never configured or the channel slices
    /// differ in length.
    pub fn process_block(&mut self, left: &mut [f32], right: &mut [f32], params: &DelayParams) {
        assert_eq!(
            left.len(),
            right.len(),
            "channel blocks must have the same length"
        );
        let channels = self
            .channels
            .as_mut()
            .expect("configure must be called before process_block");

        let sample_rate = self.sample_rate as f32;
        let capacity = channels[0].line.capacity();

        for (l, r) in left.iter_mut().zip(right.iter_mut()) {
            let dry_wet = params.dry_wet();
            let feedback_gain = params.feedback();
            let target = secs_to_samples(params.delay_secs(), sample_rate);

            self.time_samples
                .set_target(Self::clamp_to_line(target, capacity));
            let time = self.time_samples.advance();

            for (channel, sample) in channels.iter_mut().zip([&mut *l, &mut *r]) {
                let dry = *sample;

                channel.line.write(flush_denormal(dry + channel.feedback));
                let wet = channel.line.read_behind(time);
                channel.feedback = wet * feedback_gain;
                channel.line.advance();

                *sample = wet_dry_mix(dry, wet, dry_wet);
            }
        }
    }

    /// Current smoothed delay length in samples.
    ///
    /// Diagnostic view of the shared time state, e.g. for displaying the
    /// effective (still gliding) delay while the target changes.
    pub fn delay_samples(&self) -> f32 {
        self.time_samples.get()
    }

    /// Keep the read position strictly inside the line: at or past
    /// `capacity - 1` the slot behind the head is already being
    /// overwritten.
    fn clamp_to_line(delay_samples: f32, capacity: usize) -> f32 {
        delay_samples.min((capacity.saturating_sub(1)) as f32)
    }
}

impl Default for DelayEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f64 = 44100.0;

    fn configured_engine(params: &DelayParams) -> DelayEngine {
        let mut engine = DelayEngine::new();
        engine.configure(SAMPLE_RATE, DelayEngine::MAX_DELAY_SECS, params);
        engine
    }

    #[test]
    fn impulse_comes_back() {
        let params = DelayParams::new();
        params.set_delay_secs(0.1);
        params.set_dry_wet(1.0);
        params.set_feedback(0.0);

        let mut engine = configured_engine(&params);

        let len = 8192;
        let mut left = vec![0.0f32; len];
        let mut right = vec![0.0f32; len];
        left[0] = 1.0;
        right[0] = 1.0;

        engine.process_block(&mut left, &mut right, &params);

        let peak_l = left.iter().fold(0.0f32, |a, &s| a.max(s.abs()));
        let peak_r = right.iter().fold(0.0f32, |a, &s| a.max(s.abs()));
        assert!(peak_l > 0.9, "left echo missing, peak {peak_l}");
        assert!(peak_r > 0.9, "right echo missing, peak {peak_r}");
    }

    #[test]
    fn full_dry_is_passthrough() {
        let params = DelayParams::new();
        params.set_dry_wet(0.0);

        let mut engine = configured_engine(&params);

        let mut left: Vec<f32> = (0..64).map(|i| (i as f32 * 0.01).sin()).collect();
        let mut right = left.clone();
        let expected = left.clone();

        engine.process_block(&mut left, &mut right, &params);

        assert_eq!(left, expected);
        assert_eq!(right, expected);
    }

    #[test]
    fn channels_do_not_bleed() {
        let params = DelayParams::new();
        params.set_delay_secs(0.05);
        params.set_dry_wet(1.0);
        params.set_feedback(0.5);

        let mut engine = configured_engine(&params);

        // Impulse on the left only: the right buffer must stay silent.
        let len = 4096;
        let mut left = vec![0.0f32; len];
        let mut right = vec![0.0f32; len];
        left[0] = 1.0;

        engine.process_block(&mut left, &mut right, &params);

        assert!(right.iter().all(|&s| s == 0.0), "right channel leaked");
        assert!(left.iter().any(|&s| s != 0.0));
    }

    #[test]
    fn empty_block_is_a_no_op() {
        let params = DelayParams::new();
        let mut engine = configured_engine(&params);
        engine.process_block(&mut [], &mut [], &params);
    }

    #[test]
    #[should_panic(expected = "configure must be called")]
    fn process_before_configure_panics() {
        let params = DelayParams::new();
        let mut engine = DelayEngine::new();
        engine.process_block(&mut [0.0], &mut [0.0], &params);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn mismatched_blocks_panic() {
        let params = DelayParams::new();
        let mut engine = configured_engine(&params);
        engine.process_block(&mut [0.0, 0.0], &mut [0.0], &params);
    }

    #[test]
    #[should_panic(expected = "sample rate must be positive")]
    fn zero_sample_rate_panics() {
        let params = DelayParams::new();
        let mut engine = DelayEngine::new();
        engine.configure(0.0, DelayEngine::MAX_DELAY_SECS, &params);
    }
}
