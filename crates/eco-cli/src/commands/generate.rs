//! Test signal generation command.
//!
//! Impulses, tones, and noise are the standard probes for a delay:
//! an impulse exposes the echo taps directly, a tone shows the comb
//! response, and noise exercises the feedback path broadband.

use clap::{Args, Subcommand};
use eco_io::{StereoSamples, WavSpec, write_wav_stereo};
use std::path::PathBuf;

#[derive(Args)]
pub struct GenerateArgs {
    #[command(subcommand)]
    command: GenerateCommand,
}

#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate a single-sample impulse
    Impulse {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Length in samples
        #[arg(long, default_value = "48000")]
        length: usize,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,

        /// Impulse amplitude
        #[arg(long, default_value = "1.0")]
        amplitude: f32,
    },

    /// Generate a sine tone
    Tone {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Frequency in Hz
        #[arg(long, default_value = "440.0")]
        freq: f32,

        /// Duration in seconds
        #[arg(long, default_value = "1.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.8")]
        amplitude: f32,
    },

    /// Generate white noise
    Noise {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Duration in seconds
        #[arg(long, default_value = "1.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.5")]
        amplitude: f32,
    },
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let (output, samples, sample_rate) = match args.command {
        GenerateCommand::Impulse {
            output,
            length,
            sample_rate,
            amplitude,
        } => (output, impulse(length, amplitude), sample_rate),

        GenerateCommand::Tone {
            output,
            freq,
            duration,
            sample_rate,
            amplitude,
        } => {
            let length = (duration * sample_rate as f32) as usize;
            (output, sine(length, freq, sample_rate, amplitude), sample_rate)
        }

        GenerateCommand::Noise {
            output,
            duration,
            sample_rate,
            amplitude,
        } => {
            let length = (duration * sample_rate as f32) as usize;
            (output, white_noise(length, amplitude), sample_rate)
        }
    };

    tracing::info!(frames = samples.len(), sample_rate, "signal generated");

    let spec = WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample: 32,
    };
    write_wav_stereo(&output, &StereoSamples::from_mono(samples), spec)?;

    println!("Wrote {}", output.display());
    Ok(())
}

fn impulse(length: usize, amplitude: f32) -> Vec<f32> {
    let mut samples = vec![0.0; length];
    if let Some(first) = samples.first_mut() {
        *first = amplitude;
    }
    samples
}

fn sine(length: usize, freq: f32, sample_rate: u32, amplitude: f32) -> Vec<f32> {
    (0..length)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            (2.0 * std::f32::consts::PI * freq * t).sin() * amplitude
        })
        .collect()
}

/// xorshift32 with a fixed seed, so generated test files are
/// reproducible run to run.
fn white_noise(length: usize, amplitude: f32) -> Vec<f32> {
    let mut state = 0x12345678u32;
    (0..length)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state as f32 / u32::MAX as f32 * 2.0 - 1.0) * amplitude
        })
        .collect()
}
