//! File-based delay processing command.

use anyhow::Context;
use clap::Args;
use eco_core::linear_to_db;
use eco_engine::{DelayEngine, DelayParams, ParamSpec};
use eco_io::{WavSpec, read_wav_info, read_wav_stereo, write_wav_stereo};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Delay time in seconds (0.01 to 2.0)
    #[arg(short, long, default_value_t = DelayParams::DELAY_SECS.default)]
    time: f32,

    /// Feedback gain (0 to 0.98)
    #[arg(short, long, default_value_t = DelayParams::FEEDBACK.default)]
    feedback: f32,

    /// Dry/wet mix (0 = dry only, 1 = wet only)
    #[arg(short, long, default_value_t = DelayParams::DRY_WET.default)]
    mix: f32,

    /// Processing block size
    #[arg(long, default_value = "512")]
    block_size: usize,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,
}

/// Reject values the engine's parameter layer would otherwise clamp:
/// a typo'd argument should fail loudly, not process with a surprise.
fn check_range(value: f32, spec: &ParamSpec) -> anyhow::Result<()> {
    if value < spec.min || value > spec.max {
        anyhow::bail!(
            "{} must be within [{}, {}], got {}",
            spec.name,
            spec.min,
            spec.max,
            value
        );
    }
    Ok(())
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    check_range(args.time, &DelayParams::DELAY_SECS)?;
    check_range(args.feedback, &DelayParams::FEEDBACK)?;
    check_range(args.mix, &DelayParams::DRY_WET)?;
    if args.block_size == 0 {
        anyhow::bail!("Block size must be at least 1");
    }
    if !matches!(args.bit_depth, 16 | 24 | 32) {
        anyhow::bail!("Bit depth must be 16, 24, or 32");
    }

    let info = read_wav_info(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    tracing::info!(
        channels = info.channels,
        sample_rate = info.sample_rate,
        frames = info.num_frames,
        "input header read"
    );

    println!("Reading {}...", args.input.display());
    let (mut samples, spec) = read_wav_stereo(&args.input)?;
    println!(
        "  {} frames, {} Hz, {:.2}s",
        samples.len(),
        spec.sample_rate,
        info.duration_secs
    );

    let input_rms = rms(&samples.left, &samples.right);
    let input_peak = peak(&samples.left, &samples.right);

    let params = DelayParams::new();
    params.set_delay_secs(args.time);
    params.set_feedback(args.feedback);
    params.set_dry_wet(args.mix);

    let mut engine = DelayEngine::new();
    engine.configure(spec.sample_rate as f64, DelayEngine::MAX_DELAY_SECS, &params);

    println!(
        "Processing ({:.0} ms delay, {:.0}% feedback, {:.0}% wet)...",
        args.time * 1000.0,
        args.feedback * 100.0,
        args.mix * 100.0
    );

    // Process in place, block by block, with a progress bar
    let len = samples.len();
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("##-"),
    );

    for start in (0..len).step_by(args.block_size) {
        let end = (start + args.block_size).min(len);
        engine.process_block(
            &mut samples.left[start..end],
            &mut samples.right[start..end],
            &params,
        );
        pb.set_position(end as u64);
    }
    pb.finish_with_message("done");

    let output_rms = rms(&samples.left, &samples.right);
    let output_peak = peak(&samples.left, &samples.right);

    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(input_rms),
        linear_to_db(input_peak)
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(output_rms),
        linear_to_db(output_peak)
    );

    let out_spec = WavSpec {
        channels: 2,
        sample_rate: spec.sample_rate,
        bits_per_sample: args.bit_depth,
    };

    println!("\nWriting {}...", args.output.display());
    write_wav_stereo(&args.output, &samples, out_spec)?;
    println!("Done!");

    Ok(())
}

fn rms(left: &[f32], right: &[f32]) -> f32 {
    let count = left.len() + right.len();
    if count == 0 {
        return 0.0;
    }
    let sum: f32 = left
        .iter()
        .chain(right.iter())
        .map(|s| s * s)
        .sum();
    (sum / count as f32).sqrt()
}

fn peak(left: &[f32], right: &[f32]) -> f32 {
    left.iter()
        .chain(right.iter())
        .map(|s| s.abs())
        .fold(0.0, f32::max)
}
