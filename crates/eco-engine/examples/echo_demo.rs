//! Demonstration of the eco delay engine on a generated click track.
//!
//! Shows the configure/process lifecycle, live parameter changes while
//! audio is running, and the smoothed delay-time glide.
//!
//! Run with: cargo run --example echo_demo

use eco_engine::{DelayEngine, DelayParams};

const SAMPLE_RATE: f64 = 48000.0;
const BLOCK_SIZE: usize = 512;

fn rms(samples: &[f32]) -> f32 {
    (samples.iter().map(|s| s * s).sum::<f32>() / samples.len() as f32).sqrt()
}

fn main() {
    println!("Eco Delay Engine Demo");
    println!("=====================\n");

    // Two seconds of click track: a short burst every half second.
    let len = 2 * SAMPLE_RATE as usize;
    let mut left = vec![0.0f32; len];
    for beat in 0..4 {
        let start = beat * len / 4;
        for (i, s) in left[start..start + 64].iter_mut().enumerate() {
            *s = 0.8 * (1.0 - i as f32 / 64.0);
        }
    }
    let mut right = left.clone();
    let input_rms = rms(&left);

    let params = DelayParams::new();
    params.set_delay_secs(0.375);
    params.set_feedback(0.45);
    params.set_dry_wet(0.5);

    let mut engine = DelayEngine::new();
    engine.configure(SAMPLE_RATE, DelayEngine::MAX_DELAY_SECS, &params);

    println!("Delay time: {:.0} ms", params.delay_secs() * 1000.0);
    println!("Feedback:   {:.0}%", params.feedback() * 100.0);
    println!("Mix:        {:.0}%\n", params.dry_wet() * 100.0);

    // Process block by block, nudging the delay target halfway through
    // to show the smoothed glide.
    for (block_index, start) in (0..len).step_by(BLOCK_SIZE).enumerate() {
        let end = (start + BLOCK_SIZE).min(len);
        engine.process_block(&mut left[start..end], &mut right[start..end], &params);

        if block_index == len / BLOCK_SIZE / 2 {
            params.set_delay_secs(0.75);
            println!(
                "target stepped to 750 ms; engine still at {:.1} ms",
                engine.delay_samples() / SAMPLE_RATE as f32 * 1000.0
            );
        }
    }

    println!(
        "after the run the engine glided to {:.1} ms",
        engine.delay_samples() / SAMPLE_RATE as f32 * 1000.0
    );
    println!("\nInput RMS:  {:.4}", input_rms);
    println!("Output RMS: {:.4}", rms(&left));
    println!("\nDemo complete!");
}
