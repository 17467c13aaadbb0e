//! Eco Core - DSP primitives for the eco delay engine
//!
//! This crate provides the building blocks the delay engine is assembled
//! from, designed for real-time audio processing with zero allocation in
//! the audio path.
//!
//! # Core Abstractions
//!
//! ## Delay Line
//!
//! - [`DelayLine`] - Circular sample buffer with a write head and
//!   fractional-sample (linearly interpolated) reads behind it
//!
//! ## Smoothing
//!
//! - [`SmoothedValue`] - Fixed-coefficient one-pole smoother for
//!   zipper-free control changes
//!
//! ## Utilities
//!
//! - Math helpers: [`wet_dry_mix`], [`flush_denormal`],
//!   [`secs_to_samples`], [`db_to_linear`], [`linear_to_db`]
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded audio applications.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! eco-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: allocation only at construction, never while
//!   processing
//! - **No dependencies on std**: pure `no_std` with `libm` for math

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod delay_line;
pub mod math;
pub mod smoother;

// Re-export main types at crate root
pub use delay_line::DelayLine;
pub use math::{db_to_linear, flush_denormal, linear_to_db, secs_to_samples, wet_dry_mix};
pub use smoother::SmoothedValue;
