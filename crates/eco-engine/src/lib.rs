//! Eco Engine - the stereo feedback delay
//!
//! This crate holds the delay engine itself and its live parameter
//! store:
//!
//! - [`DelayEngine`] - two circular delay lines (left/right) with a
//!   shared smoothed delay time, feedback, and dry/wet mixing, processed
//!   sample-by-sample inside fixed-size audio blocks
//! - [`DelayParams`] - the three controls (dry/wet, feedback, delay
//!   time) as lock-free atomic scalars shared with a control thread
//! - [`ParamSpec`] - declared range and default of each control
//!
//! ## Example
//!
//! ```rust,ignore
//! use eco_engine::{DelayEngine, DelayParams};
//!
//! let params = DelayParams::new();
//! let mut engine = DelayEngine::new();
//! engine.configure(sample_rate, DelayEngine::MAX_DELAY_SECS, &params);
//!
//! // once per audio block, in place:
//! engine.process_block(&mut left, &mut right, &params);
//! ```
//!
//! The host owns the channel buffers and serializes `configure` against
//! `process_block`; a UI thread may mutate `DelayParams` at any time.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod engine;
pub mod params;

// Re-export main types at crate root
pub use engine::DelayEngine;
pub use params::{DelayParams, ParamSpec};
