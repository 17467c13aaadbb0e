//! Audio file I/O for the eco delay engine.
//!
//! This crate provides stereo WAV reading and writing so the engine can
//! be driven end-to-end against real audio files:
//!
//! - [`read_wav_stereo`] / [`write_wav_stereo`] for loading and saving
//!   deinterleaved stereo buffers
//! - [`read_wav_info`] for header-only metadata inspection
//! - [`StereoSamples`] as the deinterleaved stereo interchange type

mod wav;

pub use wav::{
    StereoSamples, WavFormat, WavInfo, WavSpec, read_wav_info, read_wav_stereo, write_wav_stereo,
};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
