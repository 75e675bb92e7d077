//! audioproc WAV core
//!
//! This crate extracts 16-bit PCM samples from RIFF/WAVE buffers. It does no
//! file I/O: callers hand in the file contents and get back either a
//! validated [`SampleBuffer`] or the reason the stream was rejected.
//!
//! # Overview
//!
//! Parsing is one forward pass over the chunk stream followed by a profile
//! check:
//!
//! - **Byte cursor** - bounded reads of fixed-size records
//! - **Chunk walker** - dispatches on chunk tags, skipping unknown chunks by
//!   their declared size
//! - **Profile validator** - accepts only integer PCM, mono or stereo,
//!   16 bits per sample, 48000 Hz
//! - **Sample extractor** - decodes the `data` payload as little-endian `i16`
//!
//! # Example
//!
//! ```ignore
//! use audioproc_wav::{parse_wav, PcmError};
//!
//! match parse_wav(&bytes) {
//!     Ok(buffer) => println!("{} channels, {} frames", buffer.channels, buffer.frame_count()),
//!     Err(PcmError::UnsupportedSampleRate { rate, .. }) => eprintln!("resample {} Hz first", rate),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```
//!
//! # Crate Structure
//!
//! - [`parse_wav()`] / [`parse_wav_with()`] - Main entry points
//! - [`load_samples()`] - Empty-buffer-on-failure wrapper that logs the reason
//! - [`cursor`] - Bounded byte cursor
//! - [`chunk`] - Chunk headers and four-character codes
//! - [`walker`] - The chunk walk
//! - [`profile`] - Supported profile and validation
//! - [`samples`] - Sample extraction and [`SampleBuffer`]

pub mod chunk;
pub mod cursor;
pub mod error;
pub mod format;
pub mod options;
pub mod parser;
pub mod profile;
pub mod samples;
pub mod walker;

#[cfg(test)]
mod test_support;

// Re-export main types at crate root
pub use chunk::{ChunkHeader, ChunkKind, FourCc};
pub use error::{PcmError, PcmResult};
pub use format::{ContainerIdentity, FormatDescription};
pub use options::{IdentitySizing, ParseOptions};
pub use parser::{load_samples, parse_wav, parse_wav_with};
pub use profile::{SupportedProfile, SUPPORTED_SAMPLE_RATE};
pub use samples::{extract_samples, SampleBuffer};
