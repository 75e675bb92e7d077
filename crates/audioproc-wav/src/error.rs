//! Error types for WAV parsing and profile validation.

use thiserror::Error;

use crate::chunk::FourCc;

/// Result type for PCM extraction.
pub type PcmResult<T> = Result<T, PcmError>;

/// Reasons a stream is rejected.
///
/// Running out of bytes mid-walk is never an error on its own: the walk just
/// ends, and whatever was not read surfaces as one of these variants during
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PcmError {
    /// The identity chunk was missing or named a form other than `WAVE`.
    #[error("not a recognized container: expected form 'WAVE', found '{form}'")]
    NotRecognizedContainer {
        /// Form code read from the identity chunk (zeroed if none was read).
        form: FourCc,
    },

    /// Encoding code other than integer PCM.
    #[error("unsupported encoding: format code {code} (only integer PCM/1 is supported)")]
    UnsupportedEncoding {
        /// The declared encoding code.
        code: u16,
    },

    /// Channel count outside mono/stereo.
    #[error("unsupported channel layout: {channels} channels (only 1 or 2 are supported)")]
    UnsupportedChannelLayout {
        /// The declared channel count.
        channels: u16,
    },

    /// Sample width other than 16 bits.
    #[error("unsupported sample width: {bits} bits per sample (only 16 is supported)")]
    UnsupportedSampleWidth {
        /// The declared bits per sample.
        bits: u16,
    },

    /// Sample rate other than the supported rate.
    #[error("unsupported sample rate: {rate} Hz (only {supported} Hz is supported)")]
    UnsupportedSampleRate {
        /// The declared sample rate.
        rate: u32,
        /// The rate the profile accepts.
        supported: u32,
    },

    /// Profile checks passed but no complete data chunk was found.
    #[error("missing data chunk: the stream ended before any complete sample data")]
    MissingDataChunk,
}

impl PcmError {
    /// Returns a stable error code for reports.
    pub fn code(&self) -> &'static str {
        match self {
            PcmError::NotRecognizedContainer { .. } => "PCM_001",
            PcmError::UnsupportedEncoding { .. } => "PCM_002",
            PcmError::UnsupportedChannelLayout { .. } => "PCM_003",
            PcmError::UnsupportedSampleWidth { .. } => "PCM_004",
            PcmError::UnsupportedSampleRate { .. } => "PCM_005",
            PcmError::MissingDataChunk => "PCM_006",
        }
    }

    /// Returns the error category.
    pub fn category(&self) -> &'static str {
        match self {
            PcmError::NotRecognizedContainer { .. } => "identity",
            PcmError::MissingDataChunk => "structure",
            _ => "profile",
        }
    }
}
