//! The fixed set of encodings accepted before samples are trusted.

use std::ops::RangeInclusive;

use crate::chunk::FourCc;
use crate::error::{PcmError, PcmResult};
use crate::format::{ContainerIdentity, FormatDescription};

/// Format code for integer PCM.
pub const PCM_ENCODING: u16 = 1;

/// The only accepted sample width.
pub const SUPPORTED_BITS_PER_SAMPLE: u16 = 16;

/// The only accepted sample rate.
pub const SUPPORTED_SAMPLE_RATE: u32 = 48000;

/// Accepted channel counts (mono and stereo).
pub const SUPPORTED_CHANNELS: RangeInclusive<u16> = 1..=2;

/// Accepted combination of form, encoding, layout, width and rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedProfile {
    /// Required form code of the identity chunk.
    pub form: FourCc,
    /// Required encoding code.
    pub encoding: u16,
    /// Accepted channel counts.
    pub channels: RangeInclusive<u16>,
    /// Required bits per sample.
    pub bits_per_sample: u16,
    /// Required sample rate in Hz.
    pub sample_rate: u32,
}

impl Default for SupportedProfile {
    fn default() -> Self {
        Self {
            form: FourCc::WAVE,
            encoding: PCM_ENCODING,
            channels: SUPPORTED_CHANNELS,
            bits_per_sample: SUPPORTED_BITS_PER_SAMPLE,
            sample_rate: SUPPORTED_SAMPLE_RATE,
        }
    }
}

impl SupportedProfile {
    /// Checks identity and format against the profile.
    ///
    /// Checks run in a fixed order and stop at the first failure: form code,
    /// encoding, channel count, sample width, sample rate. Returns the
    /// channel count on success.
    pub fn validate(
        &self,
        identity: &ContainerIdentity,
        format: &FormatDescription,
    ) -> PcmResult<u16> {
        if identity.format_tag != self.form {
            return Err(PcmError::NotRecognizedContainer {
                form: identity.format_tag,
            });
        }

        if format.encoding != self.encoding {
            return Err(PcmError::UnsupportedEncoding {
                code: format.encoding,
            });
        }

        if !self.channels.contains(&format.channels) {
            return Err(PcmError::UnsupportedChannelLayout {
                channels: format.channels,
            });
        }

        if format.bits_per_sample != self.bits_per_sample {
            return Err(PcmError::UnsupportedSampleWidth {
                bits: format.bits_per_sample,
            });
        }

        if format.sample_rate != self.sample_rate {
            return Err(PcmError::UnsupportedSampleRate {
                rate: format.sample_rate,
                supported: self.sample_rate,
            });
        }

        Ok(format.channels)
    }
}
