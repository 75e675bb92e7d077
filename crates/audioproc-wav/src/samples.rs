//! 16-bit sample extraction and the owned result buffer.

use byteorder::{ByteOrder, LittleEndian};

/// Decodes little-endian signed 16-bit samples from `bytes`.
///
/// Yields `bytes.len() / 2` samples; a trailing odd byte is ignored.
pub fn extract_samples(bytes: &[u8]) -> Vec<i16> {
    let count = bytes.len() / 2;
    let mut samples = vec![0i16; count];
    LittleEndian::read_i16_into(&bytes[..count * 2], &mut samples);
    samples
}

/// Validated PCM samples and their channel layout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SampleBuffer {
    /// Number of channels (1 or 2 for a validated buffer, 0 when empty).
    pub channels: u16,
    /// Samples, interleaved L, R, L, R, ... for stereo.
    pub samples: Vec<i16>,
}

impl SampleBuffer {
    /// Creates a buffer from a channel count and interleaved samples.
    pub fn new(channels: u16, samples: Vec<i16>) -> Self {
        Self { channels, samples }
    }

    /// Empty buffer with no channels.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Total sample count across all channels.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of complete sample frames (one sample per channel).
    pub fn frame_count(&self) -> usize {
        match self.channels {
            0 => 0,
            n => self.samples.len() / n as usize,
        }
    }

    /// Duration in seconds at `sample_rate`.
    pub fn duration_secs(&self, sample_rate: u32) -> f64 {
        if sample_rate == 0 {
            return 0.0;
        }
        self.frame_count() as f64 / sample_rate as f64
    }

    /// Returns the samples of one channel.
    pub fn channel(&self, index: usize) -> impl Iterator<Item = i16> + '_ {
        let stride = (self.channels as usize).max(1);
        let skip = if index < self.channels as usize {
            index
        } else {
            self.samples.len()
        };
        self.samples.iter().skip(skip).step_by(stride).copied()
    }
}
