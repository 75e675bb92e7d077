//! Container identity and the fixed `fmt ` record.

use byteorder::{ByteOrder, LittleEndian};

use crate::chunk::FourCc;
use crate::cursor::FixedRecord;

/// Codes read from the outer `RIFF` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContainerIdentity {
    /// Tag of the identity chunk (`RIFF` once one has been read).
    pub container_tag: FourCc,
    /// Form code that follows the identity header (expected `WAVE`).
    pub format_tag: FourCc,
}

/// The 16-byte body of a `fmt ` chunk.
///
/// Fields default to zero when no format chunk was read, which makes the
/// validator reject the stream on its encoding check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatDescription {
    /// Audio format code (1 = integer PCM).
    pub encoding: u16,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Byte rate (bytes per second). Informational.
    pub byte_rate: u32,
    /// Block alignment (bytes per sample frame). Informational.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
}

impl FixedRecord for FormatDescription {
    const SIZE: usize = 16;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            encoding: LittleEndian::read_u16(&bytes[0..2]),
            channels: LittleEndian::read_u16(&bytes[2..4]),
            sample_rate: LittleEndian::read_u32(&bytes[4..8]),
            byte_rate: LittleEndian::read_u32(&bytes[8..12]),
            block_align: LittleEndian::read_u16(&bytes[12..14]),
            bits_per_sample: LittleEndian::read_u16(&bytes[14..16]),
        }
    }
}
