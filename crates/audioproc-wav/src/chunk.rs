//! Chunk headers and four-character codes.

use std::fmt;

use byteorder::{ByteOrder, LittleEndian};

use crate::cursor::FixedRecord;

/// A four-character chunk or form code, compared byte for byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FourCc(pub [u8; 4]);

impl FourCc {
    /// Outer container tag.
    pub const RIFF: FourCc = FourCc(*b"RIFF");
    /// Form code for waveform audio.
    pub const WAVE: FourCc = FourCc(*b"WAVE");
    /// Format-description chunk tag.
    pub const FMT: FourCc = FourCc(*b"fmt ");
    /// Sample data chunk tag.
    pub const DATA: FourCc = FourCc(*b"data");
    /// All-zero code, used before anything has been read.
    pub const ZERO: FourCc = FourCc([0; 4]);
}

impl FixedRecord for FourCc {
    const SIZE: usize = 4;

    fn decode(bytes: &[u8]) -> Self {
        FourCc([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}

impl fmt::Display for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourCc(\"{}\")", self)
    }
}

/// The chunk kinds the walker understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    /// `RIFF` container identity.
    Riff,
    /// `fmt ` format description.
    Format,
    /// `data` sample payload.
    Data,
    /// Anything else; skipped by its declared size.
    Unknown(FourCc),
}

impl From<FourCc> for ChunkKind {
    fn from(tag: FourCc) -> Self {
        match &tag.0 {
            b"RIFF" => ChunkKind::Riff,
            b"fmt " => ChunkKind::Format,
            b"data" => ChunkKind::Data,
            _ => ChunkKind::Unknown(tag),
        }
    }
}

/// An 8-byte chunk header: tag plus little-endian body length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    /// Chunk tag.
    pub tag: FourCc,
    /// Body length in bytes, header excluded.
    pub size: u32,
}

impl ChunkHeader {
    /// Resolves the tag to a [`ChunkKind`].
    pub fn kind(&self) -> ChunkKind {
        ChunkKind::from(self.tag)
    }

    /// Declared body length as a `usize`.
    pub fn body_len(&self) -> usize {
        self.size as usize
    }
}

impl FixedRecord for ChunkHeader {
    const SIZE: usize = 8;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            tag: FourCc::decode(&bytes[0..4]),
            size: LittleEndian::read_u32(&bytes[4..8]),
        }
    }
}
