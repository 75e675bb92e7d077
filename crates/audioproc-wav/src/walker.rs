//! Single forward pass over the chunk stream.
//!
//! The walker only collects; nothing is validated until the pass is over.
//! It stops at the first header or fixed record that does not fit in the
//! remaining bytes, or at a `fmt ` chunk whose declared size is too small to
//! hold its record, since the next header position is then unknown. Every iteration
//! consumes at least a full header, so the pass is bounded by the buffer
//! length.

use log::{debug, trace};

use crate::chunk::{ChunkHeader, ChunkKind, FourCc};
use crate::cursor::{ByteCursor, FixedRecord};
use crate::format::{ContainerIdentity, FormatDescription};
use crate::options::IdentitySizing;
use crate::samples::extract_samples;

/// Everything collected from one pass, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalkedStream {
    /// Identity codes from the last `RIFF` chunk read.
    pub identity: ContainerIdentity,
    /// Fields from the last complete `fmt ` chunk read.
    pub format: FormatDescription,
    /// Samples from the last complete `data` chunk read.
    pub samples: Vec<i16>,
    /// Whether a complete `data` chunk was consumed.
    pub data_found: bool,
}

/// Walks every chunk in `data` and collects identity, format and samples.
pub fn walk(data: &[u8], sizing: IdentitySizing) -> WalkedStream {
    let mut cursor = ByteCursor::new(data);
    let mut stream = WalkedStream::default();

    while let Some(header) = cursor.read_fixed::<ChunkHeader>() {
        let body_offset = cursor.offset();
        trace!(
            "chunk '{}' at offset {} declares {} bytes",
            header.tag,
            body_offset - ChunkHeader::SIZE,
            header.size
        );

        match header.kind() {
            ChunkKind::Riff => {
                let Some(form) = cursor.read_fixed::<FourCc>() else {
                    debug!("identity chunk at offset {} has no form code", body_offset);
                    break;
                };
                stream.identity = ContainerIdentity {
                    container_tag: header.tag,
                    format_tag: form,
                };
                if sizing == IdentitySizing::BoundedByDeclaredSize {
                    cursor = cursor.limited(header.body_len().saturating_sub(FourCc::SIZE));
                }
            }
            ChunkKind::Format => {
                let Some(format) = cursor.read_fixed::<FormatDescription>() else {
                    debug!("format chunk at offset {} is truncated", body_offset);
                    break;
                };
                stream.format = format;
                let Some(trailer) = header.body_len().checked_sub(FormatDescription::SIZE) else {
                    // The declared size cannot hold the record, so the next
                    // header position is unknown.
                    debug!(
                        "format chunk at offset {} declares only {} bytes, ending walk",
                        body_offset, header.size
                    );
                    break;
                };
                // Extension trailer, if any.
                cursor.advance(trailer);
            }
            ChunkKind::Data => {
                // An odd trailing byte is never decoded, so it need not be present.
                let sample_bytes = header.body_len() / 2 * 2;
                let Some(body) = cursor.read_bytes(sample_bytes) else {
                    debug!(
                        "data chunk at offset {} declares {} bytes but only {} remain",
                        body_offset,
                        header.size,
                        cursor.remaining()
                    );
                    break;
                };
                stream.samples = extract_samples(body);
                stream.data_found = true;
                cursor.advance(header.body_len() - sample_bytes);
            }
            ChunkKind::Unknown(tag) => {
                debug!("skipping '{}' chunk ({} bytes)", tag, header.size);
                cursor.advance(header.body_len());
            }
        }
    }

    stream
}
