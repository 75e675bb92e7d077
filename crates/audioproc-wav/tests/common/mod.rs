//! Byte-level helpers for assembling test streams.

#![allow(dead_code)]

/// Encodes one chunk: tag, little-endian size, body.
pub fn chunk(tag: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + body.len());
    out.extend_from_slice(tag);
    out.extend_from_slice(&(body.len() as u32).to_le_bytes());
    out.extend_from_slice(body);
    out
}

/// Encodes a 16-byte `fmt ` body.
pub fn fmt_body(encoding: u16, channels: u16, sample_rate: u32, bits_per_sample: u16) -> Vec<u8> {
    let block_align = channels.wrapping_mul(bits_per_sample) / 8;
    let byte_rate = sample_rate.wrapping_mul(block_align as u32);

    let mut body = Vec::with_capacity(16);
    body.extend_from_slice(&encoding.to_le_bytes());
    body.extend_from_slice(&channels.to_le_bytes());
    body.extend_from_slice(&sample_rate.to_le_bytes());
    body.extend_from_slice(&byte_rate.to_le_bytes());
    body.extend_from_slice(&block_align.to_le_bytes());
    body.extend_from_slice(&bits_per_sample.to_le_bytes());
    body
}

/// Little-endian bytes for a run of samples.
pub fn pcm_bytes(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Wraps pre-encoded chunks in a `RIFF` header with the given form code.
pub fn riff(form: &[u8; 4], chunks: &[Vec<u8>]) -> Vec<u8> {
    let mut body = form.to_vec();
    for c in chunks {
        body.extend_from_slice(c);
    }
    chunk(b"RIFF", &body)
}

/// A complete, supported WAV stream.
pub fn wav(channels: u16, samples: &[i16]) -> Vec<u8> {
    riff(
        b"WAVE",
        &[
            chunk(b"fmt ", &fmt_body(1, channels, 48000, 16)),
            chunk(b"data", &pcm_bytes(samples)),
        ],
    )
}
