//! Entry points: walk, validate, hand back samples.

use log::warn;

use crate::error::{PcmError, PcmResult};
use crate::options::ParseOptions;
use crate::samples::SampleBuffer;
use crate::walker::walk;

/// Parses a RIFF/WAVE buffer with default options.
///
/// # Arguments
/// * `data` - Complete file contents
///
/// # Returns
/// The validated samples, or the first failed check
///
/// # Example
///
/// ```rust,no_run
/// use audioproc_wav::parse_wav;
///
/// let data = std::fs::read("voice.wav").unwrap();
/// let buffer = parse_wav(&data).unwrap();
/// println!("{} channels, {} samples", buffer.channels, buffer.len());
/// ```
pub fn parse_wav(data: &[u8]) -> PcmResult<SampleBuffer> {
    parse_wav_with(data, &ParseOptions::default())
}

/// Parses a RIFF/WAVE buffer with explicit options.
///
/// The whole buffer is walked first; the profile is checked afterwards, so a
/// rejected stream never returns any samples. A stream that passes the
/// profile but has no complete `data` chunk fails with
/// [`PcmError::MissingDataChunk`], while an empty `data` chunk is a valid,
/// empty buffer.
pub fn parse_wav_with(data: &[u8], options: &ParseOptions) -> PcmResult<SampleBuffer> {
    let stream = walk(data, options.identity_sizing);
    let channels = options.profile.validate(&stream.identity, &stream.format)?;

    if !stream.data_found {
        return Err(PcmError::MissingDataChunk);
    }

    Ok(SampleBuffer::new(channels, stream.samples))
}

/// Parses `data` and reports any rejection as a single warning.
///
/// Returns an empty buffer on failure. Prefer [`parse_wav`] unless the caller
/// only wants the empty-buffer signal.
pub fn load_samples(source: &str, data: &[u8]) -> SampleBuffer {
    match parse_wav(data) {
        Ok(buffer) => buffer,
        Err(e) => {
            warn!("{}: {} [{}]", source, e, e.code());
            SampleBuffer::empty()
        }
    }
}
