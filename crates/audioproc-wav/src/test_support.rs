//! Synthetic WAV buffers and log capture for unit tests.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

enum Part {
    Format,
    Raw([u8; 4], Vec<u8>),
}

/// Builds RIFF/WAVE buffers chunk by chunk.
///
/// The `fmt ` chunk is placed first; [`chunk_before_fmt`](Self::chunk_before_fmt)
/// inserts ahead of it. The RIFF size field covers everything built.
pub(crate) struct WavBuilder {
    form: [u8; 4],
    encoding: u16,
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
    fmt_extension: Vec<u8>,
    parts: Vec<Part>,
}

impl WavBuilder {
    pub(crate) fn new(channels: u16, sample_rate: u32, bits_per_sample: u16) -> Self {
        Self {
            form: *b"WAVE",
            encoding: 1,
            channels,
            sample_rate,
            bits_per_sample,
            fmt_extension: Vec::new(),
            parts: vec![Part::Format],
        }
    }

    pub(crate) fn mono_48k() -> Self {
        Self::new(1, 48000, 16)
    }

    pub(crate) fn stereo_48k() -> Self {
        Self::new(2, 48000, 16)
    }

    pub(crate) fn form(mut self, form: &[u8; 4]) -> Self {
        self.form = *form;
        self
    }

    pub(crate) fn encoding(mut self, encoding: u16) -> Self {
        self.encoding = encoding;
        self
    }

    pub(crate) fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub(crate) fn fmt_extension(mut self, bytes: &[u8]) -> Self {
        self.fmt_extension = bytes.to_vec();
        self
    }

    pub(crate) fn without_fmt(mut self) -> Self {
        self.parts.retain(|part| !matches!(part, Part::Format));
        self
    }

    pub(crate) fn chunk(mut self, tag: &[u8; 4], body: &[u8]) -> Self {
        self.parts.push(Part::Raw(*tag, body.to_vec()));
        self
    }

    pub(crate) fn chunk_before_fmt(mut self, tag: &[u8; 4], body: &[u8]) -> Self {
        self.parts.insert(0, Part::Raw(*tag, body.to_vec()));
        self
    }

    pub(crate) fn data_bytes(self, bytes: &[u8]) -> Self {
        self.chunk(b"data", bytes)
    }

    pub(crate) fn samples(self, samples: &[i16]) -> Self {
        let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
        self.data_bytes(&bytes)
    }

    fn fmt_body(&self) -> Vec<u8> {
        let block_align = self.channels * self.bits_per_sample / 8;
        let byte_rate = self.sample_rate * block_align as u32;

        let mut body = Vec::with_capacity(16 + self.fmt_extension.len());
        body.extend_from_slice(&self.encoding.to_le_bytes());
        body.extend_from_slice(&self.channels.to_le_bytes());
        body.extend_from_slice(&self.sample_rate.to_le_bytes());
        body.extend_from_slice(&byte_rate.to_le_bytes());
        body.extend_from_slice(&block_align.to_le_bytes());
        body.extend_from_slice(&self.bits_per_sample.to_le_bytes());
        body.extend_from_slice(&self.fmt_extension);
        body
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(&self.form);

        for part in &self.parts {
            let (tag, bytes) = match part {
                Part::Format => (*b"fmt ", self.fmt_body()),
                Part::Raw(tag, bytes) => (*tag, bytes.clone()),
            };
            body.extend_from_slice(&tag);
            body.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
            body.extend_from_slice(&bytes);
        }

        let mut wav = Vec::with_capacity(8 + body.len());
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&(body.len() as u32).to_le_bytes());
        wav.extend_from_slice(&body);
        wav
    }
}

/// Warning-level records captured by [`install_warning_capture`].
static WARNINGS: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct WarningCapture;

impl Log for WarningCapture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            WARNINGS.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static CAPTURE: WarningCapture = WarningCapture;

/// Routes warnings into an in-memory list. Safe to call from every test.
pub(crate) fn install_warning_capture() {
    let _ = log::set_logger(&CAPTURE);
    log::set_max_level(LevelFilter::Warn);
}

/// Captured warnings that mention `needle`.
pub(crate) fn warnings_mentioning(needle: &str) -> Vec<String> {
    WARNINGS
        .lock()
        .unwrap()
        .iter()
        .filter(|message| message.contains(needle))
        .cloned()
        .collect()
}
