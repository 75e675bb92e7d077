//! JSON output types for the `--json` flag.

use serde::{Deserialize, Serialize};

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "PCM_005")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// What was found in a successfully parsed input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SampleSummary {
    /// Number of channels
    pub channels: u16,
    /// Total samples across channels
    pub samples: usize,
    /// Sample frames
    pub frames: usize,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Duration in seconds
    pub duration_secs: f64,
}

/// JSON output for the process command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessOutput {
    /// Whether the input was accepted (or already up to date)
    pub success: bool,
    /// True when the outputs were newer than the input and nothing ran
    pub up_to_date: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Header output path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// Source output path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Symbol name derived from the output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Parsed sample summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SampleSummary>,
}

impl ProcessOutput {
    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            up_to_date: false,
            errors,
            header: None,
            source: None,
            symbol: None,
            summary: None,
        }
    }
}
