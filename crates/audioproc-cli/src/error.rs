//! Caller-level errors raised before the input is parsed.

use std::path::PathBuf;

use thiserror::Error;

/// Problems with the paths handed to the tool.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file does not exist.
    #[error("input file doesn't exist: {}", .path.display())]
    InputMissing {
        /// The path that was given.
        path: PathBuf,
    },

    /// The output path carries an extension.
    #[error(
        "do not add an extension to the output file name ({}), .h and .cpp will be appended automatically",
        .path.display()
    )]
    OutputHasExtension {
        /// The path that was given.
        path: PathBuf,
    },

    /// The output path does not name a file.
    #[error("output path does not name a file: {}", .path.display())]
    OutputHasNoFileName {
        /// The path that was given.
        path: PathBuf,
    },
}

impl CliError {
    /// Returns a stable error code for JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            CliError::InputMissing { .. } => "CLI_001",
            CliError::OutputHasExtension { .. } => "CLI_002",
            CliError::OutputHasNoFileName { .. } => "CLI_003",
        }
    }
}
