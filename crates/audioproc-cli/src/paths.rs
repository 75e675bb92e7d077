//! Output path derivation.
//!
//! The tool takes an extensionless output base and derives a header path, a
//! source path and a symbol name from it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Paths derived from the output base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// `<output>.h`
    pub header: PathBuf,
    /// `<output>.cpp`
    pub source: PathBuf,
    /// File stem of the output, used as the symbol name.
    pub symbol: String,
}

impl OutputPaths {
    /// Derives the output set from an extensionless base path.
    pub fn derive(output: &Path) -> Result<Self, CliError> {
        if output.extension().is_some() {
            return Err(CliError::OutputHasExtension {
                path: output.to_path_buf(),
            });
        }

        let symbol = output
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| CliError::OutputHasNoFileName {
                path: output.to_path_buf(),
            })?;

        Ok(Self {
            header: output.with_extension("h"),
            source: output.with_extension("cpp"),
            symbol,
        })
    }

    /// Both output files.
    pub fn files(&self) -> [&Path; 2] {
        [&self.header, &self.source]
    }

    /// Creates the parent directories of both outputs.
    pub fn create_parent_dirs(&self) -> io::Result<()> {
        for file in self.files() {
            if let Some(parent) = file.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
        }
        Ok(())
    }
}
