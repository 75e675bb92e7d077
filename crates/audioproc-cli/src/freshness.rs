//! Timestamp-based rebuild check.

use std::fs;
use std::io;
use std::path::Path;

/// Returns true if any output is missing or not newer than the input.
///
/// An output whose modification time equals the input's counts as stale.
pub fn needs_update(input: &Path, outputs: &[&Path]) -> io::Result<bool> {
    let input_modified = fs::metadata(input)?.modified()?;

    for output in outputs {
        let metadata = match fs::metadata(output) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(true),
            Err(e) => return Err(e),
        };
        if metadata.modified()? <= input_modified {
            return Ok(true);
        }
    }

    Ok(false)
}
