//! Resolution of the text to scan.

use crate::error::{CliError, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Pick the input text: inline text, then a file, then `stdin`.
pub fn read_input<R: Read>(
    text: Option<&str>,
    file: Option<&Path>,
    mut stdin: R,
) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    if let Some(path) = file {
        return fs::read_to_string(path).map_err(|e| {
            CliError::InvalidInput(format!("cannot read '{}': {}", path.display(), e))
        });
    }

    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer)?;
    Ok(buffer)
}
