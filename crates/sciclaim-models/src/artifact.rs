//! Loading of model artifacts from disk

use crate::ModelError;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Label used in errors when a model is parsed from an in-memory reader
pub(crate) const READER_SOURCE: &str = "<reader>";

/// Open `path`, parse the whole artifact, and release the handle
///
/// The file is owned by this frame, so it is closed before the parsed model
/// (or the error) reaches the caller.
pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let file = File::open(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(BufReader::new(file), path)
}

/// Parse an artifact from any reader, attributing failures to `path`
pub(crate) fn parse_json<T: DeserializeOwned, R: Read>(
    reader: R,
    path: &Path,
) -> Result<T, ModelError> {
    serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            ModelError::Io {
                path: path.to_path_buf(),
                source: e.into(),
            }
        } else {
            ModelError::Malformed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        }
    })
}

/// Path attributed to artifacts that did not come from a file
pub(crate) fn reader_path() -> PathBuf {
    PathBuf::from(READER_SOURCE)
}
