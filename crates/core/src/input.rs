//! Input file loading and output directory handling.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{ClaimbookError, Result};

/// Reads and deserializes a required JSON input file.
///
/// A missing file is [`ClaimbookError::FileNotFound`]; a present but
/// unparseable file is [`ClaimbookError::Json`] with the offending path.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(ClaimbookError::FileNotFound(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| ClaimbookError::Json { path: path.to_path_buf(), source })
}

/// Creates the directory (and parents) if it does not already exist.
///
/// Returns `true` when the directory was created by this call, `false` when
/// it already existed. Safe to repeat.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(path)?;
    Ok(true)
}
