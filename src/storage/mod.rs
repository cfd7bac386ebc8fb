use crate::error::{CommonsError, Result};
use log::debug;
use std::fs;
use std::path::Path;

pub mod formatting;

/// Reports whether `path` is a directory without any entries.
///
/// Fails when the path cannot be inspected or is not a directory.
pub fn is_directory_empty(path: &Path) -> Result<bool> {
    let metadata = fs::metadata(path)?;
    if !metadata.is_dir() {
        return Err(CommonsError::NotADirectory(path.display().to_string()));
    }

    let mut entries = fs::read_dir(path)?;
    let empty = entries.next().is_none();
    debug!("Directory {} empty: {empty}", path.display());
    Ok(empty)
}
