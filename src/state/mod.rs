//! State persistence module
//!
//! Remembers the date of the last successful wallpaper change so repeated
//! runs on the same day do nothing. Stored as JSON (`state.json`).

mod types;

pub use types::State;

use crate::error::{Result, WallpaperError};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Load state, treating a missing or unreadable file as no state
pub fn load(path: &Path) -> Option<State> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no previous state");
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(state) => Some(state),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "ignoring corrupt state file");
            None
        }
    }
}

/// Save state, replacing the file in a single rename
pub fn save(state: &State, path: &Path) -> Result<()> {
    let dir = path.parent().ok_or_else(|| {
        WallpaperError::State(format!("State path has no parent: {}", path.display()))
    })?;

    // Create parent directories if needed
    fs::create_dir_all(dir)?;

    let json = serde_json::to_vec(state)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&json)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| {
        WallpaperError::State(format!("Cannot replace '{}': {}", path.display(), e.error))
    })?;

    Ok(())
}

/// Delete the state file; returns whether one existed
pub fn reset(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
