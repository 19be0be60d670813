use std::path::PathBuf;

use crate::config::{self, APP_NAME};
use crate::error::Result;
use crate::state;

fn resolve_path(state_file: Option<PathBuf>) -> Result<PathBuf> {
    match state_file {
        Some(path) => Ok(path),
        None => config::default_state_file(APP_NAME),
    }
}

/// Print the state file location and the recorded date
pub fn show(state_file: Option<PathBuf>) -> Result<()> {
    let path = resolve_path(state_file)?;

    println!("State file: {}", path.display());
    match state::load(&path) {
        Some(state) => println!("Last applied: {}", state.last_date),
        None => println!("No wallpaper applied yet."),
    }

    Ok(())
}

/// Reset state tracking by deleting the state file
pub fn reset(state_file: Option<PathBuf>) -> Result<()> {
    let path = resolve_path(state_file)?;

    if state::reset(&path)? {
        println!("State file deleted: {}", path.display());
        println!("Next run will fetch and apply today's wallpaper again.");
    } else {
        println!("State file does not exist: {}", path.display());
        println!("Nothing to reset.");
    }

    Ok(())
}
