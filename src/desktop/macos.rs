//! macOS backend. System Events exposes one desktop per attached display.
use std::path::Path;
use std::process::Command;

use super::{path_str, run, Desktop, Display};
use crate::error::{Result, WallpaperError};

pub struct MacDesktop;

impl Desktop for MacDesktop {
    fn displays(&self) -> Result<Vec<Display>> {
        let stdout = osascript("tell application \"System Events\" to count desktops")?;
        let count = parse_desktop_count(&stdout)?;
        Ok((1..=count).map(|i| Display::new(i.to_string())).collect())
    }

    fn set_background(&self, display: &Display, image: &Path) -> Result<()> {
        let script = format!(
            "tell application \"System Events\" to set picture of desktop {} to POSIX file \"{}\"",
            display.id,
            applescript_escape(path_str(image)?)
        );
        osascript(&script).map(|_| ())
    }
}

fn osascript(script: &str) -> Result<String> {
    run(Command::new("osascript").arg("-e").arg(script))
}

fn parse_desktop_count(stdout: &str) -> Result<usize> {
    stdout.trim().parse().map_err(|_| {
        WallpaperError::Apply(format!("unexpected desktop count: '{}'", stdout.trim()))
    })
}

fn applescript_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
