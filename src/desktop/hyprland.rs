//! Hyprland backend: monitors from `hyprctl`, images through `swww`.
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

use super::{run, Desktop, Display};
use crate::error::{Result, WallpaperError};

pub struct HyprlandDesktop;

#[derive(Debug, Deserialize)]
struct Monitor {
    name: String,
}

impl Desktop for HyprlandDesktop {
    fn displays(&self) -> Result<Vec<Display>> {
        let stdout = run(Command::new("hyprctl").args(["monitors", "-j"]))?;
        parse_monitors(&stdout)
    }

    fn set_background(&self, display: &Display, image: &Path) -> Result<()> {
        run(Command::new("swww")
            .args(["img", "--outputs"])
            .arg(&display.id)
            .arg(image))
        .map(|_| ())
    }
}

fn parse_monitors(json: &str) -> Result<Vec<Display>> {
    let monitors: Vec<Monitor> = serde_json::from_str(json)
        .map_err(|e| WallpaperError::Apply(format!("cannot parse hyprctl output: {}", e)))?;
    Ok(monitors.into_iter().map(|m| Display::new(m.name)).collect())
}
