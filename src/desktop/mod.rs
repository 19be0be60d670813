//! Desktop wallpaper backends
//!
//! Every backend enumerates the attached displays and sets a background
//! image on each one. Backends that can only address all monitors at once
//! report a single logical display.

mod generic;
mod gnome;
mod hyprland;
mod macos;

use std::fmt;
use std::path::Path;
use std::process::Command;

use crate::error::{Result, WallpaperError};

/// Backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DesktopKind {
    /// Detect from the running session
    #[default]
    Auto,
    /// macOS, one System Events desktop per display
    Macos,
    /// Hyprland monitors, set with swww
    Hyprland,
    /// GNOME through gsettings
    Gnome,
    /// Anything the `wallpaper` crate supports
    Generic,
}

/// An attached display as the backend names it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display {
    pub id: String,
}

impl Display {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

pub trait Desktop {
    /// Displays currently attached, in the order they should be set
    fn displays(&self) -> Result<Vec<Display>>;

    /// Set `image` as the background of `display` with default options
    fn set_background(&self, display: &Display, image: &Path) -> Result<()>;
}

/// Apply `image` to every display; stops at the first display that fails
pub fn apply(desktop: &dyn Desktop, image: &Path) -> Result<usize> {
    let displays = desktop.displays()?;
    if displays.is_empty() {
        return Err(WallpaperError::Apply("no displays".to_string()));
    }

    for screen in &displays {
        desktop.set_background(screen, image).map_err(|e| match e {
            WallpaperError::Apply(msg) => {
                WallpaperError::Apply(format!("display {}: {}", screen, msg))
            }
            other => WallpaperError::Apply(format!("display {}: {}", screen, other)),
        })?;
        tracing::debug!(display = %screen, image = %image.display(), "background set");
    }

    Ok(displays.len())
}

/// Construct the backend for `kind`, resolving `Auto` from the environment
pub fn backend(kind: DesktopKind) -> Box<dyn Desktop> {
    let kind = match kind {
        DesktopKind::Auto => detect(),
        other => other,
    };
    tracing::debug!(backend = ?kind, "desktop backend selected");

    match kind {
        DesktopKind::Macos => Box::new(macos::MacDesktop),
        DesktopKind::Hyprland => Box::new(hyprland::HyprlandDesktop),
        DesktopKind::Gnome => Box::new(gnome::GnomeDesktop),
        DesktopKind::Generic | DesktopKind::Auto => Box::new(generic::GenericDesktop),
    }
}

pub fn detect() -> DesktopKind {
    detect_with(cfg!(target_os = "macos"), |name| std::env::var(name).ok())
}

fn detect_with(is_macos: bool, var: impl Fn(&str) -> Option<String>) -> DesktopKind {
    if is_macos {
        return DesktopKind::Macos;
    }
    if var("HYPRLAND_INSTANCE_SIGNATURE").is_some_and(|v| !v.is_empty()) {
        return DesktopKind::Hyprland;
    }
    let is_gnome = var("XDG_CURRENT_DESKTOP").is_some_and(|desktops| {
        desktops
            .split(':')
            .any(|d| d.eq_ignore_ascii_case("gnome") || d.eq_ignore_ascii_case("ubuntu"))
    });
    if is_gnome {
        return DesktopKind::Gnome;
    }
    DesktopKind::Generic
}

/// Run a command to completion and return its stdout
fn run(command: &mut Command) -> Result<String> {
    let program = command.get_program().to_string_lossy().into_owned();
    let output = command
        .output()
        .map_err(|e| WallpaperError::Apply(format!("cannot run {}: {}", program, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(WallpaperError::Apply(format!(
            "{} failed ({}): {}",
            program,
            output.status,
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| {
        WallpaperError::Apply(format!("path is not valid UTF-8: {}", path.display()))
    })
}
