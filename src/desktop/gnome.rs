//! GNOME backend. `org.gnome.desktop.background` spans every monitor, so
//! the session is reported as a single display.
use std::path::Path;
use std::process::Command;

use reqwest::Url;

use super::{run, Desktop, Display};
use crate::error::{Result, WallpaperError};

pub struct GnomeDesktop;

impl Desktop for GnomeDesktop {
    fn displays(&self) -> Result<Vec<Display>> {
        Ok(vec![Display::new("all")])
    }

    fn set_background(&self, _display: &Display, image: &Path) -> Result<()> {
        let uri = file_uri(image)?;
        gsettings("picture-uri", &uri)?;

        // GNOME 42+ keeps a separate dark-style image; older versions lack the key
        if let Err(e) = gsettings("picture-uri-dark", &uri) {
            tracing::debug!(error = %e, "picture-uri-dark not set");
        }
        Ok(())
    }
}

fn gsettings(key: &str, value: &str) -> Result<String> {
    run(Command::new("gsettings")
        .args(["set", "org.gnome.desktop.background", key])
        .arg(value))
}

/// Percent-encoded `file://` URI; gsettings rejects raw spaces and `#`
fn file_uri(path: &Path) -> Result<String> {
    Url::from_file_path(path)
        .map(String::from)
        .map_err(|()| {
            WallpaperError::Apply(format!("not an absolute path: {}", path.display()))
        })
}
