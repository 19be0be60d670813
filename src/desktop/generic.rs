//! Fallback backend through the `wallpaper` crate, which sets one image
//! for the whole session.
use std::path::Path;

use super::{path_str, Desktop, Display};
use crate::error::{Result, WallpaperError};

pub struct GenericDesktop;

impl Desktop for GenericDesktop {
    fn displays(&self) -> Result<Vec<Display>> {
        Ok(vec![Display::new("all")])
    }

    fn set_background(&self, _display: &Display, image: &Path) -> Result<()> {
        wallpaper::set_from_path(path_str(image)?)
            .map_err(|e| WallpaperError::Apply(e.to_string()))
    }
}
