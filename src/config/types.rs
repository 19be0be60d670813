use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;

use crate::desktop::DesktopKind;

/// Runtime configuration, built once at startup and never mutated
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory URL the daily images live under (always ends with `/`)
    pub base_url: Url,

    /// Remote file used when today's image is missing
    pub fallback_file_name: String,

    /// Application name, also the state directory name
    pub app_name: String,

    /// Path to the state file recording the last applied date
    pub state_file: PathBuf,

    /// Directory downloaded images are written to
    pub temp_dir: PathBuf,

    /// Upper bound on a single HTTP request
    pub request_timeout: Duration,

    /// Largest image body accepted, `None` for no limit
    pub max_image_bytes: Option<u64>,

    /// Desktop backend used to apply the wallpaper
    pub desktop: DesktopKind,
}

impl Config {
    /// Local file name for today's image
    pub fn dated_local_name(&self, date: &str) -> String {
        format!("dailywallpaper-{}.jpg", date)
    }

    /// Local file name for the fallback image
    pub fn fallback_local_name(&self) -> String {
        "dailywallpaper-fallback.jpg".to_string()
    }
}
