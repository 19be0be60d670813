//! Configuration module
//!
//! There is no configuration file. Defaults are compile-time constants and
//! the command line may override individual values; the result is an
//! immutable `Config` handed to every component.

mod types;

pub use types::Config;

use crate::desktop::DesktopKind;
use crate::error::{Result, WallpaperError};
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/ruzvaliakhmetov/daily-wallpapers/main/wallpapers/";
pub const FALLBACK_FILE_NAME: &str = "fallback.jpg";
pub const APP_NAME: &str = "DailyWallpaper";
pub const STATE_FILE_NAME: &str = "state.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 64 * 1024 * 1024;

/// Values supplied on the command line; anything `None` keeps its default
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub state_file: Option<PathBuf>,
    pub temp_dir: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub desktop: Option<DesktopKind>,
}

/// Build the configuration from defaults plus overrides
pub fn build(overrides: Overrides) -> Result<Config> {
    let base_url = parse_base_url(overrides.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

    let state_file = match overrides.state_file {
        Some(path) => path,
        None => default_state_file(APP_NAME)?,
    };

    let timeout_secs = overrides.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
    if timeout_secs == 0 {
        return Err(WallpaperError::Config(
            "Timeout must be at least one second".to_string(),
        ));
    }

    Ok(Config {
        base_url,
        fallback_file_name: FALLBACK_FILE_NAME.to_string(),
        app_name: APP_NAME.to_string(),
        state_file,
        temp_dir: overrides.temp_dir.unwrap_or_else(std::env::temp_dir),
        request_timeout: Duration::from_secs(timeout_secs),
        max_image_bytes: Some(DEFAULT_MAX_IMAGE_BYTES),
        desktop: overrides.desktop.unwrap_or_default(),
    })
}

/// Parse a base URL and make sure it ends with `/`
///
/// `Url::join` replaces the last path segment unless the base is a
/// directory, so `https://host/wallpapers` becomes `https://host/wallpapers/`.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)
        .map_err(|e| WallpaperError::Config(format!("Invalid base URL '{}': {}", raw, e)))?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(WallpaperError::Config(format!(
            "Base URL must be an http(s) directory URL: {}",
            raw
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

/// `<per-user data dir>/<app_name>/state.json`
pub fn default_state_file(app_name: &str) -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        WallpaperError::Config("Cannot determine the per-user data directory".to_string())
    })?;
    Ok(data_dir.join(app_name).join(STATE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url_adds_trailing_slash() {
        let url = parse_base_url("https://x/w").unwrap();
        assert_eq!(url.as_str(), "https://x/w/");
        assert_eq!(url.join("2024-03-01.jpg").unwrap().as_str(), "https://x/w/2024-03-01.jpg");
    }

    #[test]
    fn test_parse_base_url_keeps_directory() {
        let url = parse_base_url("https://x/w/").unwrap();
        assert_eq!(url.as_str(), "https://x/w/");
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(parse_base_url("not a url").is_err());
        assert!(parse_base_url("ftp://x/w/").is_err());
        assert!(parse_base_url("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_build_defaults() {
        let config = build(Overrides {
            state_file: Some(PathBuf::from("/tmp/dw/state.json")),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.fallback_file_name, "fallback.jpg");
        assert_eq!(config.app_name, "DailyWallpaper");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.max_image_bytes, Some(DEFAULT_MAX_IMAGE_BYTES));
        assert_eq!(config.desktop, DesktopKind::Auto);
    }

    #[test]
    fn test_build_overrides() {
        let config = build(Overrides {
            base_url: Some("http://127.0.0.1:8080/images".to_string()),
            state_file: Some(PathBuf::from("/tmp/dw/state.json")),
            temp_dir: Some(PathBuf::from("/tmp/dw")),
            timeout_secs: Some(5),
            desktop: Some(DesktopKind::Gnome),
        })
        .unwrap();

        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8080/images/");
        assert_eq!(config.state_file, PathBuf::from("/tmp/dw/state.json"));
        assert_eq!(config.temp_dir, PathBuf::from("/tmp/dw"));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.desktop, DesktopKind::Gnome);
    }

    #[test]
    fn test_build_rejects_zero_timeout() {
        let result = build(Overrides {
            state_file: Some(PathBuf::from("/tmp/dw/state.json")),
            timeout_secs: Some(0),
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_default_state_file_layout() {
        if let Ok(path) = default_state_file("DailyWallpaper") {
            assert!(path.ends_with("DailyWallpaper/state.json"));
        }
    }
}
