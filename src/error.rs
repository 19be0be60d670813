use thiserror::Error;

/// Daily wallpaper error types
#[derive(Error, Debug)]
pub enum WallpaperError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Download failed: {0}")]
    Download(String),

    #[error("Apply failed: {0}")]
    Apply(String),

    #[error("State file error: {0}")]
    State(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for daily wallpaper operations
pub type Result<T> = std::result::Result<T, WallpaperError>;
