//! Wallpaper resolution: today's image, or the fallback, or an error.
use reqwest::Url;
use std::path::PathBuf;

use crate::config::Config;
use crate::date::DateKey;
use crate::error::{Result, WallpaperError};
use crate::fetch::Fetcher;

/// Where the local image came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Dated,
    Fallback,
}

/// A downloaded image ready to be applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub path: PathBuf,
    pub source: ImageSource,
}

pub struct Resolver<'a, F: Fetcher> {
    config: &'a Config,
    fetcher: &'a F,
}

impl<'a, F: Fetcher> Resolver<'a, F> {
    pub fn new(config: &'a Config, fetcher: &'a F) -> Self {
        Self { config, fetcher }
    }

    /// At most two attempts: the dated image, then the fallback
    pub fn resolve(&self, date: &DateKey) -> Result<ResolvedImage> {
        let primary_name = format!("{}.jpg", date);
        let primary_url = self.join(&primary_name)?;

        match self
            .fetcher
            .fetch(&primary_url, &self.config.dated_local_name(date.as_str()))
        {
            Ok(path) => {
                return Ok(ResolvedImage {
                    path,
                    source: ImageSource::Dated,
                })
            }
            Err(e) => tracing::debug!(url = %primary_url, error = %e, "dated image unavailable"),
        }

        let fallback_url = self.join(&self.config.fallback_file_name)?;
        match self
            .fetcher
            .fetch(&fallback_url, &self.config.fallback_local_name())
        {
            Ok(path) => Ok(ResolvedImage {
                path,
                source: ImageSource::Fallback,
            }),
            Err(e) => {
                tracing::debug!(url = %fallback_url, error = %e, "fallback image unavailable");
                Err(WallpaperError::Download(format!(
                    "Neither {} nor {} found",
                    primary_name, self.config.fallback_file_name
                )))
            }
        }
    }

    fn join(&self, file_name: &str) -> Result<Url> {
        self.config.base_url.join(file_name).map_err(|e| {
            WallpaperError::Config(format!(
                "Cannot join '{}' onto {}: {}",
                file_name, self.config.base_url, e
            ))
        })
    }
}
