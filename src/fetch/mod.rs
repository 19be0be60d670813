//! Image download module
//!
//! One blocking GET per call, body written into the temp directory under a
//! deterministic name. No retries; the resolver decides what to try next.

#[cfg(test)]
pub(crate) mod test_server;

use reqwest::blocking::Client;
use reqwest::Url;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::config::Config;
use crate::error::{Result, WallpaperError};

/// Retrieves a remote image into a local file
pub trait Fetcher {
    fn fetch(&self, url: &Url, local_name: &str) -> Result<PathBuf>;
}

/// HTTP(S) fetcher backed by a blocking reqwest client
pub struct HttpFetcher {
    http: Client,
    temp_dir: PathBuf,
    max_bytes: Option<u64>,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WallpaperError::Config(format!("Cannot build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            temp_dir: config.temp_dir.clone(),
            max_bytes: config.max_image_bytes,
        })
    }

    fn download(&self, url: &Url) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| WallpaperError::Download(format!("{}: {}", url, e)))?;

        if let (Some(limit), Some(declared)) = (self.max_bytes, response.content_length()) {
            if declared > limit {
                return Err(WallpaperError::Download(format!(
                    "{}: body of {} bytes exceeds the {} byte limit",
                    url, declared, limit
                )));
            }
        }

        let mut bytes = Vec::new();
        let read = match self.max_bytes {
            // One extra byte tells an oversized body apart from an exact fit
            Some(limit) => response.take(limit + 1).read_to_end(&mut bytes),
            None => {
                let mut response = response;
                response.read_to_end(&mut bytes)
            }
        };
        read.map_err(|e| WallpaperError::Download(format!("{}: {}", url, e)))?;

        if let Some(limit) = self.max_bytes {
            if bytes.len() as u64 > limit {
                return Err(WallpaperError::Download(format!(
                    "{}: body exceeds the {} byte limit",
                    url, limit
                )));
            }
        }

        Ok(bytes)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &Url, local_name: &str) -> Result<PathBuf> {
        tracing::debug!(%url, local_name, "downloading image");
        let bytes = self.download(url)?;
        let path = self.temp_dir.join(local_name);
        write_atomic(&path, &bytes)
            .map_err(|e| WallpaperError::Download(format!("{}: {}", path.display(), e)))?;
        Ok(path)
    }
}

/// Write through a sibling temporary file and rename it into place
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path.parent().ok_or_else(|| {
        WallpaperError::Download(format!("Path has no parent: {}", path.display()))
    })?;
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
