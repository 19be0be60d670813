use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{self, Config, Overrides};
use crate::date::{self, DateKey};
use crate::desktop::{self, DesktopKind};
use crate::error::{Result, WallpaperError};
use crate::fetch::HttpFetcher;
use crate::run::{Orchestrator, Outcome};

/// Options for the daily pass; every one is optional
#[derive(Debug, Default, Args)]
pub struct RunArgs {
    /// Directory URL holding <YYYY-MM-DD>.jpg and the fallback image
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// State file location (defaults to the per-user data directory)
    #[arg(long, value_name = "PATH")]
    pub state_file: Option<PathBuf>,

    /// Directory for downloaded images (defaults to the system temp dir)
    #[arg(long, value_name = "DIR")]
    pub temp_dir: Option<PathBuf>,

    /// Date to use instead of today (UTC), as YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,

    /// Desktop backend
    #[arg(long, value_enum)]
    pub desktop: Option<DesktopKind>,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Exit non-zero when the wallpaper could not be changed
    #[arg(long)]
    pub strict: bool,
}

/// Change the wallpaper unless it was already changed today
pub fn run(args: RunArgs) -> Result<ExitCode> {
    let config = config::build(Overrides {
        base_url: args.base_url,
        state_file: args.state_file,
        temp_dir: args.temp_dir,
        timeout_secs: args.timeout,
        desktop: args.desktop,
    })?;

    let today = match args.date {
        Some(date) => date.parse::<DateKey>()?,
        None => date::today(),
    };

    let fetcher = HttpFetcher::new(&config)?;
    let desktop = desktop::backend(config.desktop);

    match Orchestrator::new(&config, &fetcher, desktop.as_ref()).run(&today) {
        Ok(Outcome::Skipped) => {
            tracing::debug!("nothing to do");
            Ok(ExitCode::SUCCESS)
        }
        Ok(Outcome::Applied {
            image,
            displays,
            state_saved,
        }) => {
            tracing::debug!(path = %image.path.display(), displays, state_saved, "run complete");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            report(&config, &e);
            if args.strict {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn report(config: &Config, error: &WallpaperError) {
    match error {
        WallpaperError::Download(_) => tracing::error!("{}", error),
        other => tracing::error!("Error in {}: {}", config.app_name, other),
    }
}
