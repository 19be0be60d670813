//! The daily pass: check state, resolve, apply, persist.
use crate::config::Config;
use crate::date::DateKey;
use crate::desktop::{self, Desktop};
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::resolver::{ResolvedImage, Resolver};
use crate::state::{self, State};

/// What a pass ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Wallpaper was already changed today
    Skipped,
    Applied {
        image: ResolvedImage,
        displays: usize,
        state_saved: bool,
    },
}

pub struct Orchestrator<'a, F: Fetcher> {
    config: &'a Config,
    fetcher: &'a F,
    desktop: &'a dyn Desktop,
}

impl<'a, F: Fetcher> Orchestrator<'a, F> {
    pub fn new(config: &'a Config, fetcher: &'a F, desktop: &'a dyn Desktop) -> Self {
        Self {
            config,
            fetcher,
            desktop,
        }
    }

    /// Run once for `today`. Resolve and apply errors are returned without
    /// touching state; a failed state save is logged and ignored.
    pub fn run(&self, today: &DateKey) -> Result<Outcome> {
        if let Some(previous) = state::load(&self.config.state_file) {
            if previous.is_current(today) {
                tracing::debug!(date = %today, "wallpaper already set today");
                return Ok(Outcome::Skipped);
            }
        }

        let image = Resolver::new(self.config, self.fetcher).resolve(today)?;
        let displays = desktop::apply(self.desktop, &image.path)?;
        tracing::info!(
            date = %today,
            source = ?image.source,
            path = %image.path.display(),
            displays,
            "wallpaper applied"
        );

        let state_saved = match state::save(&State::new(today.clone()), &self.config.state_file) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to save state: {}", e);
                false
            }
        };

        Ok(Outcome::Applied {
            image,
            displays,
            state_saved,
        })
    }
}
