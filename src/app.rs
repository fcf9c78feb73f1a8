//! Application state and top-level actions
//!
//! `App` owns the feed store and exposes the two user actions: refreshing every
//! feed and plot, and opening a rendered plot in the browser.

use std::path::Path;

use crate::config::Config;
use crate::data::Timeframe;
use crate::error::{Error, Result};
use crate::plot::PlotBuilder;
use crate::store::{BatchReport, FeedStore};

/// Main application struct
#[derive(Debug)]
pub struct App {
    store: FeedStore,
}

impl App {
    /// Creates a new App from `config`
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            store: FeedStore::new(config)?,
        })
    }

    /// Returns the underlying feed store
    pub fn store(&self) -> &FeedStore {
        &self.store
    }

    /// Downloads every feed, then renders a plot for each feed that downloaded
    ///
    /// Timeframes whose download failed are not re-rendered, so their previous
    /// plot stays in place. The report lists every timeframe that completed both
    /// steps and every error encountered along the way.
    pub async fn update(&self) -> BatchReport {
        let mut report = self.store.fetch_all().await;
        let builder = PlotBuilder::new(&self.store);

        for timeframe in std::mem::take(&mut report.succeeded) {
            let result = builder.render(timeframe).map(|_| ());
            if let Err(e) = &result {
                tracing::warn!(%timeframe, error = %e, "plot update failed");
            }
            report.record(timeframe, result);
        }

        report
    }

    /// Returns the plot path for `timeframe` if the plot has been rendered
    pub fn rendered_plot(&self, timeframe: Timeframe) -> Result<&Path> {
        let path = self.store.artifact_path(timeframe);
        if !path.is_file() {
            return Err(Error::ArtifactMissing {
                timeframe,
                path: path.to_path_buf(),
            });
        }
        Ok(path)
    }

    /// Opens the plot for `timeframe` in the system's default browser
    pub fn display(&self, timeframe: Timeframe) -> Result<()> {
        let path = self.rendered_plot(timeframe)?;
        tracing::info!(%timeframe, path = %path.display(), "opening plot");

        webbrowser::open(&path.to_string_lossy()).map_err(|source| Error::Launch {
            path: path.to_path_buf(),
            source,
        })
    }
}
