//! Runtime configuration
//!
//! Holds the handful of settings the feed store needs: where files live, where
//! feeds are downloaded from, and how long a single request may take.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;

use crate::data::feed::USGS_FEED_BASE_URL;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the feed store and plot builder
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding cached feeds and rendered plots
    pub data_dir: PathBuf,
    /// Base URL the per-timeframe feed files are resolved against
    pub feed_base_url: String,
    /// Timeout applied to each feed request
    pub request_timeout: Duration,
}

impl Config {
    /// Creates a Config rooted at `data_dir` with default feed URL and timeout
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            feed_base_url: USGS_FEED_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Creates a Config using the XDG-compliant data directory
    ///
    /// Uses `~/.local/share/quakeplot/` on Linux, or the platform equivalent.
    /// Returns `None` if the directory cannot be determined (e.g., no home directory).
    pub fn from_default_dir() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "quakeplot")?;
        Some(Self::new(project_dirs.data_dir()))
    }

    /// Overrides the feed base URL
    pub fn with_feed_base_url(mut self, url: impl Into<String>) -> Self {
        self.feed_base_url = url.into();
        self
    }

    /// Overrides the request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
