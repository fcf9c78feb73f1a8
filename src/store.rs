//! Feed store
//!
//! Maps each timeframe to its remote feed URL, cache file and plot file, downloads
//! feeds into the cache, and loads cached feeds back as `FeedDocument`s.

use std::path::{Path, PathBuf};

use crate::cache::CacheManager;
use crate::config::Config;
use crate::data::feed::feed_url;
use crate::data::{FeedClient, FeedDocument, Timeframe};
use crate::error::{Error, Result};

/// Resolved locations for one timeframe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeframeSpec {
    pub timeframe: Timeframe,
    /// Feed URL fetched on update
    pub remote_url: String,
    /// Where the raw feed body is cached
    pub cache_path: PathBuf,
    /// Where the rendered plot is written
    pub artifact_path: PathBuf,
}

impl TimeframeSpec {
    fn resolve(timeframe: Timeframe, config: &Config) -> Self {
        let files = timeframe.files();
        Self {
            timeframe,
            remote_url: feed_url(&config.feed_base_url, files.feed),
            cache_path: config.data_dir.join(files.cache),
            artifact_path: config.data_dir.join(files.artifact),
        }
    }
}

/// Per-timeframe outcome of a batch operation
///
/// Batches never stop at the first failure; every timeframe is attempted and
/// the failures are collected here.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Timeframes that completed, in the order they were attempted
    pub succeeded: Vec<Timeframe>,
    /// Errors for the timeframes that did not
    pub failed: Vec<Error>,
}

impl BatchReport {
    /// Returns true if no timeframe failed
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub(crate) fn record(&mut self, timeframe: Timeframe, result: Result<()>) {
        match result {
            Ok(()) => self.succeeded.push(timeframe),
            Err(e) => self.failed.push(e),
        }
    }
}

/// Downloads, caches and loads earthquake feeds
#[derive(Debug)]
pub struct FeedStore {
    client: FeedClient,
    cache: CacheManager,
    /// Indexed by `Timeframe::index`
    specs: [TimeframeSpec; 3],
}

impl FeedStore {
    /// Creates a FeedStore from `config`
    ///
    /// Fails only if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let client = FeedClient::new(config.request_timeout).map_err(Error::HttpClient)?;
        let specs = [Timeframe::Day, Timeframe::Week, Timeframe::Month]
            .map(|timeframe| TimeframeSpec::resolve(timeframe, config));

        Ok(Self {
            client,
            cache: CacheManager::new(&config.data_dir),
            specs,
        })
    }

    /// Returns the resolved locations for `timeframe`
    pub fn spec(&self, timeframe: Timeframe) -> &TimeframeSpec {
        &self.specs[timeframe.index()]
    }

    /// Returns the cache file path for `timeframe`
    pub fn cache_path(&self, timeframe: Timeframe) -> &Path {
        &self.spec(timeframe).cache_path
    }

    /// Returns the plot file path for `timeframe`
    ///
    /// Pure lookup: the file may not exist yet.
    pub fn artifact_path(&self, timeframe: Timeframe) -> &Path {
        &self.spec(timeframe).artifact_path
    }

    /// Downloads every feed into the cache, one timeframe after another
    ///
    /// A failure for one timeframe is recorded and the remaining timeframes are
    /// still attempted. Failed timeframes keep their previous cache file.
    pub async fn fetch_all(&self) -> BatchReport {
        let mut report = BatchReport::default();
        for &timeframe in Timeframe::all() {
            let result = self.fetch(timeframe).await.map(|_| ());
            if let Err(e) = &result {
                tracing::warn!(%timeframe, error = %e, "feed update failed");
            }
            report.record(timeframe, result);
        }
        report
    }

    /// Downloads the feed for `timeframe` and atomically replaces its cache file
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of bytes cached
    /// * `Err(Error::Network)` - If the request fails or returns a non-2xx status
    /// * `Err(Error::CacheIo)` - If the cache file cannot be written
    pub async fn fetch(&self, timeframe: Timeframe) -> Result<usize> {
        let spec = self.spec(timeframe);
        tracing::info!(%timeframe, url = %spec.remote_url, "fetching feed");

        let bytes = self
            .client
            .fetch_bytes(&spec.remote_url)
            .await
            .map_err(|source| Error::Network { timeframe, source })?;

        self.cache
            .write(timeframe.files().cache, &bytes)
            .map_err(|source| Error::CacheIo {
                timeframe,
                path: spec.cache_path.clone(),
                source,
            })?;

        tracing::info!(%timeframe, bytes = bytes.len(), path = %spec.cache_path.display(), "cached feed");
        Ok(bytes.len())
    }

    /// Loads and parses the cached feed for `timeframe`
    ///
    /// Always reads from disk.
    ///
    /// # Returns
    /// * `Err(Error::CacheIo)` - If the cache file is missing or unreadable
    /// * `Err(Error::MalformedFeed)` - If the bytes are not a well-formed feed document
    pub fn read_document(&self, timeframe: Timeframe) -> Result<FeedDocument> {
        let bytes = self
            .cache
            .read(timeframe.files().cache)
            .map_err(|source| Error::CacheIo {
                timeframe,
                path: self.cache_path(timeframe).to_path_buf(),
                source,
            })?;

        FeedDocument::from_slice(&bytes).map_err(|e| Error::MalformedFeed {
            timeframe,
            reason: e.to_string(),
        })
    }
}
