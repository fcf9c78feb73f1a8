//! Error types for quakeplot

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::data::Timeframe;

/// Errors that can occur while updating or displaying plots
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP client could not be constructed
    #[error("Failed to initialise HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Fetching a feed failed (DNS, connection, timeout, or non-2xx status)
    #[error("{timeframe}: failed to fetch feed: {source}")]
    Network {
        timeframe: Timeframe,
        #[source]
        source: reqwest::Error,
    },

    /// Reading or writing a cache file failed
    #[error("{timeframe}: cache file {} unavailable: {source}", .path.display())]
    CacheIo {
        timeframe: Timeframe,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Cached feed is not a well-formed document or lacks a required field
    #[error("{timeframe}: malformed feed: {reason}")]
    MalformedFeed { timeframe: Timeframe, reason: String },

    /// Writing the plot failed
    #[error("{timeframe}: failed to write plot {}: {source}", .path.display())]
    ArtifactWrite {
        timeframe: Timeframe,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No plot has been rendered for the timeframe yet
    #[error("{timeframe}: no plot at {}, run `quakeplot update` first", .path.display())]
    ArtifactMissing { timeframe: Timeframe, path: PathBuf },

    /// The default browser could not be launched
    #[error("Failed to open {}: {source}", .path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Coarse classification of an `Error`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    CacheIo,
    MalformedFeed,
    ArtifactWrite,
    Display,
}

impl Error {
    /// The timeframe the error belongs to, if any
    pub fn timeframe(&self) -> Option<Timeframe> {
        match self {
            Error::Network { timeframe, .. }
            | Error::CacheIo { timeframe, .. }
            | Error::MalformedFeed { timeframe, .. }
            | Error::ArtifactWrite { timeframe, .. }
            | Error::ArtifactMissing { timeframe, .. } => Some(*timeframe),
            Error::HttpClient(_) | Error::Launch { .. } => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::HttpClient(_) | Error::Network { .. } => ErrorKind::Network,
            Error::CacheIo { .. } => ErrorKind::CacheIo,
            Error::MalformedFeed { .. } => ErrorKind::MalformedFeed,
            Error::ArtifactWrite { .. } => ErrorKind::ArtifactWrite,
            Error::ArtifactMissing { .. } | Error::Launch { .. } => ErrorKind::Display,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
