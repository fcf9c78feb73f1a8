//! Core data models for quakeplot
//!
//! This module contains the supported feed timeframes, the USGS GeoJSON feed
//! document as stored in the cache, and the per-event records extracted from it.

pub mod feed;
pub mod timeframe;

pub use feed::FeedClient;
pub use timeframe::{Timeframe, TimeframeFiles};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A USGS GeoJSON summary feed as cached on disk
///
/// Only the fields needed for plotting are modelled; everything else in the
/// feed is ignored when parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedDocument {
    /// Feed-level metadata
    pub metadata: FeedMetadata,
    /// One entry per earthquake
    pub features: Vec<Feature>,
}

/// Feed generation metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedMetadata {
    /// When the feed was generated, in milliseconds since the Unix epoch
    pub generated: i64,
    /// Human-readable feed title
    pub title: String,
}

/// A single earthquake entry in the feed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: FeatureProperties,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

/// Event properties; the feed may report `null` for any of them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureProperties {
    /// Magnitude
    pub mag: Option<f64>,
    /// Origin time in milliseconds since the Unix epoch
    pub time: Option<i64>,
    /// Event title, e.g. "M 2.1 - 10 km NE of Aguanga, CA"
    pub title: Option<String>,
}

/// GeoJSON point geometry: `[longitude, latitude, depth]`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

/// One earthquake, with every field required for plotting present
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub magnitude: f64,
    pub longitude: f64,
    pub latitude: f64,
    pub occurred_at: DateTime<Utc>,
    pub title: String,
}

/// Errors raised while turning a feed feature into an `EventRecord`
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeatureError {
    /// A required field is absent or null
    #[error("feature {index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// The timestamp cannot be represented as a UTC date
    #[error("feature {index}: timestamp {millis} is out of range")]
    TimestampOutOfRange { index: usize, millis: i64 },
}

impl FeedDocument {
    /// Parses raw feed bytes
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Feed generation time in UTC, `None` if the timestamp is out of range
    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        utc_from_millis(self.metadata.generated)
    }

    /// Extracts every feature as an `EventRecord`, failing on the first malformed one
    pub fn events(&self) -> Result<Vec<EventRecord>, FeatureError> {
        self.features
            .iter()
            .enumerate()
            .map(|(index, feature)| feature.to_event(index))
            .collect()
    }
}

impl Feature {
    /// Converts this feature into an `EventRecord`
    ///
    /// `index` is the feature's position in the feed and is only used for
    /// error reporting. No defaults are substituted for missing fields.
    pub fn to_event(&self, index: usize) -> Result<EventRecord, FeatureError> {
        let missing = |field| FeatureError::MissingField { index, field };

        let magnitude = self.properties.mag.ok_or_else(|| missing("properties.mag"))?;
        let millis = self.properties.time.ok_or_else(|| missing("properties.time"))?;
        let title = self
            .properties
            .title
            .clone()
            .ok_or_else(|| missing("properties.title"))?;

        let coordinates = self
            .geometry
            .as_ref()
            .map(|geometry| geometry.coordinates.as_slice())
            .unwrap_or_default();
        let longitude = *coordinates
            .first()
            .ok_or_else(|| missing("geometry.coordinates[0]"))?;
        let latitude = *coordinates
            .get(1)
            .ok_or_else(|| missing("geometry.coordinates[1]"))?;

        let occurred_at = utc_from_millis(millis)
            .ok_or(FeatureError::TimestampOutOfRange { index, millis })?;

        Ok(EventRecord {
            magnitude,
            longitude,
            latitude,
            occurred_at,
            title,
        })
    }
}

/// Converts milliseconds since the Unix epoch to a UTC timestamp
pub fn utc_from_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}
