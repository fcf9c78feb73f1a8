//! Chart specification for the earthquake map
//!
//! A `Figure` serializes to the Plotly.js figure schema: one `scattergeo` trace
//! whose marker size and color track magnitude, plus a layout carrying the title.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::data::EventRecord;

/// Marker size per unit of magnitude
pub const MARKER_SCALE: f64 = 5.0;

/// Plotly colorscale for the magnitude color axis
pub const COLORSCALE: &str = "Jet";

/// Title of the magnitude color bar
pub const COLORBAR_TITLE: &str = "Magnitude";

/// `strftime` format for UTC timestamps: `11/14/23 22:13:20 UTC`
pub const UTC_FORMAT: &str = "%x %X %Z";

/// A complete chart: traces plus layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<ScatterGeo>,
    pub layout: Layout,
}

/// A geographic scatter trace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterGeo {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub lon: Vec<f64>,
    pub lat: Vec<f64>,
    /// Hover label per point
    pub text: Vec<String>,
    pub marker: Marker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub size: Vec<f64>,
    pub color: Vec<f64>,
    pub colorscale: &'static str,
    pub reversescale: bool,
    pub colorbar: ColorBar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Figure {
    /// Builds the earthquake map for `events` under `title`
    pub fn earthquake_map(title: String, events: &[EventRecord]) -> Self {
        Self {
            data: vec![ScatterGeo::from_events(events)],
            layout: Layout {
                title: Title::new(title),
            },
        }
    }
}

impl ScatterGeo {
    /// Builds a trace with one point per event, in feed order
    pub fn from_events(events: &[EventRecord]) -> Self {
        let magnitudes: Vec<f64> = events.iter().map(|e| e.magnitude).collect();

        Self {
            trace_type: "scattergeo",
            lon: events.iter().map(|e| e.longitude).collect(),
            lat: events.iter().map(|e| e.latitude).collect(),
            text: events.iter().map(hover_text).collect(),
            marker: Marker {
                size: magnitudes.iter().copied().map(marker_size).collect(),
                color: magnitudes,
                colorscale: COLORSCALE,
                reversescale: false,
                colorbar: ColorBar {
                    title: Title::new(COLORBAR_TITLE),
                },
            },
        }
    }

    /// Number of plotted points
    pub fn len(&self) -> usize {
        self.lon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lon.is_empty()
    }
}

impl plotly::Trace for ScatterGeo {
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Marker size for an event of the given magnitude
///
/// Not clamped: zero and negative magnitudes give zero and negative sizes.
pub fn marker_size(magnitude: f64) -> f64 {
    MARKER_SCALE * magnitude
}

/// Formats a UTC timestamp for display
pub fn format_utc(time: &DateTime<Utc>) -> String {
    time.format(UTC_FORMAT).to_string()
}

/// Hover label: event title followed by its UTC origin time
pub fn hover_text(event: &EventRecord) -> String {
    format!("{} {}", event.title, format_utc(&event.occurred_at))
}

/// Chart title: feed title followed by the feed generation time
pub fn chart_title(feed_title: &str, generated: &DateTime<Utc>) -> String {
    format!("{} generated {}", feed_title, format_utc(generated))
}
