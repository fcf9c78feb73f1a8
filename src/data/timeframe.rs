//! Supported feed timeframes
//!
//! This module contains the closed set of USGS summary feed windows together with
//! the static table of file names each one is fetched from and stored under.

use std::fmt;

/// A USGS summary feed window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeframe {
    /// Events from the past day
    Day,
    /// Events from the past seven days
    Week,
    /// Events from the past thirty days
    Month,
}

/// Static per-timeframe file names
#[derive(Debug, Clone, Copy)]
pub struct TimeframeFiles {
    /// Feed file name relative to the feed base URL
    pub feed: &'static str,
    /// Cache file name inside the data directory
    pub cache: &'static str,
    /// Plot file name inside the data directory
    pub artifact: &'static str,
}

/// File table indexed by `Timeframe::index`
///
/// Feeds list all events of magnitude 1.0 and above.
static TIMEFRAME_FILES: [TimeframeFiles; 3] = [
    TimeframeFiles {
        feed: "1.0_day.geojson",
        cache: "earthquake_data_day_M1.json",
        artifact: "earthquake_plot_day_M1.html",
    },
    TimeframeFiles {
        feed: "1.0_week.geojson",
        cache: "earthquake_data_week_M1.json",
        artifact: "earthquake_plot_week_M1.html",
    },
    TimeframeFiles {
        feed: "1.0_month.geojson",
        cache: "earthquake_data_month_M1.json",
        artifact: "earthquake_plot_month_M1.html",
    },
];

impl Timeframe {
    /// Returns a slice containing all timeframes in update order.
    pub fn all() -> &'static [Timeframe] {
        &[Timeframe::Day, Timeframe::Week, Timeframe::Month]
    }

    /// Position of this timeframe in per-timeframe tables.
    pub fn index(self) -> usize {
        match self {
            Timeframe::Day => 0,
            Timeframe::Week => 1,
            Timeframe::Month => 2,
        }
    }

    /// Returns the upper-case label used on the command line.
    pub fn label(self) -> &'static str {
        match self {
            Timeframe::Day => "DAY",
            Timeframe::Week => "WEEK",
            Timeframe::Month => "MONTH",
        }
    }

    /// Returns the static file names for this timeframe.
    pub fn files(self) -> &'static TimeframeFiles {
        &TIMEFRAME_FILES[self.index()]
    }

    /// Parses user input into a Timeframe.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Returns `None` if the input doesn't name a timeframe.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Timeframe> {
        match s.trim().to_lowercase().as_str() {
            "day" => Some(Timeframe::Day),
            "week" => Some(Timeframe::Week),
            "month" => Some(Timeframe::Month),
            _ => None,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
