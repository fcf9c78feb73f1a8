//! Plot builder
//!
//! Turns a cached feed into a world map of its earthquakes and writes it to the
//! timeframe's plot file. Rendering never touches the network.

pub mod figure;
pub mod html;

pub use figure::{chart_title, format_utc, hover_text, marker_size, Figure, ScatterGeo};

use std::path::PathBuf;

use crate::cache::write_atomic;
use crate::data::{FeedDocument, Timeframe};
use crate::error::{Error, Result};
use crate::store::FeedStore;

/// Builds and writes plots from the feeds cached by a `FeedStore`
#[derive(Debug, Clone, Copy)]
pub struct PlotBuilder<'a> {
    store: &'a FeedStore,
}

impl<'a> PlotBuilder<'a> {
    pub fn new(store: &'a FeedStore) -> Self {
        Self { store }
    }

    /// Builds the figure for `timeframe` from its cached feed without writing it
    pub fn build_figure(&self, timeframe: Timeframe) -> Result<Figure> {
        let document = self.store.read_document(timeframe)?;
        figure_from_document(timeframe, &document)
    }

    /// Renders the plot for `timeframe` and atomically replaces its plot file
    ///
    /// Nothing is written if the cached feed is missing or malformed, so a
    /// previously rendered plot survives a bad update.
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - The plot file path
    /// * `Err(Error::CacheIo | Error::MalformedFeed)` - If the feed cannot be used
    /// * `Err(Error::ArtifactWrite)` - If the plot file cannot be written
    pub fn render(&self, timeframe: Timeframe) -> Result<PathBuf> {
        let figure = self.build_figure(timeframe)?;
        let path = self.store.artifact_path(timeframe).to_path_buf();

        let page = html::render_html(&figure);
        if let Err(source) = write_atomic(&path, page.as_bytes()) {
            return Err(Error::ArtifactWrite {
                timeframe,
                path,
                source,
            });
        }

        let events = figure.data.first().map_or(0, ScatterGeo::len);
        tracing::info!(%timeframe, events, path = %path.display(), "rendered plot");
        Ok(path)
    }
}

/// Builds the earthquake map for a parsed feed
fn figure_from_document(timeframe: Timeframe, document: &FeedDocument) -> Result<Figure> {
    let malformed = |reason: String| Error::MalformedFeed { timeframe, reason };

    let events = document.events().map_err(|e| malformed(e.to_string()))?;
    let generated = document.generated_at().ok_or_else(|| {
        malformed(format!(
            "metadata.generated {} is out of range",
            document.metadata.generated
        ))
    })?;

    let title = chart_title(&document.metadata.title, &generated);
    Ok(Figure::earthquake_map(title, &events))
}
