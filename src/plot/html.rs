//! Standalone HTML page for a figure
//!
//! Pages are rendered through plotly with the plotly.js bundle inlined, so a
//! plot opens in any browser without network access.

use plotly::common::Title;
use plotly::{Layout, Plot};

use super::figure::Figure;

/// Renders `figure` as a complete, self-contained HTML document
///
/// Output depends only on the figure, so identical figures give identical bytes.
pub fn render_html(figure: &Figure) -> String {
    let mut plot = Plot::new();
    for trace in &figure.data {
        let mut trace = trace.clone();
        for text in &mut trace.text {
            *text = script_safe(text);
        }
        plot.add_trace(Box::new(trace));
    }
    let title = script_safe(&figure.layout.title.text);
    plot.set_layout(Layout::new().title(Title::with_text(&title)));
    plot.to_html()
}

/// Breaks up `</` and `<!` so feed text cannot end the inline script element
///
/// The inserted zero-width space does not change how the text displays.
fn script_safe(text: &str) -> String {
    text.replace("</", "<\u{200B}/").replace("<!", "<\u{200B}!")
}
