//! Fixture rendering

use crate::config::FixtureConfig;
use crate::paginate::PageLayout;
use crate::Result;
use corpus::{LineWrapper, TextMeasure};
use pdf_core::{Align, PdfDocument, StandardFont};
use tracing::debug;

/// Producer name recorded in the Info dictionary
const CREATOR: &str = "sample-pdf";

/// Text measure backed by standard font metrics
///
/// Uses the same widths the PDF writer uses, so wrapped lines measure the
/// same when drawn.
#[derive(Debug, Clone, Copy)]
pub struct FontMeasure {
    font: StandardFont,
    font_size: f64,
}

impl FontMeasure {
    pub fn new(font: StandardFont, font_size: f64) -> Self {
        Self { font, font_size }
    }
}

impl TextMeasure for FontMeasure {
    fn text_width(&self, text: &str) -> f64 {
        self.font.text_width_points(text, self.font_size)
    }
}

/// Draws paginated lines into a new document
pub struct FixtureRenderer<'a> {
    config: &'a FixtureConfig,
}

impl<'a> FixtureRenderer<'a> {
    pub fn new(config: &'a FixtureConfig) -> Self {
        Self { config }
    }

    /// Measure for the configured font and size
    pub fn measure(&self) -> FontMeasure {
        FontMeasure::new(self.config.font.into(), self.config.font_size)
    }

    /// Line wrapper bounded by the usable width
    pub fn wrapper(&self) -> LineWrapper<FontMeasure> {
        LineWrapper::new(self.config.geometry().usable_width(), self.measure())
    }

    /// Create one document page per layout and draw its lines
    pub fn render(&self, pages: &[PageLayout]) -> Result<PdfDocument> {
        let mut doc = PdfDocument::new(self.config.page_size());
        doc.set_info("Title", &self.config.title);
        doc.set_info("Creator", CREATOR);
        doc.set_font(self.config.font.into(), self.config.font_size);

        for layout in pages {
            let page = doc.add_page();
            for line in &layout.lines {
                doc.insert_text(&line.text, page, line.x, line.y, Align::Left)?;
            }
        }

        debug!(pages = doc.page_count(), "rendered fixture pages");

        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paginate::{PlacedLine, Paginator};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_measure_matches_document_width() {
        let config = FixtureConfig::default();
        let renderer = FixtureRenderer::new(&config);

        let doc = renderer.render(&[]).unwrap();
        let text = "Paragraph 1: Speed reading helps you focus";
        assert_eq!(
            renderer.measure().text_width(text),
            doc.get_text_width(text).unwrap()
        );
    }

    #[test]
    fn test_wrapper_budget_is_usable_width() {
        let config = FixtureConfig {
            margin: 100.0,
            ..FixtureConfig::default()
        };
        assert_eq!(FixtureRenderer::new(&config).wrapper().max_width(), 412.0);
    }

    #[test]
    fn test_render_creates_one_page_per_layout() {
        let config = FixtureConfig::default();
        let renderer = FixtureRenderer::new(&config);
        let lines: Vec<String> = (0..100).map(|i| format!("line {i}")).collect();
        let pages = Paginator::new(config.geometry()).paginate(&lines);

        let doc = renderer.render(&pages).unwrap();
        assert_eq!(doc.page_count(), 3);
    }

    #[test]
    fn test_render_draws_blank_lines_as_nothing() {
        let config = FixtureConfig::default();
        let layout = PageLayout {
            lines: vec![PlacedLine {
                text: String::new(),
                x: 72.0,
                y: 720.0,
            }],
        };

        let doc = FixtureRenderer::new(&config).render(&[layout]).unwrap();
        assert_eq!(doc.page_count(), 1);
    }
}
