//! Sample PDF - Text-only PDF fixture generator
//!
//! This crate provides:
//! - Fixture configuration with defaults for a US Letter, Helvetica 12pt layout
//! - Top-down pagination of wrapped lines
//! - Rendering of the paginated lines into a PDF
//!
//! # Example
//!
//! ```ignore
//! use sample_pdf::{generate, FixtureConfig};
//!
//! let summary = generate(&FixtureConfig::default())?;
//! println!("{}", summary.output.display());
//! ```

mod config;
mod paginate;
mod renderer;

pub use config::{FixtureConfig, FontChoice, DEFAULT_OUTPUT_PATH, DEFAULT_TITLE};
pub use paginate::{PageGeometry, PageLayout, Paginator, PlacedLine};
pub use renderer::{FixtureRenderer, FontMeasure};

use corpus::CorpusBuilder;
use pdf_core::PdfDocument;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while generating the fixture
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("PDF error: {0}")]
    PdfError(#[from] pdf_core::PdfError),
}

/// Result type for fixture operations
pub type Result<T> = std::result::Result<T, FixtureError>;

/// What a run produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureSummary {
    pub words: usize,
    pub paragraphs: usize,
    pub lines: usize,
    pub pages: usize,
    pub output: PathBuf,
}

/// Synthesize, wrap, paginate and render without touching the filesystem
pub fn build(config: &FixtureConfig) -> Result<(PdfDocument, FixtureSummary)> {
    let corpus = CorpusBuilder::new()
        .target_words(config.target_words)
        .build();
    info!(
        words = corpus.word_count(),
        paragraphs = corpus.paragraph_count(),
        "synthesized corpus"
    );

    let renderer = FixtureRenderer::new(config);
    let lines = renderer.wrapper().wrap_text(&corpus.to_text());
    let pages = Paginator::new(config.geometry()).paginate(&lines);
    info!(lines = lines.len(), pages = pages.len(), "laid out text");

    let doc = renderer.render(&pages)?;

    let summary = FixtureSummary {
        words: corpus.word_count(),
        paragraphs: corpus.paragraph_count(),
        lines: lines.len(),
        pages: doc.page_count(),
        output: config.output.clone(),
    };

    Ok((doc, summary))
}

/// Build the fixture and write it to the configured path
///
/// An existing file at that path is overwritten.
pub fn generate(config: &FixtureConfig) -> Result<FixtureSummary> {
    let (doc, summary) = build(config)?;
    doc.save(&config.output)?;
    info!(path = %config.output.display(), pages = summary.pages, "saved fixture");

    Ok(summary)
}
