//! PDF Core - Minimal PDF writer
//!
//! This crate provides functionality for:
//! - Creating new multi-page PDF documents
//! - Measuring text with the standard Type1 font metrics
//! - Drawing text at specific coordinates
//! - Saving the document to a file or to bytes
//!
//! # Example
//!
//! ```ignore
//! use pdf_core::{Align, PageSize, PdfDocument, StandardFont};
//!
//! let mut doc = PdfDocument::new(PageSize::LETTER);
//! doc.set_font(StandardFont::Helvetica, 12.0);
//! let page = doc.add_page();
//! doc.insert_text("Hello, World!", page, 72.0, 720.0, Align::Left)?;
//! doc.save("output.pdf")?;
//! ```

mod document;
mod metrics;
mod text;

pub use document::{Color, PageSize, PdfDocument};
pub use metrics::StandardFont;
pub use text::{encode_text_hex, generate_text_operators, winansi_byte, TextRenderContext};

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Invalid page number: {0} (document has {1} pages)")]
    InvalidPage(usize, usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}
