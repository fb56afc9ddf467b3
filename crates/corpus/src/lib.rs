//! Corpus - Fixture text synthesis and line wrapping
//!
//! This crate provides:
//! - A word-count-bounded corpus built from a repeated, numbered paragraph
//! - Greedy line wrapping against any width measure
//!
//! # Example
//!
//! ```
//! use corpus::{CorpusBuilder, LineWrapper};
//!
//! let corpus = CorpusBuilder::new().target_words(500).build();
//! assert!(corpus.word_count() >= 500);
//!
//! // Measure in characters, 40 per line
//! let wrapper = LineWrapper::new(40.0, |s: &str| s.chars().count() as f64);
//! let lines = wrapper.wrap_text(&corpus.to_text());
//! assert!(lines.len() > 1);
//! ```

mod linebreak;
mod synthesizer;

pub use linebreak::{LineWrapper, TextMeasure};
pub use synthesizer::{
    word_count, Corpus, CorpusBuilder, BASE_PARAGRAPH, DEFAULT_TARGET_WORDS, INTRO,
};
