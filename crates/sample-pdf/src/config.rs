//! Fixture configuration

use crate::paginate::PageGeometry;
use crate::{FixtureError, Result};
use corpus::DEFAULT_TARGET_WORDS;
use pdf_core::{PageSize, StandardFont};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the fixture is written
pub const DEFAULT_OUTPUT_PATH: &str = "/tmp/sample_50000_words.pdf";

/// Document title recorded in the Info dictionary
pub const DEFAULT_TITLE: &str = "Sample 50000 Words";

/// Font choice, limited to the standard fonts the writer knows metrics for
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FontChoice {
    #[default]
    Helvetica,
    HelveticaBold,
    Courier,
}

impl From<FontChoice> for StandardFont {
    fn from(choice: FontChoice) -> Self {
        match choice {
            FontChoice::Helvetica => StandardFont::Helvetica,
            FontChoice::HelveticaBold => StandardFont::HelveticaBold,
            FontChoice::Courier => StandardFont::Courier,
        }
    }
}

/// Everything that shapes the generated fixture
///
/// Every field has a default, so a JSON override only needs the fields it
/// changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FixtureConfig {
    /// Minimum number of words in the corpus
    pub target_words: usize,
    /// Page width in points
    pub page_width: f64,
    /// Page height in points
    pub page_height: f64,
    /// Margin on every side, in points
    pub margin: f64,
    /// Baseline-to-baseline distance, in points
    pub line_height: f64,
    /// Font size in points
    pub font_size: f64,
    pub font: FontChoice,
    /// Output file, overwritten on every run
    pub output: PathBuf,
    pub title: String,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            target_words: DEFAULT_TARGET_WORDS,
            page_width: PageSize::LETTER.width,
            page_height: PageSize::LETTER.height,
            margin: 72.0,
            line_height: 14.0,
            font_size: 12.0,
            font: FontChoice::default(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl FixtureConfig {
    /// Parse a (possibly partial) configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| FixtureError::ConfigError(e.to_string()))
    }

    pub fn page_size(&self) -> PageSize {
        PageSize::new(self.page_width, self.page_height)
    }

    /// Layout bounds derived from page size, margin and line height
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry {
            width: self.page_width,
            height: self.page_height,
            margin: self.margin,
            line_height: self.line_height,
        }
    }
}
