//! Word-count-bounded corpus synthesis

use tracing::debug;

/// Opening sentence of every corpus
pub const INTRO: &str = "This is a large text-only PDF for testing the Reader app. \
It is intentionally verbose to reach about fifty thousand words. \
The paragraphs below repeat with minor variations to provide a stable test input.";

/// Paragraph repeated (with a numbered prefix) until the target is reached
pub const BASE_PARAGRAPH: &str = "Speed reading helps you focus on the core of each word while maintaining comprehension. \
As you progress, the rhythm of words can feel smoother and more consistent. \
These sentences are deliberately straightforward, using plain words and punctuation. \
The goal is to provide a clean, predictable text stream for word-by-word highlighting. \
Adjust the words-per-minute setting to explore different pacing and comfort levels. \
If the text feels too fast, lower the WPM and observe the difference in retention. \
If it feels too slow, increase the WPM and note how the focus point guides attention. \
This is only a test document, so you can safely explore different settings. \
Each paragraph is similar to keep the content easy to scan while still being long enough. \
End of paragraph.";

/// Default minimum number of words
pub const DEFAULT_TARGET_WORDS: usize = 50_000;

/// Separator between the intro and each paragraph in the full text
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Count whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Synthesized text body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    intro: String,
    paragraphs: Vec<String>,
    word_count: usize,
}

impl Corpus {
    /// The introductory sentence
    pub fn intro(&self) -> &str {
        &self.intro
    }

    /// Numbered paragraphs, in order
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Total words across intro and paragraphs
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Full text with a blank line between the intro and each paragraph
    pub fn to_text(&self) -> String {
        let mut text = self.intro.clone();
        for paragraph in &self.paragraphs {
            text.push_str(PARAGRAPH_SEPARATOR);
            text.push_str(paragraph);
        }
        text
    }
}

/// Builder for [`Corpus`]
///
/// Defaults to [`INTRO`], [`BASE_PARAGRAPH`] and [`DEFAULT_TARGET_WORDS`].
#[derive(Debug, Clone)]
pub struct CorpusBuilder {
    intro: String,
    base_paragraph: String,
    target_words: usize,
}

impl Default for CorpusBuilder {
    fn default() -> Self {
        Self {
            intro: INTRO.to_string(),
            base_paragraph: BASE_PARAGRAPH.to_string(),
            target_words: DEFAULT_TARGET_WORDS,
        }
    }
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = intro.into();
        self
    }

    pub fn base_paragraph(mut self, paragraph: impl Into<String>) -> Self {
        self.base_paragraph = paragraph.into();
        self
    }

    pub fn target_words(mut self, target: usize) -> Self {
        self.target_words = target;
        self
    }

    /// Append `Paragraph {n}: <base>` until the word count reaches the target
    ///
    /// Each appended paragraph adds at least the two prefix words, so the
    /// loop always terminates. Overshoot is below one paragraph.
    pub fn build(self) -> Corpus {
        let mut words = word_count(&self.intro);
        let mut paragraphs = Vec::new();

        while words < self.target_words {
            let paragraph = format!("Paragraph {}: {}", paragraphs.len() + 1, self.base_paragraph);
            words += word_count(&paragraph);
            paragraphs.push(paragraph);
        }

        debug!(
            target_words = self.target_words,
            words,
            paragraphs = paragraphs.len(),
            "synthesized corpus"
        );

        Corpus {
            intro: self.intro,
            paragraphs,
            word_count: words,
        }
    }
}
