//! Greedy line breaking against a width budget

use tracing::debug;

/// Anything that can report the rendered width of a string
pub trait TextMeasure {
    /// Width of `text`, in the same unit as the wrapper's budget
    fn text_width(&self, text: &str) -> f64;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> f64,
{
    fn text_width(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Greedy word wrapper
///
/// Words are whitespace-separated and never split. A line is extended while
/// its measured width stays within `max_width`; a single word wider than
/// the budget is emitted alone and allowed to overflow.
pub struct LineWrapper<M> {
    max_width: f64,
    measure: M,
}

impl<M: TextMeasure> LineWrapper<M> {
    /// Create a wrapper for the given budget and measure
    ///
    /// # Arguments
    /// * `max_width` - Usable width, in the measure's unit
    /// * `measure` - Width measure for candidate lines
    pub fn new(max_width: f64, measure: M) -> Self {
        Self { max_width, measure }
    }

    pub fn max_width(&self) -> f64 {
        self.max_width
    }

    /// Whether a line fits within the budget
    pub fn fits(&self, line: &str) -> bool {
        self.measure.text_width(line) <= self.max_width
    }

    /// Wrap one paragraph
    ///
    /// A paragraph with no words yields exactly one blank line.
    pub fn wrap_paragraph(&self, paragraph: &str) -> Vec<String> {
        let mut lines = Vec::new();
        let mut line = String::new();

        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
                continue;
            }

            let candidate = format!("{line} {word}");
            if self.fits(&candidate) {
                line = candidate;
            } else {
                lines.push(std::mem::replace(&mut line, word.to_string()));
            }
        }

        if !line.is_empty() {
            lines.push(line);
        }

        if lines.is_empty() {
            lines.push(String::new());
        }

        lines
    }

    /// Wrap every paragraph of `text`, splitting on single newlines
    ///
    /// Paragraphs separated by a blank line therefore keep a blank line
    /// between them in the output.
    pub fn wrap_text(&self, text: &str) -> Vec<String> {
        let lines: Vec<String> = text
            .split('\n')
            .flat_map(|paragraph| self.wrap_paragraph(paragraph))
            .collect();

        debug!(
            lines = lines.len(),
            max_width = self.max_width,
            "wrapped text"
        );

        lines
    }
}
