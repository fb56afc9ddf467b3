//! Standard Type1 fonts and their advance widths
//!
//! Widths come from the Adobe Font Metrics (AFM) files shipped with every
//! conforming PDF reader, in 1/1000 of the font size. Only printable ASCII
//! is tabulated; everything else falls back to the font's default width.

/// First character covered by the width tables (space)
const FIRST_CHAR: u32 = 32;

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// One of the standard 14 fonts that needs no embedding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StandardFont {
    #[default]
    Helvetica,
    HelveticaBold,
    Courier,
}

impl StandardFont {
    /// PostScript name used as the `BaseFont` entry
    pub fn base_font(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::Courier => "Courier",
        }
    }

    fn default_width(self) -> u16 {
        match self {
            StandardFont::Helvetica => 556,
            StandardFont::HelveticaBold => 611,
            StandardFont::Courier => 600,
        }
    }

    /// Advance width of a single character in font units (1/1000 em)
    pub fn char_width(self, c: char) -> u16 {
        let table = match self {
            StandardFont::Helvetica => &HELVETICA_WIDTHS,
            StandardFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
            // Monospaced
            StandardFont::Courier => return 600,
        };

        (c as u32)
            .checked_sub(FIRST_CHAR)
            .and_then(|index| table.get(index as usize))
            .copied()
            .unwrap_or_else(|| self.default_width())
    }

    /// Width of a string in points at the given font size
    ///
    /// # Example
    /// ```
    /// use pdf_core::StandardFont;
    ///
    /// let width = StandardFont::Helvetica.text_width_points("Hello", 12.0);
    /// assert!((width - 27.336).abs() < 1e-9);
    /// ```
    pub fn text_width_points(self, text: &str, font_size: f64) -> f64 {
        let units: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        units as f64 * font_size / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helvetica_letters() {
        assert_eq!(StandardFont::Helvetica.char_width('A'), 667);
        assert_eq!(StandardFont::Helvetica.char_width('i'), 222);
        assert_eq!(StandardFont::Helvetica.char_width('W'), 944);
        assert_eq!(StandardFont::Helvetica.char_width(' '), 278);
        assert_eq!(StandardFont::Helvetica.char_width('~'), 584);
    }

    #[test]
    fn test_helvetica_bold_differs() {
        assert_eq!(StandardFont::HelveticaBold.char_width('A'), 722);
        assert_eq!(StandardFont::HelveticaBold.char_width('m'), 889);
    }

    #[test]
    fn test_courier_is_monospaced() {
        for c in ['i', 'W', ' ', '.', 'é'] {
            assert_eq!(StandardFont::Courier.char_width(c), 600);
        }
    }

    #[test]
    fn test_unmapped_chars_use_default() {
        assert_eq!(StandardFont::Helvetica.char_width('\n'), 556);
        assert_eq!(StandardFont::Helvetica.char_width('é'), 556);
        assert_eq!(StandardFont::HelveticaBold.char_width('ก'), 611);
    }

    #[test]
    fn test_text_width_points() {
        // H(722) + e(556) + l(222) + l(222) + o(556) = 2278 units
        let width = StandardFont::Helvetica.text_width_points("Hello", 12.0);
        assert!((width - 27.336).abs() < 1e-9);
    }

    #[test]
    fn test_text_width_scales_with_size() {
        let small = StandardFont::Helvetica.text_width_points("Paragraph", 6.0);
        let large = StandardFont::Helvetica.text_width_points("Paragraph", 12.0);
        assert!((large - 2.0 * small).abs() < 1e-9);
    }

    #[test]
    fn test_empty_text_has_zero_width() {
        assert_eq!(StandardFont::Courier.text_width_points("", 12.0), 0.0);
    }

    #[test]
    fn test_base_font_names() {
        assert_eq!(StandardFont::Helvetica.base_font(), "Helvetica");
        assert_eq!(StandardFont::HelveticaBold.base_font(), "Helvetica-Bold");
        assert_eq!(StandardFont::Courier.base_font(), "Courier");
        assert_eq!(StandardFont::default(), StandardFont::Helvetica);
    }
}
