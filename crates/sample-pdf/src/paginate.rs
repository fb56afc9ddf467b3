//! Top-down pagination of wrapped lines

use tracing::debug;

/// Page bounds used for layout, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub line_height: f64,
}

impl PageGeometry {
    /// Page width minus both side margins
    pub fn usable_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    /// Baseline of the first line on a page
    pub fn top(&self) -> f64 {
        self.height - self.margin
    }

    /// Lowest baseline still allowed on a page
    pub fn bottom(&self) -> f64 {
        self.margin
    }
}

/// A line at its final baseline position (PDF coordinates)
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Lines assigned to one page, top to bottom
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub lines: Vec<PlacedLine>,
}

impl PageLayout {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Places lines top-down and starts a new page once the cursor would drop
/// below the bottom margin
pub struct Paginator {
    geometry: PageGeometry,
}

impl Paginator {
    pub fn new(geometry: PageGeometry) -> Self {
        Self { geometry }
    }

    /// Number of baselines between top and bottom, both inclusive
    ///
    /// Always at least one, so a page never stays empty while lines remain.
    pub fn lines_per_page(&self) -> usize {
        let span = self.geometry.top() - self.geometry.bottom();
        if span < 0.0 {
            return 1;
        }
        if self.geometry.line_height <= 0.0 {
            return usize::MAX;
        }
        // The cast saturates for tiny line heights
        ((span / self.geometry.line_height).floor() as usize).saturating_add(1)
    }

    /// Lay out lines onto pages
    ///
    /// Blank lines take a slot like any other line. No lines still yields a
    /// single empty page.
    pub fn paginate(&self, lines: &[String]) -> Vec<PageLayout> {
        let capacity = self.lines_per_page();
        let top = self.geometry.top();
        let x = self.geometry.margin;

        let mut pages: Vec<PageLayout> = lines
            .chunks(capacity)
            .map(|chunk| PageLayout {
                lines: chunk
                    .iter()
                    .enumerate()
                    .map(|(slot, text)| PlacedLine {
                        text: text.clone(),
                        x,
                        y: top - slot as f64 * self.geometry.line_height,
                    })
                    .collect(),
            })
            .collect();

        if pages.is_empty() {
            pages.push(PageLayout::default());
        }

        debug!(
            lines = lines.len(),
            pages = pages.len(),
            lines_per_page = capacity,
            "paginated lines"
        );

        pages
    }
}
