//! Page flow — places classified lines top-to-bottom on fixed-margin pages.
//!
//! Coordinates are PDF points with the origin at the bottom-left corner of the
//! page; `y_pt` of a placed run is its baseline.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::font_metrics::{get_metrics, Font};
use crate::layout::lines::LineKind;
use crate::layout::sanitize::to_printable_ascii;

/// Marker drawn in front of bullet lines.
pub const BULLET_MARKER: &str = "-";

/// Font, size and vertical spacing of one paragraph style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font: Font,
    pub size_pt: f32,
    /// Baseline-to-baseline distance.
    pub leading_pt: f32,
    /// Extra space above the paragraph, skipped at the top of a page.
    pub space_before_pt: f32,
}

/// Page geometry and paragraph styles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub margin_left_pt: f32,
    pub margin_right_pt: f32,
    pub margin_top_pt: f32,
    pub margin_bottom_pt: f32,
    pub body: TextStyle,
    pub heading: TextStyle,
    /// Hanging indent of bullet text relative to the left margin.
    pub bullet_indent_pt: f32,
}

impl PageConfig {
    pub fn text_width_pt(&self) -> f32 {
        self.page_width_pt - self.margin_left_pt - self.margin_right_pt
    }

    fn top_pt(&self) -> f32 {
        self.page_height_pt - self.margin_top_pt
    }
}

/// US letter (8.5" × 11"), 40pt margins on every side.
/// Body: Helvetica 10/12. Heading: Helvetica-Bold 14/17 with 6pt above.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        page_width_pt: 612.0,
        page_height_pt: 792.0,
        margin_left_pt: 40.0,
        margin_right_pt: 40.0,
        margin_top_pt: 40.0,
        margin_bottom_pt: 40.0,
        body: TextStyle {
            font: Font::Helvetica,
            size_pt: 10.0,
            leading_pt: 12.0,
            space_before_pt: 0.0,
        },
        heading: TextStyle {
            font: Font::HelveticaBold,
            size_pt: 14.0,
            leading_pt: 17.0,
            space_before_pt: 6.0,
        },
        bullet_indent_pt: 12.0,
    }
}

/// One run of text at a fixed position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedText {
    pub text: String,
    pub font: Font,
    pub size_pt: f32,
    pub x_pt: f32,
    pub y_pt: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub runs: Vec<PlacedText>,
}

/// Tracks the write position while filling pages.
struct Cursor<'a> {
    config: &'a PageConfig,
    pages: Vec<Page>,
    /// Top of the next line box, measured from the page bottom.
    y_pt: f32,
}

impl<'a> Cursor<'a> {
    fn new(config: &'a PageConfig) -> Self {
        Self {
            config,
            pages: vec![Page::default()],
            y_pt: config.top_pt(),
        }
    }

    fn at_page_top(&self) -> bool {
        self.y_pt >= self.config.top_pt()
    }

    fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.y_pt = self.config.top_pt();
    }

    fn add_space(&mut self, space_pt: f32) {
        if !self.at_page_top() {
            self.y_pt -= space_pt;
        }
    }

    /// Reserves one line box of `style`, breaking the page if it does not fit.
    /// Returns the baseline of the reserved line.
    fn next_baseline(&mut self, style: &TextStyle) -> f32 {
        if self.y_pt - style.leading_pt < self.config.margin_bottom_pt && !self.at_page_top() {
            self.new_page();
        }
        let baseline = self.y_pt - style.size_pt;
        self.y_pt -= style.leading_pt;
        baseline
    }

    fn place(&mut self, run: PlacedText) {
        if let Some(page) = self.pages.last_mut() {
            page.runs.push(run);
        }
    }
}

/// Lays out classified lines. Always returns at least one (possibly empty) page.
pub fn layout_lines(lines: &[LineKind], config: &PageConfig) -> Vec<Page> {
    let mut cursor = Cursor::new(config);

    for line in lines {
        let (style, indent_pt) = match line {
            LineKind::Heading(_) => (config.heading, 0.0),
            LineKind::Numbered(_) => (config.body, 0.0),
            LineKind::Bullet(_) => (config.body, config.bullet_indent_pt),
        };

        let text = to_printable_ascii(line.text());
        let wrapped = get_metrics(style.font).wrap(
            &text,
            style.size_pt,
            config.text_width_pt() - indent_pt,
        );
        if wrapped.is_empty() {
            continue;
        }

        cursor.add_space(style.space_before_pt);

        for (i, row) in wrapped.into_iter().enumerate() {
            let baseline = cursor.next_baseline(&style);
            if i == 0 && matches!(line, LineKind::Bullet(_)) {
                cursor.place(PlacedText {
                    text: BULLET_MARKER.to_string(),
                    font: style.font,
                    size_pt: style.size_pt,
                    x_pt: config.margin_left_pt,
                    y_pt: baseline,
                });
            }
            cursor.place(PlacedText {
                text: row,
                font: style.font,
                size_pt: style.size_pt,
                x_pt: config.margin_left_pt + indent_pt,
                y_pt: baseline,
            });
        }
    }

    debug!(
        pages = cursor.pages.len(),
        lines = lines.len(),
        "Document layout complete"
    );
    cursor.pages
}
