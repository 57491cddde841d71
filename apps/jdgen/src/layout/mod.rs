// Document layout: line classification, glyph metrics and page flow.
// Pure computation; the PDF bytes are produced in `render`.

pub mod flow;
pub mod font_metrics;
pub mod lines;
pub mod sanitize;

// Re-export the public API consumed by other modules (render, pipeline).
pub use flow::{default_page_config, layout_lines, Page, PageConfig};
pub use font_metrics::Font;
pub use lines::classify_text;
