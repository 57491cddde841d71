//! Document writer — renders generated text into a PDF file.
//!
//! Layout is computed first (`layout::layout_lines`), then the whole document is
//! serialized in memory and written to disk in one shot. A failed render never
//! leaves a partial file behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, Pt};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::layout::{classify_text, layout_lines, Font, Page, PageConfig};

/// Writes a text artifact to a document file.
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    async fn render(&self, text: &str, path: &Path) -> Result<(), AppError>;
}

/// `DocumentRenderer` producing PDF files with the built-in Helvetica fonts.
pub struct PdfRenderer {
    page_config: PageConfig,
}

impl PdfRenderer {
    pub fn new(page_config: PageConfig) -> Self {
        Self { page_config }
    }
}

#[async_trait]
impl DocumentRenderer for PdfRenderer {
    async fn render(&self, text: &str, path: &Path) -> Result<(), AppError> {
        let text = text.to_owned();
        let config = self.page_config.clone();
        let title = document_title(path);

        // Layout and serialization are CPU-bound; keep them off the async workers.
        let bytes = tokio::task::spawn_blocking(move || {
            let pages = layout_lines(&classify_text(&text), &config);
            build_pdf(&title, &pages, &config)
        })
        .await
        .map_err(|e| AppError::Render(format!("PDF render task failed: {e}")))??;

        tokio::fs::write(path, &bytes).await.map_err(|e| {
            AppError::Render(format!("could not write {}: {e}", path.display()))
        })?;

        info!(path = %path.display(), bytes = bytes.len(), "PDF written");
        Ok(())
    }
}

fn document_title(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Document".to_string())
}

/// Serializes laid-out pages to PDF bytes. One layer per page.
pub fn build_pdf(title: &str, pages: &[Page], config: &PageConfig) -> Result<Vec<u8>, AppError> {
    let width = Mm::from(Pt(config.page_width_pt));
    let height = Mm::from(Pt(config.page_height_pt));

    let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, "Layer 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::Render(format!("failed to load Helvetica: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| AppError::Render(format!("failed to load Helvetica-Bold: {e}")))?;

    for (index, page) in pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(width, height, "Layer 1")
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for run in &page.runs {
            let font: &IndirectFontRef = match run.font {
                Font::Helvetica => &regular,
                Font::HelveticaBold => &bold,
            };
            layer.use_text(
                run.text.clone(),
                run.size_pt,
                Mm::from(Pt(run.x_pt)),
                Mm::from(Pt(run.y_pt)),
                font,
            );
        }
    }

    debug!(title, pages = pages.len(), "Serializing PDF");
    doc.save_to_bytes()
        .map_err(|e| AppError::Render(format!("failed to serialize PDF: {e}")))
}

/// Full path of an artifact inside the output directory.
pub fn output_path(output_dir: &Path, file_name: &str) -> PathBuf {
    output_dir.join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::default_page_config;

    const SAMPLE_JD: &str = "We are looking for a Senior Data Engineer...\n\n\
        Key Responsibilities\n\
        1. Design batch and streaming pipelines\n\
        2. Own the data warehouse schema\n\
        Required Technical Skills\n\
        - Python\n\
        - SQL\n";

    #[tokio::test]
    async fn test_render_writes_pdf_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = output_path(dir.path(), "JD_Senior_Data_Engineer.pdf");

        PdfRenderer::new(default_page_config())
            .render(SAMPLE_JD, &path)
            .await
            .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_render_empty_text_still_produces_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.pdf");

        PdfRenderer::new(default_page_config())
            .render("", &path)
            .await
            .unwrap();

        assert!(std::fs::read(&path).unwrap().starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_render_into_missing_directory_fails_without_panicking() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist").join("JD_X.pdf");

        let err = PdfRenderer::new(default_page_config())
            .render(SAMPLE_JD, &path)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Render(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_build_pdf_multi_page() {
        let config = default_page_config();
        let text: String = (0..150).map(|i| format!("{}. Question {i}\n", i % 5 + 1)).collect();
        let pages = layout_lines(&classify_text(&text), &config);
        assert!(pages.len() > 1);

        let bytes = build_pdf("Questions", &pages, &config).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_document_title_from_file_stem() {
        assert_eq!(
            document_title(Path::new("/tmp/out/JD_Senior_Data_Engineer.pdf")),
            "JD_Senior_Data_Engineer"
        );
    }
}
