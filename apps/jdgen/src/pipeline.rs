//! Run orchestration: intake → job description → questionnaire.
//!
//! Generation and render failures are reported on the console and end the
//! affected stage; they are never propagated as errors. Only intake I/O
//! failures (e.g. stdin closed) abort the run.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info};

use crate::errors::AppError;
use crate::generation::TextGenerator;
use crate::intake;
use crate::models::{ArtifactKind, JobRequest};
use crate::render::{output_path, DocumentRenderer};

/// Files produced by one run. `None` means the artifact was not written.
#[derive(Debug, Default, PartialEq)]
pub struct RunReport {
    pub job_description: Option<PathBuf>,
    pub questionnaire: Option<PathBuf>,
}

/// Injected capabilities for a run.
pub struct Pipeline {
    generator: Arc<dyn TextGenerator>,
    renderer: Arc<dyn DocumentRenderer>,
    output_dir: PathBuf,
}

impl Pipeline {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        renderer: Arc<dyn DocumentRenderer>,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            generator,
            renderer,
            output_dir,
        }
    }

    pub async fn run<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<RunReport, AppError> {
        let request = intake::collect_job_request(reader, writer)?;
        let mut report = RunReport::default();

        let description = match self.generator.generate_description(&request).await {
            Ok(text) => text,
            Err(e) => {
                error!(kind = e.kind(), error = %e, "Job description generation failed");
                writeln!(writer, "Error generating JD: {e}")?;
                writeln!(writer, "Failed to generate job description")?;
                return Ok(report);
            }
        };

        writeln!(writer, "\n Generated Job Description:\n")?;
        writeln!(writer, "{description}")?;
        report.job_description = self
            .save(&request, ArtifactKind::JobDescription, &description, writer)
            .await?;

        writeln!(writer, "\n Questionnaire Generator")?;
        let difficulty = intake::prompt_difficulty(reader, writer)?;
        let count = intake::prompt_question_count(reader, writer)?;

        let questions = match self
            .generator
            .generate_questions(&request, difficulty, count)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                error!(kind = e.kind(), error = %e, "Questionnaire generation failed");
                writeln!(writer, "Error generating questions: {e}")?;
                return Ok(report);
            }
        };

        writeln!(writer, "\n {difficulty} Technical Questions ({count}):\n")?;
        writeln!(writer, "{questions}")?;
        report.questionnaire = self
            .save(
                &request,
                ArtifactKind::Questionnaire { difficulty },
                &questions,
                writer,
            )
            .await?;

        Ok(report)
    }

    /// Renders one artifact. A render failure is reported and yields `None`.
    async fn save<W: Write>(
        &self,
        request: &JobRequest,
        kind: ArtifactKind,
        text: &str,
        writer: &mut W,
    ) -> Result<Option<PathBuf>, AppError> {
        let path = output_path(&self.output_dir, &kind.file_name(request));
        match self.renderer.render(text, &path).await {
            Ok(()) => {
                info!(artifact = kind.label(), path = %path.display(), "Artifact saved");
                writeln!(writer, "Content saved to {}", display_path(&path))?;
                Ok(Some(path))
            }
            Err(e) => {
                error!(
                    artifact = kind.label(),
                    kind = e.kind(),
                    error = %e,
                    "Failed to save artifact"
                );
                writeln!(writer, "Error saving to PDF: {e}")?;
                Ok(None)
            }
        }
    }
}

fn display_path(path: &Path) -> String {
    match path.strip_prefix(".") {
        Ok(relative) => relative.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}
