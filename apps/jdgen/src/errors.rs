use thiserror::Error;

/// Application-level error type.
///
/// Generation and render failures are caught by the pipeline and reported on
/// the console. Configuration failures never reach this type: they abort
/// startup through `anyhow` in `config`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Short label attached to error log events.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Llm(_) => "LLM_ERROR",
            AppError::Render(_) => "RENDER_ERROR",
            AppError::Io(_) => "IO_ERROR",
        }
    }
}
