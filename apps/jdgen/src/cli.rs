use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "jdgen",
    about = "Generate a job description and a matching interview questionnaire as PDF files",
    version
)]
pub struct Cli {
    /// Directory the PDF files are written to
    #[arg(long, env = "JDGEN_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Gemini model id (overrides GEMINI_MODEL)
    #[arg(long)]
    pub model: Option<String>,

    /// Base URL of the Gemini API (overrides GEMINI_API_BASE)
    #[arg(long)]
    pub api_base: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overrides_parse() {
        let cli = Cli::try_parse_from([
            "jdgen",
            "--output-dir",
            "/tmp/jds",
            "--model",
            "gemini-1.5-pro",
            "--api-base",
            "http://localhost:8080",
        ])
        .unwrap();
        assert_eq!(cli.output_dir, PathBuf::from("/tmp/jds"));
        assert_eq!(cli.model.as_deref(), Some("gemini-1.5-pro"));
        assert_eq!(cli.api_base.as_deref(), Some("http://localhost:8080"));
    }
}
