mod cli;
mod config;
mod errors;
mod generation;
mod intake;
mod layout;
mod llm_client;
mod models;
mod pipeline;
mod render;

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::Config;
use crate::generation::LlmTextGenerator;
use crate::layout::default_page_config;
use crate::llm_client::GeminiClient;
use crate::pipeline::Pipeline;
use crate::render::PdfRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails on a missing API key before any prompt)
    let config = Config::from_env()?.with_overrides(cli.model, cli.api_base);

    // Structured logging on stderr; stdout carries the interactive session
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting jdgen v{}", env!("CARGO_PKG_VERSION"));

    let llm = GeminiClient::new(
        config.google_api_key.clone(),
        config.gemini_model.clone(),
        config.gemini_api_base.clone(),
    )
    .context("Failed to build HTTP client")?;
    info!("LLM client initialized (model: {})", llm.model());

    let page_config = default_page_config();
    let pipeline = Pipeline::new(
        Arc::new(LlmTextGenerator::new(Arc::new(llm))),
        Arc::new(PdfRenderer::new(page_config)),
        cli.output_dir,
    );

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout();
    if let Err(e) = pipeline.run(&mut stdin, &mut stdout).await {
        // Generation failures are handled inside the pipeline; this is intake I/O.
        println!("Error: {e}");
    }

    Ok(())
}
