// Text generation: prompt templates plus the `TextGenerator` seam.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod generator;
pub mod prompts;

pub use generator::{LlmTextGenerator, TextGenerator};
