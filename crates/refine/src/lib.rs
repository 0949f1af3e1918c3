//! LLM refinement for web2md.
//!
//! Sends an [`web2md::ExtractionResult`] to an OpenAI-compatible
//! chat-completions endpoint and returns the generated markdown. The request
//! carries a system prompt and one user message built by
//! [`build_user_prompt`].

pub mod client;
pub mod config;
pub mod error;
pub mod prompt;

pub use client::{ChatCompletionsRefiner, Refiner};
pub use config::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT, MAX_TOKENS, RefineConfig};
pub use error::{RefineError, Result};
pub use prompt::{append_page_info, build_user_prompt};
