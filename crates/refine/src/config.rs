//! Refine client configuration.

use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4.1-nano";
pub const DEFAULT_TEMPERATURE: f64 = 0.3;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
/// Completion budget sent with every refine request.
pub const MAX_TOKENS: u32 = 4000;

pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are a web content extraction and formatting assistant. You receive the raw content of a webpage \
and return its main body as clean, well-structured markdown.

Rules:
1. Do not summarize. Keep every sentence and paragraph of the main content.
2. Drop navigation, advertisements, cookie notices, share buttons and other page furniture.
3. Keep the heading hierarchy (#, ##, ###), lists, links, emphasis, tables and code blocks.
4. Start with the page title as a level-one heading.

Return only the markdown, without explanations.";

/// Settings for [`crate::ChatCompletionsRefiner`].
#[derive(Debug, Clone, PartialEq)]
pub struct RefineConfig {
	pub endpoint: String,
	pub api_key: String,
	pub model: String,
	pub system_prompt: String,
	pub temperature: f64,
	pub timeout: Duration,
}

impl Default for RefineConfig {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.to_string(),
			api_key: String::new(),
			model: DEFAULT_MODEL.to_string(),
			system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
			temperature: DEFAULT_TEMPERATURE,
			timeout: DEFAULT_TIMEOUT,
		}
	}
}

impl RefineConfig {
	pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
		self.api_key = api_key.into();
		self
	}

	pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.endpoint = endpoint.into();
		self
	}

	pub fn with_model(mut self, model: impl Into<String>) -> Self {
		self.model = model.into();
		self
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builders_override_defaults() {
		let config = RefineConfig::default().with_model("mock-model").with_endpoint("http://localhost:9/chat");
		assert_eq!(config.model, "mock-model");
		assert_eq!(config.endpoint, "http://localhost:9/chat");
		assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
		assert_eq!(config.timeout, DEFAULT_TIMEOUT);
	}
}
