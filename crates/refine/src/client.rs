//! HTTP chat-completions refiner.

use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, info, warn};
use url::Url;
use web2md::ExtractionResult;
use web2md_protocol::{ApiErrorBody, ChatMessage, ChatRequest, ChatResponse};

use crate::config::{MAX_TOKENS, RefineConfig};
use crate::error::{RefineError, Result};
use crate::prompt::build_user_prompt;

/// Turns an extraction result into final markdown.
#[async_trait]
pub trait Refiner: Send + Sync {
	async fn refine(&self, page: &ExtractionResult) -> Result<String>;
}

/// [`Refiner`] backed by an OpenAI-compatible chat-completions endpoint.
///
/// One request per call, no retry. The configured timeout covers the whole
/// exchange.
#[derive(Debug, Clone)]
pub struct ChatCompletionsRefiner {
	config: RefineConfig,
	endpoint: Url,
	client: reqwest::Client,
}

impl ChatCompletionsRefiner {
	pub fn new(config: RefineConfig) -> Result<Self> {
		if config.api_key.trim().is_empty() {
			return Err(RefineError::MissingApiKey);
		}
		let endpoint = parse_endpoint(&config.endpoint)?;
		let client = reqwest::Client::builder().timeout(config.timeout).build()?;
		Ok(Self { config, endpoint, client })
	}

	pub fn config(&self) -> &RefineConfig {
		&self.config
	}

	/// Request body for refining `page`.
	pub fn build_request(&self, page: &ExtractionResult) -> ChatRequest {
		ChatRequest::new(&self.config.model)
			.message(ChatMessage::system(&self.config.system_prompt))
			.message(ChatMessage::user(build_user_prompt(page)))
			.temperature(self.config.temperature)
			.max_tokens(MAX_TOKENS)
	}

	/// Sends a minimal request to check the endpoint, key and model.
	pub async fn test_connection(&self) -> Result<()> {
		let request = ChatRequest::new(&self.config.model).message(ChatMessage::user("Test connection")).max_tokens(10);
		self.send(&request).await.map(|_| ())
	}

	async fn send(&self, request: &ChatRequest) -> Result<ChatResponse> {
		let start = Instant::now();
		let response = self
			.client
			.post(self.endpoint.clone())
			.bearer_auth(&self.config.api_key)
			.json(request)
			.send()
			.await
			.inspect_err(|err| warn!(target = "web2md", error = %err, "refine request failed"))?;

		let status = response.status();
		let body = response.text().await?;
		if !status.is_success() {
			let detail = serde_json::from_str::<ApiErrorBody>(&body).map(|body| body.error.message).unwrap_or(body);
			warn!(target = "web2md", status = status.as_u16(), detail = %detail, "refine API error");
			return Err(RefineError::Status {
				status: status.as_u16(),
				message: status.canonical_reason().unwrap_or_default().to_string(),
			});
		}

		let parsed: ChatResponse = serde_json::from_str(&body).map_err(|err| RefineError::Decode(err.to_string()))?;
		debug!(
			target = "web2md",
			model = %request.model,
			duration_ms = start.elapsed().as_millis() as u64,
			"chat completion"
		);
		Ok(parsed)
	}
}

#[async_trait]
impl Refiner for ChatCompletionsRefiner {
	async fn refine(&self, page: &ExtractionResult) -> Result<String> {
		let request = self.build_request(page);
		info!(target = "web2md", model = %self.config.model, endpoint = %self.endpoint, "refining content");
		let response = self.send(&request).await?;
		response
			.first_content()
			.filter(|content| !content.trim().is_empty())
			.map(str::to_string)
			.ok_or(RefineError::EmptyResponse)
	}
}

fn parse_endpoint(endpoint: &str) -> Result<Url> {
	let invalid = |reason: String| RefineError::InvalidEndpoint {
		endpoint: endpoint.to_string(),
		reason,
	};
	let url = Url::parse(endpoint.trim()).map_err(|err| invalid(err.to_string()))?;
	match url.scheme() {
		"http" | "https" => Ok(url),
		scheme => Err(invalid(format!("unsupported scheme {scheme:?}"))),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::DEFAULT_ENDPOINT;

	#[test]
	fn rejects_missing_key() {
		assert!(matches!(ChatCompletionsRefiner::new(RefineConfig::default()), Err(RefineError::MissingApiKey)));
		assert!(matches!(ChatCompletionsRefiner::new(RefineConfig::default().with_api_key("  ")), Err(RefineError::MissingApiKey)));
	}

	#[test]
	fn rejects_non_http_endpoints() {
		for endpoint in ["not a url", "ftp://x.com/v1", ""] {
			let config = RefineConfig::default().with_api_key("k").with_endpoint(endpoint);
			assert!(matches!(ChatCompletionsRefiner::new(config), Err(RefineError::InvalidEndpoint { .. })), "{endpoint}");
		}
	}

	#[test]
	fn request_carries_prompts_and_budget() {
		let refiner = ChatCompletionsRefiner::new(RefineConfig::default().with_api_key("k")).unwrap();
		assert_eq!(refiner.endpoint.as_str(), DEFAULT_ENDPOINT);
		let request = refiner.build_request(&ExtractionResult::new("T", "https://x.com/", "Body"));
		assert_eq!(request.model, "gpt-4.1-nano");
		assert_eq!(request.messages.len(), 2);
		assert_eq!(request.messages[1].content, "Title: T\nURL: https://x.com/\n\nContent:\nBody");
		assert_eq!(request.temperature, Some(0.3));
		assert_eq!(request.max_tokens, Some(4000));
	}
}
