use thiserror::Error;

/// Errors from the refine step.
#[derive(Debug, Error)]
pub enum RefineError {
	#[error("API key not configured")]
	MissingApiKey,

	#[error("invalid endpoint {endpoint:?}: {reason}")]
	InvalidEndpoint { endpoint: String, reason: String },

	#[error("API request failed: {0}")]
	Http(#[from] reqwest::Error),

	/// Non-2xx response. `message` is the HTTP reason phrase.
	#[error("API request failed: {status} {message}")]
	Status { status: u16, message: String },

	#[error("API response contained no content")]
	EmptyResponse,

	#[error("failed to decode API response: {0}")]
	Decode(String),
}

pub type Result<T> = std::result::Result<T, RefineError>;
