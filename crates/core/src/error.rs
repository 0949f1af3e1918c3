use thiserror::Error;

/// Errors that escape an extraction call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
	/// Neither a content selector nor a `body` element matched.
	#[error("no content found: document has no main content or body element")]
	NoContentFound,

	#[error("invalid selector: {0:?}")]
	InvalidSelector(String),

	#[error("invalid boilerplate rules: {0}")]
	InvalidRules(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
