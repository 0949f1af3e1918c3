use std::io;

use thiserror::Error;
use web2md::ExtractError;
use web2md_refine::RefineError;

use crate::output::ErrorCode;

#[derive(Debug, Error)]
pub enum CliError {
	#[error(transparent)]
	Extract(#[from] ExtractError),

	#[error(transparent)]
	Refine(#[from] RefineError),

	#[error("I/O error: {0}")]
	Io(#[from] io::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("failed to fetch {url}: {reason}")]
	Fetch { url: String, reason: String },

	#[error("invalid setting {key:?}: {reason}")]
	InvalidSetting { key: String, reason: String },

	#[error("clipboard unavailable: {0}")]
	Clipboard(String),

	#[error("invalid input: {0}")]
	InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
	pub fn code(&self) -> ErrorCode {
		match self {
			CliError::Extract(ExtractError::NoContentFound) => ErrorCode::NoContentFound,
			CliError::Extract(_) => ErrorCode::InvalidInput,
			CliError::Refine(RefineError::MissingApiKey) => ErrorCode::ApiKeyMissing,
			CliError::Refine(RefineError::Http(err)) if err.is_timeout() => ErrorCode::Timeout,
			CliError::Refine(RefineError::InvalidEndpoint { .. }) => ErrorCode::InvalidSetting,
			CliError::Refine(_) => ErrorCode::RefineFailed,
			CliError::Io(_) => ErrorCode::IoError,
			CliError::Json(_) | CliError::InvalidInput(_) => ErrorCode::InvalidInput,
			CliError::Fetch { .. } => ErrorCode::FetchFailed,
			CliError::InvalidSetting { .. } => ErrorCode::InvalidSetting,
			CliError::Clipboard(_) => ErrorCode::ClipboardError,
		}
	}

	/// Message shown to the user in notices.
	pub fn notice(&self) -> String {
		match self {
			CliError::Extract(ExtractError::NoContentFound) => "Failed to extract content from page".to_string(),
			other => other.to_string(),
		}
	}
}
