//! Public types passed into and returned by extraction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Options recognised by the extraction engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractOptions {
	/// Emit `![alt](src)` for images; when false images contribute nothing.
	pub include_images: bool,
}

impl Default for ExtractOptions {
	fn default() -> Self {
		Self { include_images: true }
	}
}

/// Result of a successful extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
	pub title: String,
	pub source_url: String,
	/// Normalized markdown of the located content.
	pub content: String,
	pub captured_at: DateTime<Utc>,
}

impl ExtractionResult {
	/// Builds a result captured now.
	pub fn new(title: impl Into<String>, source_url: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			source_url: source_url.into(),
			content: content.into(),
			captured_at: Utc::now(),
		}
	}
}
