//! Extraction message envelope.
//!
//! A page agent receives an [`ExtractRequest`] and answers with an
//! [`ExtractReply`] carrying the extracted [`PageData`]. web2md reads these
//! replies as convert input and writes [`PageData`] as extract output.

use serde::{Deserialize, Serialize};

/// `{"action": "extractContent"}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ExtractRequest {
	ExtractContent,
}

/// Extracted page as it travels between agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub url: String,
	pub content: String,
	/// RFC 3339 capture time.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub timestamp: Option<String>,
}

/// Reply to an [`ExtractRequest`].
///
/// `data` is present when `success` is true, `error` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractReply {
	pub success: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<PageData>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

impl ExtractReply {
	pub fn ok(data: PageData) -> Self {
		Self {
			success: true,
			data: Some(data),
			error: None,
		}
	}

	pub fn failed(error: impl Into<String>) -> Self {
		Self {
			success: false,
			data: None,
			error: Some(error.into()),
		}
	}

	/// Collapses the envelope into its payload or its error message.
	pub fn into_result(self) -> Result<PageData, String> {
		match (self.success, self.data) {
			(true, Some(data)) => Ok(data),
			(true, None) => Err("extraction reply carried no data".to_string()),
			(false, _) => Err(self.error.unwrap_or_else(|| "extraction failed".to_string())),
		}
	}
}
