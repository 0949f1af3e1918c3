use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use web2md_protocol::PageData;

use crate::settings::ModelHistoryEntry;

/// Plain-text rendering of a payload for `--format text`.
pub trait TextOutput {
	fn to_text(&self) -> String;
}

impl TextOutput for () {
	fn to_text(&self) -> String {
		String::new()
	}
}

/// Result data for extract command.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractData {
	#[serde(flatten)]
	pub page: PageData,
	pub include_images: bool,
	#[serde(default)]
	pub copied: bool,
}

impl TextOutput for ExtractData {
	fn to_text(&self) -> String {
		self.page.content.clone()
	}
}

/// Result data for convert command.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertData {
	pub title: String,
	pub url: String,
	pub model: String,
	pub markdown: String,
	pub copied: bool,
}

impl TextOutput for ConvertData {
	fn to_text(&self) -> String {
		self.markdown.clone()
	}
}

/// Result data for settings show and settings set.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsData {
	pub path: PathBuf,
	/// Settings as stored, with the API key masked.
	pub settings: serde_json::Value,
}

impl TextOutput for SettingsData {
	fn to_text(&self) -> String {
		let mut lines = vec![format!("# {}", self.path.display())];
		if let Some(map) = self.settings.as_object() {
			for (key, value) in map {
				if key == "modelHistory" {
					continue;
				}
				let value = match value {
					serde_json::Value::String(text) if text.contains('\n') => format!("{:?}", text),
					serde_json::Value::String(text) => text.clone(),
					other => other.to_string(),
				};
				lines.push(format!("{key} = {value}"));
			}
		}
		lines.join("\n")
	}
}

/// Result data for settings models.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelsData {
	pub current: String,
	pub models: Vec<ModelHistoryEntry>,
}

impl TextOutput for ModelsData {
	fn to_text(&self) -> String {
		self.models
			.iter()
			.map(|entry| {
				let marker = if entry.model == self.current { "*" } else { " " };
				format!("{marker} {}\t{}", entry.model, entry.endpoint)
			})
			.collect::<Vec<_>>()
			.join("\n")
	}
}

/// Result data for settings test.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionData {
	pub model: String,
	pub endpoint: String,
}

impl TextOutput for ConnectionData {
	fn to_text(&self) -> String {
		format!("Connection successful! ({} at {})", self.model, self.endpoint)
	}
}
