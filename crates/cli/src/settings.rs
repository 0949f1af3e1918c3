//! Persistent user settings.
//!
//! Settings live in one JSON file, `settings.json` under the platform config
//! directory (`~/.config/web2md/` on Linux). `--settings` or `WEB2MD_SETTINGS`
//! point at another file. Missing or unreadable files load as defaults; every
//! field falls back to its default when absent.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use web2md_refine::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT, RefineConfig};

use crate::error::{CliError, Result};

pub const SETTINGS_ENV: &str = "WEB2MD_SETTINGS";
pub const API_KEY_ENV: &str = "WEB2MD_API_KEY";
const MODEL_HISTORY_LIMIT: usize = 10;

/// A model that was configured at some point, most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelHistoryEntry {
	pub model: String,
	#[serde(default)]
	pub endpoint: String,
	/// Milliseconds since the Unix epoch.
	#[serde(default)]
	pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
	pub llm_model: String,
	pub llm_endpoint: String,
	pub llm_api_key: String,
	pub system_prompt: String,
	pub temperature: f64,
	pub timeout_secs: u64,
	pub auto_copy: bool,
	pub show_notifications: bool,
	pub append_page_info: bool,
	pub include_images: bool,
	pub model_history: Vec<ModelHistoryEntry>,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			llm_model: DEFAULT_MODEL.to_string(),
			llm_endpoint: DEFAULT_ENDPOINT.to_string(),
			llm_api_key: String::new(),
			system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
			temperature: DEFAULT_TEMPERATURE,
			timeout_secs: DEFAULT_TIMEOUT.as_secs(),
			auto_copy: true,
			show_notifications: true,
			append_page_info: false,
			include_images: true,
			model_history: Vec::new(),
		}
	}
}

impl Settings {
	/// Refine client configuration. `WEB2MD_API_KEY` wins over the stored key.
	pub fn refine_config(&self) -> RefineConfig {
		let api_key = env::var(API_KEY_ENV).ok().filter(|key| !key.trim().is_empty()).unwrap_or_else(|| self.llm_api_key.clone());
		RefineConfig {
			endpoint: self.llm_endpoint.clone(),
			api_key,
			model: self.llm_model.clone(),
			system_prompt: self.system_prompt.clone(),
			temperature: self.temperature,
			timeout: Duration::from_secs(self.timeout_secs),
		}
	}

	/// Adds the current model to the history unless it is already listed.
	///
	/// New entries go first; the list keeps at most ten.
	pub fn record_model(&mut self, timestamp: i64) {
		let model = self.llm_model.trim();
		if model.is_empty() || self.model_history.iter().any(|entry| entry.model == model) {
			return;
		}
		self.model_history.insert(
			0,
			ModelHistoryEntry {
				model: model.to_string(),
				endpoint: self.llm_endpoint.clone(),
				timestamp,
			},
		);
		self.model_history.truncate(MODEL_HISTORY_LIMIT);
	}

	/// Removes `model` from the history. Returns whether it was listed.
	pub fn forget_model(&mut self, model: &str) -> bool {
		let before = self.model_history.len();
		self.model_history.retain(|entry| entry.model != model);
		self.model_history.len() != before
	}

	/// Updates one setting from its command-line spelling.
	///
	/// Keys match the JSON names case-insensitively, with or without the
	/// `llm` prefix, and with `-`/`_` separators ignored (`api-key`,
	/// `llmApiKey` and `API_KEY` are the same key). Returns the JSON name.
	pub fn set(&mut self, key: &str, value: &str) -> Result<&'static str> {
		let normalized: String = key.chars().filter(|c| *c != '-' && *c != '_').collect::<String>().to_ascii_lowercase();
		let normalized = normalized.strip_prefix("llm").unwrap_or(&normalized);
		let invalid = |reason: &str| CliError::InvalidSetting {
			key: key.to_string(),
			reason: reason.to_string(),
		};

		let name = match normalized {
			"model" => {
				let model = value.trim();
				if model.is_empty() {
					return Err(invalid("model must not be empty"));
				}
				self.llm_model = model.to_string();
				"llmModel"
			}
			"endpoint" => {
				self.llm_endpoint = value.trim().to_string();
				"llmEndpoint"
			}
			"apikey" => {
				self.llm_api_key = value.trim().to_string();
				"llmApiKey"
			}
			"systemprompt" => {
				self.system_prompt = value.to_string();
				"systemPrompt"
			}
			"temperature" => {
				let temperature: f64 = value.trim().parse().map_err(|_| invalid("expected a number"))?;
				if !(0.0..=2.0).contains(&temperature) {
					return Err(invalid("must be between 0 and 2"));
				}
				self.temperature = temperature;
				"temperature"
			}
			"timeoutsecs" | "timeout" => {
				let secs: u64 = value.trim().parse().map_err(|_| invalid("expected whole seconds"))?;
				if secs == 0 {
					return Err(invalid("must be at least one second"));
				}
				self.timeout_secs = secs;
				"timeoutSecs"
			}
			"autocopy" => {
				self.auto_copy = parse_bool(value).ok_or_else(|| invalid("expected true or false"))?;
				"autoCopy"
			}
			"shownotifications" | "notifications" => {
				self.show_notifications = parse_bool(value).ok_or_else(|| invalid("expected true or false"))?;
				"showNotifications"
			}
			"appendpageinfo" => {
				self.append_page_info = parse_bool(value).ok_or_else(|| invalid("expected true or false"))?;
				"appendPageInfo"
			}
			"includeimages" | "images" => {
				self.include_images = parse_bool(value).ok_or_else(|| invalid("expected true or false"))?;
				"includeImages"
			}
			_ => return Err(invalid("unknown setting")),
		};
		Ok(name)
	}

	/// JSON view with the API key masked.
	pub fn redacted(&self) -> Result<serde_json::Value> {
		let mut value = serde_json::to_value(self)?;
		if let Some(key) = value.get_mut("llmApiKey") {
			*key = serde_json::Value::String(mask_key(&self.llm_api_key));
		}
		Ok(value)
	}
}

fn parse_bool(value: &str) -> Option<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"true" | "on" | "yes" | "1" => Some(true),
		"false" | "off" | "no" | "0" => Some(false),
		_ => None,
	}
}

/// Keeps the last four characters of keys long enough to stay secret.
pub fn mask_key(key: &str) -> String {
	let chars: Vec<char> = key.chars().collect();
	match chars.len() {
		0 => String::new(),
		len if len <= 8 => "*".repeat(len),
		len => format!("****{}", chars[len - 4..].iter().collect::<String>()),
	}
}

/// Settings file plus its location.
#[derive(Debug)]
pub struct SettingsStore {
	path: PathBuf,
	pub settings: Settings,
}

impl SettingsStore {
	pub fn load(path: PathBuf) -> Self {
		let settings = match fs::read_to_string(&path) {
			Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
				warn!(target = "web2md", path = %path.display(), error = %err, "ignoring unreadable settings file");
				Settings::default()
			}),
			Err(_) => {
				debug!(target = "web2md", path = %path.display(), "no settings file, using defaults");
				Settings::default()
			}
		};
		Self { path, settings }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn save(&self) -> Result<()> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent)?;
		}
		let json = serde_json::to_string_pretty(&self.settings)?;
		fs::write(&self.path, json)?;
		debug!(target = "web2md", path = %self.path.display(), "saved settings");
		Ok(())
	}
}

/// Settings file location: explicit flag, then `WEB2MD_SETTINGS`, then the
/// platform config directory.
pub fn resolve_path(flag: Option<&Path>) -> PathBuf {
	if let Some(path) = flag {
		return path.to_path_buf();
	}
	if let Some(path) = env::var_os(SETTINGS_ENV).filter(|path| !path.is_empty()) {
		return PathBuf::from(path);
	}
	dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("web2md").join("settings.json")
}
