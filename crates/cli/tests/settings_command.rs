//! Integration tests for `settings` subcommands against a temporary file.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn web2md(settings: &Path, args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_web2md"))
		.arg("--settings")
		.arg(settings)
		.args(args)
		.env_remove("WEB2MD_SETTINGS")
		.env_remove("WEB2MD_API_KEY")
		.env_remove("RUST_LOG")
		.output()
		.expect("run web2md")
}

fn json(output: &Output) -> Value {
	let stdout = String::from_utf8_lossy(&output.stdout);
	serde_json::from_str(&stdout).unwrap_or_else(|err| panic!("expected JSON stdout: {err}\n{stdout}\nstderr: {}", String::from_utf8_lossy(&output.stderr)))
}

fn stored(settings: &Path) -> Value {
	serde_json::from_str(&std::fs::read_to_string(settings).expect("settings written")).expect("settings JSON")
}

#[test]
fn show_reports_defaults_without_writing() {
	let dir = TempDir::new().unwrap();
	let settings = dir.path().join("settings.json");
	let output = web2md(&settings, &["-f", "json", "settings", "show"]);

	assert!(output.status.success());
	let result = json(&output);
	assert_eq!(result["command"], "settings.show");
	assert_eq!(result["data"]["settings"]["llmModel"], "gpt-4.1-nano");
	assert_eq!(result["data"]["settings"]["autoCopy"], true);
	assert_eq!(result["data"]["settings"]["appendPageInfo"], false);
	assert!(!settings.exists());
}

#[test]
fn set_persists_and_masks_api_key() {
	let dir = TempDir::new().unwrap();
	let settings = dir.path().join("nested").join("settings.json");

	let output = web2md(&settings, &["-f", "json", "settings", "set", "api-key", "sk-test-1234567890"]);
	assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
	let result = json(&output);
	assert_eq!(result["artifacts"][0]["type"], "settings");
	assert_eq!(result["data"]["settings"]["llmApiKey"], "****7890");
	assert_eq!(stored(&settings)["llmApiKey"], "sk-test-1234567890");

	let output = web2md(&settings, &["settings", "set", "temperature", "0.7"]);
	assert!(output.status.success());
	assert!(String::from_utf8_lossy(&output.stdout).starts_with("Saved Settings:"));
	assert_eq!(stored(&settings)["temperature"], 0.7);
	assert_eq!(stored(&settings)["llmApiKey"], "sk-test-1234567890");
}

#[test]
fn invalid_values_are_rejected() {
	let dir = TempDir::new().unwrap();
	let settings = dir.path().join("settings.json");

	let output = web2md(&settings, &["-f", "json", "settings", "set", "temperature", "3"]);
	assert!(!output.status.success());
	let result = json(&output);
	assert_eq!(result["ok"], false);
	assert_eq!(result["error"]["code"], "INVALID_SETTING");

	let output = web2md(&settings, &["-f", "json", "settings", "set", "colour", "blue"]);
	assert_eq!(json(&output)["error"]["code"], "INVALID_SETTING");
	assert!(!settings.exists());
}

#[test]
fn model_history_tracks_models_newest_first() {
	let dir = TempDir::new().unwrap();
	let settings = dir.path().join("settings.json");

	for model in ["model-a", "model-b", "model-a"] {
		assert!(web2md(&settings, &["settings", "set", "model", model]).status.success());
	}
	let result = json(&web2md(&settings, &["-f", "json", "settings", "models"]));
	assert_eq!(result["data"]["current"], "model-a");
	let models: Vec<&str> = result["data"]["models"].as_array().unwrap().iter().map(|entry| entry["model"].as_str().unwrap()).collect();
	assert_eq!(models, ["model-b", "model-a"]);

	let output = web2md(&settings, &["settings", "models"]);
	let text = String::from_utf8_lossy(&output.stdout);
	assert!(text.contains("* model-a"), "{text}");

	assert!(web2md(&settings, &["settings", "forget", "model-b"]).status.success());
	assert_eq!(stored(&settings)["modelHistory"].as_array().unwrap().len(), 1);

	let output = web2md(&settings, &["-f", "json", "settings", "forget", "model-b"]);
	assert_eq!(json(&output)["error"]["code"], "INVALID_INPUT");
}

#[test]
fn reset_restores_defaults() {
	let dir = TempDir::new().unwrap();
	let settings = dir.path().join("settings.json");
	assert!(web2md(&settings, &["settings", "set", "auto-copy", "false"]).status.success());
	assert_eq!(stored(&settings)["autoCopy"], false);

	assert!(web2md(&settings, &["settings", "reset"]).status.success());
	let reset = stored(&settings);
	assert_eq!(reset["autoCopy"], true);
	assert_eq!(reset["modelHistory"], serde_json::json!([]));
}

#[test]
fn test_connection_requires_api_key() {
	let dir = TempDir::new().unwrap();
	let output = web2md(&dir.path().join("settings.json"), &["-f", "json", "settings", "test"]);
	assert!(!output.status.success());
	let result = json(&output);
	assert_eq!(result["command"], "settings.test");
	assert_eq!(result["error"]["code"], "API_KEY_MISSING");
}
