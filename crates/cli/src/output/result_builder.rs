use std::io::{self, Write};
use std::time::Instant;

use serde::Serialize;

use crate::output::data::TextOutput;
use crate::output::format::OutputFormat;
use crate::output::model::{
	Artifact, ArtifactType, CommandError, CommandInputs, CommandResult, Diagnostic, DiagnosticLevel, EffectiveConfig, ErrorCode, SCHEMA_VERSION,
};

/// Builder for constructing command results.
pub struct ResultBuilder<T: Serialize> {
	command: String,
	inputs: Option<CommandInputs>,
	data: Option<T>,
	error: Option<CommandError>,
	start_time: Instant,
	artifacts: Vec<Artifact>,
	diagnostics: Vec<Diagnostic>,
	config: Option<EffectiveConfig>,
}

impl<T: Serialize> ResultBuilder<T> {
	pub fn new(command: impl Into<String>) -> Self {
		Self {
			command: command.into(),
			inputs: None,
			data: None,
			error: None,
			start_time: Instant::now(),
			artifacts: Vec::new(),
			diagnostics: Vec::new(),
			config: None,
		}
	}

	pub fn inputs(mut self, inputs: CommandInputs) -> Self {
		self.inputs = Some(inputs);
		self
	}

	pub fn data(mut self, data: T) -> Self {
		self.data = Some(data);
		self
	}

	pub fn error(mut self, code: ErrorCode, message: impl Into<String>) -> Self {
		self.error = Some(CommandError {
			code,
			message: message.into(),
		});
		self
	}

	/// Records a written file. `size_bytes` is filled in by the caller.
	pub fn artifact(mut self, artifact_type: ArtifactType, path: impl Into<std::path::PathBuf>, size_bytes: Option<u64>) -> Self {
		self.artifacts.push(Artifact {
			artifact_type,
			path: path.into(),
			size_bytes,
		});
		self
	}

	pub fn diagnostic_with_source(mut self, level: DiagnosticLevel, message: impl Into<String>, source: impl Into<String>) -> Self {
		self.diagnostics.push(Diagnostic {
			level,
			message: message.into(),
			source: Some(source.into()),
		});
		self
	}

	pub fn config(mut self, config: EffectiveConfig) -> Self {
		self.config = Some(config);
		self
	}

	pub fn build(self) -> CommandResult<T> {
		let ok = self.error.is_none() && self.data.is_some();

		CommandResult {
			schema_version: Some(SCHEMA_VERSION),
			ok,
			command: self.command,
			inputs: self.inputs,
			data: self.data,
			error: self.error,
			duration_ms: Some(self.start_time.elapsed().as_millis() as u64),
			artifacts: self.artifacts,
			diagnostics: self.diagnostics,
			config: self.config,
		}
	}
}

/// Print a command result in the specified format.
///
/// Structured formats go to stdout as one envelope. Text output prints the
/// payload's text form to stdout, unless the payload was written to a file,
/// and sends diagnostics and errors to stderr.
pub fn print_result<T: Serialize + TextOutput>(result: &CommandResult<T>, format: OutputFormat) {
	match format {
		OutputFormat::Toon => {
			if let Ok(json_value) = serde_json::to_value(result) {
				println!("{}", toon::encode(&json_value, None));
			}
		}
		OutputFormat::Json => {
			if let Ok(json) = serde_json::to_string_pretty(result) {
				println!("{json}");
			}
		}
		OutputFormat::Ndjson => {
			if let Ok(json) = serde_json::to_string(result) {
				println!("{json}");
			}
		}
		OutputFormat::Text => {
			print_result_text(result);
		}
	}
}

fn print_result_text<T: Serialize + TextOutput>(result: &CommandResult<T>) {
	let mut stdout = io::stdout().lock();

	if result.ok {
		if result.artifacts.is_empty() {
			if let Some(ref data) = result.data {
				let _ = writeln!(stdout, "{}", data.to_text());
			}
		}
		for artifact in &result.artifacts {
			let _ = writeln!(stdout, "Saved {:?}: {}", artifact.artifact_type, artifact.path.display());
		}
	} else if let Some(ref error) = result.error {
		print_error_stderr(error);
	}

	for diag in &result.diagnostics {
		let prefix = match diag.level {
			DiagnosticLevel::Info => "info",
			DiagnosticLevel::Warning => "warning",
		};
		if let Some(ref source) = diag.source {
			eprintln!("[{prefix}:{source}] {}", diag.message);
		} else {
			eprintln!("[{prefix}] {}", diag.message);
		}
	}
}

/// Print an error to stderr in human-readable format.
pub fn print_error_stderr(error: &CommandError) {
	eprintln!("Error [{}]: {}", error.code, error.message);
}

/// Print a failed command in the specified format.
pub fn print_failure(command: &str, code: ErrorCode, message: &str, format: OutputFormat) {
	let result: CommandResult<()> = ResultBuilder::new(command).error(code, message).build();
	print_result(&result, format);
}
