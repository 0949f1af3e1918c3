//! Final delivery: clipboard and user notices.

use arboard::Clipboard;
use colored::Colorize;
use tracing::warn;

use crate::error::{CliError, Result};

pub const COPIED_NOTICE: &str = "Content converted and copied to clipboard!";
pub const CONVERTED_NOTICE: &str = "Content converted to markdown!";

/// Writes `text` to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
	let mut clipboard = Clipboard::new().map_err(|err| CliError::Clipboard(err.to_string()))?;
	clipboard.set_text(text).map_err(|err| CliError::Clipboard(err.to_string()))
}

/// Copies when asked to. A clipboard failure is reported and swallowed; the
/// result is whether the text reached the clipboard.
pub fn try_copy(text: &str, enabled: bool) -> bool {
	if !enabled {
		return false;
	}
	match copy_to_clipboard(text) {
		Ok(()) => true,
		Err(err) => {
			warn!(target = "web2md", error = %err, "could not copy to clipboard");
			false
		}
	}
}

/// Completion and error notices on stderr, shown when notifications are on.
#[derive(Debug, Clone, Copy)]
pub struct Notifier {
	enabled: bool,
}

impl Notifier {
	pub fn new(enabled: bool) -> Self {
		Self { enabled }
	}

	pub fn converted(&self, copied: bool) {
		if self.enabled {
			eprintln!("{} {}", "web2md:".green().bold(), completion_message(copied));
		}
	}

	pub fn error(&self, message: &str) {
		if self.enabled {
			eprintln!("{} {message}", "web2md error:".red().bold());
		}
	}
}

pub fn completion_message(copied: bool) -> &'static str {
	if copied { COPIED_NOTICE } else { CONVERTED_NOTICE }
}
