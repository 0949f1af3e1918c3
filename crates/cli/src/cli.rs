use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "web2md")]
#[command(about = "Convert web pages to clean markdown, optionally refined by an LLM")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Output format
	#[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
	pub format: OutputFormat,

	/// Settings file (defaults to $WEB2MD_SETTINGS, then the user config directory)
	#[arg(long, global = true, value_name = "FILE")]
	pub settings: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Extract a page's main content as markdown (no LLM)
	#[command(alias = "x")]
	Extract(ExtractArgs),

	/// Extract a page and refine it through the configured chat-completions API
	Convert(ConvertArgs),

	/// Show or change persistent settings
	Settings {
		#[command(subcommand)]
		action: SettingsAction,
	},
}

/// Arguments shared by commands that read a page.
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
	/// Page to read: http(s) URL, file path, or - for stdin
	pub source: String,

	/// Page URL used for the result and for resolving relative links
	#[arg(long, value_name = "URL")]
	pub url: Option<String>,

	/// Leave images out of the markdown
	#[arg(long)]
	pub no_images: bool,

	/// Write the markdown to FILE
	#[arg(short, long, value_name = "FILE")]
	pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
	#[command(flatten)]
	pub page: PageArgs,

	/// Copy the markdown to the clipboard
	#[arg(long)]
	pub copy: bool,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
	#[command(flatten)]
	pub page: PageArgs,

	/// SOURCE holds an already-extracted page as JSON (an extraction reply or a bare page object)
	#[arg(long)]
	pub page_json: bool,

	/// Do not copy the result, even when autoCopy is on
	#[arg(long)]
	pub no_copy: bool,

	/// Model for this run only
	#[arg(long)]
	pub model: Option<String>,

	/// Chat-completions endpoint for this run only
	#[arg(long)]
	pub endpoint: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
	/// Print the current settings (API key masked)
	Show,
	/// Change one setting, e.g. `settings set model gpt-4o`
	Set { key: String, value: String },
	/// Restore every setting to its default
	Reset,
	/// List recently used models
	Models,
	/// Remove a model from the history
	Forget { model: String },
	/// Send a minimal request to check endpoint, key and model
	Test,
}
