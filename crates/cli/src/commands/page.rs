//! Page command flow helpers.
//!
//! Shared skeleton of `extract` and `convert`: read the source, build the
//! document, run extraction, and write the optional output file.

use std::fs;
use std::path::Path;

use tracing::info;
use web2md::{ExtractOptions, ExtractionResult, extract, parse_document};
use web2md_protocol::PageData;

use crate::cli::PageArgs;
use crate::error::Result;
use crate::output::{ArtifactType, CommandInputs, DiagnosticLevel, EffectiveConfig, ResultBuilder};
use crate::settings::SettingsStore;
use crate::source::Source;

/// Loads `args.source` and extracts its main content.
pub async fn extract_page(args: &PageArgs, options: &ExtractOptions) -> Result<ExtractionResult> {
	let source = Source::parse(&args.source);
	let loaded = source.load(args.url.as_deref()).await?;
	info!(target = "web2md", source = %source.describe(), bytes = loaded.body.len(), "loaded page");
	let document = parse_document(&loaded.body, &loaded.url);
	Ok(extract(&document, options)?)
}

/// Images are kept only when both the setting and the flag allow them.
pub fn extract_options(args: &PageArgs, store: &SettingsStore) -> ExtractOptions {
	ExtractOptions {
		include_images: store.settings.include_images && !args.no_images,
	}
}

pub fn page_inputs(args: &PageArgs) -> CommandInputs {
	CommandInputs {
		source: Some(args.source.clone()),
		url: args.url.clone(),
		output_path: args.output.clone(),
		extra: None,
	}
}

pub fn page_data(page: &ExtractionResult) -> PageData {
	PageData {
		title: page.title.clone(),
		url: page.source_url.clone(),
		content: page.content.clone(),
		timestamp: Some(page.captured_at.to_rfc3339()),
	}
}

pub fn effective_config(store: &SettingsStore, options: &ExtractOptions) -> EffectiveConfig {
	EffectiveConfig {
		settings_path: store.path().to_path_buf(),
		include_images: options.include_images,
		..Default::default()
	}
}

/// Adds an info diagnostic when the page has no URL to resolve links against.
pub fn note_missing_url<T: serde::Serialize>(builder: ResultBuilder<T>, page: &ExtractionResult) -> ResultBuilder<T> {
	if !page.source_url.is_empty() {
		return builder;
	}
	builder.diagnostic_with_source(DiagnosticLevel::Info, "no page URL, relative links and images were left out (set one with --url)", "extract")
}

/// Writes `markdown` to the `-o` file when one was given and records it.
pub fn write_output<T: serde::Serialize>(builder: ResultBuilder<T>, path: Option<&Path>, markdown: &str) -> Result<ResultBuilder<T>> {
	let Some(path) = path else {
		return Ok(builder);
	};
	if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
		fs::create_dir_all(parent)?;
	}
	fs::write(path, markdown)?;
	info!(target = "web2md", path = %path.display(), "wrote markdown");
	Ok(builder.artifact(ArtifactType::Markdown, path, Some(markdown.len() as u64)))
}
