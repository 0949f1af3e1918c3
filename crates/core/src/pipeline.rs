//! Extraction pipeline: locate, render, normalize.

use tracing::{debug, info};

use crate::document::Document;
use crate::error::Result;
use crate::locator::locate;
use crate::normalize::normalize;
use crate::render::render;
use crate::rules::BoilerplateRules;
use crate::types::{ExtractOptions, ExtractionResult};

/// Extracts a document's main content with the default boilerplate table.
pub fn extract(document: &Document, options: &ExtractOptions) -> Result<ExtractionResult> {
	Extractor::default().extract(document, options)
}

/// Extraction engine bound to a boilerplate table.
///
/// Holds no per-call state; one extractor can serve any number of documents.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
	rules: BoilerplateRules,
}

impl Extractor {
	pub fn new(rules: BoilerplateRules) -> Self {
		Self { rules }
	}

	pub fn rules(&self) -> &BoilerplateRules {
		&self.rules
	}

	pub fn extract(&self, document: &Document, options: &ExtractOptions) -> Result<ExtractionResult> {
		let located = locate(&document.root, &self.rules)?;
		let base = document.base_url();
		if base.is_none() {
			debug!(target = "web2md", url = %document.url, "no base URL, relative references will degrade");
		}

		let raw = render(&located, base.as_ref(), options);
		let content = normalize(&raw);
		let title = document.title();
		info!(target = "web2md", title = %title, raw_len = raw.len(), content_len = content.len(), "extracted content");

		Ok(ExtractionResult::new(title, document.url.as_str(), content))
	}
}
