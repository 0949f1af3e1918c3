//! Boilerplate and content-selector tables loaded from `boilerplate.json`.
//!
//! The embedded table is parsed once; callers that need site-specific rules
//! start from [`BoilerplateRules::default`] and extend it, or build a table
//! from their own JSON with [`BoilerplateRules::from_json`].

use std::sync::LazyLock;

use serde::Deserialize;

use crate::error::{ExtractError, Result};
use crate::node::Element;
use crate::selector::Selector;

static DEFAULT_RULES: LazyLock<BoilerplateRules> = LazyLock::new(|| {
	let json = include_str!("../boilerplate.json");
	BoilerplateRules::from_json(json).expect("embedded boilerplate.json should parse")
});

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RulesFile {
	#[serde(default)]
	deny_tags: Vec<String>,
	#[serde(default)]
	remove_selectors: Vec<String>,
	#[serde(default)]
	content_selectors: Vec<String>,
}

/// Pruning and main-content selection table used by the locator.
#[derive(Debug, Clone)]
pub struct BoilerplateRules {
	deny_tags: Vec<String>,
	remove_selectors: Vec<Selector>,
	content_selectors: Vec<Selector>,
}

impl Default for BoilerplateRules {
	fn default() -> Self {
		DEFAULT_RULES.clone()
	}
}

impl BoilerplateRules {
	/// Table with no pruning and no content selectors; the locator falls
	/// straight through to `body`.
	pub fn empty() -> Self {
		Self {
			deny_tags: Vec::new(),
			remove_selectors: Vec::new(),
			content_selectors: Vec::new(),
		}
	}

	pub fn from_json(json: &str) -> Result<Self> {
		let file: RulesFile = serde_json::from_str(json).map_err(|err| ExtractError::InvalidRules(err.to_string()))?;
		let mut rules = Self::empty();
		for tag in file.deny_tags {
			rules = rules.deny_tag(&tag);
		}
		for selector in file.remove_selectors {
			rules = rules.remove_selector(&selector)?;
		}
		for selector in file.content_selectors {
			rules = rules.content_selector(&selector)?;
		}
		Ok(rules)
	}

	pub fn deny_tag(mut self, tag: &str) -> Self {
		let tag = tag.trim().to_ascii_lowercase();
		if !tag.is_empty() && !self.deny_tags.contains(&tag) {
			self.deny_tags.push(tag);
		}
		self
	}

	pub fn remove_selector(mut self, selector: &str) -> Result<Self> {
		self.remove_selectors.push(Selector::parse(selector)?);
		Ok(self)
	}

	/// Appends a content selector at the lowest priority.
	pub fn content_selector(mut self, selector: &str) -> Result<Self> {
		self.content_selectors.push(Selector::parse(selector)?);
		Ok(self)
	}

	pub fn deny_tags(&self) -> &[String] {
		&self.deny_tags
	}

	pub fn remove_selectors(&self) -> &[Selector] {
		&self.remove_selectors
	}

	/// Content selectors, highest priority first.
	pub fn content_selectors(&self) -> &[Selector] {
		&self.content_selectors
	}

	/// Whether `element` is boilerplate and must be pruned before rendering.
	pub fn is_boilerplate(&self, element: &Element) -> bool {
		self.deny_tags.iter().any(|tag| element.is(tag)) || self.remove_selectors.iter().any(|selector| selector.matches(element))
	}
}
