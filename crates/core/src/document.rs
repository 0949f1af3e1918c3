//! A parsed page: its tree plus the URL it was loaded from.

use url::Url;

use crate::node::{Element, Node};
use crate::render::collapse_whitespace;

/// A page handed to the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
	pub root: Node,
	/// Address the page was loaded from; may be empty for local input.
	pub url: String,
}

impl Document {
	pub fn new(root: impl Into<Node>, url: impl Into<String>) -> Self {
		Self {
			root: root.into(),
			url: url.into(),
		}
	}

	/// Text of the first `<title>` element, whitespace collapsed.
	pub fn title(&self) -> String {
		self.root
			.find(&|element: &Element| element.is("title"))
			.map(|title| collapse_whitespace(&title.text_content()).trim().to_string())
			.unwrap_or_default()
	}

	/// URL that relative references resolve against.
	///
	/// The document URL, replaced by the first `<base href>` when present. A
	/// relative `<base>` is joined against the document URL.
	pub fn base_url(&self) -> Option<Url> {
		let page = Url::parse(self.url.trim()).ok();
		let base_href = self
			.root
			.find(&|element: &Element| element.is("base") && element.non_empty_attr("href").is_some())
			.and_then(|base| base.non_empty_attr("href"));

		match base_href {
			Some(href) => Url::parse(href).ok().or_else(|| page.as_ref().and_then(|page| page.join(href).ok())).or(page),
			None => page,
		}
	}
}
