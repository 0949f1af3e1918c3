//! HTML front end: parses markup with `scraper` and converts it into the
//! owned [`Node`] tree the rest of the pipeline works on.

use scraper::{ElementRef, Html};
use tracing::debug;

use crate::document::Document;
use crate::node::{Element, Node};

/// Parses an HTML document.
///
/// Parsing never fails: malformed markup is repaired the way browsers repair
/// it, and the result always has `html` and `body` elements. Comments and
/// doctype nodes are dropped.
pub fn parse_document(html: &str, url: &str) -> Document {
	let parsed = Html::parse_document(html);
	if !parsed.errors.is_empty() {
		debug!(target = "web2md", errors = parsed.errors.len(), "html parsed with recoverable errors");
	}
	Document::new(convert(parsed.root_element()), url)
}

fn convert(source: ElementRef<'_>) -> Element {
	let value = source.value();
	let mut element = Element::new(value.name());
	for (key, attr) in value.attrs() {
		element = element.attr(key, attr);
	}
	for child in source.children() {
		if let Some(child) = ElementRef::wrap(child) {
			element.children.push(Node::Element(convert(child)));
		} else if let Some(text) = child.value().as_text() {
			element.children.push(Node::text(&**text));
		}
	}
	element
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builds_owned_tree() {
		let doc = parse_document(
			r#"<!DOCTYPE html><html><head><title>T</title></head><body><!-- c --><P CLASS="x">Hi <b>there</b></P></body></html>"#,
			"https://x.com/",
		);
		assert_eq!(doc.url, "https://x.com/");
		let p = doc.root.find(&|e: &Element| e.is("p")).expect("p element");
		assert_eq!(p.tag(), "p");
		assert_eq!(p.get_attr("class"), Some("x"));
		assert_eq!(Node::from(p.clone()).text_content(), "Hi there");
	}

	#[test]
	fn fragments_get_a_body() {
		let doc = parse_document("<p>loose</p>", "");
		assert!(doc.root.find(&|e: &Element| e.is("body")).is_some());
		assert_eq!(doc.title(), "");
	}
}
