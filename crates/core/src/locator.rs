//! Boilerplate pruning and main-content selection.

use tracing::debug;

use crate::error::{ExtractError, Result};
use crate::node::{Element, Node};
use crate::rules::BoilerplateRules;

/// Prunes boilerplate from a copy of `root` and returns the subtree to render.
///
/// Content selectors are tried in table order and the first pre-order match
/// wins; without a match the pruned `body` is used. The caller's tree is never
/// modified.
pub fn locate(root: &Node, rules: &BoilerplateRules) -> Result<Node> {
	let mut working = root.clone();
	let removed = prune(&mut working, rules);
	debug!(target = "web2md", removed, "pruned boilerplate elements");

	for selector in rules.content_selectors() {
		if let Some(found) = working.find(&|element: &Element| selector.matches(element)) {
			debug!(target = "web2md", selector = %selector, "content selector matched");
			return Ok(Node::Element(found.clone()));
		}
	}

	match working.find(&|element: &Element| element.is("body")) {
		Some(body) => {
			debug!(target = "web2md", "no content selector matched, using body");
			Ok(Node::Element(body.clone()))
		}
		None => Err(ExtractError::NoContentFound),
	}
}

fn prune(root: &mut Node, rules: &BoilerplateRules) -> usize {
	match root {
		Node::Element(element) => element.remove_descendants(&|element: &Element| rules.is_boilerplate(element)),
		Node::Text(_) => 0,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn page(body: Element) -> Node {
		Element::new("html")
			.child(Element::new("head").child(Element::new("title").text("Page")))
			.child(body)
			.into()
	}

	#[test]
	fn prefers_main_over_article() {
		let root = page(
			Element::new("body")
				.child(Element::new("article").text("article text"))
				.child(Element::new("main").text("main text")),
		);
		let located = locate(&root, &BoilerplateRules::default()).unwrap();
		assert_eq!(located.as_element().map(Element::tag), Some("main"));
	}

	#[test]
	fn selectors_match_after_pruning() {
		let root = page(
			Element::new("body")
				.child(Element::new("aside").child(Element::new("article").text("teaser")))
				.child(Element::new("div").attr("class", "content").text("real")),
		);
		let located = locate(&root, &BoilerplateRules::default()).unwrap();
		assert_eq!(located.text_content(), "real");
	}

	#[test]
	fn falls_back_to_pruned_body() {
		let root = page(
			Element::new("body")
				.child(Element::new("nav").text("Home | About"))
				.child(Element::new("p").text("Body text")),
		);
		let located = locate(&root, &BoilerplateRules::default()).unwrap();
		assert_eq!(located.as_element().map(Element::tag), Some("body"));
		assert_eq!(located.text_content(), "Body text");
	}

	#[test]
	fn missing_body_is_no_content() {
		let root: Node = Element::new("div").child(Element::new("p").text("orphan")).into();
		assert_eq!(locate(&root, &BoilerplateRules::default()), Err(ExtractError::NoContentFound));
		assert_eq!(locate(&Node::text("bare"), &BoilerplateRules::default()), Err(ExtractError::NoContentFound));
	}

	#[test]
	fn original_tree_is_untouched() {
		let root = page(Element::new("body").child(Element::new("script").text("track()")).child(Element::new("p").text("x")));
		let snapshot = root.clone();
		locate(&root, &BoilerplateRules::default()).unwrap();
		assert_eq!(root, snapshot);
	}
}
