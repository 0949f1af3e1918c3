//! Owned document tree consumed by the locator and renderer.
//!
//! A [`Node`] is either a run of text or an [`Element`] with a tag, ordered
//! attributes and ordered children. Tags are stored lowercase so dispatch can
//! compare them directly; attribute keys are matched case-insensitively.

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	Text(String),
	Element(Element),
}

impl Node {
	pub fn text(content: impl Into<String>) -> Self {
		Node::Text(content.into())
	}

	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Node::Element(element) => Some(element),
			Node::Text(_) => None,
		}
	}

	/// Concatenated text of this node and all descendants, in document order.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		self.collect_text(&mut out);
		out
	}

	fn collect_text(&self, out: &mut String) {
		match self {
			Node::Text(text) => out.push_str(text),
			Node::Element(element) => {
				for child in &element.children {
					child.collect_text(out);
				}
			}
		}
	}

	/// Finds the first element in pre-order (this node included) accepted by `pred`.
	pub fn find(&self, pred: &impl Fn(&Element) -> bool) -> Option<&Element> {
		let element = self.as_element()?;
		if pred(element) {
			return Some(element);
		}
		element.children.iter().find_map(|child| child.find(pred))
	}
}

impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Node::Element(element)
	}
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	tag: String,
	attrs: Vec<(String, String)>,
	pub children: Vec<Node>,
}

impl Element {
	pub fn new(tag: &str) -> Self {
		Self {
			tag: tag.to_ascii_lowercase(),
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Adds an attribute, builder style.
	pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.push((key.into(), value.into()));
		self
	}

	/// Appends a child node, builder style.
	pub fn child(mut self, node: impl Into<Node>) -> Self {
		self.children.push(node.into());
		self
	}

	/// Appends a text child, builder style.
	pub fn text(self, content: impl Into<String>) -> Self {
		self.child(Node::Text(content.into()))
	}

	pub fn tag(&self) -> &str {
		&self.tag
	}

	pub fn is(&self, tag: &str) -> bool {
		self.tag.eq_ignore_ascii_case(tag)
	}

	pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
		self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Returns the first attribute named `key`, ignoring ASCII case.
	pub fn get_attr(&self, key: &str) -> Option<&str> {
		self.attrs.iter().find(|(k, _)| k.eq_ignore_ascii_case(key)).map(|(_, v)| v.as_str())
	}

	/// Returns a non-blank attribute value, trimmed.
	pub fn non_empty_attr(&self, key: &str) -> Option<&str> {
		self.get_attr(key).map(str::trim).filter(|v| !v.is_empty())
	}

	pub fn has_class(&self, class: &str) -> bool {
		self.get_attr("class").is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
	}

	pub fn id(&self) -> Option<&str> {
		self.get_attr("id")
	}

	/// Concatenated text of all descendants, in document order.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		for child in &self.children {
			child.collect_text(&mut out);
		}
		out
	}

	/// Removes every descendant element accepted by `pred`, at any depth.
	///
	/// The element itself is never removed; callers own that decision.
	pub fn remove_descendants(&mut self, pred: &impl Fn(&Element) -> bool) -> usize {
		let before = self.children.len();
		self.children.retain(|child| !matches!(child, Node::Element(element) if pred(element)));
		let mut removed = before - self.children.len();
		for child in &mut self.children {
			if let Node::Element(element) = child {
				removed += element.remove_descendants(pred);
			}
		}
		removed
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Node {
		Element::new("DIV")
			.attr("Class", "post  content")
			.child(Element::new("p").text("Hello "))
			.child(Element::new("span").child(Element::new("b").text("world")))
			.into()
	}

	#[test]
	fn tags_are_lowercased() {
		let node = sample();
		let element = node.as_element().expect("element");
		assert_eq!(element.tag(), "div");
		assert!(element.is("Div"));
	}

	#[test]
	fn attribute_lookup_ignores_case() {
		let node = sample();
		let element = node.as_element().expect("element");
		assert_eq!(element.get_attr("class"), Some("post  content"));
		assert!(element.has_class("content"));
		assert!(!element.has_class("con"));
	}

	#[test]
	fn text_content_walks_descendants() {
		assert_eq!(sample().text_content(), "Hello world");
	}

	#[test]
	fn find_includes_self_and_uses_preorder() {
		let node = sample();
		assert_eq!(node.find(&|e: &Element| e.is("div")).map(Element::tag), Some("div"));
		assert_eq!(node.find(&|e: &Element| e.is("b")).map(|e| Node::from(e.clone()).text_content()), Some("world".to_string()));
		assert!(node.find(&|e: &Element| e.is("table")).is_none());
	}

	#[test]
	fn remove_descendants_reaches_any_depth() {
		let mut element = Element::new("body")
			.child(Element::new("script").text("x()"))
			.child(Element::new("div").child(Element::new("div").child(Element::new("script").text("y()"))));
		let removed = element.remove_descendants(&|e: &Element| e.is("script"));
		assert_eq!(removed, 2);
		assert!(Node::from(element).find(&|e: &Element| e.is("script")).is_none());
	}
}
