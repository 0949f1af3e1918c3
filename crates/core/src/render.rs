//! Tree-to-markdown rendering.
//!
//! The renderer walks a located subtree depth-first and appends markdown to a
//! single buffer. Context that HTML expresses through nesting (list depth,
//! whether text sits inside `<pre>`) is carried in [`RenderState`]. The raw
//! output is not yet presentable; it goes through [`crate::normalize`] next.

use std::mem;

use tracing::debug;
use url::Url;

use crate::node::{Element, Node};
use crate::normalize::fence_len;
use crate::resolve::resolve_reference;
use crate::types::ExtractOptions;

/// Mutable context threaded through one render call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderState {
	/// Number of enclosing `ul`/`ol` elements.
	pub depth: usize,
	/// Inside a preformatted region; text is appended verbatim.
	pub literal: bool,
}

/// Renders `root` to raw (un-normalized) markdown.
///
/// `base` resolves relative link and image references. References that cannot
/// be resolved degrade the element instead of failing the render.
pub fn render(root: &Node, base: Option<&Url>, options: &ExtractOptions) -> String {
	let mut renderer = Renderer {
		base,
		include_images: options.include_images,
		state: RenderState::default(),
		out: String::new(),
	};
	renderer.node(root, None);
	renderer.out
}

struct Renderer<'a> {
	base: Option<&'a Url>,
	include_images: bool,
	state: RenderState,
	out: String,
}

impl Renderer<'_> {
	fn node(&mut self, node: &Node, parent: Option<&Element>) {
		match node {
			Node::Text(text) if self.state.literal => self.out.push_str(text),
			Node::Text(text) => self.out.push_str(&escape_backtick_runs(&collapse_whitespace(text))),
			Node::Element(element) => self.element(element, parent),
		}
	}

	fn children(&mut self, element: &Element) {
		for child in &element.children {
			self.node(child, Some(element));
		}
	}

	fn wrap(&mut self, element: &Element, open: &str, close: &str) {
		self.out.push_str(open);
		self.children(element);
		self.out.push_str(close);
	}

	fn element(&mut self, element: &Element, parent: Option<&Element>) {
		match element.tag() {
			"img" => self.image(element),
			"a" => self.link(element),
			tag @ ("h1" | "h2" | "h3" | "h4" | "h5" | "h6") => {
				let level = usize::from(tag.as_bytes()[1] - b'0');
				let open = format!("\n\n{} ", "#".repeat(level));
				self.wrap(element, &open, "\n\n");
			}
			"p" | "div" | "section" | "article" | "main" | "figure" | "figcaption" | "details" | "summary" | "address" => {
				self.wrap(element, "\n\n", "\n");
			}
			"ul" | "ol" => {
				self.state.depth += 1;
				self.wrap(element, "\n", "\n");
				self.state.depth -= 1;
			}
			"li" => {
				let indent = "  ".repeat(self.state.depth.saturating_sub(1));
				let bullet = if parent.is_some_and(|p| p.is("ol")) { "1. " } else { "- " };
				self.out.push('\n');
				self.out.push_str(&indent);
				self.out.push_str(bullet);
				self.children(element);
			}
			"pre" if self.state.literal => self.children(element),
			"pre" => {
				// The fence must outrun any backtick run in the content.
				let fence = "`".repeat(longest_backtick_run(&element.text_content()).max(2) + 1);
				self.out.push_str(&format!("\n\n{fence}\n"));
				let outer = mem::replace(&mut self.state.literal, true);
				self.children(element);
				self.state.literal = outer;
				self.out.push_str(&format!("\n{fence}\n\n"));
			}
			"code" if !self.state.literal => self.wrap(element, "`", "`"),
			"blockquote" => self.blockquote(element),
			"table" => self.wrap(element, "\n\n", "\n\n"),
			"tr" => self.wrap(element, "|", "\n"),
			"td" | "th" => self.wrap(element, " ", " |"),
			"br" => self.out.push('\n'),
			"strong" | "b" => self.wrap(element, "**", "**"),
			"em" | "i" => self.wrap(element, "*", "*"),
			"u" => self.wrap(element, "<u>", "</u>"),
			"del" | "s" | "strike" => self.wrap(element, "~~", "~~"),
			"hr" => self.out.push_str("\n\n---\n\n"),
			_ => self.children(element),
		}
	}

	fn image(&mut self, element: &Element) {
		if !self.include_images {
			return;
		}
		let Some(src) = element.non_empty_attr("src").or_else(|| element.non_empty_attr("data-src")) else {
			return;
		};
		match resolve_reference(src, self.base) {
			Ok(resolved) => {
				let alt = collapse_whitespace(element.get_attr("alt").unwrap_or_default());
				self.out.push_str(&format!("![{}]({resolved})", alt.trim()));
			}
			Err(err) => debug!(target = "web2md", error = %err, "dropping image"),
		}
	}

	fn link(&mut self, element: &Element) {
		let text = collapse_whitespace(&element.text_content());
		let text = text.trim();
		if let Some(href) = element.non_empty_attr("href") {
			if !text.is_empty() {
				match resolve_reference(href, self.base) {
					Ok(resolved) => {
						self.out.push_str(&format!("[{text}]({resolved})"));
						return;
					}
					Err(err) => debug!(target = "web2md", error = %err, "rendering link as plain text"),
				}
			}
		}
		self.children(element);
	}

	fn blockquote(&mut self, element: &Element) {
		let start = self.out.len();
		self.children(element);
		let inner = self.out.split_off(start);
		self.out.push_str("\n\n");
		self.out.push_str(&quote_lines(&inner));
		self.out.push_str("\n\n");
	}
}

/// Prefixes every line of a rendered blockquote body with `> `.
///
/// Outside fenced code, trailing spaces go and runs of blank lines shrink to
/// one bare `>` line. Lines inside a fence are kept verbatim.
fn quote_lines(inner: &str) -> String {
	let mut lines: Vec<String> = Vec::new();
	let mut fence: Option<usize> = None;
	for line in inner.lines() {
		if let Some(open) = fence {
			if fence_len(line).is_some_and(|len| len >= open) {
				fence = None;
			}
			lines.push(format!("> {line}"));
			continue;
		}
		let line = line.trim_end();
		if line.trim_start().is_empty() {
			if lines.last().is_some_and(|last| last != ">") {
				lines.push(">".to_string());
			}
			continue;
		}
		fence = fence_len(line);
		lines.push(format!("> {line}"));
	}
	while lines.last().is_some_and(|last| last == ">") {
		lines.pop();
	}
	lines.join("\n")
}

fn longest_backtick_run(text: &str) -> usize {
	text.split(|c| c != '`').map(str::len).max().unwrap_or(0)
}

/// Escapes runs of three or more backticks so prose text never reads as a
/// code fence.
fn escape_backtick_runs(text: &str) -> String {
	if longest_backtick_run(text) < 3 {
		return text.to_string();
	}
	let mut out = String::with_capacity(text.len() * 2);
	let mut rest = text;
	while let Some(start) = rest.find('`') {
		out.push_str(&rest[..start]);
		let run = rest[start..].len() - rest[start..].trim_start_matches('`').len();
		if run >= 3 {
			out.push_str(&"\\`".repeat(run));
		} else {
			out.push_str(&rest[start..start + run]);
		}
		rest = &rest[start + run..];
	}
	out.push_str(rest);
	out
}

/// Replaces every run of whitespace with a single space.
pub(crate) fn collapse_whitespace(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	let mut in_space = false;
	for c in text.chars() {
		if c.is_whitespace() {
			if !in_space {
				out.push(' ');
			}
			in_space = true;
		} else {
			out.push(c);
			in_space = false;
		}
	}
	out
}
