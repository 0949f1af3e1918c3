//! Post-processing of raw renderer output into presentable markdown.

use std::sync::LazyLock;

use regex_lite::Regex;

static EXCESS_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n+").expect("EXCESS_NEWLINES regex should compile"));
static MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").expect("MULTI_SPACE regex should compile"));
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^( *)(?:- |\d+\. )").expect("LIST_ITEM regex should compile"));

/// Normalizes whitespace in rendered markdown.
///
/// Outside fenced code blocks: runs of three or more newlines become a blank
/// line, space/tab runs collapse, and lines lose surrounding spaces. Two
/// structures survive: `> ` quote prefixes, and the indentation of list items
/// when it is a whole number of two-space levels. Fenced blocks, quoted or
/// not, pass through untouched. The whole result is trimmed. Applying
/// `normalize` to its own output is a no-op.
pub fn normalize(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());
	for segment in segments(raw) {
		match segment {
			Segment::Prose(text) => out.push_str(&normalize_prose(text)),
			Segment::Code(text) => out.push_str(text),
		}
	}
	out.trim().to_string()
}

/// Length of the backtick marker when `line` is a code fence: three or more
/// backticks alone on the line, optionally behind quote markers.
pub(crate) fn fence_len(line: &str) -> Option<usize> {
	let (_, rest) = split_quote(line.trim_start_matches([' ', '\t']));
	let marker = rest.trim_matches([' ', '\t', '\n', '\r']);
	(marker.len() >= 3 && marker.bytes().all(|b| b == b'`')).then_some(marker.len())
}

/// Splits leading `>` quote markers (each with one optional space) off `line`.
fn split_quote(line: &str) -> (usize, &str) {
	let mut depth = 0;
	let mut rest = line;
	while let Some(after) = rest.strip_prefix('>') {
		depth += 1;
		rest = after.strip_prefix(' ').unwrap_or(after);
	}
	(depth, rest)
}

enum Segment<'a> {
	Prose(&'a str),
	Code(&'a str),
}

/// Splits `raw` into prose and fenced-code segments. A fence closes on the
/// first later fence line whose marker is at least as long as the opening
/// one; an unclosed fence runs to the end of the input.
fn segments(raw: &str) -> Vec<Segment<'_>> {
	let mut segments = Vec::new();
	let mut start = 0;
	let mut open_fence: Option<usize> = None;
	let mut offset = 0;

	for line in raw.split_inclusive('\n') {
		let line_start = offset;
		offset += line.len();
		let Some(len) = fence_len(line) else {
			continue;
		};
		match open_fence {
			None => {
				if line_start > start {
					segments.push(Segment::Prose(&raw[start..line_start]));
				}
				start = line_start;
				open_fence = Some(len);
			}
			Some(open) if len >= open => {
				// The closing fence's newline starts the following prose segment.
				let end = if line.ends_with('\n') { offset - 1 } else { offset };
				segments.push(Segment::Code(&raw[start..end]));
				start = end;
				open_fence = None;
			}
			Some(_) => {}
		}
	}

	if start < raw.len() {
		let rest = &raw[start..];
		segments.push(if open_fence.is_some() { Segment::Code(rest) } else { Segment::Prose(rest) });
	}
	segments
}

fn normalize_prose(text: &str) -> String {
	let text = EXCESS_NEWLINES.replace_all(text, "\n\n");
	let mut out = String::with_capacity(text.len());
	for (index, line) in text.split('\n').enumerate() {
		if index > 0 {
			out.push('\n');
		}
		out.push_str(&normalize_line(line));
	}
	out
}

fn normalize_line(line: &str) -> String {
	let (depth, rest) = split_quote(line);
	let body = rest.trim_start_matches([' ', '\t']);
	let indent = LIST_ITEM
		.captures(rest)
		.and_then(|caps| caps.get(1))
		.map(|spaces| spaces.as_str())
		.filter(|spaces| spaces.len() % 2 == 0)
		.unwrap_or_default();
	let body = MULTI_SPACE.replace_all(body, " ");
	let line = format!("{}{indent}{body}", "> ".repeat(depth));
	line.trim_end_matches(' ').to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn collapses_excess_blank_lines() {
		assert_eq!(normalize("a\n\n\n\nb"), "a\n\nb");
		assert_eq!(normalize("a\n \n\t\n b"), "a\n\nb");
		assert_eq!(normalize("a\n\nb"), "a\n\nb");
	}

	#[test]
	fn collapses_spaces_and_strips_line_edges() {
		assert_eq!(normalize("  a \t  b  \n   c   "), "a b\nc");
	}

	#[test]
	fn keeps_list_indentation() {
		assert_eq!(normalize("\n- A\n  - B\n    1. C   x\n"), "- A\n  - B\n    1. C x");
	}

	#[test]
	fn leaves_fenced_code_untouched() {
		let raw = "\n\nIntro   text\n\n```\nfn  main() {\n\n\n\n    x;   \n}\n```\n\n\n\nAfter";
		assert_eq!(normalize(raw), "Intro text\n\n```\nfn  main() {\n\n\n\n    x;   \n}\n```\n\nAfter");
	}

	#[test]
	fn unclosed_fence_keeps_preceding_prose_once() {
		let raw = "a\n```\nb\n```\nmiddle text\n```\ncode";
		assert_eq!(normalize(raw), raw);
		assert_eq!(normalize("intro\n```\n  tail   x"), "intro\n```\n  tail   x");
	}

	#[test]
	fn shorter_fence_does_not_close_longer_one() {
		let raw = "````\n```\n  a   b\n```\n````\nafter   text";
		assert_eq!(normalize(raw), "````\n```\n  a   b\n```\n````\nafter text");
	}

	#[test]
	fn quoted_fences_and_lists_survive() {
		let raw = "\n\n> ```\n> a   b\n> \n>    c\n> ```\n> - A\n>   - B\n> plain    text   \n\n";
		assert_eq!(normalize(raw), "> ```\n> a   b\n> \n>    c\n> ```\n> - A\n>   - B\n> plain text");
	}

	#[test]
	fn odd_indentation_is_not_a_list_level() {
		assert_eq!(normalize("a\n - b\n   - c\n  - d"), "a\n- b\n- c\n  - d");
	}

	#[test]
	fn is_idempotent() {
		let samples = [
			"\n\n# Title\n\n\n\nSome   text\n\n- a\n  - b\n\n```\n  code  \n```\n\n> quote\n> \n> more\n\n",
			"  \n\t x \n\n\n  \n y",
			"```\nunterminated   \n\n\n",
			"a\n```\nb\n```\nmiddle   text\n```\ncode  \n\n\n",
			"x\n````\n```\ninner\n````\ny   z\n```",
			"> ```\n> a   b\n>\n> ```\n>   - nested\n>  - odd",
			"",
		];
		for sample in samples {
			let once = normalize(sample);
			assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
		}
	}
}
