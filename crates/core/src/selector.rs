//! Minimal selector matching over [`Element`]s.
//!
//! Supports the selector shapes used by boilerplate and content tables:
//! `tag`, `.class`, `#id`, `[attr]`, `[attr="value"]`, and a tag followed by
//! one of those qualifiers such as `div.content` or `div[role="main"]`.

use std::fmt;
use std::str::FromStr;

use crate::error::ExtractError;
use crate::node::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Qualifier {
	Class(String),
	Id(String),
	Attr { name: String, value: Option<String> },
}

/// A parsed simple selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
	source: String,
	tag: Option<String>,
	qualifier: Option<Qualifier>,
}

impl Selector {
	pub fn parse(selector: &str) -> Result<Self, ExtractError> {
		let source = selector.trim();
		let invalid = || ExtractError::InvalidSelector(selector.to_string());
		if source.is_empty() {
			return Err(invalid());
		}

		let split = source.find(['.', '#', '[']).unwrap_or(source.len());
		let (tag, rest) = source.split_at(split);
		if !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
			return Err(invalid());
		}
		let tag = (!tag.is_empty()).then(|| tag.to_ascii_lowercase());

		let qualifier = if rest.is_empty() {
			None
		} else if let Some(class) = rest.strip_prefix('.') {
			Some(Qualifier::Class(ident(class).ok_or_else(invalid)?))
		} else if let Some(id) = rest.strip_prefix('#') {
			Some(Qualifier::Id(ident(id).ok_or_else(invalid)?))
		} else {
			let body = rest.strip_prefix('[').and_then(|s| s.strip_suffix(']')).ok_or_else(invalid)?;
			Some(parse_attr(body).ok_or_else(invalid)?)
		};

		if tag.is_none() && qualifier.is_none() {
			return Err(invalid());
		}

		Ok(Self {
			source: source.to_string(),
			tag,
			qualifier,
		})
	}

	pub fn matches(&self, element: &Element) -> bool {
		if let Some(tag) = &self.tag {
			if !element.is(tag) {
				return false;
			}
		}
		match &self.qualifier {
			None => true,
			Some(Qualifier::Class(class)) => element.has_class(class),
			Some(Qualifier::Id(id)) => element.id() == Some(id.as_str()),
			Some(Qualifier::Attr { name, value: None }) => element.get_attr(name).is_some(),
			Some(Qualifier::Attr { name, value: Some(value) }) => element.get_attr(name) == Some(value.as_str()),
		}
	}

	pub fn as_str(&self) -> &str {
		&self.source
	}
}

impl FromStr for Selector {
	type Err = ExtractError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Selector::parse(s)
	}
}

impl fmt::Display for Selector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.source)
	}
}

fn ident(s: &str) -> Option<String> {
	let valid = !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_');
	valid.then(|| s.to_string())
}

fn parse_attr(body: &str) -> Option<Qualifier> {
	let Some((name, value)) = body.split_once('=') else {
		return ident(body.trim()).map(|name| Qualifier::Attr { name, value: None });
	};
	let name = ident(name.trim())?;
	let value = value.trim();
	let unquoted = value
		.strip_prefix('"')
		.and_then(|v| v.strip_suffix('"'))
		.or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
		.unwrap_or(value);
	Some(Qualifier::Attr {
		name,
		value: Some(unquoted.to_string()),
	})
}
