//! Reference resolution for links and images.

use thiserror::Error;
use url::Url;

/// A link or image reference that could not be turned into an absolute URL.
///
/// Always recovered by the renderer; never escapes an extraction call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unresolvable reference {reference:?}: {reason}")]
pub struct ResolveError {
	pub reference: String,
	pub reason: String,
}

/// Resolves `reference` for emission.
///
/// Absolute references (any scheme, including `data:` and `mailto:`) and
/// fragment references are returned verbatim. Relative references are joined
/// against `base`.
pub fn resolve_reference(reference: &str, base: Option<&Url>) -> Result<String, ResolveError> {
	let reference = reference.trim();
	let fail = |reason: &str| ResolveError {
		reference: reference.to_string(),
		reason: reason.to_string(),
	};

	if reference.is_empty() {
		return Err(fail("empty reference"));
	}
	if reference.starts_with('#') || Url::parse(reference).is_ok() {
		return Ok(reference.to_string());
	}

	let base = base.ok_or_else(|| fail("relative reference without a base URL"))?;
	base.join(reference).map(String::from).map_err(|err| fail(&err.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn base() -> Url {
		Url::parse("https://x.com/dir/page.html").unwrap()
	}

	#[test]
	fn joins_relative_references() {
		assert_eq!(resolve_reference("/p", Some(&base())).unwrap(), "https://x.com/p");
		assert_eq!(resolve_reference("img/a.png", Some(&base())).unwrap(), "https://x.com/dir/img/a.png");
		assert_eq!(resolve_reference("//cdn.x.com/a.js", Some(&base())).unwrap(), "https://cdn.x.com/a.js");
	}

	#[test]
	fn keeps_absolute_fragment_and_mail_references() {
		for reference in ["https://other.org/a?b=1", "#section", "mailto:me@x.com", "data:image/png;base64,AAAA"] {
			assert_eq!(resolve_reference(reference, Some(&base())).unwrap(), reference);
		}
	}

	#[test]
	fn relative_reference_needs_base() {
		let err = resolve_reference("/p", None).unwrap_err();
		assert_eq!(err.reference, "/p");
		assert!(resolve_reference("   ", Some(&base())).is_err());
	}

	#[test]
	fn unjoinable_reference_fails() {
		assert!(resolve_reference("http://[::1", Some(&base())).is_err());
	}
}
