//! Prompt assembly and result decoration.

use web2md::ExtractionResult;

/// The single user message sent with every refine request.
pub fn build_user_prompt(page: &ExtractionResult) -> String {
	format!("Title: {}\nURL: {}\n\nContent:\n{}", page.title, page.source_url, page.content)
}

/// Appends a source footer linking back to the page.
pub fn append_page_info(markdown: &str, title: &str, url: &str) -> String {
	format!("{markdown}\n\n---\n**Source:** [{title}]({url})")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_prompt_layout() {
		let page = ExtractionResult::new("A Post", "https://x.com/a", "# Body\n\ntext");
		assert_eq!(build_user_prompt(&page), "Title: A Post\nURL: https://x.com/a\n\nContent:\n# Body\n\ntext");
	}

	#[test]
	fn page_info_footer() {
		assert_eq!(append_page_info("# Hi", "A Post", "https://x.com/a"), "# Hi\n\n---\n**Source:** [A Post](https://x.com/a)");
	}
}
