use web2md::{BoilerplateRules, Document, Element, ExtractError, ExtractOptions, Extractor, extract, normalize, parse_document};

fn page(body: &str) -> String {
	format!("<!DOCTYPE html><html><head><title>Sample  Page</title></head><body>{body}</body></html>")
}

fn content(body: &str, url: &str) -> String {
	let document = parse_document(&page(body), url);
	extract(&document, &ExtractOptions::default()).expect("extraction").content
}

#[test]
fn result_carries_title_url_and_timestamp() {
	let document = parse_document(&page("<main><p>Hello</p></main>"), "https://x.com/post");
	let before = chrono::Utc::now();
	let result = extract(&document, &ExtractOptions::default()).unwrap();
	assert_eq!(result.title, "Sample Page");
	assert_eq!(result.source_url, "https://x.com/post");
	assert_eq!(result.content, "Hello");
	assert!(result.captured_at >= before);
}

#[test]
fn result_serializes_camel_case() {
	let document = parse_document(&page("<p>x</p>"), "https://x.com/");
	let json = serde_json::to_value(extract(&document, &ExtractOptions::default()).unwrap()).unwrap();
	assert_eq!(json["sourceUrl"], "https://x.com/");
	assert!(json["capturedAt"].is_string());
}

#[test]
fn output_is_already_normalized() {
	let body = r#"
		<article>
			<h1>Heading</h1>
			<p>Some    spaced
			text</p>
			<ul><li>A<ul><li>B</li></ul></li></ul>
			<pre><code>let  x = 1;


let y = 2;</code></pre>
			<blockquote><p>one</p><p>two</p></blockquote>
			<table><tr><th>k</th><td>v</td></tr></table>
		</article>"#;
	let out = content(body, "https://x.com/");
	assert_eq!(normalize(&out), out);
}

#[test]
fn pruned_subtrees_never_leak() {
	let body = r#"
		<nav>NavLink</nav>
		<header>Masthead</header>
		<main>
			<p>Story</p>
			<script>secretTracker()</script>
			<style>.x { color: red }</style>
			<div class="ad">BuyNow</div>
			<section class="comments"><p>First!</p></section>
		</main>
		<footer>Copyright</footer>"#;
	let out = content(body, "");
	assert_eq!(out, "Story");
	for leaked in ["NavLink", "Masthead", "secretTracker", "color", "BuyNow", "First!", "Copyright"] {
		assert!(!out.contains(leaked), "{leaked} leaked into {out:?}");
	}
}

#[test]
fn headings_are_separated_by_blank_lines() {
	let out = content("<main><p>Intro</p><h2>Title</h2><p>Body</p></main>", "");
	assert_eq!(out, "Intro\n\n## Title\n\nBody");
}

#[test]
fn unordered_list_keeps_order() {
	assert_eq!(content("<ul><li>A</li><li>B</li></ul>", ""), "- A\n- B");
	assert_eq!(content("<ol><li>A</li><li>B</li></ol>", ""), "1. A\n1. B");
}

#[test]
fn nested_lists_indent_per_level() {
	let out = content("<ul><li>A<ul><li>B<ul><li>C</li></ul></li></ul></li></ul>", "");
	let lines: Vec<&str> = out.lines().filter(|line| !line.is_empty()).collect();
	assert_eq!(lines, ["- A", "  - B", "    - C"]);
}

#[test]
fn relative_links_resolve_against_page() {
	let out = content(r##"<p><a href="/p">Go</a> <a href="#top">Top</a> <a href="mailto:a@x.com">Mail</a></p>"##, "https://x.com/dir/");
	assert_eq!(out, "[Go](https://x.com/p) [Top](#top) [Mail](mailto:a@x.com)");
}

#[test]
fn base_element_overrides_page_url() {
	let html = r#"<html><head><base href="https://cdn.x.com/assets/"></head><body><img src="logo.png" alt="Logo"></body></html>"#;
	let document = parse_document(html, "https://x.com/dir/page");
	let result = extract(&document, &ExtractOptions::default()).unwrap();
	assert_eq!(result.content, "![Logo](https://cdn.x.com/assets/logo.png)");
}

#[test]
fn links_without_base_degrade_to_text() {
	assert_eq!(content(r#"<p>See <a href="/p">the docs</a>.</p>"#, ""), "See the docs.");
}

#[test]
fn images_opt_out() {
	let html = page(r#"<main><p>Before<img src="/a.png" alt="Alt text">After</p><figure><img src="https://x.com/b.png"></figure></main>"#);
	let document = parse_document(&html, "https://x.com/");

	let with_images = extract(&document, &ExtractOptions::default()).unwrap().content;
	assert!(with_images.contains("![Alt text](https://x.com/a.png)"));
	assert!(with_images.contains("![](https://x.com/b.png)"));

	let without = extract(&document, &ExtractOptions { include_images: false }).unwrap().content;
	assert_eq!(without, "BeforeAfter");
}

#[test]
fn falls_back_to_body_without_content_selectors() {
	let out = content("<aside>Related</aside><div><p>Plain page</p></div>", "");
	assert_eq!(out, "Plain page");
}

#[test]
fn missing_body_is_no_content() {
	let document = Document::new(Element::new("div").text("orphan"), "");
	assert_eq!(extract(&document, &ExtractOptions::default()), Err(ExtractError::NoContentFound));
}

#[test]
fn whitespace_collapses_except_in_preformatted_text() {
	assert_eq!(content("<p>a   b\n\n  c</p>", ""), "a b c");
	assert_eq!(content("<pre>a   b\n\n  c</pre>", ""), "```\na   b\n\n  c\n```");
}

#[test]
fn inline_code_and_formatting() {
	let out = content("<p>Run <code>cargo  build</code> with <strong>care</strong>, <em>now</em> <del>later</del>.</p>", "");
	assert_eq!(out, "Run `cargo build` with **care**, *now* ~~later~~.");
}

#[test]
fn extraction_leaves_document_untouched() {
	let document = parse_document(&page("<nav>x</nav><main><script>y()</script><p>z</p></main>"), "");
	let snapshot = document.clone();
	let first = extract(&document, &ExtractOptions::default()).unwrap();
	let second = extract(&document, &ExtractOptions::default()).unwrap();
	assert_eq!(document, snapshot);
	assert_eq!(first.content, second.content);
}

#[test]
fn custom_rules_drive_selection() {
	let rules = BoilerplateRules::empty().deny_tag("form").content_selector("div.story").unwrap();
	let extractor = Extractor::new(rules);
	let document = parse_document(&page(r#"<main>Wrong</main><div class="story"><p>Right</p><form>Subscribe</form></div>"#), "");
	let result = extractor.extract(&document, &ExtractOptions::default()).unwrap();
	assert_eq!(result.content, "Right");
}

#[test]
fn stray_fence_text_does_not_swallow_the_page() {
	let out = content("<p>```</p><p>x     y</p><pre>keep   this</pre><p>z     w</p>", "");
	assert_eq!(out, "\\`\\`\\`\n\nx y\n\n```\nkeep   this\n```\n\nz w");
	assert_eq!(normalize(&out), out);
}

#[test]
fn preformatted_markdown_sample_stays_fenced() {
	let out = content("<pre>```js\ncode\n```\nstray ```</pre><p>after   text</p>", "");
	assert_eq!(out, "````\n```js\ncode\n```\nstray ```\n````\n\nafter text");
	assert_eq!(normalize(&out), out);
}

#[test]
fn quoted_structure_survives_normalization() {
	assert_eq!(content("<blockquote><pre>a   b\n\n\n\n   c</pre></blockquote>", ""), "> ```\n> a   b\n> \n> \n> \n>    c\n> ```");
	assert_eq!(content("<blockquote><ul><li>A<ul><li>B</li></ul></li></ul></blockquote>", ""), "> - A\n>\n>   - B");
}

#[test]
fn dash_text_after_break_is_not_indented() {
	assert_eq!(content("<p>a<br>   - b</p>", ""), "a\n- b");
}
