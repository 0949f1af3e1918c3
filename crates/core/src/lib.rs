//! Readable markdown extraction from HTML document trees.
//!
//! An extraction call runs three stages over a parsed [`Document`]:
//!
//! 1. [`locate`] prunes boilerplate (scripts, navigation, ads, comment
//!    sections) from a copy of the tree and picks the main-content subtree.
//! 2. [`render`] walks that subtree and emits raw markdown.
//! 3. [`normalize`] collapses the whitespace the walk leaves behind.
//!
//! ```ignore
//! let document = web2md::parse_document(&html, "https://example.com/post");
//! let page = web2md::extract(&document, &web2md::ExtractOptions::default())?;
//! println!("{}", page.content);
//! ```

pub mod document;
pub mod error;
pub mod html;
pub mod locator;
pub mod node;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod resolve;
pub mod rules;
pub mod selector;
pub mod types;

pub use document::Document;
pub use error::{ExtractError, Result};
pub use html::parse_document;
pub use locator::locate;
pub use node::{Element, Node};
pub use normalize::normalize;
pub use pipeline::{Extractor, extract};
pub use render::{RenderState, render};
pub use resolve::{ResolveError, resolve_reference};
pub use rules::BoilerplateRules;
pub use selector::Selector;
pub use types::{ExtractOptions, ExtractionResult};
