//! Markdown parsing, frontmatter extraction, and HTML rendering.
//!
//! This crate provides the content-processing layer of Bindery: everything
//! needed to turn an authored markdown page into a published HTML page, and
//! to read the markdown embedded in notebook cells.
//!
//! # Modules
//!
//! - [`markdown`]: Markdown parsing and frontmatter extraction
//!   - [`markdown::frontmatter`]: YAML frontmatter extraction
//!   - [`markdown::parser`]: Heading, paragraph, and section extraction
//!   - [`markdown::toc`]: Table-of-contents rendering
//! - [`assets`]: Local asset reference scanning
//! - [`html`]: Markdown-to-HTML rendering and the page template
//!
//! # Design Philosophy
//!
//! **Generic utilities, caller-specific types.** Frontmatter extraction
//! returns `serde_yaml::Value`; the publishing crate defines its own
//! metadata structs and deserializes from the generic value.
//!
//! # Example
//!
//! ```rust
//! use bindery_content::markdown::extract_frontmatter;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct PageMeta {
//!     title: String,
//! }
//!
//! let content = "---\ntitle: Day One\n---\n\n## Setup\n\nInstall things.";
//! let result = extract_frontmatter(content).unwrap();
//! let meta: Option<PageMeta> = result.deserialize().unwrap();
//! assert_eq!(meta.unwrap().title, "Day One");
//! ```

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod assets;
pub mod html;
pub mod markdown;

// Re-export commonly used types
pub use assets::{AssetScope, referenced_assets};
pub use html::{markdown_to_html, render_page};
pub use markdown::{
    Frontmatter, extract_first_heading, extract_first_paragraph, extract_frontmatter, render_toc,
    section_headings, strip_frontmatter,
};

// Re-export HeadingLevel for convenience
pub use pulldown_cmark::HeadingLevel;
