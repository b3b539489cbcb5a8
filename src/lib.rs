//! The content layer of a personal blog.
//!
//! The core of the crate is the table-of-contents extractor: it scans
//! markdown-like post bodies for ATX-style heading lines, derives a
//! URL-fragment-safe anchor for each, and de-duplicates colliding anchors
//! deterministically.
//!
//! ```
//! use blogmark::extract_headings;
//!
//! let toc = extract_headings("# Intro\n\nHello.\n\n## Setup\n## Setup\n");
//! let ids: Vec<&str> = toc.iter().map(|e| e.id.as_str()).collect();
//! assert_eq!(ids, ["intro", "setup", "setup-2"]);
//! ```
//!
//! Around it sit the pieces a blog needs to use those anchors: heading
//! annotation ([`add_ids_to_headings`]), a nested outline ([`build_outline`]),
//! a line-oriented post renderer ([`render_post`]) whose heading ids agree with
//! the extracted TOC, a JSON-backed [`PostStore`] with tag queries and
//! pagination, and the [`About`] page text.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]
#![allow(clippy::new_without_default)]

mod about;
mod character_set;
mod error;
pub mod html;
mod options;
pub mod posts;
mod scanners;
pub mod toc;

pub use about::About;
pub use error::{Error, Result};
pub use html::{format_post, render_post};
pub use options::{Listing, Options, Render};
#[cfg(feature = "bon")]
pub use options::{ListingBuilder, RenderBuilder};
pub use posts::{Page, PageWindow, Post, PostDraft, PostStore};
pub use scanners::HeadingMarker;
pub use toc::{
    add_ids_to_headings, build_outline, extract_headings, generate_id, Anchorizer, OutlineNode,
    TocEntry,
};

/// Serializes a table of contents to the JSON array handed to renderers:
/// one `{"id", "text", "level"}` object per entry.
///
/// ```
/// let toc = blogmark::extract_headings("# Hello, World!");
/// assert_eq!(
///     blogmark::toc_to_json(&toc).unwrap(),
///     r#"[{"id":"hello-world","text":"Hello, World!","level":1}]"#
/// );
/// ```
pub fn toc_to_json(entries: &[TocEntry]) -> serde_json::Result<String> {
    serde_json::to_string(entries)
}
