//! Tables of contents for posts.
//!
//! A heading is a line that, once trimmed, starts with one to six `#`
//! followed by a space and some text. Everything else, including other
//! markdown syntax, is ignored.

mod anchorizer;
mod outline;

use serde::{Deserialize, Serialize};

use crate::scanners;

pub use anchorizer::{generate_id, Anchorizer};
pub use outline::{build_outline, OutlineNode};

/// One heading of a post, in the order it appears.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TocEntry {
    /// Anchor for the heading, unique within one extraction.
    pub id: String,

    /// The heading text, trimmed.
    pub text: String,

    /// Heading level, 1 to 6.
    pub level: u8,
}

/// Extracts every non-empty heading of `content`, in source order, with
/// de-duplicated anchors.
///
/// Each call starts from a fresh [`Anchorizer`], so the same input always
/// gives the same output.
///
/// ```
/// # use blogmark::{extract_headings, TocEntry};
/// assert_eq!(
///     extract_headings("# Title\n\nSome text"),
///     vec![TocEntry { id: "title".into(), text: "Title".into(), level: 1 }],
/// );
/// assert!(extract_headings("#Title").is_empty());
/// ```
pub fn extract_headings(content: &str) -> Vec<TocEntry> {
    let mut anchorizer = Anchorizer::new();

    scanners::headings(content)
        .map(|heading| TocEntry {
            id: anchorizer.anchorize(heading.text),
            text: heading.text.to_string(),
            level: heading.level,
        })
        .collect()
}

/// Rewrites every heading line of `content` as `<markers> <text> {#<id>}`,
/// leaving all other lines untouched.
///
/// Anchors are assigned exactly as [`extract_headings`] assigns them.
///
/// ```
/// # use blogmark::add_ids_to_headings;
/// assert_eq!(
///     add_ids_to_headings("  ## Usage \ntext\n## Usage"),
///     "## Usage {#usage}\ntext\n## Usage {#usage-2}",
/// );
/// ```
pub fn add_ids_to_headings(content: &str) -> String {
    let mut anchorizer = Anchorizer::new();
    let mut out = String::with_capacity(content.len() + content.len() / 8);

    for (ix, line) in content.split('\n').enumerate() {
        if ix > 0 {
            out.push('\n');
        }

        match scanners::HeadingMarker::scan(line) {
            Some(heading) => {
                let id = anchorizer.anchorize(heading.text);
                out.push_str(heading.markers());
                out.push(' ');
                out.push_str(heading.text);
                out.push_str(" {#");
                out.push_str(&id);
                out.push('}');
            }
            None => out.push_str(line),
        }
    }

    out
}
