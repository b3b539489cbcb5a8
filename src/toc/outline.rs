use serde::Serialize;

use super::TocEntry;

/// A heading and the headings nested beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineNode {
    /// The heading itself.
    #[serde(flatten)]
    pub entry: TocEntry,

    /// Headings of a deeper level that follow this one before the next
    /// heading of the same or a shallower level.
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    /// Pre-order walk over this node and its descendants, paired with the
    /// nesting depth (0 for `self`).
    pub fn walk(&self) -> Vec<(usize, &TocEntry)> {
        let mut out = vec![];
        self.walk_into(0, &mut out);
        out
    }

    fn walk_into<'a>(&'a self, depth: usize, out: &mut Vec<(usize, &'a TocEntry)>) {
        out.push((depth, &self.entry));
        for child in &self.children {
            child.walk_into(depth + 1, out);
        }
    }
}

/// Nests a flat table of contents into a navigation outline.
///
/// Every entry becomes a child of the nearest preceding entry with a strictly
/// smaller level; entries without one are roots. Skipped levels nest
/// directly, so an `h3` straight after an `h1` is the `h1`'s child.
///
/// ```
/// # use blogmark::{build_outline, extract_headings};
/// let outline = build_outline(&extract_headings("# A\n### B\n## C\n# D"));
/// assert_eq!(outline.len(), 2);
/// assert_eq!(outline[0].children.len(), 2);
/// assert!(outline[1].children.is_empty());
/// ```
pub fn build_outline(entries: &[TocEntry]) -> Vec<OutlineNode> {
    let mut roots = vec![];
    let mut open: Vec<OutlineNode> = vec![];

    for entry in entries {
        while open.last().map_or(false, |top| top.entry.level >= entry.level) {
            if let Some(done) = open.pop() {
                attach(&mut open, &mut roots, done);
            }
        }
        open.push(OutlineNode {
            entry: entry.clone(),
            children: vec![],
        });
    }

    while let Some(done) = open.pop() {
        attach(&mut open, &mut roots, done);
    }

    roots
}

fn attach(open: &mut [OutlineNode], roots: &mut Vec<OutlineNode>, node: OutlineNode) {
    match open.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}
