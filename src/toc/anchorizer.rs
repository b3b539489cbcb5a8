use rustc_hash::{FxHashMap, FxHashSet};

use crate::character_set::{character_set, contains};
use crate::scanners::is_space;

static ID_CHARS: [bool; 256] = character_set!(b"abcdefghijklmnopqrstuvwxyz", b"0123456789");

/// Converts heading text to a canonical, human-readable anchor, without any
/// de-duplication.
///
/// The text is lowercased; anything other than ASCII letters, ASCII digits,
/// whitespace and `-` is dropped; each run of whitespace and hyphens becomes a
/// single `-`; hyphens at either end are removed.
///
/// ```
/// # use blogmark::generate_id;
/// assert_eq!("hello-world", generate_id("Hello, World!"));
/// assert_eq!("dj-vu", generate_id("Déjà Vu!!"));
/// assert_eq!("a-b", generate_id("  -- a  -  b --"));
/// ```
pub fn generate_id(text: &str) -> String {
    let mut id = String::with_capacity(text.len());
    let mut separator = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c == '-' || is_space(c) {
            separator = true;
        } else if contains(&ID_CHARS, c) {
            if separator && !id.is_empty() {
                id.push('-');
            }
            separator = false;
            id.push(c);
        }
    }

    id
}

/// Hands out unique anchors for the headings of one document.
///
/// The first heading with a given base anchor gets it unchanged; the n-th
/// gets `<base>-<n>`, counting from 2. If that suffixed form was already
/// handed out (say, to a heading literally titled "Setup 2"), the count keeps
/// advancing until a free anchor turns up.
///
/// State lives only as long as the value. Use one per document and per call;
/// anchors from unrelated runs never interact.
///
/// ```
/// # use blogmark::Anchorizer;
/// let mut anchorizer = Anchorizer::new();
/// assert_eq!("stuff", anchorizer.anchorize("Stuff"));
/// assert_eq!("stuff-2", anchorizer.anchorize("Stuff"));
/// assert_eq!("stuff-3", anchorizer.anchorize("stuff!"));
/// ```
#[derive(Debug, Default)]
pub struct Anchorizer {
    counts: FxHashMap<String, u32>,
    issued: FxHashSet<String>,
}

impl Anchorizer {
    /// Construct a new anchorizer.
    pub fn new() -> Self {
        Anchorizer::default()
    }

    /// Returns the anchor for `header`, unique among every anchor this
    /// anchorizer has returned so far.
    pub fn anchorize(&mut self, header: &str) -> String {
        let base = generate_id(header);
        let count = self.counts.entry(base.clone()).or_insert(0);
        *count += 1;

        let mut anchor = if *count == 1 {
            base.clone()
        } else {
            format!("{}-{}", base, count)
        };
        while self.issued.contains(&anchor) {
            *count += 1;
            anchor = format!("{}-{}", base, count);
        }

        self.issued.insert(anchor.clone());
        anchor
    }
}
