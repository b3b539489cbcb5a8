//! Line scanners.

/// The largest heading level; a run of more markers is ordinary text.
pub const MAX_HEADING_LEVEL: usize = 6;

const HEADING_MARKER: u8 = b'#';

/// An ATX-style heading found on a single line: the marker count and the
/// trimmed text that followed `marker + space`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingMarker<'a> {
    /// Number of leading markers, from 1 to 6.
    pub level: u8,

    /// The heading text with surrounding whitespace removed. Never empty.
    pub text: &'a str,
}

impl<'a> HeadingMarker<'a> {
    /// Scans one line for a heading.
    ///
    /// Whitespace around the line is ignored. The line must then start with 1
    /// to 6 markers followed directly by a space; the longest run of markers
    /// decides the level, so `### a` is level 3 and never level 1. Lines whose
    /// remaining text is blank are not headings.
    ///
    /// ```
    /// # use blogmark::HeadingMarker;
    /// let h = HeadingMarker::scan("  ### Setup  ").unwrap();
    /// assert_eq!((h.level, h.text), (3, "Setup"));
    ///
    /// assert_eq!(HeadingMarker::scan("#Setup"), None);
    /// assert_eq!(HeadingMarker::scan("####### Setup"), None);
    /// assert_eq!(HeadingMarker::scan("## "), None);
    /// ```
    pub fn scan(line: &'a str) -> Option<Self> {
        let trimmed = line.trim_matches(is_space);
        let bytes = trimmed.as_bytes();

        let level = bytes.iter().take_while(|&&b| b == HEADING_MARKER).count();
        if level == 0 || level > MAX_HEADING_LEVEL || bytes.get(level) != Some(&b' ') {
            return None;
        }

        // Marker and space are ASCII, so `level + 1` is a char boundary.
        let text = trimmed[level + 1..].trim_matches(is_space);
        if text.is_empty() {
            return None;
        }

        Some(HeadingMarker {
            level: level as u8,
            text,
        })
    }

    /// The marker run for this heading's level, e.g. `"###"`.
    pub fn markers(&self) -> &'static str {
        &"######"[..self.level as usize]
    }
}

/// Every heading in `content`, in order. Lines are split on `\n` only.
pub fn headings(content: &str) -> impl Iterator<Item = HeadingMarker<'_>> {
    content.split('\n').filter_map(HeadingMarker::scan)
}

/// Whitespace as far as heading lines are concerned: Unicode whitespace plus
/// the byte order mark an editor may leave at the start of a file.
pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
