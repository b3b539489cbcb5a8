//! The HTML renderer for post bodies.
//!
//! Post bodies are rendered line by line: heading lines become `<hN>` with an
//! anchor, `- ` lines become list items, blank lines become breaks and every
//! other line a paragraph. No other markdown is interpreted.

use std::io::{self, Write};

use crate::character_set::character_set;
use crate::scanners::HeadingMarker;
use crate::toc::Anchorizer;
use crate::Options;

/// Renders a post body to an HTML string.
///
/// Heading ids agree with [`extract_headings`](crate::extract_headings) on the
/// same input, so a table of contents built from one links into the other.
///
/// ```
/// # use blogmark::{render_post, Options};
/// assert_eq!(
///     render_post("# Hello\n- one\n\nBye & <thanks>", &Options::default()),
///     concat!(
///         "<h1 id=\"hello\">Hello</h1>\n",
///         "<li>one</li>\n",
///         "<br />\n",
///         "<p>Bye &amp; &lt;thanks&gt;</p>\n",
///     ),
/// );
/// ```
pub fn render_post(content: &str, options: &Options) -> String {
    let mut bw = Vec::with_capacity(content.len() * 2);
    format_post(content, options, &mut bw).unwrap();
    String::from_utf8(bw).unwrap()
}

/// Renders a post body into `output`.
pub fn format_post(content: &str, options: &Options, output: &mut dyn Write) -> io::Result<()> {
    let mut anchorizer = Anchorizer::new();

    for line in content.split('\n') {
        if let Some(heading) = HeadingMarker::scan(line) {
            let id = anchorizer.anchorize(heading.text);
            write_heading(output, &heading, &id, options)?;
        } else if let Some(item) = line.strip_prefix("- ") {
            output.write_all(b"<li>")?;
            escape(output, item.as_bytes())?;
            output.write_all(b"</li>\n")?;
        } else if line.trim().is_empty() {
            output.write_all(b"<br />\n")?;
        } else {
            output.write_all(b"<p>")?;
            escape(output, line.as_bytes())?;
            output.write_all(b"</p>\n")?;
        }
    }

    Ok(())
}

fn write_heading(
    output: &mut dyn Write,
    heading: &HeadingMarker,
    id: &str,
    options: &Options,
) -> io::Result<()> {
    write!(output, "<h{} id=\"", heading.level)?;
    escape(output, options.render.id_prefix.as_bytes())?;
    escape(output, id.as_bytes())?;
    output.write_all(b"\">")?;
    if options.render.anchor_links {
        output.write_all(b"<a href=\"#")?;
        escape(output, id.as_bytes())?;
        output.write_all(b"\" aria-hidden=\"true\" class=\"anchor\"></a>")?;
    }
    escape(output, heading.text.as_bytes())?;
    writeln!(output, "</h{}>", heading.level)
}

/// Writes `buffer` to `output`, escaping anything that has a special meaning
/// in HTML text or a double-quoted attribute.
///
/// ```
/// # use blogmark::html::escape;
/// let mut out = vec![];
/// escape(&mut out, b"\"a\" & <b>").unwrap();
/// assert_eq!(out, b"&quot;a&quot; &amp; &lt;b&gt;");
/// ```
pub fn escape(output: &mut dyn Write, buffer: &[u8]) -> io::Result<()> {
    const HTML_UNSAFE: [bool; 256] = character_set!(b"&<>\"");

    let mut offset = 0;
    for (i, &byte) in buffer.iter().enumerate() {
        if HTML_UNSAFE[byte as usize] {
            let esc: &[u8] = match byte {
                b'"' => b"&quot;",
                b'&' => b"&amp;",
                b'<' => b"&lt;",
                b'>' => b"&gt;",
                _ => unreachable!(),
            };
            output.write_all(&buffer[offset..i])?;
            output.write_all(esc)?;
            offset = i + 1;
        }
    }
    output.write_all(&buffer[offset..])
}

/// Writes `buffer` to `output` as a URL query component: unreserved
/// characters pass through, every other byte is percent-encoded.
///
/// ```
/// # use blogmark::html::escape_query_component;
/// let mut out = vec![];
/// escape_query_component(&mut out, "Web Dev & C++".as_bytes()).unwrap();
/// assert_eq!(out, b"Web%20Dev%20%26%20C%2B%2B");
/// ```
pub fn escape_query_component(output: &mut dyn Write, buffer: &[u8]) -> io::Result<()> {
    const QUERY_SAFE: [bool; 256] = character_set!(
        b"-_.~",
        b"abcdefghijklmnopqrstuvwxyz",
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
        b"0123456789"
    );

    let mut offset = 0;
    for (i, &byte) in buffer.iter().enumerate() {
        if !QUERY_SAFE[byte as usize] {
            output.write_all(&buffer[offset..i])?;
            write!(output, "%{:02X}", byte)?;
            offset = i + 1;
        }
    }
    output.write_all(&buffer[offset..])
}
