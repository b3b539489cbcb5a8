use super::*;
use pretty_assertions::assert_eq;

#[test]
fn single_heading() {
    toc("# Title\n\nSome text", &[("title", "Title", 1)]);
}

#[test]
fn duplicates_get_counted_suffixes() {
    toc("## A\n## A", &[("a", "A", 2), ("a-2", "A", 2)]);
    toc(
        "# Hi\n## Hi\n### Hi\n#### Hello\n##### Hi",
        &[
            ("hi", "Hi", 1),
            ("hi-2", "Hi", 2),
            ("hi-3", "Hi", 3),
            ("hello", "Hello", 4),
            ("hi-4", "Hi", 5),
        ],
    );
}

#[test]
fn empty_heading_is_skipped() {
    toc("### ", &[]);
    toc("###   \t ", &[]);
    toc("# A\n# \n# A", &[("a", "A", 1), ("a-2", "A", 1)]);
}

#[test]
fn marker_needs_space() {
    toc("#Title", &[]);
    toc("#\tTitle", &[]);
    toc("##Title\n#", &[]);
}

#[test]
fn punctuation_dropped() {
    toc("# Hello, World!", &[("hello-world", "Hello, World!", 1)]);
}

#[test]
fn non_ascii_letters_dropped() {
    toc("# Déjà Vu!!", &[("dj-vu", "Déjà Vu!!", 1)]);
}

#[test]
fn every_level() {
    toc(
        "# one\n## two\n### three\n#### four\n##### five\n###### six",
        &[
            ("one", "one", 1),
            ("two", "two", 2),
            ("three", "three", 3),
            ("four", "four", 4),
            ("five", "five", 5),
            ("six", "six", 6),
        ],
    );
}

#[test]
fn longest_marker_wins() {
    toc("### Deep", &[("deep", "Deep", 3)]);
    toc("###### # Hash", &[("hash", "# Hash", 6)]);
}

#[test]
fn seven_markers_is_text() {
    toc("####### Too deep", &[]);
    toc("########## Way too deep", &[]);
}

#[test]
fn surrounding_whitespace_ignored() {
    toc(
        "   ## Indented  \n\t# Tabbed\t",
        &[("indented", "Indented", 2), ("tabbed", "Tabbed", 1)],
    );
    toc("##   Two spaces", &[("two-spaces", "Two spaces", 2)]);
}

#[test]
fn crlf_lines() {
    toc("# A\r\nbody\r\n## B\r\n", &[("a", "A", 1), ("b", "B", 2)]);
}

#[test]
fn byte_order_mark() {
    toc(
        "\u{feff}# Title\nbody\n## Second\u{feff}",
        &[("title", "Title", 1), ("second", "Second", 2)],
    );
}

#[test]
fn marker_mid_line_is_text() {
    toc("text # not a heading\n- # nor this", &[]);
}

#[test]
fn no_headings() {
    toc("", &[]);
    toc("   \n\n\t", &[]);
    toc("just some prose\nover two lines", &[]);
}

#[test]
fn suffix_collides_with_literal_heading() {
    toc(
        "## A 2\n## A\n## A",
        &[("a-2", "A 2", 2), ("a", "A", 2), ("a-3", "A", 2)],
    );
    toc(
        "## A\n## A\n## A-2",
        &[("a", "A", 2), ("a-2", "A", 2), ("a-2-2", "A-2", 2)],
    );
}

#[test]
fn headings_without_id_characters() {
    toc("# 안녕\n# 안녕\n# !!!", &[("", "안녕", 1), ("-2", "안녕", 1), ("-3", "!!!", 1)]);
}

#[test]
fn counter_is_per_call() {
    let input = "## Setup\n## Setup";
    let first = extract_headings(input);
    let second = extract_headings(input);
    assert_eq!(first, second);
    assert_eq!(second[0].id, "setup");
}

#[test]
fn ids_unique_and_in_order() {
    let mut input = String::new();
    for i in 0..200 {
        input.push_str(&"#".repeat(i % 6 + 1));
        input.push(' ');
        match i % 4 {
            0 => input.push_str("Same"),
            1 => input.push_str(&format!("Same {}", i % 7)),
            2 => input.push_str("same!"),
            _ => input.push_str(&format!("Other {}", i)),
        }
        input.push_str("\nbody\n");
    }

    let entries = extract_headings(&input);
    assert_eq!(entries.len(), 200);

    let mut seen = std::collections::HashSet::new();
    for (i, entry) in entries.iter().enumerate() {
        assert!(seen.insert(entry.id.clone()), "duplicate id {:?}", entry.id);
        assert_eq!(usize::from(entry.level), i % 6 + 1);
    }
}

#[test]
fn heading_marker_scan() {
    let h = HeadingMarker::scan("  #### Four  ").unwrap();
    assert_eq!(h.level, 4);
    assert_eq!(h.text, "Four");
    assert_eq!(h.markers(), "####");

    assert_eq!(HeadingMarker::scan("#"), None);
    assert_eq!(HeadingMarker::scan("# "), None);
    assert_eq!(HeadingMarker::scan("####### x"), None);
    assert_eq!(HeadingMarker::scan("x # y"), None);
}
