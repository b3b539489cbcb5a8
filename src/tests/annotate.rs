use super::*;
use pretty_assertions::assert_eq;

#[test]
fn annotates_headings() {
    compare_strs(
        &add_ids_to_headings("# Intro\nbody\n## Usage\n## Usage\n"),
        "# Intro {#intro}\nbody\n## Usage {#usage}\n## Usage {#usage-2}\n",
        "annotate",
        "",
    );
}

#[test]
fn normalizes_heading_lines_only() {
    let input = "  ### Spaced   \n  keep  this\t\r\n\n####### seven";
    compare_strs(
        &add_ids_to_headings(input),
        "### Spaced {#spaced}\n  keep  this\t\r\n\n####### seven",
        "annotate",
        input,
    );
}

#[test]
fn leaves_non_headings() {
    for input in &["#Title", "## ", "", "plain\ntext", "- # list"] {
        assert_eq!(add_ids_to_headings(input), *input);
    }
}

#[test]
fn agrees_with_extraction() {
    let input = "# A\ntext\n## A\n### b!\n# \n## B";
    let annotated = add_ids_to_headings(input);
    let ids: Vec<String> = extract_headings(input).into_iter().map(|e| e.id).collect();
    let suffixes: Vec<String> = annotated
        .lines()
        .filter_map(|l| l.rsplit_once(" {#"))
        .map(|(_, id)| id.trim_end_matches('}').to_string())
        .collect();
    assert_eq!(ids, suffixes);
}
