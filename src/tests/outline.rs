use super::*;
use pretty_assertions::assert_eq;

fn shape(nodes: &[OutlineNode]) -> String {
    nodes
        .iter()
        .map(|n| {
            if n.children.is_empty() {
                n.entry.id.clone()
            } else {
                format!("{}({})", n.entry.id, shape(&n.children))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn nests_by_level() {
    let toc = extract_headings("# a\n## b\n### c\n## d\n# e\n## f");
    assert_eq!(shape(&build_outline(&toc)), "a(b(c) d) e(f)");
}

#[test]
fn skipped_levels_nest_directly() {
    let toc = extract_headings("# a\n### b\n## c");
    assert_eq!(shape(&build_outline(&toc)), "a(b c)");
}

#[test]
fn shallower_later_heading_becomes_root() {
    let toc = extract_headings("### a\n## b\n#### c\n# d");
    assert_eq!(shape(&build_outline(&toc)), "a b(c) d");
}

#[test]
fn empty() {
    assert!(build_outline(&[]).is_empty());
}

#[test]
fn walk_matches_flat_order() {
    let toc = extract_headings("## x\n# y\n### z\n## w\n###### v\n# u");
    let outline = build_outline(&toc);

    let walked: Vec<&TocEntry> = outline
        .iter()
        .flat_map(|n| n.walk().into_iter().map(|(_, e)| e))
        .collect();
    let flat: Vec<&TocEntry> = toc.iter().collect();
    assert_eq!(flat, walked);

    let depths: Vec<usize> = outline
        .iter()
        .flat_map(|n| n.walk().into_iter().map(|(d, _)| d))
        .collect();
    assert_eq!(depths, vec![0, 0, 1, 1, 2, 0]);
}

#[test]
fn serializes_flattened() {
    let outline = build_outline(&extract_headings("# a\n## b"));
    assert_eq!(
        serde_json::to_string(&outline).unwrap(),
        r#"[{"id":"a","text":"a","level":1,"children":[{"id":"b","text":"b","level":2,"children":[]}]}]"#
    );
}
