#![no_main]

use std::collections::HashSet;

use blogmark::{add_ids_to_headings, extract_headings, render_post, Options};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, Options)| {
    let (content, options) = input;
    let toc = extract_headings(content);

    let mut seen = HashSet::new();
    for entry in &toc {
        assert!((1..=6).contains(&entry.level));
        assert!(!entry.text.is_empty());
        assert!(seen.insert(entry.id.as_str()), "duplicate id {:?}", entry.id);
    }

    assert_eq!(toc, extract_headings(content));

    let annotated = add_ids_to_headings(content);
    assert_eq!(annotated.split('\n').count(), content.split('\n').count());

    render_post(content, &options);
});
