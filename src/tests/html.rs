use super::*;
use pretty_assertions::assert_eq;

#[test]
fn line_kinds() {
    html(
        "# Title\n\nIntro line.\n- one\n- two\n### Details",
        concat!(
            "<h1 id=\"title\">Title</h1>\n",
            "<br />\n",
            "<p>Intro line.</p>\n",
            "<li>one</li>\n",
            "<li>two</li>\n",
            "<h3 id=\"details\">Details</h3>\n",
        ),
    );
}

#[test]
fn escaping() {
    html(
        "## a < b & \"c\"\n<script>alert(1)</script>\n- <b>",
        concat!(
            "<h2 id=\"a-b-c\">a &lt; b &amp; &quot;c&quot;</h2>\n",
            "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>\n",
            "<li>&lt;b&gt;</li>\n",
        ),
    );
}

#[test]
fn non_headings_render_as_paragraphs() {
    html(
        "#Title\n####### seven\n## ",
        concat!(
            "<p>#Title</p>\n",
            "<p>####### seven</p>\n",
            "<p>## </p>\n",
        ),
    );
}

#[test]
fn duplicate_headings() {
    html(
        "## Notes\n## Notes",
        concat!(
            "<h2 id=\"notes\">Notes</h2>\n",
            "<h2 id=\"notes-2\">Notes</h2>\n",
        ),
    );
}

#[test]
fn id_prefix() {
    html_opts_i(
        "# Hi\n# Hi",
        concat!(
            "<h1 id=\"user-content-hi\">Hi</h1>\n",
            "<h1 id=\"user-content-hi-2\">Hi</h1>\n",
        ),
        |opts| opts.render.id_prefix = "user-content-".to_owned(),
    );
}

#[test]
fn anchor_links() {
    html_opts_i(
        "##### Isn't it grand?",
        "<h5 id=\"isnt-it-grand\"><a href=\"#isnt-it-grand\" aria-hidden=\"true\" class=\"anchor\"></a>Isn't it grand?</h5>\n",
        |opts| opts.render.anchor_links = true,
    );
}

#[test]
fn ids_match_toc() {
    let input = "# Guide\nintro\n## Install\n## Install\n### Install!\n- item\n## Use it";
    let rendered = render_post(input, &Options::default());

    let rendered_ids: Vec<&str> = rendered
        .lines()
        .filter(|l| l.starts_with("<h"))
        .filter_map(|l| l.split('"').nth(1))
        .collect();
    let toc_ids: Vec<String> = extract_headings(input).into_iter().map(|e| e.id).collect();

    assert_eq!(toc_ids, rendered_ids);
}

#[test]
fn format_into_writer() {
    let mut out = vec![];
    format_post("# A", &Options::default(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "<h1 id=\"a\">A</h1>\n");
}

#[test]
fn render_matches_writer_output() {
    let input = "# 日本語 Notes\n- café\nÜber & <tags>";
    let mut out = vec![];
    format_post(input, &Options::default(), &mut out).unwrap();
    let rendered = render_post(input, &Options::default());
    assert!(rendered.contains("<li>café</li>"));
    assert_eq!(rendered, String::from_utf8(out).unwrap());
}

#[test]
fn empty_input() {
    html("", "<br />\n");
}

#[test]
fn query_component() {
    let mut out = vec![];
    crate::html::escape_query_component(&mut out, "a b/c?d=é".as_bytes()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "a%20b%2Fc%3Fd%3D%C3%A9");
}
