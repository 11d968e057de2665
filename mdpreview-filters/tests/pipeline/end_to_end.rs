//! Whole-document conversions through the standard pipeline.

use insta::assert_snapshot;
use mdpreview_filters::{render_html, split_lines, DocumentTemplate, Pipeline};
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(path).expect("fixture to exist")
}

fn convert(src: &[&str]) -> Vec<String> {
    Pipeline::standard().run(src.iter().map(|s| s.to_string()).collect())
}

#[test]
fn kitchensink() {
    let template = DocumentTemplate::new("<body>\n", "</body>\n");
    let html = render_html(&fixture("kitchensink.md"), &template);
    assert_snapshot!(html, @r"
<body>
<h1>Kitchen Sink</h1>
<p>
Intro with <b>bold</b> and <code>code</code>.
</p>
<p>
<pre><code>
let x = *ptr;
// __init__ stays
</code></pre>
</p>
<p>
<li>first item</li>
<li>second <i>item</i></li>
<\p>
Done.
</body>
");
}

#[test]
fn one_of_each_construct() {
    let src = "## Setup\n\nRun **this** first:\n\n```\ncargo build **release**\n# not a header\n```\n\n  - item\n";
    let html = Pipeline::standard().run(split_lines(src)).concat();

    assert_eq!(html.matches("<pre><code>").count(), 1);
    assert_eq!(html.matches("</code></pre>").count(), 1);
    assert_eq!(html.matches("<h2>").count(), 1);
    assert_eq!(html.matches("</h2>").count(), 1);
    assert_eq!(html.matches("<h1>").count(), 0);
    assert_eq!(html.matches("<b>").count(), 1);
    assert_eq!(html.matches("</b>").count(), 1);
    assert_eq!(html.matches("<ul><li>item</li>").count(), 1);
    assert!(html.contains("\ncargo build **release**\n# not a header\n"));
}

#[test]
fn header_precedence() {
    assert_eq!(convert(&["### Title\n"]), vec!["<h3>Title</h3>\n"]);
}

#[test]
fn paragraph_boundaries() {
    assert_eq!(
        convert(&["a\n", "\n", "b\n", "\n", "c\n"]),
        vec!["a\n", "<p>\n", "b\n", "<\\p>\n", "c\n"]
    );
}

#[test]
fn list_level_transitions() {
    assert_eq!(
        convert(&["* a\n", "* b\n", "  * c\n", "  * d\n", "* e\n"]),
        vec![
            "<li>a</li>\n",
            "<li>b</li>\n",
            "  <ul><li>c</li>\n",
            "  <li>d</li>\n",
            "</ul><li>e</li>\n",
        ]
    );
}

#[test]
fn inline_code_content_is_still_styled() {
    // Only fenced blocks are opaque.
    assert_eq!(
        convert(&["`a*b*c`\n"]),
        vec!["<code>a<i>b</i>c</code>\n"]
    );
}

#[test]
fn unmatched_tokens_stay_open() {
    assert_eq!(
        convert(&["**never closed\n", "plain\n"]),
        vec!["<b>never closed\n", "plain\n"]
    );
}

#[test]
fn fresh_pipelines_do_not_share_state() {
    let first = convert(&["`open\n"]);
    let second = convert(&["`open\n"]);
    assert_eq!(first, second);
    assert_eq!(second, vec!["<code>open\n"]);
}

#[test]
fn fenced_html_sample_is_left_alone() {
    let out = convert(&[
        "Some `inline` code.\n",
        "```html\n",
        "<pre><code>\n",
        "**not bold** and `tick`\n",
        "</code></pre>\n",
        "# not header\n",
        "* not an item\n",
        "```\n",
        "After **bold**.\n",
    ]);
    assert_eq!(
        out,
        vec![
            "Some <code>inline</code> code.\n",
            "<pre><code>\n",
            "<pre><code>\n",
            "**not bold** and `tick`\n",
            "</code></pre>\n",
            "# not header\n",
            "* not an item\n",
            "</code></pre>\n",
            "After <b>bold</b>.\n",
        ]
    );
}

#[test]
fn html_markers_outside_fences_are_plain_text() {
    assert_eq!(
        convert(&["</code></pre>\n", "<pre><code>\n", "## Still a header\n", "- item\n"]),
        vec![
            "</code></pre>\n",
            "<pre><code>\n",
            "<h2>Still a header</h2>\n",
            "<li>item</li>\n",
        ]
    );
}
