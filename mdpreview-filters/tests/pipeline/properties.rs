//! Property checks over generated documents.

use mdpreview_filters::filters::{BoldFilter, EmphasisFilter, HeaderFilter, InlineCodeFilter};
use mdpreview_filters::{Filter, Pipeline};
use proptest::prelude::*;

/// Text that may contain Markdown tokens and HTML but never a fence delimiter.
fn markdown_line() -> impl Strategy<Value = String> {
    "[a-z #*_`+</>-]{0,24}"
        .prop_filter("fence delimiter", |s| !s.trim_start().starts_with("```"))
        .prop_map(|s| format!("{s}\n"))
}

/// A [`markdown_line`], or one of the lines the code-fence filter emits.
fn document_line() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => markdown_line(),
        1 => Just("<pre><code>\n".to_string()),
        1 => Just("</code></pre>\n".to_string()),
    ]
}

/// A line of complete spans delimited by `token`.
fn balanced_line(token: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(("[a-z ]{0,6}", "[a-z ]{1,6}"), 0..5).prop_map(move |pairs| {
        let mut line = String::new();
        for (before, inside) in pairs {
            line.push_str(&before);
            line.push_str(token);
            line.push_str(&inside);
            line.push_str(token);
        }
        line.push('\n');
        line
    })
}

fn assert_balanced(line: &str, open: &str, close: &str) {
    assert_eq!(
        line.matches(open).count(),
        line.matches(close).count(),
        "unbalanced tags in {line:?}"
    );
}

proptest! {
    #[test]
    fn fenced_content_is_byte_identical(
        before in prop::collection::vec(document_line(), 0..4),
        body in prop::collection::vec(document_line(), 0..8),
        after in prop::collection::vec(document_line(), 0..4),
    ) {
        let mut doc = before.clone();
        doc.push("```\n".to_string());
        doc.extend(body.iter().cloned());
        doc.push("```\n".to_string());
        doc.extend(after);

        let out = Pipeline::standard().run(doc);
        let start = before.len() + 1;
        prop_assert_eq!(&out[start..start + body.len()], &body[..]);
        prop_assert_eq!(out[start - 1].as_str(), "<pre><code>\n");
        prop_assert_eq!(out[start + body.len()].as_str(), "</code></pre>\n");
    }

    #[test]
    fn pipeline_preserves_line_count(doc in prop::collection::vec(document_line(), 0..20)) {
        let len = doc.len();
        prop_assert_eq!(Pipeline::standard().run(doc).len(), len);
    }

    #[test]
    fn inline_code_tags_balance(line in balanced_line("`")) {
        let mut filter = InlineCodeFilter::new();
        let out = filter.filter(vec![line]);
        assert_balanced(&out[0], "<code>", "</code>");
        prop_assert!(!filter.is_open());
        prop_assert!(!out[0].contains('`'));
    }

    #[test]
    fn bold_tags_balance(line in balanced_line("**")) {
        let mut filter = BoldFilter::new();
        let out = filter.filter(vec![line]);
        assert_balanced(&out[0], "<b>", "</b>");
        prop_assert!(!filter.is_open());
    }

    #[test]
    fn emphasis_tags_balance(line in balanced_line("_")) {
        let mut filter = EmphasisFilter::new();
        let out = filter.filter(vec![line]);
        assert_balanced(&out[0], "<i>", "</i>");
        prop_assert!(!filter.is_open());
    }

    #[test]
    fn headers_do_not_rematch(hashes in 1usize..=6, text in "[A-Za-z ]{0,16}") {
        let line = format!("{} {text}\n", "#".repeat(hashes));
        let once = HeaderFilter::new().filter(vec![line]);
        let twice = HeaderFilter::new().filter(once.clone());
        prop_assert_eq!(&twice, &once);
        let expected_open = format!("<h{hashes}>");
        prop_assert!(once[0].starts_with(&expected_open));
    }
}
