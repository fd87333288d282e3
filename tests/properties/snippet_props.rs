//! Snippets stay bounded and faithful to the source text.

use proptest::prelude::*;

use ladder::search::{CONTEXT_CHARS, QueryMatcher, build_snippet};

/// Lowercase text with no `*` or `.`, so markers in the snippet are unambiguous.
fn arb_text_with_query() -> impl Strategy<Value = (String, String)> {
    ("[a-z ]{0,70}", "[a-z]{1,6}", "[a-z ]{0,70}")
        .prop_map(|(prefix, query, suffix)| (format!("{prefix}{query}{suffix}"), query))
}

fn strip_markers(snippet: &str) -> String {
    let core = snippet.strip_prefix("...").unwrap_or(snippet);
    let core = core.strip_suffix("...").unwrap_or(core);
    core.replace("**", "")
}

proptest! {
    #[test]
    fn snippet_is_a_highlighted_window_of_the_text((text, query) in arb_text_with_query()) {
        let matcher = QueryMatcher::new(&query).unwrap();
        let snippet = build_snippet(&text, &matcher).unwrap();

        prop_assert!(snippet.contains("**"));

        let plain = strip_markers(&snippet);
        prop_assert!(text.contains(&plain), "{plain:?} not in {text:?}");
        prop_assert!(plain.chars().count() <= 2 * CONTEXT_CHARS + query.len());
        prop_assert!(plain.contains(&query));
    }

    #[test]
    fn ellipses_mark_truncated_sides((text, query) in arb_text_with_query()) {
        let matcher = QueryMatcher::new(&query).unwrap();
        let snippet = build_snippet(&text, &matcher).unwrap();

        let first = text.find(&query).unwrap();
        let truncated_start = first > CONTEXT_CHARS;
        let truncated_end = first + query.len() + CONTEXT_CHARS < text.len();

        prop_assert_eq!(snippet.starts_with("..."), truncated_start);
        prop_assert_eq!(snippet.ends_with("..."), truncated_end);
    }

    #[test]
    fn absent_query_yields_no_snippet(text in "[a-z ]{0,80}") {
        let matcher = QueryMatcher::new("0").unwrap();
        prop_assert!(build_snippet(&text, &matcher).is_none());
    }

    #[test]
    fn arbitrary_text_never_panics(text in "\\PC{0,120}", query in "\\PC{1,12}") {
        if let Ok(matcher) = QueryMatcher::new(&query) {
            if let Some(snippet) = build_snippet(&text, &matcher) {
                prop_assert!(snippet.contains("**"));
            }
        }
    }
}
