//! Field policies and context snippets for search hits

use crate::storage::SearchRow;

use super::matcher::QueryMatcher;

/// Characters of context kept on each side of the first match.
pub const CONTEXT_CHARS: usize = 30;

/// Marker for a side of the snippet cut from the source text.
pub const ELLIPSIS: &str = "...";

/// A named accessor over a joined search row.
#[derive(Clone, Copy)]
pub struct SearchField {
    pub name: &'static str,
    pub value: fn(&SearchRow) -> Option<&str>,
}

impl std::fmt::Debug for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchField").field("name", &self.name).finish()
    }
}

fn job_title(row: &SearchRow) -> Option<&str> {
    row.job_title.as_deref()
}

fn one_sentence_description(row: &SearchRow) -> Option<&str> {
    row.one_sentence_description.as_deref()
}

fn category(row: &SearchRow) -> Option<&str> {
    Some(&row.category)
}

fn sub_category(row: &SearchRow) -> Option<&str> {
    Some(&row.sub_category)
}

fn criterion_description(row: &SearchRow) -> Option<&str> {
    row.description.as_deref()
}

/// Fields that decide whether a row is a hit; any one matching is enough.
pub const MATCH_FIELDS: &[SearchField] = &[
    SearchField { name: "job_title", value: job_title },
    SearchField { name: "one_sentence_description", value: one_sentence_description },
    SearchField { name: "category", value: category },
    SearchField { name: "sub_category", value: sub_category },
    SearchField { name: "criterion_description", value: criterion_description },
];

/// Fields tried, in order, for the snippet; the first match wins.
///
/// Kept separate from [`MATCH_FIELDS`]: the field that produced the hit is not
/// necessarily the one the snippet is cut from.
pub const SNIPPET_FIELDS: &[SearchField] = &[
    SearchField { name: "job_title", value: job_title },
    SearchField { name: "one_sentence_description", value: one_sentence_description },
    SearchField { name: "category", value: category },
    SearchField { name: "sub_category", value: sub_category },
    SearchField { name: "criterion_description", value: criterion_description },
];

/// True when the query occurs in any of [`MATCH_FIELDS`].
pub fn row_matches(row: &SearchRow, matcher: &QueryMatcher) -> bool {
    MATCH_FIELDS
        .iter()
        .filter_map(|field| (field.value)(row))
        .any(|text| matcher.is_match(text))
}

/// Snippet from the first of [`SNIPPET_FIELDS`] containing the query, or a
/// "Match found in ..." line naming the criterion's taxonomy.
pub fn snippet_for_row(row: &SearchRow, matcher: &QueryMatcher) -> String {
    SNIPPET_FIELDS
        .iter()
        .filter_map(|field| (field.value)(row))
        .find_map(|text| build_snippet(text, matcher))
        .unwrap_or_else(|| format!("Match found in {} - {}", row.category, row.sub_category))
}

/// Cut a window of [`CONTEXT_CHARS`] characters either side of the first
/// match and highlight every match inside it.
pub fn build_snippet(text: &str, matcher: &QueryMatcher) -> Option<String> {
    let range = matcher.find(text)?;

    let chars: Vec<char> = text.chars().collect();
    let total_chars = chars.len();
    let match_start = text[..range.start].chars().count();
    let match_len = text[range.clone()].chars().count();

    let start = match_start.saturating_sub(CONTEXT_CHARS);
    let end = (match_start + match_len + CONTEXT_CHARS).min(total_chars);

    let window: String = chars[start..end].iter().collect();
    let prefix = if start > 0 { ELLIPSIS } else { "" };
    let suffix = if end < total_chars { ELLIPSIS } else { "" };

    // Highlight the window before the ellipses go on, so a query such as "."
    // never marks the added "..." as a match.
    Some(format!("{prefix}{}{suffix}", matcher.highlight(&window)))
}
