//! Free-text search and taxonomy filtering
//!
//! Search runs over criteria joined with their level:
//!
//! ```text
//! SearchRow ──► MATCH_FIELDS (any field hits?) ──► SNIPPET_FIELDS (first field hit)
//!                                                       │
//!                                                       ▼
//!                        dedupe by (level_id, category, sub_category)
//! ```

pub mod filters;
pub mod matcher;
pub mod snippet;

use itertools::Itertools;

use crate::core::SearchResult;
use crate::storage::SearchRow;

pub use filters::CriteriaFilter;
pub use matcher::QueryMatcher;
pub use snippet::{
    CONTEXT_CHARS, MATCH_FIELDS, SNIPPET_FIELDS, SearchField, build_snippet, row_matches,
    snippet_for_row,
};

/// Turn joined rows into deduplicated search hits, keeping row order and the
/// first hit for each `(level_id, category, sub_category)`.
pub fn collect_results(
    rows: impl IntoIterator<Item = SearchRow>,
    matcher: &QueryMatcher,
) -> Vec<SearchResult> {
    rows.into_iter()
        .filter(|row| row_matches(row, matcher))
        .map(|row| {
            let match_snippet = snippet_for_row(&row, matcher);
            SearchResult {
                level_id: row.level_id,
                level_title: row.level_title,
                category: row.category,
                sub_category: row.sub_category,
                description: row.description.unwrap_or_default(),
                match_snippet,
            }
        })
        .unique_by(|result| {
            (
                result.level_id.clone(),
                result.category.clone(),
                result.sub_category.clone(),
            )
        })
        .collect()
}
