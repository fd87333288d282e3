use tracing::debug;

use crate::core::SearchResult;
use crate::error::Result;
use crate::search::{QueryMatcher, collect_results};

use super::{LevelMatrix, logged};

impl LevelMatrix<'_> {
    /// Case-insensitive free-text search over levels and criteria.
    ///
    /// A blank query returns no results without touching the store.
    pub fn search_levels(&self, query: &str) -> Result<Vec<SearchResult>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        logged("search_levels", self.run_search(query))
    }

    fn run_search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let matcher = QueryMatcher::new(query)?;
        let results = collect_results(self.db.search_rows()?, &matcher);
        debug!(query = matcher.query(), hits = results.len(), "search complete");
        Ok(results)
    }
}
