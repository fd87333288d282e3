//! Literal, case-insensitive query matching

use regex::{Captures, Regex, RegexBuilder};

use crate::error::{LadderError, Result};

/// A free-text query compiled for literal, case-insensitive matching.
///
/// Regex metacharacters in the query are escaped, so `"C++ (core)"` matches
/// exactly that text.
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    query: String,
    regex: Regex,
}

impl QueryMatcher {
    /// Compile a query. Surrounding whitespace is trimmed; an empty query is
    /// rejected.
    pub fn new(query: &str) -> Result<Self> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LadderError::InvalidInput(
                "search query must not be empty".to_string(),
            ));
        }

        let regex = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .map_err(|err| LadderError::InvalidInput(format!("unusable search query: {err}")))?;

        Ok(Self {
            query: query.to_string(),
            regex,
        })
    }

    /// The trimmed query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Byte range of the first match.
    pub fn find(&self, text: &str) -> Option<std::ops::Range<usize>> {
        self.regex.find(text).map(|m| m.range())
    }

    /// Wrap every match in `**` markers, keeping the text's original case.
    pub fn highlight(&self, text: &str) -> String {
        self.regex
            .replace_all(text, |caps: &Captures<'_>| format!("**{}**", &caps[0]))
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_queries_are_rejected() {
        assert!(QueryMatcher::new("").is_err());
        assert!(QueryMatcher::new("   \t").is_err());
    }

    #[test]
    fn query_is_trimmed() {
        let matcher = QueryMatcher::new("  scope ").unwrap();
        assert_eq!(matcher.query(), "scope");
        assert!(matcher.is_match("Scope of influence"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let matcher = QueryMatcher::new("TECHNICAL").unwrap();
        assert!(matcher.is_match("Technical Expertise"));
        assert!(!matcher.is_match("Planning"));
    }

    #[test]
    fn metacharacters_are_literal() {
        let matcher = QueryMatcher::new("C++ (core)").unwrap();
        assert!(matcher.is_match("Knows c++ (core) well"));
        assert!(!matcher.is_match("Knows C (core)"));

        let dot = QueryMatcher::new(".*").unwrap();
        assert!(!dot.is_match("anything"));
        assert!(dot.is_match("a .* b"));
    }

    #[test]
    fn find_returns_first_match() {
        let matcher = QueryMatcher::new("ab").unwrap();
        assert_eq!(matcher.find("xxABxab"), Some(2..4));
        assert_eq!(matcher.find("nothing"), None);
    }

    #[test]
    fn highlight_wraps_every_match_in_original_case() {
        let matcher = QueryMatcher::new("team").unwrap();
        assert_eq!(
            matcher.highlight("Team work makes the TEAM"),
            "**Team** work makes the **TEAM**"
        );
    }
}
