//! Property-based tests for filtering, comparison and snippets.

mod matrix_props;
mod snippet_props;
