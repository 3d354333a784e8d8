use serde::{Deserialize, Serialize};

use super::engine::{filter, select_suggestion, suggest, CategoryFilter, Searchable};

/// Search bar state for one screen: query, category filter, suggestions.
///
/// The records themselves are not held here; callers pass the current
/// collection on every change so results always reflect the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSession {
    query: String,
    category: CategoryFilter,
    suggestions: Vec<String>,
    /// `None` means unlimited.
    max_suggestions: Option<usize>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Cap the suggestion list. Zero means unlimited.
    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = (max > 0).then_some(max);
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Replace the query and recompute suggestions against `records`.
    pub fn set_query<R: Searchable>(&mut self, text: impl Into<String>, records: &[R]) -> &[String] {
        self.query = text.into();
        let mut suggestions = suggest(records, &self.query);
        if let Some(max) = self.max_suggestions {
            suggestions.truncate(max);
        }
        tracing::trace!(query = %self.query, count = suggestions.len(), "suggestions recomputed");
        self.suggestions = suggestions;
        &self.suggestions
    }

    /// Adopt `suggestion` as the query and close the suggestion list.
    pub fn select_suggestion(&mut self, suggestion: &str) {
        self.query = select_suggestion(suggestion);
        self.suggestions.clear();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.suggestions.clear();
    }

    /// Records matching the current query and category, in input order.
    pub fn results<'a, R: Searchable>(&self, records: &'a [R]) -> Vec<&'a R> {
        filter(records, &self.query, &self.category)
    }
}
