//! Case-insensitive substring filtering and suggestion generation.
//!
//! Everything here recomputes from the full collection on every call. The
//! collections are a single user's notes, routines and quizzes, so there is
//! no index.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Sentinel category name meaning "no category constraint".
pub const ALL_CATEGORIES: &str = "All";

/// Capability set a record type exposes to the search engine.
pub trait Searchable {
    /// Field offered as a suggestion (a note's title, a quiz's category).
    fn primary_text(&self) -> &str;

    /// Every field the query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Value compared against a named [`CategoryFilter`].
    fn category(&self) -> Option<&str> {
        None
    }
}

impl Searchable for String {
    fn primary_text(&self) -> &str {
        self
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

impl Searchable for &str {
    fn primary_text(&self) -> &str {
        self
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![*self]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn named(category: impl Into<String>) -> Self {
        CategoryFilter::from(category.into())
    }

    /// Whether a record with `category` passes this filter.
    pub fn admits(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => category == Some(name.as_str()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value)
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        CategoryFilter::from(value.to_string())
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CategoryFilter::from(s))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether any searchable field of `record` contains `query`.
pub fn matches_query<R: Searchable + ?Sized>(record: &R, query: &str) -> bool {
    query.is_empty()
        || record
            .search_fields()
            .iter()
            .any(|field| contains_ignore_case(field, query))
}

/// Records passing both the category filter and the query, in input order.
pub fn filter<'a, R: Searchable>(
    records: &'a [R],
    query: &str,
    category: &CategoryFilter,
) -> Vec<&'a R> {
    records
        .iter()
        .filter(|r| category.admits(r.category()) && matches_query(*r, query))
        .collect()
}

/// Distinct primary texts containing `query`, in first-occurrence order.
///
/// An empty query yields no suggestions.
pub fn suggest<R: Searchable>(records: &[R], query: &str) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|r| r.primary_text())
        .filter(|text| text.to_lowercase().contains(&needle))
        .filter(|text| seen.insert(*text))
        .map(str::to_string)
        .collect()
}

/// Query that results from picking a suggestion: the suggestion, verbatim.
pub fn select_suggestion(suggestion: &str) -> String {
    suggestion.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        title: &'static str,
        body: &'static str,
        tag: &'static str,
    }

    impl Searchable for Item {
        fn primary_text(&self) -> &str {
            self.title
        }
        fn search_fields(&self) -> Vec<&str> {
            vec![self.title, self.body]
        }
        fn category(&self) -> Option<&str> {
            Some(self.tag)
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { title: "Calculus Formulas", body: "derivatives and integrals", tag: "Math" },
            Item { title: "Newton's Laws", body: "three laws of motion", tag: "Physics" },
            Item { title: "Calculus Formulas", body: "limits", tag: "Math" },
            Item { title: "Cell Structure", body: "eukaryotic cells", tag: "Biology" },
        ]
    }

    fn titles(found: &[&Item]) -> Vec<&'static str> {
        found.iter().map(|i| i.title).collect()
    }

    #[test]
    fn empty_query_all_is_identity() {
        let data = items();
        let found = filter(&data, "", &CategoryFilter::All);
        assert_eq!(found.len(), data.len());
        for (a, b) in found.iter().zip(data.iter()) {
            assert!(std::ptr::eq(*a, b));
        }
    }

    #[test]
    fn matches_any_field_case_insensitively() {
        let data = items();
        let found = filter(&data, "MOTION", &CategoryFilter::All);
        assert_eq!(titles(&found), vec!["Newton's Laws"]);
    }

    #[test]
    fn category_and_query_combine() {
        let data = items();
        let found = filter(&data, "cal", &CategoryFilter::named("Math"));
        assert_eq!(found.len(), 2);
        let none = filter(&data, "cal", &CategoryFilter::named("Physics"));
        assert!(none.is_empty());
    }

    #[test]
    fn named_category_with_empty_query() {
        let data = items();
        let found = filter(&data, "", &CategoryFilter::named("Biology"));
        assert_eq!(titles(&found), vec!["Cell Structure"]);
    }

    #[test]
    fn suggestions_are_distinct_and_ordered() {
        let data = items();
        assert_eq!(suggest(&data, "c"), vec!["Calculus Formulas", "Cell Structure"]);
    }

    #[test]
    fn suggestions_only_use_primary_text() {
        let data = items();
        assert!(suggest(&data, "motion").is_empty());
    }

    #[test]
    fn empty_query_has_no_suggestions() {
        assert!(suggest(&items(), "").is_empty());
    }

    #[test]
    fn plain_strings_are_searchable() {
        let tasks = vec!["Complete math homework".to_string(), "Study for physics exam".to_string()];
        assert_eq!(suggest(&tasks, "PHYS"), vec!["Study for physics exam"]);
    }

    #[test]
    fn category_filter_parsing() {
        assert_eq!(CategoryFilter::from("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from("Math"), CategoryFilter::Named("Math".into()));
        assert_eq!(CategoryFilter::All.to_string(), "All");
    }

    #[test]
    fn select_suggestion_is_verbatim() {
        assert_eq!(select_suggestion("Cell Structure"), "Cell Structure");
    }
}
