//! Shared search bar logic for the notes, routine and quiz views.

mod engine;
mod session;

pub use engine::{
    contains_ignore_case, filter, matches_query, select_suggestion, suggest, CategoryFilter,
    Searchable, ALL_CATEGORIES,
};
pub use session::SearchSession;
