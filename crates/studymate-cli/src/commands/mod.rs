pub mod config;
pub mod notes;
pub mod quiz;
pub mod routine;
pub mod timer;

use serde::Serialize;
use studymate_core::search::SearchSession;
use studymate_core::Searchable;

/// Search output shared by the notes, routine and quiz commands.
#[derive(Serialize)]
pub struct SearchOutput<'a, R> {
    pub query: &'a str,
    pub category: String,
    pub suggestions: &'a [String],
    pub results: Vec<&'a R>,
}

/// Run `query` through `session` against `records`.
pub fn run_search<'a, R: Searchable>(
    session: &'a mut SearchSession,
    query: Option<String>,
    records: &'a [R],
) -> SearchOutput<'a, R> {
    session.set_query(query.unwrap_or_default(), records);
    let session: &'a SearchSession = session;
    SearchOutput {
        query: session.query(),
        category: session.category().to_string(),
        suggestions: session.suggestions(),
        results: session.results(records),
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
