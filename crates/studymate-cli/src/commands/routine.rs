use chrono::Weekday;
use clap::Subcommand;
use studymate_core::records::{routines_for_day, RoutineKind};
use studymate_core::search::{CategoryFilter, SearchSession};
use studymate_core::{Config, DataStore, MemoryStore};

use super::{print_json, run_search};

#[derive(Subcommand)]
pub enum RoutineAction {
    /// Search the weekly routine by title or location
    Search {
        /// Text to look for (case-insensitive)
        query: Option<String>,
        /// Only show one day (mon, tue, ...)
        #[arg(long)]
        day: Option<Weekday>,
        /// Restrict to a type (Class, Coaching, Self-Study, ...)
        #[arg(long)]
        kind: Option<RoutineKind>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: RoutineAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = MemoryStore::with_demo_data();

    match action {
        RoutineAction::Search { query, day, kind, json } => {
            let mut routines = store.routines()?;
            if let Some(day) = day {
                routines = routines_for_day(&routines, day);
            }
            let mut session = SearchSession::new()
                .with_max_suggestions(config.search.max_suggestions as usize);
            if let Some(kind) = kind {
                session.set_category(CategoryFilter::named(kind.label()));
            }
            let output = run_search(&mut session, query, &routines);

            if json {
                print_json(&output)?;
                return Ok(());
            }

            for suggestion in output.suggestions {
                println!("suggestion: {suggestion}");
            }
            if output.results.is_empty() {
                println!("No classes scheduled");
            }
            for routine in &output.results {
                println!(
                    "{} {:<22} {:<12} {} @ {}",
                    routine.day,
                    routine.title,
                    routine.kind.label(),
                    routine.time,
                    routine.location
                );
            }
        }
    }
    Ok(())
}
