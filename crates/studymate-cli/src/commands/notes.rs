use clap::Subcommand;
use studymate_core::search::CategoryFilter;
use studymate_core::{Config, DataStore, MemoryStore};

use super::{print_json, run_search};

#[derive(Subcommand)]
pub enum NotesAction {
    /// Search notes by title or content
    Search {
        /// Text to look for (case-insensitive)
        query: Option<String>,
        /// Restrict to a subject ("All" for every subject)
        #[arg(long)]
        subject: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: NotesAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = MemoryStore::with_demo_data();

    match action {
        NotesAction::Search { query, subject, json } => {
            let notes = store.notes()?;
            let mut session = config.search_session();
            if let Some(subject) = subject {
                session.set_category(CategoryFilter::from(subject));
            }
            let output = run_search(&mut session, query, &notes);

            if json {
                print_json(&output)?;
                return Ok(());
            }

            for suggestion in output.suggestions {
                println!("suggestion: {suggestion}");
            }
            if output.results.is_empty() {
                println!("No notes found");
            }
            for note in &output.results {
                let image = if note.has_image() { " [image]" } else { "" };
                println!(
                    "#{} [{}] {}{} ({})",
                    note.id,
                    note.subject,
                    note.title,
                    image,
                    note.created_at.format("%Y-%m-%d")
                );
            }
        }
    }
    Ok(())
}
