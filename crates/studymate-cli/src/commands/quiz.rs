use clap::Subcommand;
use serde::Serialize;
use studymate_core::records::{AnswerOutcome, Grade, Question, QuizResult};
use studymate_core::search::SearchSession;
use studymate_core::{Config, DataStore, MemoryStore, QuizBoard};

use super::{print_json, run_search};

#[derive(Subcommand)]
pub enum QuizAction {
    /// Search quizzes by category or title
    Search {
        /// Text to look for (case-insensitive)
        query: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Take the quiz for a category, answering questions in order
    Take {
        /// Quiz category (e.g. "Math")
        category: String,
        /// Option letters (a, b, c, ...) or exact option text, one per question
        #[arg(long, value_delimiter = ',')]
        answers: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct TakeOutput<'a> {
    title: &'a str,
    category: &'a str,
    answers: Vec<AnswerOutcome>,
    completed: bool,
    result: QuizResult,
    grade: Grade,
    message: &'static str,
}

/// Letter `a` picks the first option; anything else is taken as option text.
fn resolve_answer(question: &Question, raw: &str) -> String {
    let raw = raw.trim();
    let mut chars = raw.chars();
    if let (Some(letter), None) = (chars.next(), chars.next()) {
        if letter.is_ascii_alphabetic() {
            let index = (letter.to_ascii_lowercase() as u8 - b'a') as usize;
            if let Some(option) = question.options.get(index) {
                return option.clone();
            }
        }
    }
    raw.to_string()
}

pub fn run(action: QuizAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = MemoryStore::with_demo_data();
    let search = SearchSession::new().with_max_suggestions(config.search.max_suggestions as usize);

    match action {
        QuizAction::Search { query, json } => {
            let quizzes = store.quizzes()?;
            let mut session = search;
            let output = run_search(&mut session, query, &quizzes);

            if json {
                print_json(&output)?;
                return Ok(());
            }

            for suggestion in output.suggestions {
                println!("suggestion: {suggestion}");
            }
            if output.results.is_empty() {
                println!("No quizzes found");
            }
            for quiz in &output.results {
                println!(
                    "[{}] {} ({} questions)",
                    quiz.category,
                    quiz.title,
                    quiz.questions.len()
                );
            }
        }
        QuizAction::Take {
            category,
            answers,
            json,
        } => {
            let mut board = QuizBoard::new(store.quizzes()?).with_search(search);
            if !board.switch_quiz(&category) {
                return Err(format!("no quiz for category '{category}'").into());
            }
            let session = board
                .session_mut()
                .ok_or("no active quiz")?;

            let mut outcomes = Vec::new();
            for raw in &answers {
                let Some(question) = session.current_question() else {
                    break;
                };
                let answer = resolve_answer(question, raw);
                if let Some(outcome) = session.select_answer(&answer) {
                    outcomes.push(outcome);
                }
                session.advance();
            }

            let output = TakeOutput {
                title: &session.quiz().title,
                category: &session.quiz().category,
                answers: outcomes,
                completed: session.is_completed(),
                result: session.result(),
                grade: session.grade(),
                message: session.grade().message(),
            };

            if json {
                print_json(&output)?;
                return Ok(());
            }

            println!("{} [{}]", output.title, output.category);
            for (i, outcome) in output.answers.iter().enumerate() {
                if outcome.correct {
                    println!("Q{}: correct", i + 1);
                } else {
                    println!("Q{}: incorrect (answer: {})", i + 1, outcome.correct_answer);
                }
            }
            if !output.completed {
                println!(
                    "Answered {} of {} questions",
                    output.answers.len(),
                    output.result.total_questions
                );
            }
            println!(
                "Score: {}/{}",
                output.result.score, output.result.total_questions
            );
            if output.completed {
                println!("{}", output.message);
            }
        }
    }
    Ok(())
}
