//! Study records: notes, the weekly routine, and quizzes.

pub mod demo;
mod note;
mod quiz;
mod routine;

pub use note::{Note, SUBJECTS};
pub use quiz::{AnswerOutcome, Grade, Question, Quiz, QuizBoard, QuizResult, QuizSession};
pub use routine::{routines_for_day, Routine, RoutineKind, WEEK};
