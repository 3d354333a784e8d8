//! # StudyMate Core Library
//!
//! This library provides the core logic for the StudyMate study companion.
//! Every screen-level behavior lives here so it can be driven from the
//! standalone CLI binary or any other front end without duplication.
//!
//! ## Architecture
//!
//! - **Search**: Case-insensitive filtering and autocomplete shared by the
//!   notes, routine and quiz search bars
//! - **Timer**: A pomodoro countdown state machine driven by externally
//!   supplied one-second ticks
//! - **Records**: Notes, weekly routine entries and quizzes
//! - **Data**: The backend boundary for records and authentication
//! - **Config**: TOML-based user preferences
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Pomodoro countdown state machine
//! - [`Ticker`]: The single periodic tick source for a running engine
//! - [`SearchSession`]: Query, category and suggestion state for one search bar
//! - [`DataStore`]: Trait for record storage and sign-in
//! - [`Config`]: Application configuration management

pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod records;
pub mod search;
pub mod timer;

pub use config::Config;
pub use data::{Credentials, DataStore, MemoryStore, Session, StoredRecord, Table, User};
pub use error::{ConfigError, CoreError, DataError, Result, ValidationError};
pub use events::Event;
pub use records::{Note, Question, Quiz, QuizBoard, QuizSession, Routine, RoutineKind};
pub use search::{filter, select_suggestion, suggest, CategoryFilter, SearchSession, Searchable};
pub use timer::{TickToken, Ticker, TimerEngine, TimerMode, TimerPhase, TimerState};
