//! Data-access boundary.
//!
//! Screens never talk to a backend directly; they go through [`DataStore`].
//! [`MemoryStore`] is the in-process mock used by the CLI and tests. A real
//! backend implements the same trait.

mod memory;

pub use memory::MemoryStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{DataError, ValidationError};
use crate::records::{Note, Quiz, Routine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Table {
    Notes,
    Routines,
    Quizzes,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Table::Notes => "notes",
            Table::Routines => "routines",
            Table::Quizzes => "quizzes",
        })
    }
}

/// A row in one of the tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StoredRecord {
    Note(Note),
    Routine(Routine),
    Quiz(Quiz),
}

impl StoredRecord {
    pub fn table(&self) -> Table {
        match self {
            StoredRecord::Note(_) => Table::Notes,
            StoredRecord::Routine(_) => Table::Routines,
            StoredRecord::Quiz(_) => Table::Quizzes,
        }
    }

    pub fn id(&self) -> u64 {
        match self {
            StoredRecord::Note(n) => n.id,
            StoredRecord::Routine(r) => r.id,
            StoredRecord::Quiz(q) => q.id,
        }
    }

    pub(crate) fn set_id(&mut self, id: u64) {
        match self {
            StoredRecord::Note(n) => n.id = id,
            StoredRecord::Routine(r) => r.id = id,
            StoredRecord::Quiz(q) => q.id = id,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            StoredRecord::Note(n) => n.validate(),
            StoredRecord::Routine(r) => r.validate(),
            StoredRecord::Quiz(q) => q.validate(),
        }
    }

    pub fn into_note(self) -> Option<Note> {
        match self {
            StoredRecord::Note(n) => Some(n),
            _ => None,
        }
    }

    pub fn into_routine(self) -> Option<Routine> {
        match self {
            StoredRecord::Routine(r) => Some(r),
            _ => None,
        }
    }

    pub fn into_quiz(self) -> Option<Quiz> {
        match self {
            StoredRecord::Quiz(q) => Some(q),
            _ => None,
        }
    }
}

impl From<Note> for StoredRecord {
    fn from(note: Note) -> Self {
        StoredRecord::Note(note)
    }
}

impl From<Routine> for StoredRecord {
    fn from(routine: Routine) -> Self {
        StoredRecord::Routine(routine)
    }
}

impl From<Quiz> for StoredRecord {
    fn from(quiz: Quiz) -> Self {
        StoredRecord::Quiz(quiz)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Lower-cased, trimmed email used as the account key.
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(ValidationError::invalid("credentials", "Please fill in all fields"));
        }
        if !self.email.contains('@') {
            return Err(ValidationError::invalid("email", "Please enter a valid email address"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub issued_at: DateTime<Utc>,
}

/// Backend collaborator for records and authentication.
///
/// Every call returns a result-or-error outcome; the search and timer cores
/// never see these errors.
pub trait DataStore {
    fn list_records(&self, table: Table) -> Result<Vec<StoredRecord>, DataError>;

    /// Stores `record` under a freshly assigned id and returns the stored row.
    fn insert_record(&mut self, table: Table, record: StoredRecord) -> Result<StoredRecord, DataError>;

    /// Replaces the row with `record.id()`.
    fn update_record(&mut self, table: Table, record: StoredRecord) -> Result<StoredRecord, DataError>;

    fn delete_record(&mut self, table: Table, id: u64) -> Result<(), DataError>;

    fn sign_in(&mut self, credentials: &Credentials) -> Result<Session, DataError>;

    fn sign_up(&mut self, credentials: &Credentials) -> Result<Session, DataError>;

    fn get_session(&self) -> Result<Option<Session>, DataError>;

    fn sign_out(&mut self) -> Result<(), DataError> {
        Ok(()) // default no-op
    }

    fn notes(&self) -> Result<Vec<Note>, DataError> {
        Ok(self
            .list_records(Table::Notes)?
            .into_iter()
            .filter_map(StoredRecord::into_note)
            .collect())
    }

    fn routines(&self) -> Result<Vec<Routine>, DataError> {
        Ok(self
            .list_records(Table::Routines)?
            .into_iter()
            .filter_map(StoredRecord::into_routine)
            .collect())
    }

    fn quizzes(&self) -> Result<Vec<Quiz>, DataError> {
        Ok(self
            .list_records(Table::Quizzes)?
            .into_iter()
            .filter_map(StoredRecord::into_quiz)
            .collect())
    }
}
