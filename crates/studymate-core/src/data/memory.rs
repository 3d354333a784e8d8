use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;

use super::{Credentials, DataStore, Session, StoredRecord, Table, User};
use crate::error::DataError;
use crate::records::demo;

const DEMO_EMAIL: &str = "demo@studymate.app";

struct Account {
    user: User,
    password: String,
}

/// In-memory mock backend. Nothing survives the process.
#[derive(Default)]
pub struct MemoryStore {
    tables: HashMap<Table, Vec<StoredRecord>>,
    accounts: HashMap<String, Account>,
    session: Option<Session>,
}

impl MemoryStore {
    /// Empty tables, no accounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeded with the demo notes, weekly routine and quizzes.
    pub fn with_demo_data() -> Self {
        let mut store = Self::new();
        store.seed(Table::Notes, demo::notes().into_iter().map(StoredRecord::from));
        store.seed(Table::Routines, demo::routines().into_iter().map(StoredRecord::from));
        store.seed(Table::Quizzes, demo::quizzes().into_iter().map(StoredRecord::from));
        store
    }

    fn seed(&mut self, table: Table, rows: impl IntoIterator<Item = StoredRecord>) {
        self.tables.entry(table).or_default().extend(rows);
    }

    /// Skip the login form with a fixed demo account.
    pub fn demo_login(&mut self) -> Session {
        let user = User {
            id: Uuid::nil(),
            email: DEMO_EMAIL.to_string(),
        };
        self.open_session(user)
    }

    fn next_id(&self, table: Table) -> u64 {
        self.tables
            .get(&table)
            .and_then(|rows| rows.iter().map(StoredRecord::id).max())
            .unwrap_or(0)
            + 1
    }

    fn check_kind(table: Table, record: &StoredRecord) -> Result<(), DataError> {
        if record.table() != table {
            return Err(DataError::WrongKind { table });
        }
        Ok(())
    }

    fn open_session(&mut self, user: User) -> Session {
        let session = Session {
            user,
            issued_at: Utc::now(),
        };
        tracing::debug!(email = %session.user.email, "session opened");
        self.session = Some(session.clone());
        session
    }
}

impl DataStore for MemoryStore {
    fn list_records(&self, table: Table) -> Result<Vec<StoredRecord>, DataError> {
        Ok(self.tables.get(&table).cloned().unwrap_or_default())
    }

    fn insert_record(&mut self, table: Table, mut record: StoredRecord) -> Result<StoredRecord, DataError> {
        Self::check_kind(table, &record)?;
        record.validate()?;
        let id = self.next_id(table);
        record.set_id(id);
        self.tables.entry(table).or_default().push(record.clone());
        tracing::debug!(%table, id, "record inserted");
        Ok(record)
    }

    fn update_record(&mut self, table: Table, record: StoredRecord) -> Result<StoredRecord, DataError> {
        Self::check_kind(table, &record)?;
        record.validate()?;
        let id = record.id();
        let slot = self
            .tables
            .get_mut(&table)
            .and_then(|rows| rows.iter_mut().find(|r| r.id() == id))
            .ok_or(DataError::NotFound { table, id })?;
        *slot = record.clone();
        tracing::debug!(%table, id, "record updated");
        Ok(record)
    }

    fn delete_record(&mut self, table: Table, id: u64) -> Result<(), DataError> {
        let rows = self.tables.entry(table).or_default();
        let before = rows.len();
        rows.retain(|r| r.id() != id);
        if rows.len() == before {
            return Err(DataError::NotFound { table, id });
        }
        tracing::debug!(%table, id, "record deleted");
        Ok(())
    }

    fn sign_in(&mut self, credentials: &Credentials) -> Result<Session, DataError> {
        credentials.validate()?;
        let user = match self.accounts.get(&credentials.normalized_email()) {
            Some(account) if account.password == credentials.password => account.user.clone(),
            _ => return Err(DataError::InvalidCredentials),
        };
        Ok(self.open_session(user))
    }

    fn sign_up(&mut self, credentials: &Credentials) -> Result<Session, DataError> {
        credentials.validate()?;
        let email = credentials.normalized_email();
        if self.accounts.contains_key(&email) {
            return Err(DataError::AlreadyExists(email));
        }
        let user = User {
            id: Uuid::new_v4(),
            email: email.clone(),
        };
        self.accounts.insert(
            email,
            Account {
                user: user.clone(),
                password: credentials.password.clone(),
            },
        );
        Ok(self.open_session(user))
    }

    fn get_session(&self) -> Result<Option<Session>, DataError> {
        Ok(self.session.clone())
    }

    fn sign_out(&mut self) -> Result<(), DataError> {
        if self.session.take().is_none() {
            return Err(DataError::NotAuthenticated);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::records::{Note, Routine, RoutineKind};
    use chrono::Weekday;

    #[test]
    fn demo_data_is_listed() {
        let store = MemoryStore::with_demo_data();
        assert_eq!(store.notes().unwrap().len(), 6);
        assert_eq!(store.routines().unwrap().len(), 9);
        assert_eq!(store.quizzes().unwrap().len(), 2);
    }

    #[test]
    fn insert_assigns_next_id() {
        let mut store = MemoryStore::with_demo_data();
        let stored = store
            .insert_record(Table::Notes, Note::new("Optics", "Lenses and mirrors", "Physics").into())
            .unwrap();
        assert_eq!(stored.id(), 7);
        assert_eq!(store.notes().unwrap().len(), 7);
    }

    #[test]
    fn insert_validates() {
        let mut store = MemoryStore::new();
        let err = store
            .insert_record(Table::Notes, Note::new("", "body", "Math").into())
            .unwrap_err();
        assert_eq!(err, DataError::Validation(ValidationError::missing("title")));
    }

    #[test]
    fn insert_rejects_wrong_table() {
        let mut store = MemoryStore::new();
        let routine = Routine::new(Weekday::Mon, "Physics", RoutineKind::Class, "11:00 AM", "Lab 3");
        let err = store.insert_record(Table::Notes, routine.into()).unwrap_err();
        assert_eq!(err, DataError::WrongKind { table: Table::Notes });
    }

    #[test]
    fn update_and_delete_unknown_id() {
        let mut store = MemoryStore::with_demo_data();
        let mut note = store.notes().unwrap()[0].clone();
        note.title = "Calculus Cheat Sheet".into();
        store.update_record(Table::Notes, note.clone().into()).unwrap();
        assert_eq!(store.notes().unwrap()[0].title, "Calculus Cheat Sheet");

        note.id = 99;
        assert_eq!(
            store.update_record(Table::Notes, note.into()).unwrap_err(),
            DataError::NotFound { table: Table::Notes, id: 99 }
        );
        assert!(store.delete_record(Table::Notes, 99).is_err());
        store.delete_record(Table::Notes, 1).unwrap();
        assert_eq!(store.notes().unwrap().len(), 5);
    }

    #[test]
    fn sign_up_then_sign_in() {
        let mut store = MemoryStore::new();
        assert!(store.get_session().unwrap().is_none());

        let creds = Credentials::new("Ada@Example.com", "secret");
        let session = store.sign_up(&creds).unwrap();
        assert_eq!(session.user.email, "ada@example.com");
        assert_eq!(
            store.sign_up(&creds).unwrap_err(),
            DataError::AlreadyExists("ada@example.com".into())
        );

        store.sign_out().unwrap();
        assert!(store.get_session().unwrap().is_none());
        assert!(store.sign_out().is_err());

        let wrong = Credentials::new("ada@example.com", "nope");
        assert_eq!(store.sign_in(&wrong).unwrap_err(), DataError::InvalidCredentials);
        let again = store.sign_in(&Credentials::new("ada@example.com", "secret")).unwrap();
        assert_eq!(again.user.id, session.user.id);
        assert_eq!(store.get_session().unwrap(), Some(again));
    }

    #[test]
    fn blank_credentials_rejected() {
        let mut store = MemoryStore::new();
        let err = store.sign_in(&Credentials::new("", "")).unwrap_err();
        assert!(err.to_string().contains("Please fill in all fields"));
    }

    #[test]
    fn demo_login_opens_session() {
        let mut store = MemoryStore::new();
        let session = store.demo_login();
        assert_eq!(store.get_session().unwrap(), Some(session));
    }
}
