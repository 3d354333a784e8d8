use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::search::Searchable;

/// Subjects offered by the note editor, in display order.
pub const SUBJECTS: [&str; 6] = ["Math", "Physics", "Chemistry", "Biology", "History", "English"];

/// A study note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub subject: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Note {
    pub fn new(title: impl Into<String>, content: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            content: content.into(),
            subject: subject.into(),
            created_at: Utc::now(),
            image_url: None,
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }

    /// Title and content must be non-blank; subject must be a known one.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::missing("title"));
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::missing("content"));
        }
        if !SUBJECTS.contains(&self.subject.as_str()) {
            return Err(ValidationError::invalid(
                "subject",
                format!("'{}' is not one of {}", self.subject, SUBJECTS.join(", ")),
            ));
        }
        Ok(())
    }
}

impl Searchable for Note {
    fn primary_text(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.content.as_str()]
    }

    fn category(&self) -> Option<&str> {
        Some(self.subject.as_str())
    }
}
