use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::search::Searchable;

/// Days shown in the routine day picker, Monday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoutineKind {
    Class,
    Coaching,
    #[serde(rename = "Self-Study")]
    SelfStudy,
    #[serde(rename = "Group Study")]
    GroupStudy,
    Lab,
}

impl RoutineKind {
    pub const ALL: [RoutineKind; 5] = [
        RoutineKind::Class,
        RoutineKind::Coaching,
        RoutineKind::SelfStudy,
        RoutineKind::GroupStudy,
        RoutineKind::Lab,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RoutineKind::Class => "Class",
            RoutineKind::Coaching => "Coaching",
            RoutineKind::SelfStudy => "Self-Study",
            RoutineKind::GroupStudy => "Group Study",
            RoutineKind::Lab => "Lab",
        }
    }
}

impl fmt::Display for RoutineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RoutineKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoutineKind::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::invalid("type", format!("unknown routine type '{s}'")))
    }
}

/// One entry in the weekly class/coaching schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    pub id: u64,
    pub day: Weekday,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: RoutineKind,
    /// Free-form range, e.g. "09:00 AM - 10:30 AM".
    pub time: String,
    pub location: String,
}

impl Routine {
    pub fn new(
        day: Weekday,
        title: impl Into<String>,
        kind: RoutineKind,
        time: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            day,
            title: title.into(),
            kind,
            time: time.into(),
            location: location.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [("title", &self.title), ("time", &self.time), ("location", &self.location)] {
            if value.trim().is_empty() {
                return Err(ValidationError::missing(field));
            }
        }
        Ok(())
    }
}

/// Entries scheduled on `day`, in input order.
pub fn routines_for_day(routines: &[Routine], day: Weekday) -> Vec<Routine> {
    routines.iter().filter(|r| r.day == day).cloned().collect()
}

impl Searchable for Routine {
    fn primary_text(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.location.as_str()]
    }

    fn category(&self) -> Option<&str> {
        Some(self.kind.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_location_rejected() {
        let r = Routine::new(Weekday::Mon, "Physics", RoutineKind::Class, "11:00 AM", " ");
        assert_eq!(r.validate(), Err(ValidationError::missing("location")));
    }

    #[test]
    fn kind_round_trips_through_label() {
        for kind in RoutineKind::ALL {
            assert_eq!(kind.label().parse::<RoutineKind>().unwrap(), kind);
        }
        assert_eq!(
            serde_json::to_value(RoutineKind::GroupStudy).unwrap(),
            serde_json::json!("Group Study")
        );
    }

    #[test]
    fn filters_by_day() {
        let all = vec![
            Routine::new(Weekday::Mon, "Mathematics", RoutineKind::Class, "09:00 AM", "Room 101"),
            Routine::new(Weekday::Tue, "Biology", RoutineKind::Class, "09:00 AM", "Room 205"),
            Routine::new(Weekday::Mon, "Physics", RoutineKind::Class, "11:00 AM", "Lab 3"),
        ];
        let monday = routines_for_day(&all, Weekday::Mon);
        assert_eq!(monday.len(), 2);
        assert!(monday.iter().all(|r| r.day == Weekday::Mon));
    }

    #[test]
    fn location_is_searchable() {
        let r = Routine::new(Weekday::Wed, "Computer Science", RoutineKind::Lab, "09:00 AM", "Lab 2");
        assert!(crate::search::matches_query(&r, "lab 2"));
        assert_eq!(r.category(), Some("Lab"));
    }
}
