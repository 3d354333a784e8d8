//! Seed data for the in-memory store and the CLI.

use chrono::{DateTime, TimeZone, Utc, Weekday};

use super::{Note, Question, Quiz, Routine, RoutineKind};

/// Suggestions offered by the pomodoro "What are you working on?" bar.
pub fn focus_tasks() -> Vec<String> {
    [
        "Complete math homework",
        "Study for physics exam",
        "Read biology chapter",
        "Write English essay",
        "Review chemistry notes",
        "Prepare history presentation",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

pub fn notes() -> Vec<Note> {
    let rows = [
        (1, "Calculus Formulas", "Important formulas for calculus exam including derivatives and integrals.", "Math", at(2023, 5, 15, 10, 30), Some("https://example.com/math.jpg")),
        (2, "Newton's Laws of Motion", "Detailed notes on Newton's three laws of motion with examples.", "Physics", at(2023, 5, 14, 14, 20), None),
        (3, "Periodic Table Elements", "Notes on the first 20 elements of the periodic table with their properties.", "Chemistry", at(2023, 5, 13, 9, 15), Some("https://example.com/chemistry.jpg")),
        (4, "Cell Structure", "Detailed notes on eukaryotic and prokaryotic cell structures.", "Biology", at(2023, 5, 12, 16, 45), Some("https://example.com/biology.jpg")),
        (5, "World War II Timeline", "Chronological events of World War II from 1939 to 1945.", "History", at(2023, 5, 11, 11, 30), None),
        (6, "Shakespeare's Sonnets Analysis", "Analysis of key themes in Shakespeare's most famous sonnets.", "English", at(2023, 5, 10, 13, 20), None),
    ];
    rows.into_iter()
        .map(|(id, title, content, subject, created_at, image)| Note {
            id,
            title: title.to_string(),
            content: content.to_string(),
            subject: subject.to_string(),
            created_at,
            image_url: image.map(String::from),
        })
        .collect()
}

pub fn routines() -> Vec<Routine> {
    use RoutineKind::{Class, Coaching};
    let rows = [
        (1, Weekday::Mon, "Mathematics", Class, "09:00 AM - 10:30 AM", "Room 101"),
        (2, Weekday::Mon, "Physics", Class, "11:00 AM - 12:30 PM", "Lab 3"),
        (3, Weekday::Mon, "Chemistry Coaching", Coaching, "02:00 PM - 03:30 PM", "Study Center"),
        (4, Weekday::Tue, "Biology", Class, "09:00 AM - 10:30 AM", "Room 205"),
        (5, Weekday::Tue, "English Literature", Class, "11:00 AM - 12:30 PM", "Room 304"),
        (6, Weekday::Wed, "Computer Science", Class, "09:00 AM - 10:30 AM", "Lab 2"),
        (7, Weekday::Wed, "Mathematics Coaching", Coaching, "02:00 PM - 03:30 PM", "Study Center"),
        (8, Weekday::Thu, "History", Class, "09:00 AM - 10:30 AM", "Room 102"),
        (9, Weekday::Fri, "Geography", Class, "11:00 AM - 12:30 PM", "Room 201"),
    ];
    rows.into_iter()
        .map(|(id, day, title, kind, time, location)| Routine {
            id,
            ..Routine::new(day, title, kind, time, location)
        })
        .collect()
}

pub fn quizzes() -> Vec<Quiz> {
    vec![
        Quiz {
            id: 1,
            title: "Daily Math Quiz".into(),
            category: "Math".into(),
            questions: vec![
                Question::new(1, "What is the value of π (pi) to two decimal places?", &["3.14", "3.16", "3.12", "3.18"], "3.14"),
                Question::new(2, "What is the square root of 144?", &["12", "14", "10", "16"], "12"),
                Question::new(3, "If x + y = 10 and x - y = 4, what is the value of x?", &["7", "6", "8", "5"], "7"),
                Question::new(4, "What is the formula for the area of a circle?", &["πr²", "2πr", "πd", "2πr²"], "πr²"),
                Question::new(5, "What is 25% of 80?", &["20", "25", "15", "40"], "20"),
            ],
        },
        Quiz {
            id: 2,
            title: "Physics Fundamentals".into(),
            category: "Physics".into(),
            questions: vec![
                Question::new(
                    1,
                    "What is Newton's First Law of Motion?",
                    &[
                        "An object at rest stays at rest unless acted upon by a force",
                        "Force equals mass times acceleration",
                        "For every action, there is an equal and opposite reaction",
                        "Energy cannot be created or destroyed",
                    ],
                    "An object at rest stays at rest unless acted upon by a force",
                ),
                Question::new(2, "What is the SI unit of force?", &["Newton", "Joule", "Watt", "Pascal"], "Newton"),
                Question::new(
                    3,
                    "What does E=mc² represent?",
                    &["Mass-energy equivalence", "Gravitational potential energy", "Kinetic energy", "Electric potential"],
                    "Mass-energy equivalence",
                ),
                Question::new(
                    4,
                    "Which scientist proposed the theory of relativity?",
                    &["Albert Einstein", "Isaac Newton", "Niels Bohr", "Galileo Galilei"],
                    "Albert Einstein",
                ),
                Question::new(
                    5,
                    "What is the speed of light in a vacuum?",
                    &["299,792,458 m/s", "300,000,000 m/s", "310,000,000 m/s", "290,000,000 m/s"],
                    "299,792,458 m/s",
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchSession;

    #[test]
    fn seed_records_are_valid() {
        assert!(notes().iter().all(|n| n.validate().is_ok()));
        assert!(routines().iter().all(|r| r.validate().is_ok()));
        assert!(quizzes().iter().all(|q| q.validate().is_ok()));
    }

    #[test]
    fn focus_tasks_feed_the_task_search_bar() {
        let tasks = focus_tasks();
        let mut search = SearchSession::new();
        assert_eq!(search.set_query("STUDY", &tasks), ["Study for physics exam"]);
        search.select_suggestion("Study for physics exam");
        assert_eq!(search.results(&tasks).len(), 1);
        assert!(search.suggestions().is_empty());
    }

    #[test]
    fn seed_ids_are_unique() {
        let ids: Vec<u64> = routines().iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
    }
}
