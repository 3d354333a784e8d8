//! Quizzes and the state of taking one.
//!
//! Typing in the quiz search bar and switching the active quiz are separate
//! events on [`QuizBoard`]: `set_query`/`select_suggestion` only touch the
//! search state, `switch_quiz` replaces the session.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::search::{SearchSession, Searchable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u64,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    pub fn new(id: u64, question: &str, options: &[&str], correct_answer: &str) -> Self {
        Self {
            id,
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct_answer.to_string(),
        }
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::missing("title"));
        }
        if self.questions.is_empty() {
            return Err(ValidationError::missing("questions"));
        }
        for q in &self.questions {
            if !q.options.contains(&q.correct_answer) {
                return Err(ValidationError::invalid(
                    "correct_answer",
                    format!("question {} has no option '{}'", q.id, q.correct_answer),
                ));
            }
        }
        Ok(())
    }
}

impl Searchable for Quiz {
    fn primary_text(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.category.as_str(), self.title.as_str()]
    }

    fn category(&self) -> Option<&str> {
        Some(self.category.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub quiz_id: u64,
    pub score: u32,
    pub total_questions: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Grade {
    Perfect,
    Great,
    Good,
    KeepPracticing,
}

impl Grade {
    pub fn from_score(score: u32, total: u32) -> Self {
        if total == 0 || score >= total {
            return Grade::Perfect;
        }
        let ratio = score as f64 / total as f64;
        if ratio >= 0.8 {
            Grade::Great
        } else if ratio >= 0.6 {
            Grade::Good
        } else {
            Grade::KeepPracticing
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Grade::Perfect => "Perfect score! Excellent work!",
            Grade::Great => "Great job! You're doing well!",
            Grade::Good => "Good effort! Keep practicing!",
            Grade::KeepPracticing => "Keep studying and try again!",
        }
    }
}

/// Progress through one quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSession {
    quiz: Quiz,
    index: usize,
    selected: Option<String>,
    score: u32,
    completed: bool,
}

impl QuizSession {
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            index: 0,
            selected: None,
            score: 0,
            completed: false,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn question_index(&self) -> usize {
        self.index
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.completed {
            return None;
        }
        self.quiz.questions.get(self.index)
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total_questions(&self) -> u32 {
        self.quiz.questions.len() as u32
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Lock in an answer for the current question.
    ///
    /// Returns `None` when an answer is already locked or the quiz is over.
    pub fn select_answer(&mut self, answer: &str) -> Option<AnswerOutcome> {
        if self.selected.is_some() {
            return None;
        }
        let question = self.current_question()?;
        let correct = question.is_correct(answer);
        let correct_answer = question.correct_answer.clone();
        if correct {
            self.score += 1;
        }
        self.selected = Some(answer.to_string());
        Some(AnswerOutcome {
            correct,
            correct_answer,
        })
    }

    /// Move past an answered question. Yields the result once the last
    /// question has been answered.
    pub fn advance(&mut self) -> Option<QuizResult> {
        if self.completed || self.selected.is_none() {
            return None;
        }
        self.selected = None;
        if self.index + 1 < self.quiz.questions.len() {
            self.index += 1;
            return None;
        }
        self.completed = true;
        let result = self.result();
        tracing::info!(quiz = self.quiz.id, score = result.score, total = result.total_questions, "quiz completed");
        Some(result)
    }

    pub fn result(&self) -> QuizResult {
        QuizResult {
            quiz_id: self.quiz.id,
            score: self.score,
            total_questions: self.total_questions(),
        }
    }

    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score, self.total_questions())
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.selected = None;
        self.score = 0;
        self.completed = false;
    }
}

/// All quizzes plus the category search bar and the quiz being taken.
#[derive(Debug, Clone)]
pub struct QuizBoard {
    quizzes: Vec<Quiz>,
    search: SearchSession,
    session: Option<QuizSession>,
}

impl QuizBoard {
    /// The first quiz, if any, becomes the active one.
    pub fn new(quizzes: Vec<Quiz>) -> Self {
        let session = quizzes.first().cloned().map(QuizSession::new);
        Self {
            quizzes,
            search: SearchSession::new(),
            session,
        }
    }

    pub fn with_search(mut self, search: SearchSession) -> Self {
        self.search = search;
        self
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn search(&self) -> &SearchSession {
        &self.search
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut QuizSession> {
        self.session.as_mut()
    }

    /// Text input only. Never changes the active quiz.
    pub fn set_query(&mut self, text: impl Into<String>) -> &[String] {
        self.search.set_query(text, &self.quizzes)
    }

    /// Text input only. Never changes the active quiz.
    pub fn select_suggestion(&mut self, suggestion: &str) {
        self.search.select_suggestion(suggestion);
    }

    /// Quizzes matching the current search.
    pub fn results(&self) -> Vec<&Quiz> {
        self.search.results(&self.quizzes)
    }

    /// Make the first quiz in `category` (case-insensitive) active, starting
    /// from the first question. Returns false when no quiz matches.
    pub fn switch_quiz(&mut self, category: &str) -> bool {
        let Some(quiz) = self
            .quizzes
            .iter()
            .find(|q| q.category.eq_ignore_ascii_case(category.trim()))
        else {
            return false;
        };
        tracing::debug!(quiz = quiz.id, category = %quiz.category, "switching quiz");
        self.session = Some(QuizSession::new(quiz.clone()));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(id: u64, category: &str) -> Quiz {
        Quiz {
            id,
            title: format!("{category} Quiz"),
            category: category.to_string(),
            questions: vec![
                Question::new(1, "2 + 2?", &["3", "4"], "4"),
                Question::new(2, "3 * 3?", &["9", "6"], "9"),
            ],
        }
    }

    #[test]
    fn answer_is_locked_once_selected() {
        let mut s = QuizSession::new(quiz(1, "Math"));
        let outcome = s.select_answer("3").unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.correct_answer, "4");
        assert!(s.select_answer("4").is_none());
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn advance_requires_answer() {
        let mut s = QuizSession::new(quiz(1, "Math"));
        assert!(s.advance().is_none());
        assert_eq!(s.question_index(), 0);
    }

    #[test]
    fn completes_after_last_question() {
        let mut s = QuizSession::new(quiz(7, "Math"));
        s.select_answer("4");
        assert!(s.advance().is_none());
        s.select_answer("9");
        let result = s.advance().unwrap();
        assert_eq!(result, QuizResult { quiz_id: 7, score: 2, total_questions: 2 });
        assert!(s.is_completed());
        assert!(s.current_question().is_none());
        assert!(s.select_answer("9").is_none());
        assert_eq!(s.grade(), Grade::Perfect);

        s.reset();
        assert_eq!(s.score(), 0);
        assert_eq!(s.question_index(), 0);
        assert!(!s.is_completed());
    }

    #[test]
    fn grade_thresholds() {
        assert_eq!(Grade::from_score(5, 5), Grade::Perfect);
        assert_eq!(Grade::from_score(4, 5), Grade::Great);
        assert_eq!(Grade::from_score(3, 5), Grade::Good);
        assert_eq!(Grade::from_score(2, 5), Grade::KeepPracticing);
    }

    #[test]
    fn validate_checks_correct_answer_is_an_option() {
        let mut q = quiz(1, "Math");
        assert!(q.validate().is_ok());
        q.questions[0].correct_answer = "5".into();
        assert!(q.validate().is_err());
    }

    #[test]
    fn selecting_suggestion_does_not_switch_quiz() {
        let mut board = QuizBoard::new(vec![quiz(1, "Math"), quiz(2, "Physics")]);
        board.session_mut().unwrap().select_answer("4");

        assert_eq!(board.set_query("phy").to_vec(), vec!["Physics"]);
        board.select_suggestion("Physics");

        let session = board.session().unwrap();
        assert_eq!(session.quiz().id, 1);
        assert_eq!(session.score(), 1);
        assert_eq!(board.search().query(), "Physics");
        assert_eq!(board.results().len(), 1);
    }

    #[test]
    fn switch_quiz_resets_session() {
        let mut board = QuizBoard::new(vec![quiz(1, "Math"), quiz(2, "Physics")]);
        board.session_mut().unwrap().select_answer("4");

        assert!(board.switch_quiz("physics"));
        let session = board.session().unwrap();
        assert_eq!(session.quiz().id, 2);
        assert_eq!(session.score(), 0);
        assert!(session.selected_answer().is_none());

        assert!(!board.switch_quiz("History"));
        assert_eq!(board.session().unwrap().quiz().id, 2);
    }
}
