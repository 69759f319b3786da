//! Quiz Attempt Entity
//!
//! The latest pre-quiz result of a participant.

use chrono::{DateTime, Utc};
use i18n::Locale;

use crate::domain::quiz::QuizScore;

#[derive(Debug, Clone, PartialEq)]
pub struct QuizAttempt {
    /// Participant email (lowercased)
    pub email: String,
    pub score: u16,
    pub total_questions: u16,
    /// Locale the questions were answered in
    pub locale: Locale,
    pub submitted_at: DateTime<Utc>,
}

impl QuizAttempt {
    pub fn new(email: impl Into<String>, score: QuizScore, locale: Locale) -> Self {
        Self {
            email: email.into(),
            score: score.score as u16,
            total_questions: score.total as u16,
            locale,
            submitted_at: Utc::now(),
        }
    }

    pub fn score(&self) -> QuizScore {
        QuizScore {
            score: usize::from(self.score),
            total: usize::from(self.total_questions),
        }
    }
}
