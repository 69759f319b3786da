//! Questionnaire Response Entity
//!
//! Nine free-text answers given after the training, one response per email.

use chrono::{DateTime, Utc};
use i18n::{Message, ValidationErrors};

/// Maximum answer length, in characters
pub const ANSWER_MAX_LENGTH: usize = 2000;

/// Question ids, in display order. They double as JSON field names.
pub const QUESTION_IDS: [&str; 9] = [
    "dispositif",
    "engagement",
    "identification",
    "formation",
    "procedure",
    "dispositifAlert",
    "certifierISO",
    "mepSystem",
    "intention",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionnaireAnswers {
    pub dispositif: String,
    pub engagement: String,
    pub identification: String,
    pub formation: String,
    pub procedure: String,
    pub dispositif_alert: String,
    pub certifier_iso: String,
    pub mep_system: String,
    pub intention: String,
}

impl QuestionnaireAnswers {
    /// Answers paired with their question id, in [`QUESTION_IDS`] order
    pub fn fields(&self) -> [(&'static str, &str); 9] {
        [
            ("dispositif", self.dispositif.as_str()),
            ("engagement", self.engagement.as_str()),
            ("identification", self.identification.as_str()),
            ("formation", self.formation.as_str()),
            ("procedure", self.procedure.as_str()),
            ("dispositifAlert", self.dispositif_alert.as_str()),
            ("certifierISO", self.certifier_iso.as_str()),
            ("mepSystem", self.mep_system.as_str()),
            ("intention", self.intention.as_str()),
        ]
    }

    fn fields_mut(&mut self) -> [&mut String; 9] {
        [
            &mut self.dispositif,
            &mut self.engagement,
            &mut self.identification,
            &mut self.formation,
            &mut self.procedure,
            &mut self.dispositif_alert,
            &mut self.certifier_iso,
            &mut self.mep_system,
            &mut self.intention,
        ]
    }

    /// Trim every answer, then require each to be non-blank and bounded
    pub fn validated(mut self) -> Result<Self, ValidationErrors> {
        for answer in self.fields_mut() {
            let trimmed = answer.trim();
            if trimmed.len() != answer.len() {
                *answer = trimmed.to_string();
            }
        }

        let mut errors = ValidationErrors::new();
        for (id, answer) in self.fields() {
            if answer.is_empty() {
                errors.add(id, "questionnaire.errors.answerRequired");
            } else if answer.chars().count() > ANSWER_MAX_LENGTH {
                errors.add(
                    id,
                    Message::new("questionnaire.errors.answerTooLong").with("max", ANSWER_MAX_LENGTH),
                );
            }
        }

        if errors.is_empty() { Ok(self) } else { Err(errors) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionnaireResponse {
    /// Participant email (lowercased)
    pub email: String,
    pub answers: QuestionnaireAnswers,
    pub submitted_at: DateTime<Utc>,
}

impl QuestionnaireResponse {
    pub fn new(email: impl Into<String>, answers: QuestionnaireAnswers) -> Self {
        Self {
            email: email.into(),
            answers,
            submitted_at: Utc::now(),
        }
    }
}
