//! Pre-training Quiz
//!
//! Question and answer texts live in the translation catalog under
//! `questions.{index}`; only the answer key is fixed here.

use i18n::{Message, Translator, ValidationErrors};

/// Index of the correct answer for each question
pub const ANSWER_KEY: [usize; 10] = [1, 3, 0, 0, 3, 1, 0, 0, 3, 1];

/// Number of choices offered by each question
pub const ANSWER_COUNTS: [usize; 10] = [4, 4, 4, 2, 4, 2, 2, 2, 4, 4];

pub const QUESTION_COUNT: usize = ANSWER_KEY.len();

/// A question in the request locale, without its answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub index: usize,
    pub question: String,
    pub answers: Vec<String>,
}

pub fn localized_questions(t: &Translator) -> Vec<QuizQuestion> {
    (0..QUESTION_COUNT)
        .map(|index| QuizQuestion {
            index,
            question: t.t(&format!("questions.{index}.question")),
            answers: t.t_list(&format!("questions.{index}.answers")),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub score: usize,
    pub total: usize,
}

impl QuizScore {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.score as f64 / self.total as f64 * 100.0
    }
}

/// Score one answer index per question.
///
/// Every question must be answered with an index it offers.
pub fn score_answers(answers: &[usize]) -> Result<QuizScore, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if answers.len() != QUESTION_COUNT {
        errors.add(
            "answers",
            Message::new("quiz.errors.answerCount").with("total", QUESTION_COUNT),
        );
        return Err(errors);
    }

    for (index, (&answer, &count)) in answers.iter().zip(ANSWER_COUNTS.iter()).enumerate() {
        if answer >= count {
            errors.add(
                format!("answers[{index}]"),
                Message::new("quiz.errors.answerOutOfRange").with("question", index + 1),
            );
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let score = answers
        .iter()
        .zip(ANSWER_KEY.iter())
        .filter(|(answer, correct)| answer == correct)
        .count();

    Ok(QuizScore {
        score,
        total: QUESTION_COUNT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use i18n::Locale;

    #[test]
    fn test_answer_key_within_choices() {
        for (correct, count) in ANSWER_KEY.iter().zip(ANSWER_COUNTS.iter()) {
            assert!(correct < count);
        }
    }

    #[test]
    fn test_catalogs_match_answer_counts() {
        for locale in Locale::ALL {
            let questions = localized_questions(&Translator::new(locale));
            assert_eq!(questions.len(), QUESTION_COUNT);
            for (question, count) in questions.iter().zip(ANSWER_COUNTS.iter()) {
                assert_eq!(question.answers.len(), *count, "{locale} q{}", question.index);
                assert!(!question.question.starts_with("questions."));
            }
        }
    }

    #[test]
    fn test_perfect_score() {
        let score = score_answers(&ANSWER_KEY).unwrap();
        assert_eq!(score, QuizScore { score: 10, total: 10 });
        assert_eq!(score.percentage(), 100.0);
    }

    #[test]
    fn test_partial_score_counts_only_correct() {
        let mut answers = ANSWER_KEY;
        answers[0] = 0;
        answers[3] = 1;
        answers[9] = 2;
        let score = score_answers(&answers).unwrap();
        assert_eq!(score.score, 7);
        assert_eq!(score.percentage(), 70.0);
    }

    #[test]
    fn test_wrong_answer_count() {
        let errors = score_answers(&[1, 3, 0]).unwrap_err();
        let message = errors.get("answers").unwrap();
        assert_eq!(message.key(), "quiz.errors.answerCount");
        assert_eq!(message.params, vec![("total", "10".to_string())]);
    }

    #[test]
    fn test_out_of_range_answer() {
        let mut answers = ANSWER_KEY;
        answers[3] = 2; // two-choice question
        let errors = score_answers(&answers).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("answers[3]").unwrap().key(),
            "quiz.errors.answerOutOfRange"
        );
    }
}
