pub mod certificate_issuance;
pub mod questionnaire;
pub mod quiz_attempt;
