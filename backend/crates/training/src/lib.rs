//! Training Backend Module
//!
//! - `domain/` - quiz answer key and scoring, questionnaire answers,
//!   certificate content, repository traits
//! - `application/` - use cases
//! - `infra/` - PostgreSQL and in-memory repositories, certificate PDF
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Records hang off the participant's email, taken from the
//! `kernel::principal::Principal` the auth middleware attaches to requests.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::TrainingConfig;
pub use domain::repository::TrainingRepository;
pub use error::{TrainingError, TrainingResult};
pub use infra::{memory::MemoryTrainingRepository, postgres::PgTrainingRepository};
pub use presentation::router::training_router;
