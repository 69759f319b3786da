//! Presentation Layer
//!
//! HTTP handlers, DTOs, the authenticated extractor, and router.

pub mod dto;
pub mod extractor;
pub mod handlers;
pub mod router;

pub use extractor::Authenticated;
pub use handlers::TrainingAppState;
pub use router::training_router;
