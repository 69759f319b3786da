//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Participant registration (full name, email, company, password)
//! - Email + password sign-in with server-side sessions
//! - Session resolution into a `kernel::principal::Principal` for other crates
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Session cookie carries an HMAC-signed session id
//! - Sessions bound to client fingerprint (User-Agent)
//! - Temporary lockout after repeated failed sign-ins

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::repository::AuthRepository;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::MemoryAuthRepository, postgres::PgAuthRepository};
pub use presentation::middleware::{AuthMiddlewareState, resolve_session};
pub use presentation::router::auth_router;
