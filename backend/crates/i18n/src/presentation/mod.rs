//! Presentation Layer
//!
//! Locale selection, change events and translation tables over HTTP.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::I18nAppState;
pub use router::i18n_router;
