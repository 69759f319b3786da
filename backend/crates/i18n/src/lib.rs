//! i18n (Internationalization) Backend Module
//!
//! - `locale` - supported locales and per-request resolution
//! - `catalog` - embedded `fr`/`es` translation tables, key lookup, interpolation
//! - `translator` - locale-bound lookup with fallback to the raw key
//! - `message` - translation keys with parameters, per-field validation messages
//! - `hub` - locale change broadcast between the tabs of one client
//! - `error` - rendering domain errors in the request locale
//! - `presentation/` - `/locale`, `/locale/events`, `/i18n/{locale}`

pub mod catalog;
pub mod config;
pub mod error;
pub mod hub;
pub mod locale;
pub mod message;
pub mod presentation;
pub mod translator;

#[cfg(test)]
mod tests;

pub use config::I18nConfig;
pub use error::{I18nError, LocalizeResult, Localized, LocalizedError};
pub use hub::LocaleHub;
pub use locale::Locale;
pub use message::{Message, ValidationErrors};
pub use presentation::router::i18n_router;
pub use translator::{Translator, translate};
