//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the vocabulary every training domain agrees on:
//! - Common error types and result aliases
//! - Per-field validation errors (keyed by translation key)
//! - Typed ID wrappers
//! - The authenticated [`principal::Principal`] passed from auth to feature crates
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
    pub mod validation;
}
pub mod id;
pub mod principal;
