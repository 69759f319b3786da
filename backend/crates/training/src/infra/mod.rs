//! Infrastructure Layer
//!
//! PostgreSQL and in-memory repositories, certificate PDF rendering.

pub mod memory;
pub mod pdf;
pub mod postgres;
