//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC-signed tokens, Base64)
//! - Password hashing (Argon2id, NIST SP 800-63B length rules)
//! - Cookie building and parsing
//! - Client identification (User-Agent fingerprint, IP)

pub mod client;
pub mod cookie;
pub mod crypto;
pub mod password;
