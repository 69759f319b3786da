//! Certificate Issuance Entity
//!
//! Server-side record that a participant downloaded their certificate.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateIssuance {
    /// Participant email (lowercased)
    pub email: String,
    pub completed: bool,
    /// Refreshed on every recording
    pub issued_at: DateTime<Utc>,
}

impl CertificateIssuance {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            completed: true,
            issued_at: Utc::now(),
        }
    }
}
