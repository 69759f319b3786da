//! Authenticated Principal
//!
//! The auth middleware resolves the session cookie into a [`Principal`] and
//! stores it in the request extensions. Feature crates only depend on this
//! type, never on the auth crate itself.

use serde::Serialize;

use crate::id::UserId;

/// The signed-in user attached to a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    #[serde(skip)]
    pub user_id: UserId,
    pub public_id: String,
    /// Lowercased email, the key questionnaire answers and certificates hang off
    pub email: String,
    pub full_name: String,
    pub company_name: String,
}

impl Principal {
    /// Whether `email` (as typed by a client) designates this principal.
    ///
    /// Comparison ignores case and surrounding whitespace, the same
    /// normalization the email value object applies on registration.
    pub fn owns_email(&self, email: &str) -> bool {
        email.trim().eq_ignore_ascii_case(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal() -> Principal {
        Principal {
            user_id: UserId::new(),
            public_id: "V1StGXR8_Z5jdHi6B-myT".to_string(),
            email: "jane@example.com".to_string(),
            full_name: "Jane Doe".to_string(),
            company_name: "Acme".to_string(),
        }
    }

    #[test]
    fn test_owns_email() {
        let p = principal();
        assert!(p.owns_email("jane@example.com"));
        assert!(p.owns_email("  Jane@Example.COM "));
        assert!(!p.owns_email("john@example.com"));
    }

    #[test]
    fn test_serialization_hides_user_id() {
        let json = serde_json::to_string(&principal()).unwrap();
        assert!(json.contains("fullName"));
        assert!(json.contains("companyName"));
        assert!(!json.contains("userId"));
    }
}
