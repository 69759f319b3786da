//! FullName Value Object
//!
//! The participant's name as printed on the certificate.

use derive_more::Display;
use i18n::Message;
use serde::{Deserialize, Serialize};

use super::normalize_text;

/// Maximum full name length, in characters
pub const FULL_NAME_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub struct FullName(String);

impl FullName {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, Message> {
        let name = normalize_text(raw.as_ref());

        if name.is_empty() {
            return Err(Message::new("auth.errors.fullNameRequired"));
        }
        if name.chars().count() > FULL_NAME_MAX_LENGTH {
            return Err(Message::new("auth.errors.fullNameTooLong").with("max", FULL_NAME_MAX_LENGTH));
        }

        Ok(Self(name))
    }

    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_normalized() {
        let name = FullName::new("  Awa   Koné\t").unwrap();
        assert_eq!(name.as_str(), "Awa Koné");
    }

    #[test]
    fn test_full_name_required() {
        assert_eq!(
            FullName::new(" \n ").unwrap_err().key(),
            "auth.errors.fullNameRequired"
        );
    }

    #[test]
    fn test_full_name_too_long() {
        assert!(FullName::new("é".repeat(FULL_NAME_MAX_LENGTH)).is_ok());

        let err = FullName::new("é".repeat(FULL_NAME_MAX_LENGTH + 1)).unwrap_err();
        assert_eq!(err.key(), "auth.errors.fullNameTooLong");
        assert_eq!(err.params, vec![("max", "100".to_string())]);
    }
}
