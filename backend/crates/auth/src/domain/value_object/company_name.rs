//! CompanyName Value Object

use derive_more::Display;
use i18n::Message;
use serde::{Deserialize, Serialize};

use super::normalize_text;

/// Maximum company name length, in characters
pub const COMPANY_NAME_MAX_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub struct CompanyName(String);

impl CompanyName {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, Message> {
        let name = normalize_text(raw.as_ref());

        if name.is_empty() {
            return Err(Message::new("auth.errors.companyNameRequired"));
        }
        if name.chars().count() > COMPANY_NAME_MAX_LENGTH {
            return Err(
                Message::new("auth.errors.companyNameTooLong").with("max", COMPANY_NAME_MAX_LENGTH)
            );
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
