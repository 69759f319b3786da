//! User Entity
//!
//! The participant profile. Credentials live in [`super::credentials`].

use chrono::{DateTime, Utc};
use kernel::{id::UserId, principal::Principal};

use crate::domain::value_object::{
    company_name::CompanyName, email::Email, full_name::FullName, public_id::PublicId,
};

#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Public-facing nanoid identifier (URL-safe)
    pub public_id: PublicId,
    /// Unique, lowercased
    pub email: Email,
    pub full_name: FullName,
    pub company_name: CompanyName,
    /// Last successful sign-in
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: Email, full_name: FullName, company_name: CompanyName) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            public_id: PublicId::new(),
            email,
            full_name,
            company_name,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record successful login
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }

    /// The identity handed to other crates for this user
    pub fn to_principal(&self) -> Principal {
        Principal {
            user_id: self.user_id,
            public_id: self.public_id.to_string(),
            email: self.email.to_string(),
            full_name: self.full_name.to_string(),
            company_name: self.company_name.to_string(),
        }
    }
}
