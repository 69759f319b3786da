//! User Password Value Object
//!
//! Delegates to `platform::password` for hashing and policy, and reports
//! policy violations as translatable messages.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//!
//! let raw = RawPassword::new("Kilimandjaro-2024".to_string()).unwrap();
//! let hashed = UserPassword::from_raw(&raw, None).unwrap();
//! assert!(hashed.verify(&raw, None));
//! ```

use std::fmt;

use i18n::Message;
use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input, zeroized on drop
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Password chosen at registration, checked against the policy
    pub fn new(raw: String) -> Result<Self, Message> {
        ClearTextPassword::new(raw)
            .map(Self)
            .map_err(|e| match e {
                PasswordPolicyError::EmptyOrWhitespace => {
                    Message::new("auth.errors.passwordRequired")
                }
                PasswordPolicyError::TooShort { min, .. } => {
                    Message::new("auth.errors.passwordMin").with("min", min)
                }
                PasswordPolicyError::TooLong { max, .. } => {
                    Message::new("auth.errors.passwordMax").with("max", max)
                }
                PasswordPolicyError::InvalidCharacter => {
                    Message::new("auth.errors.passwordInvalid")
                }
                PasswordPolicyError::CommonPattern => Message::new("auth.errors.passwordWeak"),
            })
    }

    /// Password typed at sign-in; only presence is checked
    pub fn for_sign_in(raw: String) -> Result<Self, Message> {
        let password = ClearTextPassword::for_verification(raw);
        if password.is_empty() {
            return Err(Message::new("auth.errors.passwordRequired"));
        }
        Ok(Self(password))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Argon2id PHC string, safe to store
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> Result<Self, PasswordHashError> {
        raw.inner().hash(pepper).map(Self)
    }

    pub fn from_phc_string(phc_string: impl Into<String>) -> Result<Self, PasswordHashError> {
        HashedPassword::from_phc_string(phc_string).map(Self)
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Constant-time verification; `pepper` must match the one used to hash
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
