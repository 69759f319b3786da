//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use kernel::id::{SessionId, UserId};

use crate::domain::entity::{auth_session::AuthSession, credentials::Credentials, user::User};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user together with its credentials.
    ///
    /// Fails with `AuthError::EmailTaken` when the email is already registered.
    async fn insert_user(&self, user: &User, credentials: &Credentials) -> AuthResult<()>;

    async fn find_user_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    async fn find_user_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    async fn email_exists(&self, email: &Email) -> AuthResult<bool>;

    async fn update_user(&self, user: &User) -> AuthResult<()>;
}

/// Credentials repository trait
#[trait_variant::make(CredentialsRepository: Send)]
pub trait LocalCredentialsRepository {
    async fn find_credentials(&self, user_id: &UserId) -> AuthResult<Option<Credentials>>;

    async fn update_credentials(&self, credentials: &Credentials) -> AuthResult<()>;
}

/// Auth session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    async fn insert_session(&self, session: &AuthSession) -> AuthResult<()>;

    async fn find_session(&self, session_id: &SessionId) -> AuthResult<Option<AuthSession>>;

    /// Persist last activity and expiry
    async fn touch_session(&self, session: &AuthSession) -> AuthResult<()>;

    async fn delete_session(&self, session_id: &SessionId) -> AuthResult<()>;

    /// Delete expired sessions, returning how many were removed
    async fn cleanup_expired_sessions(&self) -> AuthResult<u64>;
}

/// Everything the auth use cases need from storage
pub trait AuthRepository:
    UserRepository + CredentialsRepository + SessionRepository + Send + Sync + 'static
{
}

impl<T> AuthRepository for T where
    T: UserRepository + CredentialsRepository + SessionRepository + Send + Sync + 'static
{
}
