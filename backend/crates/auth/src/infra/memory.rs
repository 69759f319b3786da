//! In-Memory Repository
//!
//! Used when no database is configured (development) and by tests.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use kernel::id::{SessionId, UserId};
use tokio::sync::RwLock;

use crate::domain::entity::{auth_session::AuthSession, credentials::Credentials, user::User};
use crate::domain::repository::{CredentialsRepository, SessionRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    credentials: HashMap<UserId, Credentials>,
    sessions: HashMap<SessionId, AuthSession>,
}

#[derive(Clone, Default)]
pub struct MemoryAuthRepository {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for MemoryAuthRepository {
    async fn insert_user(&self, user: &User, credentials: &Credentials) -> AuthResult<()> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }
        tables.users.insert(user.user_id, user.clone());
        tables
            .credentials
            .insert(credentials.user_id, credentials.clone());
        Ok(())
    }

    async fn find_user_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.tables.read().await.users.get(user_id).cloned())
    }

    async fn find_user_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| &u.email == email).cloned())
    }

    async fn email_exists(&self, email: &Email) -> AuthResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().any(|u| &u.email == email))
    }

    async fn update_user(&self, user: &User) -> AuthResult<()> {
        let mut tables = self.tables.write().await;
        if let Some(existing) = tables.users.get_mut(&user.user_id) {
            *existing = user.clone();
        }
        Ok(())
    }
}

impl CredentialsRepository for MemoryAuthRepository {
    async fn find_credentials(&self, user_id: &UserId) -> AuthResult<Option<Credentials>> {
        Ok(self.tables.read().await.credentials.get(user_id).cloned())
    }

    async fn update_credentials(&self, credentials: &Credentials) -> AuthResult<()> {
        let mut tables = self.tables.write().await;
        if let Some(existing) = tables.credentials.get_mut(&credentials.user_id) {
            *existing = credentials.clone();
        }
        Ok(())
    }
}

impl SessionRepository for MemoryAuthRepository {
    async fn insert_session(&self, session: &AuthSession) -> AuthResult<()> {
        let mut tables = self.tables.write().await;
        tables.sessions.insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_session(&self, session_id: &SessionId) -> AuthResult<Option<AuthSession>> {
        Ok(self.tables.read().await.sessions.get(session_id).cloned())
    }

    async fn touch_session(&self, session: &AuthSession) -> AuthResult<()> {
        let mut tables = self.tables.write().await;
        if let Some(existing) = tables.sessions.get_mut(&session.session_id) {
            existing.expires_at_ms = session.expires_at_ms;
            existing.last_activity_at = session.last_activity_at;
        }
        Ok(())
    }

    async fn delete_session(&self, session_id: &SessionId) -> AuthResult<()> {
        self.tables.write().await.sessions.remove(session_id);
        Ok(())
    }

    async fn cleanup_expired_sessions(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();
        let mut tables = self.tables.write().await;
        let before = tables.sessions.len();
        tables.sessions.retain(|_, s| s.expires_at_ms >= now_ms);
        Ok((before - tables.sessions.len()) as u64)
    }
}
