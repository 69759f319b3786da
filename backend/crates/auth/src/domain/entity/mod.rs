pub mod auth_session;
pub mod credentials;
pub mod user;
