//! Authenticated Extractor
//!
//! Reads the [`Principal`] the session middleware left in the request
//! extensions.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use i18n::{Locale, Localized};
use kernel::principal::Principal;

use crate::error::TrainingError;

/// The signed-in participant; rejects with 401 when there is none
pub struct Authenticated(pub Principal);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = Localized<TrainingError>;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<Principal>() {
            Some(principal) => Ok(Authenticated(principal.clone())),
            None => Err(Localized::new(
                TrainingError::Unauthenticated,
                Locale::from_headers(&parts.headers),
            )),
        }
    }
}
