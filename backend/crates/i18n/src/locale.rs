//! Locale Value Object
//!
//! Resolution order for a request:
//! 1. `locale` cookie
//! 2. first supported language tag of `Accept-Language`
//! 3. [`Locale::DEFAULT`] (French)

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header, request::Parts};
use serde::{Deserialize, Serialize};

use crate::error::I18nError;

/// Name of the cookie holding the selected locale
pub const LOCALE_COOKIE: &str = "locale";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    Es,
}

impl Locale {
    pub const DEFAULT: Locale = Locale::Fr;

    /// Every supported locale, default first
    pub const ALL: [Locale; 2] = [Locale::Fr, Locale::Es];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::Es => "es",
        }
    }

    /// Name of the language written in that language
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::Fr => "Français",
            Locale::Es => "Español",
        }
    }

    /// Accepts bare codes and region-qualified tags (`es-MX`, `fr_CA`)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or(code)
            .to_ascii_lowercase();

        match primary.as_str() {
            "fr" => Some(Locale::Fr),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }

    /// Best supported locale from an `Accept-Language` value, honouring q-weights
    pub fn from_accept_language(value: &str) -> Option<Self> {
        let mut candidates: Vec<(f32, usize, Locale)> = value
            .split(',')
            .enumerate()
            .filter_map(|(position, entry)| {
                let mut parts = entry.split(';');
                let locale = Locale::from_code(parts.next()?)?;
                let weight = parts
                    .filter_map(|p| p.trim().strip_prefix("q="))
                    .find_map(|q| q.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                (weight > 0.0).then_some((weight, position, locale))
            })
            .collect();

        // Highest weight first, header order breaks ties
        candidates.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));
        candidates.first().map(|(_, _, locale)| *locale)
    }

    /// Resolve the locale of a request from its headers
    pub fn from_headers(headers: &HeaderMap) -> Self {
        platform::cookie::extract_cookie(headers, LOCALE_COOKIE)
            .and_then(|value| Locale::from_code(&value))
            .or_else(|| {
                headers
                    .get(header::ACCEPT_LANGUAGE)
                    .and_then(|v| v.to_str().ok())
                    .and_then(Locale::from_accept_language)
            })
            .unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| I18nError::UnsupportedLocale(s.trim().to_string()))
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Locale::from_headers(&parts.headers))
    }
}
