//! API DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::locale::Locale;

/// A selectable language
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleOption {
    pub code: Locale,
    pub label: &'static str,
}

impl From<Locale> for LocaleOption {
    fn from(locale: Locale) -> Self {
        Self {
            code: locale,
            label: locale.native_name(),
        }
    }
}

/// GET /api/locale
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleResponse {
    pub locale: Locale,
    pub default_locale: Locale,
    pub locales: Vec<LocaleOption>,
}

/// POST /api/locale
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLocaleRequest {
    #[serde(default)]
    pub locale: String,
}

/// GET /api/i18n/{locale}
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationsResponse {
    pub locale: Locale,
    pub messages: &'static Value,
}
