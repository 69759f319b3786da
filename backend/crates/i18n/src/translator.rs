//! Translator
//!
//! A locale bound to its catalog. Missing keys, empty strings and non-string
//! values all translate to the key itself, so a broken catalog degrades to
//! readable identifiers instead of failing a request.

use serde_json::Value;

use crate::catalog;
use crate::locale::Locale;

#[derive(Debug, Clone, Copy)]
pub struct Translator {
    locale: Locale,
    table: &'static Value,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            table: catalog::table(locale),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Raw catalog node at `key`
    pub fn lookup(&self, key: &str) -> Option<&'static Value> {
        catalog::lookup(self.table, key)
    }

    /// Translate `key`, falling back to the key
    pub fn t(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            _ => key.to_string(),
        }
    }

    /// Translate `key` and fill its `{placeholders}`
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        catalog::interpolate(&self.t(key), params)
    }

    /// Translate a key pointing at an array of strings. Non-string items are skipped.
    pub fn t_list(&self, key: &str) -> Vec<String> {
        self.lookup(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of items under an array key (0 when absent)
    pub fn count(&self, key: &str) -> usize {
        self.lookup(key)
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Locale::DEFAULT)
    }
}

impl From<Locale> for Translator {
    fn from(locale: Locale) -> Self {
        Self::new(locale)
    }
}

/// One-shot translation
pub fn translate(locale: Locale, key: &str) -> String {
    Translator::new(locale).t(key)
}
