//! Translation Catalogs
//!
//! One JSON document per locale, embedded at compile time and parsed once.
//! Keys are dotted paths; numeric segments index into arrays
//! (`questions.3.answers.1`).

use std::sync::LazyLock;

use serde_json::Value;

use crate::locale::Locale;

const FR_JSON: &str = include_str!("../locales/fr.json");
const ES_JSON: &str = include_str!("../locales/es.json");

struct Catalogs {
    fr: Value,
    es: Value,
}

static CATALOGS: LazyLock<Catalogs> = LazyLock::new(|| Catalogs {
    fr: parse(Locale::Fr, FR_JSON),
    es: parse(Locale::Es, ES_JSON),
});

fn parse(locale: Locale, source: &str) -> Value {
    serde_json::from_str(source).unwrap_or_else(|e| {
        // Every lookup then falls back to its key
        tracing::error!(locale = %locale, error = %e, "Invalid translation catalog");
        Value::Null
    })
}

/// The whole translation table of `locale`
pub fn table(locale: Locale) -> &'static Value {
    match locale {
        Locale::Fr => &CATALOGS.fr,
        Locale::Es => &CATALOGS.es,
    }
}

/// Walk a dotted key through `root`
pub fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    if key.is_empty() {
        return None;
    }

    key.split('.').try_fold(root, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Replace `{name}` placeholders. Unknown names become the empty string;
/// braces that don't enclose a word are kept as-is.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let placeholder = after.find('}').map(|close| &after[..close]).filter(|name| {
            !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
        });

        match placeholder {
            Some(name) => {
                let value = params
                    .iter()
                    .find(|(k, _)| *k == name)
                    .map(|(_, v)| *v)
                    .unwrap_or("");
                out.push_str(value);
                rest = &after[name.len() + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
