//! Value Object Module

pub mod company_name;
pub mod email;
pub mod full_name;
pub mod public_id;
pub mod user_password;

use unicode_normalization::UnicodeNormalization;

/// NFKC, control characters dropped, whitespace runs collapsed, trimmed
pub(crate) fn normalize_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().filter(|c| !c.is_control() || c.is_whitespace()).collect();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}
