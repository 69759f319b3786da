//! Certificate Content
//!
//! What the completion certificate says, resolved in one locale before
//! rendering.

use chrono::NaiveDate;
use i18n::Translator;

/// Printed when the profile has no name
pub const DEFAULT_PARTICIPANT: &str = "Participant";
/// Printed when the profile has no company
pub const DEFAULT_COMPANY: &str = "Entreprise";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateContent {
    pub issuer: String,
    pub full_name: String,
    pub company_name: String,
    pub date: NaiveDate,
}

impl CertificateContent {
    pub fn new(
        issuer: impl Into<String>,
        full_name: &str,
        company_name: &str,
        date: NaiveDate,
    ) -> Self {
        let or_default = |value: &str, default: &str| {
            let value = value.trim();
            if value.is_empty() { default.to_string() } else { value.to_string() }
        };

        Self {
            issuer: issuer.into(),
            full_name: or_default(full_name, DEFAULT_PARTICIPANT),
            company_name: or_default(company_name, DEFAULT_COMPANY),
            date,
        }
    }

    /// `dd/mm/yyyy`
    pub fn formatted_date(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    pub fn text(&self, t: &Translator) -> CertificateText {
        CertificateText {
            header: self.issuer.clone(),
            certifies: t.t("certificate.certifies"),
            name_line: format!(
                "{} {} {}",
                self.full_name.to_uppercase(),
                t.t("certificate.company"),
                self.company_name.to_uppercase()
            ),
            completed: t.t("certificate.completed"),
            course: t.t("certificate.course"),
            date_label: t.t("certificate.date"),
            date: self.formatted_date(),
        }
    }
}

/// Every line printed on the certificate, top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateText {
    pub header: String,
    pub certifies: String,
    pub name_line: String,
    pub completed: String,
    pub course: String,
    pub date_label: String,
    pub date: String,
}
