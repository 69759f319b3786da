//! Application Configuration

/// Organisation printed at the top of every certificate
pub const DEFAULT_CERTIFICATE_ISSUER: &str = "SOGEA SATOM";

#[derive(Debug, Clone)]
pub struct TrainingConfig {
    pub certificate_issuer: String,
    /// Attachment name of the downloaded PDF
    pub certificate_file_name: String,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            certificate_issuer: DEFAULT_CERTIFICATE_ISSUER.to_string(),
            certificate_file_name: "certificat.pdf".to_string(),
        }
    }
}

impl TrainingConfig {
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        let issuer = issuer.into();
        if !issuer.trim().is_empty() {
            self.certificate_issuer = issuer.trim().to_string();
        }
        self
    }

    /// `Content-Disposition` value for the certificate download
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.certificate_file_name)
    }
}
