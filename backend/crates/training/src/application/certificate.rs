//! Certificate Use Cases
//!
//! Rendering the PDF and recording its issuance are separate calls; the
//! client records issuance after a successful download.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use i18n::{Locale, Translator};
use kernel::principal::Principal;

use crate::application::config::TrainingConfig;
use crate::application::questionnaire::check_email;
use crate::domain::certificate::CertificateContent;
use crate::domain::entity::certificate_issuance::CertificateIssuance;
use crate::domain::repository::TrainingRepository;
use crate::error::{TrainingError, TrainingResult};
use crate::infra::pdf::render_certificate;

pub struct DownloadCertificateUseCase {
    config: Arc<TrainingConfig>,
}

impl DownloadCertificateUseCase {
    pub fn new(config: Arc<TrainingConfig>) -> Self {
        Self { config }
    }

    /// Render the participant's certificate dated `date`
    pub async fn execute(
        &self,
        principal: &Principal,
        locale: Locale,
        date: NaiveDate,
    ) -> TrainingResult<Vec<u8>> {
        let content = CertificateContent::new(
            self.config.certificate_issuer.as_str(),
            &principal.full_name,
            &principal.company_name,
            date,
        );
        let text = content.text(&Translator::new(locale));

        let bytes = tokio::task::spawn_blocking(move || render_certificate(&text))
            .await
            .map_err(|e| TrainingError::Internal(format!("Render task failed: {}", e)))??;

        tracing::info!(
            public_id = %principal.public_id,
            locale = %locale,
            size = bytes.len(),
            "Certificate rendered"
        );

        Ok(bytes)
    }

    pub async fn execute_today(
        &self,
        principal: &Principal,
        locale: Locale,
    ) -> TrainingResult<Vec<u8>> {
        self.execute(principal, locale, Utc::now().date_naive()).await
    }
}

pub struct RecordIssuanceUseCase<R: TrainingRepository> {
    repo: Arc<R>,
}

impl<R: TrainingRepository> RecordIssuanceUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Mark the certificate as issued. Repeats refresh the timestamp.
    pub async fn execute(&self, principal: &Principal, email: Option<&str>) -> TrainingResult<()> {
        check_email(principal, email)?;

        let issuance = CertificateIssuance::new(principal.email.as_str());
        self.repo.record_issuance(&issuance).await?;

        tracing::info!(public_id = %principal.public_id, "Certificate issuance recorded");
        Ok(())
    }
}

pub struct GetIssuanceUseCase<R: TrainingRepository> {
    repo: Arc<R>,
}

impl<R: TrainingRepository> GetIssuanceUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, principal: &Principal) -> TrainingResult<CertificateIssuance> {
        self.repo
            .find_issuance(&principal.email)
            .await?
            .ok_or(TrainingError::CertificateNotIssued)
    }
}
