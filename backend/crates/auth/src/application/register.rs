//! Register Use Case
//!
//! Creates a participant account.

use std::sync::Arc;

use i18n::ValidationErrors;

use crate::application::config::AuthConfig;
use crate::domain::entity::{credentials::Credentials, user::User};
use crate::domain::repository::AuthRepository;
use crate::domain::value_object::{
    company_name::CompanyName,
    email::Email,
    full_name::FullName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

pub struct RegisterInput {
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    pub password: String,
    /// Checked only when the client sends it
    pub confirm_password: Option<String>,
}

#[derive(Debug)]
pub struct RegisterOutput {
    pub public_id: String,
}

pub struct RegisterUseCase<R: AuthRepository> {
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R: AuthRepository> RegisterUseCase<R> {
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let mut errors = ValidationErrors::new();

        let full_name = errors.check("fullName", FullName::new(&input.full_name));
        let email = errors.check("email", Email::new(&input.email));
        let company_name = errors.check("companyName", CompanyName::new(&input.company_name));

        if let Some(confirm) = &input.confirm_password {
            if confirm.is_empty() {
                errors.add("confirmPassword", "auth.errors.confirmPasswordRequired");
            } else if *confirm != input.password {
                errors.add("confirmPassword", "auth.errors.passwordsMismatch");
            }
        }

        let password = errors.check("password", RawPassword::new(input.password));

        let (Some(full_name), Some(email), Some(company_name), Some(password), true) =
            (full_name, email, company_name, password, errors.is_empty())
        else {
            return Err(AuthError::Validation(errors));
        };

        if self.repo.email_exists(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = UserPassword::from_raw(&password, self.config.pepper())?;

        let user = User::new(email, full_name, company_name);
        let credentials = Credentials::new(user.user_id, password_hash);

        // The unique index still guards concurrent registrations
        self.repo.insert_user(&user, &credentials).await?;

        tracing::info!(
            public_id = %user.public_id,
            email_domain = user.email.domain(),
            "User registered"
        );

        Ok(RegisterOutput {
            public_id: user.public_id.to_string(),
        })
    }
}
