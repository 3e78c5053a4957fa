//! Sign-up input policy: password length, name, and email shape.

use tasklist_core::config::AuthConfig;
use tasklist_core::error::AppError;

/// Validates sign-up credentials against the configured policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length, in characters.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a new password.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        Ok(())
    }

    /// Validates the name and email submitted with a sign-up.
    pub fn validate_identity(&self, name: &str, email: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Name must not be empty"));
        }
        let email = email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(AppError::validation("Email address is invalid")),
        }
    }
}
