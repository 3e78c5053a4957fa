//! Authentication configuration.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Placeholder secret shipped in the default configuration.
pub const DEFAULT_JWT_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Accepted range for `token_ttl_days`.
pub const TOKEN_TTL_DAYS_RANGE: RangeInclusive<u64> = 1..=3650;

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Identity token lifetime in days.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_days: u64,
    /// Minimum password length accepted at sign-up.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl AuthConfig {
    /// Whether the signing secret is still the shipped placeholder.
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }

    /// Rejects settings that would produce unusable tokens.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.jwt_secret.is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must not be empty"));
        }
        if !TOKEN_TTL_DAYS_RANGE.contains(&self.token_ttl_days) {
            return Err(AppError::configuration(format!(
                "auth.token_ttl_days must be between {} and {}, got {}",
                TOKEN_TTL_DAYS_RANGE.start(),
                TOKEN_TTL_DAYS_RANGE.end(),
                self.token_ttl_days
            )));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_days: default_token_ttl(),
            password_min_length: default_password_min(),
        }
    }
}

fn default_jwt_secret() -> String {
    DEFAULT_JWT_SECRET.to_string()
}

fn default_token_ttl() -> u64 {
    7
}

fn default_password_min() -> usize {
    8
}
