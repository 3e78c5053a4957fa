//! Identity token creation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use tasklist_core::config::{AuthConfig, TOKEN_TTL_DAYS_RANGE};
use tasklist_core::error::AppError;
use tasklist_core::types::UserId;

use super::claims::Claims;

/// Creates signed HS256 identity tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token lifetime in days.
    ttl_days: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_days", &self.ttl_days)
            .finish()
    }
}

/// A freshly issued token and its expiry.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// Encoded token.
    pub token: String,
    /// Absolute expiry.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// The lifetime is clamped to `TOKEN_TTL_DAYS_RANGE`; `AppConfig::load`
    /// already rejects values outside it.
    pub fn new(config: &AuthConfig) -> Self {
        let days = config.token_ttl_days.clamp(
            *TOKEN_TTL_DAYS_RANGE.start(),
            *TOKEN_TTL_DAYS_RANGE.end(),
        );
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_days: i64::try_from(days).unwrap_or(7),
        }
    }

    /// Issues a token for `user_id` expiring `ttl_days` from now.
    pub fn issue(&self, user_id: UserId) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(self.ttl_days);

        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode identity token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}
