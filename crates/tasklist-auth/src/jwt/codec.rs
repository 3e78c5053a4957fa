//! Token codec: issue and verify identity tokens with one injected secret.

use tasklist_core::config::AuthConfig;
use tasklist_core::error::AppError;
use tasklist_core::types::UserId;

use super::decoder::JwtDecoder;
use super::encoder::{IssuedToken, JwtEncoder};

/// Issues and verifies identity tokens.
///
/// The signing secret comes from [`AuthConfig`] at construction; nothing
/// is read from process-wide state.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl TokenCodec {
    /// Creates a codec from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoder: JwtEncoder::new(config),
            decoder: JwtDecoder::new(config),
        }
    }

    /// Issues a token embedding `user_id` and an absolute expiry.
    pub fn issue(&self, user_id: UserId) -> Result<IssuedToken, AppError> {
        self.encoder.issue(user_id)
    }

    /// Verifies a token and returns the embedded user ID.
    ///
    /// Fails with an `Authentication` error on a bad signature, a malformed
    /// payload, or a passed expiry.
    pub fn verify(&self, token: &str) -> Result<UserId, AppError> {
        self.decoder.decode(token).map(|claims| claims.user_id())
    }
}
