//! Session resolver.

use std::sync::Arc;

use tracing::debug;

use tasklist_core::result::AppResult;
use tasklist_database::store::UserStore;
use tasklist_entity::user::User;

use crate::jwt::TokenCodec;

const BEARER_PREFIX: &str = "Bearer ";

/// Turns an `Authorization` header value into the acting user, or `None`
/// for an anonymous request.
///
/// An invalid or expired token never fails the request; it only makes the
/// request anonymous. Store failures during the user lookup do propagate.
#[derive(Debug, Clone)]
pub struct SessionResolver {
    codec: Arc<TokenCodec>,
    users: Arc<dyn UserStore>,
}

impl SessionResolver {
    /// Creates a new resolver.
    pub fn new(codec: Arc<TokenCodec>, users: Arc<dyn UserStore>) -> Self {
        Self { codec, users }
    }

    /// Resolves the header value. `None` means no header was sent.
    pub async fn resolve(&self, header: Option<&str>) -> AppResult<Option<User>> {
        let Some(token) = header.and_then(extract_token) else {
            return Ok(None);
        };

        let user_id = match self.codec.verify(token) {
            Ok(id) => id,
            Err(e) => {
                debug!(reason = %e.message, "Ignoring invalid token");
                return Ok(None);
            }
        };

        let user = self.users.find_by_id(user_id).await?;
        if user.is_none() {
            debug!(user_id = %user_id, "Token subject no longer exists");
        }
        Ok(user)
    }
}

/// Accepts `Bearer <token>` or a bare token. Blank values count as absent.
fn extract_token(header: &str) -> Option<&str> {
    let header = header.trim();
    let token = header.strip_prefix(BEARER_PREFIX).unwrap_or(header).trim();
    if token.is_empty() { None } else { Some(token) }
}
