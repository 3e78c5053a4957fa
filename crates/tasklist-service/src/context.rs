//! Request context carrying the acting user, if any.

use chrono::{DateTime, Utc};

use tasklist_core::error::AppError;
use tasklist_entity::user::User;

/// Context for the current request.
///
/// Built from the session resolver's outcome and passed into service
/// methods so that every operation knows *who* is acting. An anonymous
/// context is valid; protected operations reject it themselves.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The resolved user, or `None` for an anonymous request.
    pub user: Option<User>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Context for a request with no resolved identity.
    pub fn anonymous() -> Self {
        Self {
            user: None,
            request_time: Utc::now(),
        }
    }

    /// Context for a request acting as `user`.
    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            request_time: Utc::now(),
        }
    }

    /// Returns the acting user or an `AuthenticationRequired` error.
    pub fn require_user(&self) -> Result<&User, AppError> {
        self.user.as_ref().ok_or_else(AppError::authentication_required)
    }
}
