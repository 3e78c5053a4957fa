//! Authentication service: credential checks and token issuance.

use std::sync::Arc;

use tracing::info;

use tasklist_auth::jwt::{IssuedToken, TokenCodec};
use tasklist_auth::password::{PasswordHasher, PasswordValidator};
use tasklist_core::error::AppError;
use tasklist_database::store::UserStore;
use tasklist_entity::user::{CreateUser, User};

use crate::context::RequestContext;

/// Handles sign-up and sign-in.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Credential store.
    users: Arc<dyn UserStore>,
    /// Token codec.
    codec: Arc<TokenCodec>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Sign-up policy.
    validator: Arc<PasswordValidator>,
}

/// Sign-up input.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SignUpInput {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Avatar reference.
    pub avatar: Option<String>,
}

/// Result of a successful sign-up or sign-in.
#[derive(Debug, Clone)]
pub struct AuthPayload {
    /// The authenticated user.
    pub user: User,
    /// Token identifying the user.
    pub token: IssuedToken,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        codec: Arc<TokenCodec>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            users,
            codec,
            hasher,
            validator,
        }
    }

    /// Registers a new user and signs them in.
    ///
    /// Email uniqueness is left to the store, which answers a duplicate
    /// with `Conflict`.
    pub async fn sign_up(&self, input: SignUpInput) -> Result<AuthPayload, AppError> {
        self.validator.validate_identity(&input.name, &input.email)?;
        self.validator.validate(&input.password)?;

        let password_hash = self.hasher.hash_password(&input.password)?;
        let avatar = input
            .avatar
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());

        let user = self
            .users
            .create(&CreateUser {
                email: input.email.trim().to_string(),
                name: input.name.trim().to_string(),
                password_hash,
                avatar,
            })
            .await?;

        info!(user_id = %user.id, "User signed up");

        let token = self.codec.issue(user.id)?;
        Ok(AuthPayload { user, token })
    }

    /// Verifies credentials and issues a token.
    ///
    /// Unknown email and wrong password fail identically.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthPayload, AppError> {
        let Some(user) = self.users.find_by_email(email.trim()).await? else {
            self.hasher.verify_dummy(password);
            return Err(AppError::invalid_credentials());
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            info!(user_id = %user.id, "Sign-in rejected");
            return Err(AppError::invalid_credentials());
        }

        info!(user_id = %user.id, "User signed in");

        let token = self.codec.issue(user.id)?;
        Ok(AuthPayload { user, token })
    }

    /// Returns the acting user.
    pub fn me(&self, ctx: &RequestContext) -> Result<User, AppError> {
        ctx.require_user().cloned()
    }
}
