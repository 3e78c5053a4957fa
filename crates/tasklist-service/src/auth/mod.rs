//! Sign-up, sign-in, and current-user lookup.

pub mod service;

pub use service::{AuthPayload, AuthService, SignUpInput};
