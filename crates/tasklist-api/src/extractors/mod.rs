//! Custom Axum extractors.

pub mod json;
pub mod path;
pub mod session;

pub use json::ValidatedJson;
pub use path::parse_id;
pub use session::{CurrentUser, Session};
