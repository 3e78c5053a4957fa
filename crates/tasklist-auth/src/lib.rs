//! # tasklist-auth
//!
//! Authentication and authorization for TaskList.
//!
//! ## Modules
//!
//! - `jwt`: identity token issuance and verification
//! - `password`: Argon2id password hashing and sign-up policy
//! - `session`: resolving a request's `Authorization` header to a user
//! - `acl`: collaborator checks on task lists

pub mod acl;
pub mod jwt;
pub mod password;
pub mod session;

pub use acl::CollaboratorChecker;
pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder, TokenCodec};
pub use password::{PasswordHasher, PasswordValidator};
pub use session::SessionResolver;
