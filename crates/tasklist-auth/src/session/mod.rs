//! Resolution of a request's `Authorization` header to an acting user.

pub mod resolver;

pub use resolver::SessionResolver;
