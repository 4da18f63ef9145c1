//! # Classroom Shared Library
//!
//! Domain types and storage used by the classroom API server.
//!
//! ## Module Organization
//!
//! - `models`: Records exchanged over the API, plus seed data
//! - `store`: The `Repository` abstraction and its in-memory backing
//! - `pagination`: Page-number pagination over ordered collections
//! - `auth`: HTTP Basic credential checking

pub mod auth;
pub mod models;
pub mod pagination;
pub mod store;

/// Current version of the classroom shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
