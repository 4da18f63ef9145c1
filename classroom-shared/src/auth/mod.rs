/// Authentication utilities
///
/// The only protected endpoint (order creation) uses HTTP Basic credentials
/// checked against one configured username/password pair. This is a
/// placeholder, not a credential store.
///
/// # Modules
///
/// - [`basic`]: Basic header parsing and constant-time credential checks

pub mod basic;

pub use basic::{BasicCredentials, CredentialPair, CredentialsError};
