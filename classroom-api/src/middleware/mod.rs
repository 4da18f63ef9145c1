/// Middleware modules for the API server
///
/// - `basic_auth`: HTTP Basic credential check guarding order creation

pub mod basic_auth;
