/// HTTP Basic credential parsing and checking
///
/// Parses an `Authorization: Basic <base64(user:password)>` header value and
/// compares it against a single configured credential pair.
///
/// # Example
///
/// ```
/// use classroom_shared::auth::basic::{BasicCredentials, CredentialPair};
///
/// // "admin:secret"
/// let presented = BasicCredentials::from_header("Basic YWRtaW46c2VjcmV0").unwrap();
/// let expected = CredentialPair::new("admin", "secret");
/// assert!(expected.verify(&presented));
/// ```

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

/// Basic credential parsing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialsError {
    /// Header value does not use the Basic scheme
    #[error("expected Basic authorization scheme")]
    WrongScheme,

    /// Payload is not valid base64
    #[error("credentials are not valid base64")]
    InvalidEncoding,

    /// Decoded payload is not UTF-8
    #[error("credentials are not valid UTF-8")]
    InvalidUtf8,

    /// Decoded payload has no `:` separator
    #[error("credentials must be of the form user:password")]
    MissingSeparator,
}

/// Credentials presented by a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    /// Parses an `Authorization` header value
    ///
    /// The scheme name is matched case-insensitively. The password is
    /// everything after the first `:`, so it may itself contain colons.
    pub fn from_header(value: &str) -> Result<Self, CredentialsError> {
        let (scheme, encoded) = value
            .trim()
            .split_once(' ')
            .ok_or(CredentialsError::WrongScheme)?;

        if !scheme.eq_ignore_ascii_case("basic") {
            return Err(CredentialsError::WrongScheme);
        }

        let decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|_| CredentialsError::InvalidEncoding)?;
        let decoded = String::from_utf8(decoded).map_err(|_| CredentialsError::InvalidUtf8)?;

        let (username, password) = decoded
            .split_once(':')
            .ok_or(CredentialsError::MissingSeparator)?;

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// The single credential pair a protected endpoint accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPair {
    username: String,
    password: String,
}

impl CredentialPair {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Checks presented credentials against this pair
    ///
    /// Both fields are always compared, in constant time.
    pub fn verify(&self, presented: &BasicCredentials) -> bool {
        let username_ok = constant_time_compare(&presented.username, &self.username);
        let password_ok = constant_time_compare(&presented.password, &self.password);
        username_ok & password_ok
    }
}

/// Constant-time string comparison
///
/// Returns early only on a length mismatch; otherwise every byte is compared.
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.bytes()
        .zip(b.bytes())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(raw: &str) -> String {
        format!("Basic {}", STANDARD.encode(raw))
    }

    #[test]
    fn test_parse_valid_header() {
        let creds = BasicCredentials::from_header(&header("admin:secret")).unwrap();
        assert_eq!(creds.username, "admin");
        assert_eq!(creds.password, "secret");
    }

    #[test]
    fn test_password_may_contain_colon() {
        let creds = BasicCredentials::from_header(&header("admin:se:cret")).unwrap();
        assert_eq!(creds.password, "se:cret");
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let value = header("admin:secret").replacen("Basic", "basic", 1);
        assert!(BasicCredentials::from_header(&value).is_ok());
    }

    #[test]
    fn test_rejects_malformed_headers() {
        assert_eq!(
            BasicCredentials::from_header("Bearer abc.def"),
            Err(CredentialsError::WrongScheme)
        );
        assert_eq!(
            BasicCredentials::from_header("Basic"),
            Err(CredentialsError::WrongScheme)
        );
        assert_eq!(
            BasicCredentials::from_header("Basic !!!notbase64"),
            Err(CredentialsError::InvalidEncoding)
        );
        assert_eq!(
            BasicCredentials::from_header(&header("adminsecret")),
            Err(CredentialsError::MissingSeparator)
        );
    }

    #[test]
    fn test_parses_known_header() {
        // "admin:secret"
        let creds = BasicCredentials::from_header("Basic YWRtaW46c2VjcmV0").unwrap();
        assert_eq!(creds.username, "admin");
        assert_eq!(creds.password, "secret");
    }

    #[test]
    fn test_verify() {
        let pair = CredentialPair::new("admin", "secret");

        let good = BasicCredentials::from_header(&header("admin:secret")).unwrap();
        let wrong_password = BasicCredentials::from_header(&header("admin:nope")).unwrap();
        let wrong_user = BasicCredentials::from_header(&header("root:secret")).unwrap();

        assert!(pair.verify(&good));
        assert!(!pair.verify(&wrong_password));
        assert!(!pair.verify(&wrong_user));
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("hello", "hello"));
        assert!(constant_time_compare("", ""));
        assert!(!constant_time_compare("hello", "world"));
        assert!(!constant_time_compare("hello", "hello2"));
        assert!(!constant_time_compare("", "not empty"));
    }
}
