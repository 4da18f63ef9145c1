/// Configuration management for the API server
///
/// This module loads configuration from environment variables and provides
/// a type-safe configuration struct. Every variable is optional.
///
/// # Environment Variables
///
/// - `API_HOST`: Host to bind to (default: 0.0.0.0)
/// - `API_PORT`: Port to bind to (default: 8080)
/// - `CORS_ORIGINS`: Comma-separated allowed origins, `*` for any (default: *)
/// - `ORDERS_ADMIN_USERNAME`: Basic-auth user for order creation (default: admin)
/// - `ORDERS_ADMIN_PASSWORD`: Basic-auth password for order creation (default: secret)
/// - `RUST_LOG`: Log filter (default: classroom_api=debug,tower_http=debug)
///
/// # Example
///
/// ```no_run
/// use classroom_api::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```

use classroom_shared::auth::CredentialPair;
use serde::{Deserialize, Serialize};
use std::env;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Credentials guarding order creation
    pub auth: AuthConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Allowed CORS origins (`*` means permissive)
    pub cors_origins: Vec<String>,
}

/// Order administrator credentials
///
/// A single fixed pair stands in for a credential store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                cors_origins: vec!["*".to_string()],
            },
            auth: AuthConfig {
                username: "admin".to_string(),
                password: "secret".to_string(),
            },
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// Unset variables fall back to [`Config::default`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `API_PORT` is not a valid port number
    /// - The order admin username or password is empty
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let host = env::var("API_HOST").unwrap_or(defaults.api.host);
        let port = match env::var("API_PORT") {
            Ok(port) => port.parse::<u16>()?,
            Err(_) => defaults.api.port,
        };
        let cors_origins = match env::var("CORS_ORIGINS") {
            Ok(origins) => parse_origins(&origins),
            Err(_) => defaults.api.cors_origins,
        };

        let username = env::var("ORDERS_ADMIN_USERNAME").unwrap_or(defaults.auth.username);
        let password = env::var("ORDERS_ADMIN_PASSWORD").unwrap_or(defaults.auth.password);

        if username.is_empty() || password.is_empty() {
            anyhow::bail!("ORDERS_ADMIN_USERNAME and ORDERS_ADMIN_PASSWORD must not be empty");
        }

        Ok(Self {
            api: ApiConfig {
                host,
                port,
                cors_origins,
            },
            auth: AuthConfig { username, password },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }

    /// Credential pair accepted on order creation
    pub fn order_admin(&self) -> CredentialPair {
        CredentialPair::new(&self.auth.username, &self.auth.password)
    }

    /// Whether any origin is allowed
    pub fn cors_permissive(&self) -> bool {
        self.api.cors_origins.iter().any(|origin| origin == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
