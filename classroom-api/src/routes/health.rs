/// Health check endpoints
///
/// # Endpoints
///
/// ```text
/// GET /ping     -> 200 text/plain "pong"
/// GET /health   -> 200 application/json
/// ```
///
/// # Response (`/health`)
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "API Ping",
///   "description": "Une API qui répond \"pong\" à un ping.",
///   "version": "0.1.0"
/// }
/// ```

use axum::Json;
use serde::{Deserialize, Serialize};

/// Service title reported by `/health`
pub const SERVICE_NAME: &str = "API Ping";

/// Service description reported by `/health`
pub const SERVICE_DESCRIPTION: &str = "Une API qui répond \"pong\" à un ping.";

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service title
    pub service: String,

    /// Service description
    pub description: String,

    /// Application version
    pub version: String,
}

/// Liveness probe, answers `pong` as plain text
pub async fn ping() -> &'static str {
    "pong"
}

/// Health check handler
///
/// There are no external dependencies to probe, so this always reports
/// `healthy`.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        description: SERVICE_DESCRIPTION.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
