/// HTTP Basic authentication middleware
///
/// Guards order creation. The `Authorization` header is checked against the
/// configured order-admin pair before the request body is read, so a
/// rejected request never reaches the handler and never mutates anything.
///
/// # Failure
///
/// Missing, malformed or mismatching credentials all yield:
///
/// ```text
/// HTTP/1.1 401 Unauthorized
/// WWW-Authenticate: Basic
/// ```
///
/// # Example
///
/// ```no_run
/// use axum::{routing::post, Router};
/// use classroom_api::{app::AppState, config::Config, middleware::basic_auth::require_order_admin};
///
/// async fn create() -> &'static str { "created" }
///
/// let state = AppState::new(Config::default());
/// let app: Router = Router::new()
///     .route(
///         "/orders",
///         post(create).route_layer(axum::middleware::from_fn_with_state(
///             state.clone(),
///             require_order_admin,
///         )),
///     )
///     .with_state(state);
/// ```

use crate::{app::AppState, error::ApiError};
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use classroom_shared::auth::BasicCredentials;

/// Rejects the request unless it carries the order-admin credentials
pub async fn require_order_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!(path = %req.uri().path(), "missing basic credentials");
            ApiError::Unauthorized("Missing credentials".to_string())
        })?;

    let credentials = BasicCredentials::from_header(auth_header).map_err(|err| {
        tracing::warn!(error = %err, "malformed basic credentials");
        ApiError::from(err)
    })?;

    if !state.order_admin.verify(&credentials) {
        tracing::warn!(username = %credentials.username, "rejected basic credentials");
        return Err(ApiError::Unauthorized(
            "Incorrect username or password".to_string(),
        ));
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{body::Body, http::StatusCode, routing::post, Router};
    use tower::Service as _;

    fn app() -> Router {
        async fn handler() -> &'static str {
            "ok"
        }

        let state = AppState::new(Config::default());
        Router::new()
            .route(
                "/guarded",
                post(handler).route_layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    require_order_admin,
                )),
            )
            .with_state(state)
    }

    fn request(authorization: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/guarded");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_accepts_configured_pair() {
        // "admin:secret"
        let response = app()
            .call(request(Some("Basic YWRtaW46c2VjcmV0")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rejects_missing_header() {
        let response = app().call(request(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers().get(header::WWW_AUTHENTICATE).unwrap(), "Basic");
    }

    #[tokio::test]
    async fn test_rejects_wrong_password() {
        // "admin:wrong"
        let response = app()
            .call(request(Some("Basic YWRtaW46d3Jvbmc=")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_rejects_bearer_scheme() {
        let response = app().call(request(Some("Bearer token"))).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
    }
}
