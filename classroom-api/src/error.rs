/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// All handlers return `Result<T, ApiError>`, and the request extractors in
/// [`crate::extract`] reject with `ApiError` too, so every failure a client
/// sees has the same JSON shape:
///
/// ```json
/// {
///   "error": "validation_error",
///   "message": "Request validation failed",
///   "details": [{ "field": "size", "message": "size must be greater than or equal to 1" }]
/// }
/// ```
///
/// # Example
///
/// ```
/// use classroom_api::error::{ApiError, ApiResult};
///
/// fn find(id: i64) -> ApiResult<i64> {
///     if id == 1 {
///         Ok(id)
///     } else {
///         Err(ApiError::NotFound("Task not found".to_string()))
///     }
/// }
///
/// assert!(find(2).is_err());
/// ```

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use classroom_shared::{
    auth::CredentialsError, models::product::ProductFilterError, pagination::PageError,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::ValidationErrors;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Unauthorized (401), always sent with a Basic challenge
    Unauthorized(String),

    /// Not found (404)
    NotFound(String),

    /// Unprocessable entity (422) - validation errors
    ValidationError(Vec<ValidationErrorDetail>),
}

/// Validation error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorDetail {
    /// Field that failed validation
    pub field: String,

    /// Error message
    pub message: String,
}

impl ValidationErrorDetail {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code (e.g., "not_found", "unauthorized")
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationErrorDetail>>,
}

impl ApiError {
    /// Single-field validation error
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::ValidationError(vec![ValidationErrorDetail::new(field, message)])
    }

    /// Flattens `validator` field errors, prefixing each field with `prefix`
    ///
    /// An empty prefix leaves field names untouched.
    pub fn validation_details(prefix: &str, errors: &ValidationErrors) -> Vec<ValidationErrorDetail> {
        errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                let field = if prefix.is_empty() {
                    field.to_string()
                } else {
                    format!("{}.{}", prefix, field)
                };
                errors.iter().map(move |error| ValidationErrorDetail {
                    field: field.clone(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Validation failed".to_string()),
                })
            })
            .collect()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::ValidationError(errors) => {
                write!(f, "Validation failed: {} errors", errors.len())
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let challenge = matches!(self, ApiError::Unauthorized(_));

        let (status, error_code, message, details) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg, None),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::ValidationError(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                "Request validation failed".to_string(),
                Some(errors),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            message,
            details,
        });

        let mut response = (status, body).into_response();
        if challenge {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Basic"));
        }
        response
    }
}

/// Malformed or mistyped JSON bodies
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::invalid("body", rejection.body_text())
    }
}

/// Query strings that do not deserialize (e.g. `page=abc`)
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::invalid("query", rejection.body_text())
    }
}

/// Path segments of the wrong type (e.g. `/tasks/abc`)
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::invalid("path", rejection.body_text())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::ValidationError(ApiError::validation_details("", &errors))
    }
}

impl From<PageError> for ApiError {
    fn from(err: PageError) -> Self {
        let field = match err {
            PageError::InvalidPage => "page",
            PageError::InvalidSize => "size",
        };
        ApiError::invalid(field, err.to_string())
    }
}

impl From<ProductFilterError> for ApiError {
    fn from(err: ProductFilterError) -> Self {
        match err {
            ProductFilterError::InvalidLimit => ApiError::invalid("limit", err.to_string()),
        }
    }
}

/// A malformed `Authorization` header is treated like missing credentials
impl From<CredentialsError> for ApiError {
    fn from(err: CredentialsError) -> Self {
        ApiError::Unauthorized(format!("Invalid credentials: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_error_display() {
        let err = ApiError::Unauthorized("Missing credentials".to_string());
        assert_eq!(err.to_string(), "Unauthorized: Missing credentials");

        let err = ApiError::NotFound("Task not found".to_string());
        assert_eq!(err.to_string(), "Not found: Task not found");
    }

    #[test]
    fn test_validation_error() {
        let errors = vec![
            ValidationErrorDetail::new("page", "page must be greater than or equal to 1"),
            ValidationErrorDetail::new("size", "size must be greater than or equal to 1"),
        ];

        let err = ApiError::ValidationError(errors);
        assert_eq!(err.to_string(), "Validation failed: 2 errors");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::NotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::invalid("size", "bad").into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_unauthorized_carries_basic_challenge() {
        let response = ApiError::Unauthorized("Missing credentials".into()).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers().get(header::WWW_AUTHENTICATE).unwrap(), "Basic");
    }

    #[test]
    fn test_page_error_names_field() {
        match ApiError::from(PageError::InvalidSize) {
            ApiError::ValidationError(details) => assert_eq!(details[0].field, "size"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[derive(Validate)]
    struct Contact {
        #[validate(email(message = "Invalid email format"))]
        email: String,
    }

    #[test]
    fn test_validation_details_prefix() {
        let errors = Contact {
            email: "nope".to_string(),
        }
        .validate()
        .unwrap_err();

        let details = ApiError::validation_details("[0].personalInfo", &errors);
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].field, "[0].personalInfo.email");
        assert_eq!(details[0].message, "Invalid email format");
    }
}
