/// Request extractors that reject with [`ApiError`]
///
/// Axum's stock `Json`, `Query` and `Path` extractors answer bad input with
/// plain-text rejections and a mix of 400/415/422 statuses. These wrappers
/// run the stock extractor and turn any rejection into
/// `ApiError::ValidationError`, so malformed input always comes back as a
/// structured 422 before a handler runs.
///
/// # Example
///
/// ```no_run
/// use classroom_api::extract::{ApiJson, ApiPath};
/// use classroom_shared::models::task::Task;
///
/// async fn handler(ApiPath(id): ApiPath<i64>, ApiJson(task): ApiJson<Task>) {
///     let _ = (id, task);
/// }
/// ```

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

/// JSON body extractor
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// Path parameter extractor
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
