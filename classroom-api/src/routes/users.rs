/// User listing endpoint
///
/// # Endpoint
///
/// ```text
/// GET /users?page=1&size=20
/// ```
///
/// Both parameters are optional (defaults `page=1`, `size=20`) and must be
/// integers >= 1. A page past the end returns `[]`.
///
/// # Errors
///
/// - `422 Unprocessable Entity`: non-integer or non-positive `page`/`size`

use super::PageQuery;
use crate::{app::AppState, error::ApiResult, extract::ApiQuery};
use axum::{extract::State, Json};
use classroom_shared::{models::user::User, pagination::DEFAULT_USER_PAGE_SIZE};

/// Lists one page of the static users
pub async fn list_users(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResult<Json<Vec<User>>> {
    let page = query.into_page(DEFAULT_USER_PAGE_SIZE)?;
    let users = state.users.list().await;

    Ok(Json(page.slice(&users).to_vec()))
}
