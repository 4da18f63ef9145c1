/// Order endpoints
///
/// # Endpoints
///
/// - `GET /orders?page=1&size=10` - Paginated listing (default size 10)
/// - `POST /orders` - Append one order, requires HTTP Basic credentials
///
/// Authentication happens in [`crate::middleware::basic_auth`]; by the time
/// `create_order` runs the caller is known to be the order administrator.

use super::PageQuery;
use crate::{
    app::AppState,
    error::ApiResult,
    extract::{ApiJson, ApiQuery},
};
use axum::{extract::State, Json};
use classroom_shared::{models::order::Order, pagination::DEFAULT_ORDER_PAGE_SIZE};

/// Lists one page of orders
///
/// # Errors
///
/// - `422 Unprocessable Entity`: non-integer or non-positive `page`/`size`
pub async fn list_orders(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResult<Json<Vec<Order>>> {
    let page = query.into_page(DEFAULT_ORDER_PAGE_SIZE)?;
    let orders = state.orders.list().await;

    Ok(Json(page.slice(&orders).to_vec()))
}

/// Appends an order verbatim
///
/// # Endpoint
///
/// ```text
/// POST /orders
/// Authorization: Basic YWRtaW46c2VjcmV0
/// Content-Type: application/json
///
/// {
///   "identifier": 1,
///   "customerName": "Rakoto",
///   "creationDatetime": "2026-10-18T09:30:00Z",
///   "totalAmount": "42.50"
/// }
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: missing or wrong credentials (from the middleware)
/// - `422 Unprocessable Entity`: malformed order
pub async fn create_order(
    State(state): State<AppState>,
    ApiJson(order): ApiJson<Order>,
) -> Json<Order> {
    let order = state.orders.insert(order).await;
    tracing::info!(identifier = order.identifier, "created order");

    Json(order)
}
