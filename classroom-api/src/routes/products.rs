/// Product catalog endpoint
///
/// # Endpoint
///
/// ```text
/// GET /products?limit=2&q=lait
/// ```
///
/// `q` keeps products whose name contains it, ignoring case; `limit` then
/// keeps at most that many from the start. Both are optional.
///
/// # Errors
///
/// - `422 Unprocessable Entity`: `limit` is not an integer >= 1

use crate::{app::AppState, error::ApiResult, extract::ApiQuery};
use axum::{extract::State, Json};
use classroom_shared::models::product::{Product, ProductFilter};
use serde::Deserialize;

/// Catalog query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub limit: Option<i64>,
    pub q: Option<String>,
}

/// Lists the filtered catalog
pub async fn list_products(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ProductQuery>,
) -> ApiResult<Json<Vec<Product>>> {
    let filter = ProductFilter::new(query.q, query.limit)?;
    let products = state.products.list().await;

    Ok(Json(filter.apply(products)))
}
