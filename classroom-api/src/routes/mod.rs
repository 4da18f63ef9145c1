/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: `/ping` and `/health`
/// - `users`: Paginated static users
/// - `tasks`: Task CRUD
/// - `products`: Filtered product catalog
/// - `orders`: Order listing and credential-gated creation
/// - `profiles`: Profile creation, lookup and sub-object replacement

pub mod health;
pub mod orders;
pub mod products;
pub mod profiles;
pub mod tasks;
pub mod users;

use crate::error::{ApiError, ApiResult};
use classroom_shared::pagination::Page;
use serde::Deserialize;

/// Page-number query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl PageQuery {
    /// Validates into a [`Page`], filling in defaults
    pub fn into_page(self, default_size: i64) -> ApiResult<Page> {
        Ok(Page::new(
            self.page.unwrap_or(1),
            self.size.unwrap_or(default_size),
        )?)
    }
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}
