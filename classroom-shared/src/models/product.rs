/// Product model, catalog seed and catalog filtering
///
/// The catalog is static. Listing supports an optional case-insensitive
/// name filter followed by an optional limit; there is no offset.
///
/// # Wire format
///
/// ```json
/// {
///   "name": "Lait entier",
///   "expirationDatetime": "2026-11-30T00:00:00Z",
///   "price": "1.85"
/// }
/// ```

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::Record;

/// A catalog product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product name
    pub name: String,

    /// When the product expires
    pub expiration_datetime: DateTime<Utc>,

    /// Unit price
    pub price: Decimal,
}

impl Product {
    fn new(name: &str, expiration: DateTime<Utc>, price: Decimal) -> Self {
        Self {
            name: name.to_string(),
            expiration_datetime: expiration,
            price,
        }
    }

    /// The fixed product catalog present at process start
    pub fn catalog() -> Vec<Product> {
        let day = |y: i32, m: u32, d: u32| {
            Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
                .single()
                .unwrap_or_default()
        };

        vec![
            Product::new("Lait entier", day(2026, 11, 30), dec!(1.85)),
            Product::new("Pain au levain", day(2026, 10, 25), dec!(3.20)),
            Product::new("Beurre doux", day(2026, 12, 15), dec!(2.45)),
            Product::new("Chocolat au lait", day(2027, 6, 1), dec!(2.10)),
            Product::new("Jus d'orange", day(2026, 11, 10), dec!(2.75)),
            Product::new("Riz basmati", day(2027, 9, 1), dec!(4.50)),
        ]
    }
}

impl Record for Product {
    type Key = String;

    fn key(&self) -> &String {
        &self.name
    }
}

/// Catalog filter errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductFilterError {
    /// Limit below 1
    #[error("limit must be greater than or equal to 1")]
    InvalidLimit,
}

/// Name filter plus result limit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    query: Option<String>,
    limit: Option<usize>,
}

impl ProductFilter {
    /// Builds a filter, rejecting a non-positive limit
    pub fn new(query: Option<String>, limit: Option<i64>) -> Result<Self, ProductFilterError> {
        let limit = match limit {
            Some(limit) if limit < 1 => return Err(ProductFilterError::InvalidLimit),
            Some(limit) => Some(usize::try_from(limit).unwrap_or(usize::MAX)),
            None => None,
        };

        Ok(Self {
            query: query.map(|q| q.to_lowercase()),
            limit,
        })
    }

    /// Whether `product` passes the name filter
    pub fn matches(&self, product: &Product) -> bool {
        match &self.query {
            Some(query) => product.name.to_lowercase().contains(query.as_str()),
            None => true,
        }
    }

    /// Filters then truncates, keeping catalog order
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        products
            .into_iter()
            .filter(|product| self.matches(product))
            .take(self.limit.unwrap_or(usize::MAX))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_no_filter_returns_catalog() {
        let filter = ProductFilter::new(None, None).unwrap();
        assert_eq!(filter.apply(Product::catalog()), Product::catalog());
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let filter = ProductFilter::new(Some("LAIT".to_string()), None).unwrap();
        let result = filter.apply(Product::catalog());
        assert_eq!(names(&result), vec!["Lait entier", "Chocolat au lait"]);
    }

    #[test]
    fn test_filter_applies_before_limit() {
        let filter = ProductFilter::new(Some("lait".to_string()), Some(1)).unwrap();
        let result = filter.apply(Product::catalog());
        assert_eq!(names(&result), vec!["Lait entier"]);
    }

    #[test]
    fn test_limit_larger_than_catalog() {
        let filter = ProductFilter::new(None, Some(100)).unwrap();
        assert_eq!(filter.apply(Product::catalog()).len(), Product::catalog().len());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let filter = ProductFilter::new(Some(String::new()), None).unwrap();
        assert_eq!(filter.apply(Product::catalog()).len(), Product::catalog().len());
    }

    #[test]
    fn test_rejects_non_positive_limit() {
        assert_eq!(
            ProductFilter::new(None, Some(0)),
            Err(ProductFilterError::InvalidLimit)
        );
    }

    #[test]
    fn test_price_serializes_as_string() {
        let value = serde_json::to_value(&Product::catalog()[0]).unwrap();
        assert_eq!(value["price"], "1.85");
        assert_eq!(value["expirationDatetime"], "2026-11-30T00:00:00Z");
    }
}
