/// Order model
///
/// Orders are appended verbatim by an authenticated administrator. The
/// `identifier` is supplied by the caller and not checked for uniqueness.
///
/// # Wire format
///
/// ```json
/// {
///   "identifier": 1,
///   "customerName": "Rakoto",
///   "creationDatetime": "2026-10-18T09:30:00Z",
///   "totalAmount": "42.50"
/// }
/// ```
///
/// `totalAmount` is written as a string and accepted as a string or a number.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A customer order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Caller-supplied order ID
    pub identifier: i64,

    /// Customer name
    pub customer_name: String,

    /// When the order was placed
    pub creation_datetime: DateTime<Utc>,

    /// Order total
    pub total_amount: Decimal,
}

impl Record for Order {
    type Key = i64;

    fn key(&self) -> &i64 {
        &self.identifier
    }
}
