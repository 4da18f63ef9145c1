/// Domain models for the classroom API
///
/// Each model derives `Serialize`/`Deserialize` with the camelCase wire names
/// clients use, and implements [`Record`](crate::store::Record) when it lives
/// in a mutable collection.
///
/// # Models
///
/// - `user`: Static users, seeded at startup (read-only)
/// - `task`: To-do tasks (batch create, delete)
/// - `product`: Static product catalog with name filtering (read-only)
/// - `order`: Orders (credential-gated create)
/// - `profile`: User profiles with independently replaceable sub-objects
///
/// # Example
///
/// ```
/// use classroom_shared::models::product::{Product, ProductFilter};
///
/// let filter = ProductFilter::new(Some("lait".to_string()), None).unwrap();
/// let dairy = filter.apply(Product::catalog());
/// assert!(dairy.iter().any(|p| p.name == "Lait entier"));
/// ```

pub mod order;
pub mod product;
pub mod profile;
pub mod task;
pub mod user;
