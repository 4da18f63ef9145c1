/// Storage layer for the classroom collections
///
/// Handlers never touch a `Vec` directly; they go through the [`Repository`]
/// trait so the in-memory backing can later be swapped for a real store
/// without touching handler logic.
///
/// # Semantics
///
/// - Records keep insertion order
/// - Keys are NOT unique: inserting a record whose key already exists simply
///   appends it, and lookups return the first match
/// - Every operation is atomic with respect to the collection
///
/// # Example
///
/// ```
/// use classroom_shared::models::task::Task;
/// use classroom_shared::store::{InMemoryRepository, Repository};
///
/// # async fn example() {
/// let tasks = InMemoryRepository::<Task>::new();
/// tasks.insert(Task { id: 1, title: "Lire".into(), completed: false }).await;
/// assert!(tasks.find(&1).await.is_some());
/// # }
/// ```

pub mod memory;

pub use memory::InMemoryRepository;

use async_trait::async_trait;

/// A record that can live in a [`Repository`]
pub trait Record: Clone + Send + Sync + 'static {
    /// Lookup key type
    type Key: PartialEq + Send + Sync;

    /// Returns the key this record is looked up by
    fn key(&self) -> &Self::Key;
}

/// In-place modification applied by [`Repository::modify`]
pub type Mutation<T> = Box<dyn FnOnce(&mut T) + Send>;

/// Insertion-ordered collection of records keyed by [`Record::key`]
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// Returns every record in insertion order
    async fn list(&self) -> Vec<T>;

    /// Number of stored records
    async fn len(&self) -> usize;

    /// Appends one record and returns it
    async fn insert(&self, record: T) -> T;

    /// Appends all records in order and returns them
    async fn insert_many(&self, records: Vec<T>) -> Vec<T>;

    /// Returns the first record whose key matches
    async fn find(&self, key: &T::Key) -> Option<T>;

    /// Removes and returns the first record whose key matches
    async fn remove(&self, key: &T::Key) -> Option<T>;

    /// Removes every record whose key is contained in `keys`
    ///
    /// Keys with no match are ignored. Removed records come back in their
    /// original collection order, not in the order of `keys`.
    async fn remove_many(&self, keys: &[T::Key]) -> Vec<T>;

    /// Applies `mutation` to the first record whose key matches and returns
    /// the updated record, or `None` without calling `mutation`
    async fn modify(&self, key: &T::Key, mutation: Mutation<T>) -> Option<T>;

    /// Whether the collection holds no record
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
