/// Process-lifetime, `Vec`-backed repository
///
/// Records live behind a `tokio::sync::RwLock`, so each repository call sees
/// and leaves the collection in a consistent state. Lookups are linear scans,
/// which is fine for the handful of records a classroom collection holds.

use super::{Mutation, Record, Repository};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-memory [`Repository`] implementation
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> InMemoryRepository<T> {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Creates a repository pre-filled with seed records
    pub fn seeded(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    async fn insert(&self, record: T) -> T {
        self.records.write().await.push(record.clone());
        record
    }

    async fn insert_many(&self, records: Vec<T>) -> Vec<T> {
        self.records.write().await.extend(records.iter().cloned());
        records
    }

    async fn find(&self, key: &T::Key) -> Option<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.key() == key)
            .cloned()
    }

    async fn remove(&self, key: &T::Key) -> Option<T> {
        let mut records = self.records.write().await;
        let index = records.iter().position(|record| record.key() == key)?;
        Some(records.remove(index))
    }

    async fn remove_many(&self, keys: &[T::Key]) -> Vec<T> {
        let mut records = self.records.write().await;
        let (removed, kept): (Vec<T>, Vec<T>) = records
            .drain(..)
            .partition(|record| keys.contains(record.key()));
        *records = kept;
        removed
    }

    async fn modify(&self, key: &T::Key, mutation: Mutation<T>) -> Option<T> {
        let mut records = self.records.write().await;
        let record = records.iter_mut().find(|record| record.key() == key)?;
        mutation(record);
        Some(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        label: &'static str,
    }

    impl Record for Item {
        type Key = u32;

        fn key(&self) -> &u32 {
            &self.id
        }
    }

    fn item(id: u32, label: &'static str) -> Item {
        Item { id, label }
    }

    #[tokio::test]
    async fn test_insert_keeps_order() {
        let repo = InMemoryRepository::new();
        repo.insert(item(2, "b")).await;
        repo.insert_many(vec![item(1, "a"), item(3, "c")]).await;

        let ids: Vec<u32> = repo.list().await.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(repo.len().await, 3);
    }

    #[tokio::test]
    async fn test_duplicate_keys_first_match_wins() {
        let repo = InMemoryRepository::seeded(vec![item(1, "first"), item(1, "second")]);

        assert_eq!(repo.find(&1).await.unwrap().label, "first");

        let removed = repo.remove(&1).await.unwrap();
        assert_eq!(removed.label, "first");
        assert_eq!(repo.list().await, vec![item(1, "second")]);
    }

    #[tokio::test]
    async fn test_remove_missing_leaves_collection_untouched() {
        let repo = InMemoryRepository::seeded(vec![item(1, "a")]);

        assert!(repo.remove(&42).await.is_none());
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_remove_many_uses_collection_order() {
        let repo =
            InMemoryRepository::seeded(vec![item(1, "a"), item(2, "b"), item(3, "c"), item(4, "d")]);

        let removed = repo.remove_many(&[4, 999, 2]).await;

        assert_eq!(removed, vec![item(2, "b"), item(4, "d")]);
        assert_eq!(repo.list().await, vec![item(1, "a"), item(3, "c")]);
    }

    #[tokio::test]
    async fn test_modify() {
        let repo = InMemoryRepository::seeded(vec![item(1, "a")]);

        let updated = repo
            .modify(&1, Box::new(|i: &mut Item| i.label = "z"))
            .await
            .unwrap();
        assert_eq!(updated.label, "z");
        assert_eq!(repo.find(&1).await.unwrap().label, "z");

        assert!(repo.modify(&7, Box::new(|i: &mut Item| i.label = "never")).await.is_none());
    }

    #[tokio::test]
    async fn test_is_empty() {
        let repo = InMemoryRepository::<Item>::new();
        assert!(repo.is_empty().await);
    }
}
