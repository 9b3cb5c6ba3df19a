use async_trait::async_trait;
use dashmap::DashMap;
use shortly_core::repository::Result;
use shortly_core::{ReadRepository, Repository, ShortCode, ShortLinkRecord};

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap uses sharded locks, so concurrent requests touching different
/// codes do not block each other.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: DashMap<ShortCode, ShortLinkRecord>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<ShortLinkRecord>> {
        Ok(self.storage.get(code).map(|entry| entry.value().clone()))
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn put(&self, record: ShortLinkRecord) -> Result<()> {
        self.storage.insert(record.short_code.clone(), record);
        Ok(())
    }
}
