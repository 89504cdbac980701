//! In-memory implementation of Repository

use crate::core::error::StorageError;
use crate::core::{Entity, IdGenerator, Repository};
use anyhow::Result;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory repository implementation
///
/// Records live in an insertion-ordered map, so point lookups are O(1) and
/// `list` returns a consistent snapshot in creation order. Uses RwLock for
/// thread-safe access.
pub struct InMemoryRepository<T: Entity> {
    records: Arc<RwLock<IndexMap<String, T>>>,
    ids: Arc<dyn IdGenerator>,
}

impl<T: Entity> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            ids: self.ids.clone(),
        }
    }
}

impl<T: Entity> InMemoryRepository<T> {
    /// Create an empty repository
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self::with_records(Vec::new(), ids)
    }

    /// Create a repository holding `records`, ids preserved, in the given order
    pub fn with_records(records: Vec<T>, ids: Arc<dyn IdGenerator>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.id().to_string(), record))
            .collect();

        Self {
            records: Arc::new(RwLock::new(records)),
            ids,
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, IndexMap<String, T>>> {
        self.records.read().map_err(|_| poisoned::<T>())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, IndexMap<String, T>>> {
        self.records.write().map_err(|_| poisoned::<T>())
    }
}

fn poisoned<T: Entity>() -> anyhow::Error {
    StorageError::LockPoisoned {
        resource: T::resource_name().to_string(),
    }
    .into()
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Result<Vec<T>> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn create(&self, fields: T::Fields) -> Result<T> {
        let record = T::from_fields(self.ids.next_id(), fields);

        self.write()?
            .insert(record.id().to_string(), record.clone());

        Ok(record)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn update(&self, id: &str, fields: T::Fields) -> Result<Option<T>> {
        let mut records = self.write()?;

        Ok(records.get_mut(id).map(|record| {
            record.replace_fields(fields);
            record.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<()> {
        // shift_remove keeps the remaining records in creation order
        self.write()?.shift_remove(id);

        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }
}
