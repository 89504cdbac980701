//! Repository trait for stored resources

use crate::core::entity::Entity;
use anyhow::Result;
use async_trait::async_trait;

/// Ordered collection of records keyed by identifier
///
/// Implementations provide the storage for one resource type. The HTTP layer
/// is agnostic to the underlying storage mechanism; it only relies on the
/// insertion order being preserved by `list`.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Every record, in insertion order
    async fn list(&self) -> Result<Vec<T>>;

    /// Assign a fresh identifier, append, and return the new record
    async fn create(&self, fields: T::Fields) -> Result<T>;

    /// Get a record by identifier
    async fn find_by_id(&self, id: &str) -> Result<Option<T>>;

    /// Replace every mutable field of a record in place
    ///
    /// Returns `None` when no record has this identifier.
    async fn update(&self, id: &str, fields: T::Fields) -> Result<Option<T>>;

    /// Remove a record; succeeds whether zero or one record matched
    async fn delete(&self, id: &str) -> Result<()>;

    /// Number of stored records
    async fn count(&self) -> Result<usize> {
        Ok(self.list().await?.len())
    }
}
