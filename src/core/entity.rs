//! Entity trait defining the core abstraction for stored resources

use serde::Serialize;

/// Base trait for every resource kept in a repository.
///
/// An entity is an immutable identifier plus a block of mutable fields.
/// Repositories assign the identifier on creation and only ever replace the
/// field block wholesale afterwards, so the id of a stored record never changes.
pub trait Entity: Clone + Serialize + Send + Sync + 'static {
    /// The mutable part of the record, as accepted by create and update
    type Fields: Send + 'static;

    /// The plural resource name used in URLs (e.g., "orders", "dishes")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "order", "dish")
    fn resource_name_singular() -> &'static str;

    /// Get the identifier of this record
    fn id(&self) -> &str;

    /// Build a record from a freshly assigned id and its fields
    fn from_fields(id: String, fields: Self::Fields) -> Self;

    /// Overwrite every mutable field from `fields`
    fn replace_fields(&mut self, fields: Self::Fields);
}
