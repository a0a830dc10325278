//! # Datastore
//!
//! CRUD primitives over named collections of flat JSON records.
//!
//! Handlers only ever see the [`Datastore`] trait; the store is passed in
//! through router state so every test can build its own isolated instance.
//! Each mutating call is atomic with respect to other mutations.

mod errors;
mod memory;

pub use errors::{DatastoreError, DatastoreResult};
pub use memory::InMemoryDatastore;

use std::sync::Arc;

use serde_json::{Map, Value};

/// A single record: a flat JSON object carrying an integer `id`
pub type Record = Map<String, Value>;

/// Shared handle to a datastore
pub type Store = Arc<dyn Datastore>;

/// Field holding the datastore-assigned identifier
pub const ID_FIELD: &str = "id";

/// Storage collaborator used by the route handlers
pub trait Datastore: Send + Sync {
    /// All records of a collection in ascending id order
    fn get_all(&self, collection: &str) -> DatastoreResult<Vec<Record>>;

    /// One record, or `None` if the id is unknown
    fn get_by_id(&self, collection: &str, id: u64) -> DatastoreResult<Option<Record>>;

    /// Store a new record and return the id assigned to it.
    ///
    /// Any `id` already present in `record` is overwritten.
    fn create(&self, collection: &str, record: Record) -> DatastoreResult<u64>;

    /// Merge `patch` into an existing record. Keys absent from the patch are
    /// left unchanged; the `id` field is never overwritten.
    fn update_by_id(&self, collection: &str, id: u64, patch: Record) -> DatastoreResult<()>;

    /// Remove a record
    fn delete_by_id(&self, collection: &str, id: u64) -> DatastoreResult<()>;
}

/// Read the `id` field of a record as an unsigned integer
pub fn record_id(record: &Record) -> Option<u64> {
    record.get(ID_FIELD).and_then(Value::as_u64)
}
