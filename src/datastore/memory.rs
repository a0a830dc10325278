//! In-memory datastore
//!
//! Collections live in a single `RwLock`ed map. Readers share the read lock,
//! every mutation takes the write lock for its whole duration, so id
//! assignment and check-then-write inside one call cannot interleave.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::RwLock;

use serde_json::Value;

use super::errors::{DatastoreError, DatastoreResult};
use super::{record_id, Datastore, Record, ID_FIELD};

/// Records of one collection plus its id counter
#[derive(Debug, Clone)]
struct Collection {
    records: BTreeMap<u64, Record>,
    /// Next id to hand out. Only ever grows, so deleted ids are not reused.
    next_id: u64,
}

impl Collection {
    fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Hand out `next_id`. The counter is only advanced when it can be.
    fn assign_id(&mut self, name: &str) -> DatastoreResult<u64> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| DatastoreError::IdsExhausted {
                collection: name.to_string(),
            })?;
        Ok(id)
    }
}

/// Datastore keeping every collection in process memory
#[derive(Debug, Default)]
pub struct InMemoryDatastore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl InMemoryDatastore {
    /// Create an empty datastore
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a datastore from a fixture of the form
    /// `{ "shows": [ { "id": 1, ... }, ... ] }`.
    ///
    /// Every seeded record must be an object with an unsigned integer `id`.
    pub fn from_fixture(fixture: Value) -> DatastoreResult<Self> {
        let Value::Object(fixture) = fixture else {
            return Err(DatastoreError::Seed(
                "fixture must be an object of collections".to_string(),
            ));
        };

        let mut collections = HashMap::new();
        for (name, records) in fixture {
            let Value::Array(records) = records else {
                return Err(DatastoreError::Seed(format!(
                    "collection '{}' must be an array of records",
                    name
                )));
            };

            let mut collection = Collection::new();
            for value in records {
                let Value::Object(record) = value else {
                    return Err(DatastoreError::InvalidRecord(format!(
                        "record in '{}' is not an object",
                        name
                    )));
                };
                let id = record_id(&record).ok_or_else(|| {
                    DatastoreError::InvalidRecord(format!(
                        "record in '{}' has no integer id",
                        name
                    ))
                })?;
                let after = id.checked_add(1).ok_or_else(|| {
                    DatastoreError::InvalidRecord(format!(
                        "record in '{}' has id {} beyond the assignable range",
                        name, id
                    ))
                })?;
                if collection.records.insert(id, record).is_some() {
                    return Err(DatastoreError::DuplicateId {
                        collection: name,
                        id,
                    });
                }
                collection.next_id = collection.next_id.max(after);
            }
            collections.insert(name, collection);
        }

        Ok(Self {
            collections: RwLock::new(collections),
        })
    }

    /// Load a fixture file from disk
    pub fn from_path(path: &Path) -> DatastoreResult<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| DatastoreError::Seed(format!("{}: {}", path.display(), e)))?;
        let fixture: Value = serde_json::from_str(&raw)
            .map_err(|e| DatastoreError::Seed(format!("{}: {}", path.display(), e)))?;
        Self::from_fixture(fixture)
    }

    /// Number of records in a collection
    pub fn len(&self, collection: &str) -> DatastoreResult<usize> {
        let collections = self.collections.read()?;
        Ok(collections
            .get(collection)
            .map(|c| c.records.len())
            .unwrap_or(0))
    }

    /// Whether a collection holds no records
    pub fn is_empty(&self, collection: &str) -> DatastoreResult<bool> {
        Ok(self.len(collection)? == 0)
    }
}

impl Datastore for InMemoryDatastore {
    fn get_all(&self, collection: &str) -> DatastoreResult<Vec<Record>> {
        let collections = self.collections.read()?;
        Ok(collections
            .get(collection)
            .map(|c| c.records.values().cloned().collect())
            .unwrap_or_default())
    }

    fn get_by_id(&self, collection: &str, id: u64) -> DatastoreResult<Option<Record>> {
        let collections = self.collections.read()?;
        Ok(collections
            .get(collection)
            .and_then(|c| c.records.get(&id))
            .cloned())
    }

    fn create(&self, collection: &str, mut record: Record) -> DatastoreResult<u64> {
        let mut collections = self.collections.write()?;
        let entry = collections
            .entry(collection.to_string())
            .or_insert_with(Collection::new);

        let id = entry.assign_id(collection)?;
        record.insert(ID_FIELD.to_string(), Value::from(id));
        entry.records.insert(id, record);
        Ok(id)
    }

    fn update_by_id(&self, collection: &str, id: u64, patch: Record) -> DatastoreResult<()> {
        let mut collections = self.collections.write()?;
        let record = collections
            .get_mut(collection)
            .and_then(|c| c.records.get_mut(&id))
            .ok_or_else(|| DatastoreError::NotFound {
                collection: collection.to_string(),
                id,
            })?;

        for (key, value) in patch {
            if key != ID_FIELD {
                record.insert(key, value);
            }
        }
        Ok(())
    }

    fn delete_by_id(&self, collection: &str, id: u64) -> DatastoreResult<()> {
        let mut collections = self.collections.write()?;
        collections
            .get_mut(collection)
            .and_then(|c| c.records.remove(&id))
            .map(|_| ())
            .ok_or_else(|| DatastoreError::NotFound {
                collection: collection.to_string(),
                id,
            })
    }
}
