//! Generic CRUD over one storage partition.
//!
//! A [`Collection`] reads and writes the whole partition as one JSON array
//! on every call. Lookups are linear scans; there is no index. Failures
//! inside the backend or the JSON layer are logged and surface as empty,
//! `None` or `false` results, so callers cannot tell "missing" from
//! "unreadable".
//!
//! Records that are valid JSON but do not decode as `T` are skipped on
//! read and written back untouched by every mutation.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use convene_types::{generate_id, sanitize_top_level, Record};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::error::StoreResult;
use crate::patch::Patch;
use crate::traits::KeyValueStore;

/// All records of type `T`, stored as one JSON array at `T::PARTITION`.
pub struct Collection<T: Record> {
    kv: Arc<dyn KeyValueStore>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            kv: Arc::clone(&self.kv),
            _record: PhantomData,
        }
    }
}

impl<T: Record> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("partition", &T::PARTITION)
            .finish()
    }
}

impl<T: Record> Collection<T> {
    /// Bind a collection to the shared key-value store.
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            _record: PhantomData,
        }
    }

    /// The partition key this collection reads and writes.
    pub fn partition(&self) -> &'static str {
        T::PARTITION
    }

    /// Every record in stored order. Absent or unreadable partitions read
    /// as empty.
    pub fn get_all(&self) -> Vec<T> {
        match self.load() {
            Ok(items) => items,
            Err(e) => {
                warn!(partition = T::PARTITION, error = %e, "failed to read partition");
                Vec::new()
            }
        }
    }

    /// First record whose id equals `id`. An empty `id` never matches.
    pub fn get_by_id(&self, id: &str) -> Option<T> {
        if id.is_empty() {
            return None;
        }
        self.get_all().into_iter().find(|item| item.id() == id)
    }

    /// Records scoped to `event_id`, in stored order. An empty `event_id`
    /// never matches.
    pub fn get_by_event_id(&self, event_id: &str) -> Vec<T> {
        if event_id.is_empty() {
            return Vec::new();
        }
        self.get_all()
            .into_iter()
            .filter(|item| item.event_id() == Some(event_id))
            .collect()
    }

    /// Append a record and return it as stored.
    ///
    /// A missing id is generated from `T::ID_PREFIX`. Top-level string
    /// fields are HTML-escaped. Supplied ids are not checked against
    /// existing records, so a duplicate creates a second record with the
    /// same id.
    pub fn create(&self, mut item: T) -> Option<T> {
        if item.id().is_empty() {
            item.set_id(generate_id(T::ID_PREFIX));
        }
        let item = match sanitize_record(&item) {
            Ok(item) => item,
            Err(e) => {
                error!(partition = T::PARTITION, error = %e, "failed to encode record");
                return None;
            }
        };

        let value = match serde_json::to_value(&item) {
            Ok(value) => value,
            Err(e) => {
                error!(partition = T::PARTITION, error = %e, "failed to encode record");
                return None;
            }
        };

        let mut items = self.raw_items();
        items.push(value);
        match self.store_raw(&items) {
            Ok(()) => {
                debug!(partition = T::PARTITION, id = item.id(), "created record");
                Some(item)
            }
            Err(e) => {
                error!(partition = T::PARTITION, error = %e, "failed to write partition");
                None
            }
        }
    }

    /// Merge `patch` into the record with id `id` and return the result.
    ///
    /// Fields not named in the patch keep their stored values. Patched
    /// top-level strings are HTML-escaped. Returns `None` without writing
    /// if no record has that id or the merged value is no longer a valid
    /// `T`.
    pub fn update(&self, id: &str, patch: Patch) -> Option<T> {
        if id.is_empty() {
            return None;
        }
        let mut items = self.raw_items();
        let index = items.iter().position(|item| raw_id(item) == Some(id))?;

        let existing: T = match serde_json::from_value(items[index].clone()) {
            Ok(existing) => existing,
            Err(e) => {
                warn!(partition = T::PARTITION, id, error = %e, "unreadable record");
                return None;
            }
        };
        let merged = match merge(&existing, patch) {
            Ok(merged) => merged,
            Err(e) => {
                warn!(partition = T::PARTITION, id, error = %e, "rejected patch");
                return None;
            }
        };
        items[index] = match serde_json::to_value(&merged) {
            Ok(value) => value,
            Err(e) => {
                error!(partition = T::PARTITION, error = %e, "failed to encode record");
                return None;
            }
        };
        match self.store_raw(&items) {
            Ok(()) => {
                debug!(partition = T::PARTITION, id, "updated record");
                Some(merged)
            }
            Err(e) => {
                error!(partition = T::PARTITION, error = %e, "failed to write partition");
                None
            }
        }
    }

    /// Delete every record with id `id`. Returns `true` if any was removed.
    ///
    /// The partition is only rewritten when something was removed.
    pub fn remove(&self, id: &str) -> bool {
        let mut items = self.raw_items();
        let before = items.len();
        items.retain(|item| raw_id(item) != Some(id));
        if items.len() == before {
            return false;
        }
        match self.store_raw(&items) {
            Ok(()) => {
                debug!(partition = T::PARTITION, id, "removed record");
                true
            }
            Err(e) => {
                error!(partition = T::PARTITION, error = %e, "failed to write partition");
                false
            }
        }
    }

    /// Overwrite the whole partition with `items`, unsanitized.
    ///
    /// Used for seeding from trusted fixtures and for bulk reorders.
    pub fn replace_all(&self, items: &[T]) -> bool {
        match self.store(items) {
            Ok(()) => true,
            Err(e) => {
                error!(partition = T::PARTITION, error = %e, "failed to write partition");
                false
            }
        }
    }

    /// Whether the partition key is present at all. An empty array counts
    /// as present.
    pub fn exists(&self) -> bool {
        match self.kv.contains(T::PARTITION) {
            Ok(present) => present,
            Err(e) => {
                warn!(partition = T::PARTITION, error = %e, "failed to check partition");
                false
            }
        }
    }

    /// Number of records in the partition.
    pub fn count(&self) -> usize {
        self.get_all().len()
    }

    /// Decode every stored element that fits `T`, skipping the rest.
    fn load(&self) -> StoreResult<Vec<T>> {
        let items: Vec<T> = self
            .load_raw()?
            .into_iter()
            .filter_map(|value| {
                let id = raw_id(&value).unwrap_or_default().to_string();
                match serde_json::from_value(value) {
                    Ok(item) => Some(item),
                    Err(e) => {
                        warn!(
                            partition = T::PARTITION,
                            id = %id,
                            error = %e,
                            "skipping unreadable record"
                        );
                        None
                    }
                }
            })
            .collect();
        Ok(items)
    }

    fn load_raw(&self) -> StoreResult<Vec<Value>> {
        match self.kv.get(T::PARTITION)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// The stored elements for a read-modify-write. An unreadable partition
    /// starts over from empty.
    fn raw_items(&self) -> Vec<Value> {
        match self.load_raw() {
            Ok(items) => items,
            Err(e) => {
                warn!(partition = T::PARTITION, error = %e, "failed to read partition");
                Vec::new()
            }
        }
    }

    fn store_raw(&self, items: &[Value]) -> StoreResult<()> {
        let raw = serde_json::to_string(items)?;
        self.kv.set(T::PARTITION, &raw)
    }

    fn store(&self, items: &[T]) -> StoreResult<()> {
        let raw = serde_json::to_string(items)?;
        self.kv.set(T::PARTITION, &raw)
    }
}

fn raw_id(value: &Value) -> Option<&str> {
    value.get("id").and_then(Value::as_str)
}

fn sanitize_record<T: Record>(item: &T) -> serde_json::Result<T> {
    let mut value = serde_json::to_value(item)?;
    sanitize_top_level(&mut value);
    serde_json::from_value(value)
}

fn merge<T: Record>(existing: &T, patch: Patch) -> serde_json::Result<T> {
    let mut changes = patch.into_value();
    sanitize_top_level(&mut changes);
    Patch::from_value(changes).merge_into(existing)
}
