use crate::error::StoreResult;

/// String key-value storage backing all content partitions.
///
/// The key space is shared by every collection and has no access control.
/// Implementations must be thread-safe, but provide no cross-call
/// atomicity: a read followed by a write may interleave with another
/// writer.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored at `key`.
    ///
    /// Returns `Ok(None)` if the key is absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` at `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete `key`. Returns `true` if it existed.
    fn remove(&self, key: &str) -> StoreResult<bool>;

    /// All keys currently present, sorted.
    fn keys(&self) -> StoreResult<Vec<String>>;

    /// Check whether `key` is present.
    ///
    /// Default implementation reads the value. Backends may override to
    /// avoid the copy.
    fn contains(&self, key: &str) -> StoreResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}
