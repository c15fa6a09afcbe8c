//! Partitioned JSON collection storage for Convene content.
//!
//! The store keeps one JSON array per partition key inside a plain
//! string-to-string key-value backend, the way browser local storage holds
//! site content. Every entity type owns one partition.
//!
//! # Layers
//!
//! - [`KeyValueStore`] -- the storage port (`get`/`set`/`remove`)
//! - [`InMemoryKeyValueStore`] -- `HashMap` backend with an optional quota
//! - [`FileKeyValueStore`] -- one `<key>.json` file per key
//! - [`Collection`] -- generic CRUD over one partition
//!
//! # Design Rules
//!
//! 1. Every mutation rewrites the whole partition in a single `set`.
//! 2. Storage and parse faults never escape a [`Collection`]: they are
//!    logged and read as empty / `None` / `false`.
//! 3. There is no version stamp. Concurrent writers to one partition are
//!    last-writer-wins.
//! 4. IDs are not checked for uniqueness on create.
//! 5. Stored elements that do not decode as the record type are skipped on
//!    read but preserved by every write.

pub mod collection;
pub mod error;
pub mod file;
pub mod memory;
pub mod patch;
pub mod traits;

pub use collection::Collection;
pub use error::{StoreError, StoreResult};
pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;
pub use patch::Patch;
pub use traits::KeyValueStore;
