use serde::de::DeserializeOwned;
use serde::Serialize;

/// A storable entity bound to one storage partition.
///
/// Every record type owns exactly one partition key; no two types share
/// one. Records serialize to a JSON object with a top-level `id` string.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Storage key holding the JSON array of all records of this type.
    const PARTITION: &'static str;

    /// Prefix used when generating IDs for new records.
    const ID_PREFIX: &'static str;

    /// The record's identifier. Empty means "not yet assigned".
    fn id(&self) -> &str;

    /// Assign the record's identifier.
    fn set_id(&mut self, id: String);

    /// The owning event, for records scoped to one.
    fn event_id(&self) -> Option<&str> {
        None
    }
}

/// Implement [`Record`] for a struct with `id` (and optionally `event_id`)
/// string fields.
macro_rules! impl_record {
    ($ty:ty, $partition:literal, $prefix:literal) => {
        impl $crate::record::Record for $ty {
            const PARTITION: &'static str = $partition;
            const ID_PREFIX: &'static str = $prefix;

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        }
    };
    ($ty:ty, $partition:literal, $prefix:literal, event_scoped) => {
        impl $crate::record::Record for $ty {
            const PARTITION: &'static str = $partition;
            const ID_PREFIX: &'static str = $prefix;

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }

            fn event_id(&self) -> Option<&str> {
                Some(&self.event_id)
            }
        }
    };
}

pub(crate) use impl_record;
