use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// A partial record: top-level field name to new value.
///
/// Applying a patch replaces exactly the fields it names and keeps every
/// other field of the stored record. Nested objects and arrays are replaced
/// wholesale, not merged. The `id` field is never patched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Patch {
    fields: Map<String, Value>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `field` to `value`. Values that fail to serialize are dropped.
    pub fn set(mut self, field: impl Into<String>, value: impl Serialize) -> Self {
        let field = field.into();
        if field == "id" {
            return self;
        }
        if let Ok(value) = serde_json::to_value(value) {
            self.fields.insert(field, value);
        }
        self
    }

    /// Build a patch from a JSON object. Any other JSON value yields an
    /// empty patch.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => {
                fields.remove("id");
                Self { fields }
            }
            _ => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Remove `field` from the patch, returning its value.
    pub fn take(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    /// Apply the patch to a copy of `target` and decode the result.
    ///
    /// No sanitization happens here. Fails if the merged object is not a
    /// valid `T` (for example a string written into a boolean field).
    pub fn merge_into<T: Serialize + DeserializeOwned>(self, target: &T) -> serde_json::Result<T> {
        let mut value = serde_json::to_value(target)?;
        self.apply_to(&mut value);
        serde_json::from_value(value)
    }

    /// Consume the patch, yielding its fields as a JSON object.
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// Overlay this patch onto `target`, which must be a JSON object.
    fn apply_to(self, target: &mut Value) {
        if let Value::Object(map) = target {
            for (field, value) in self.fields {
                map.insert(field, value);
            }
        }
    }
}
