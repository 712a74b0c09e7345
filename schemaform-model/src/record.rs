use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A plain entity instance: an opaque key-value map conforming to some
/// [`EntityMetadata`](crate::EntityMetadata).
///
/// Records are owned by the storage layer; the engines only ever hold
/// transient copies. Unknown keys are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityRecord(Map<String, Value>);

impl EntityRecord {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// The record's `id` when it is a string.
    pub fn id(&self) -> Option<&str> {
        self.get_str("id")
    }

    /// Whether an `id` key exists at all, whatever its value.
    pub fn has_id_key(&self) -> bool {
        self.0.contains_key("id")
    }

    /// The `id` rendered as text; empty when absent or null.
    pub fn id_text(&self) -> String {
        self.get("id")
            .filter(|v| !v.is_null())
            .map(crate::stringify_value)
            .unwrap_or_default()
    }

    pub fn get(&self, field_name: &str) -> Option<&Value> {
        self.0.get(field_name)
    }

    /// Extract a string value.
    pub fn get_str(&self, field_name: &str) -> Option<&str> {
        self.0.get(field_name).and_then(Value::as_str)
    }

    /// Extract a boolean value.
    pub fn get_bool(&self, field_name: &str) -> Option<bool> {
        self.0.get(field_name).and_then(Value::as_bool)
    }

    /// Extract a numeric value.
    pub fn get_number(&self, field_name: &str) -> Option<f64> {
        self.0.get(field_name).and_then(Value::as_f64)
    }

    pub fn contains_key(&self, field_name: &str) -> bool {
        self.0.contains_key(field_name)
    }

    pub fn insert(&mut self, field_name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field_name.into(), value.into())
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, field_name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field_name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for EntityRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<EntityRecord> for Value {
    fn from(record: EntityRecord) -> Self {
        Value::Object(record.0)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for EntityRecord {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
