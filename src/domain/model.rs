use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// API-facing projection of a single model.
///
/// Keys keep insertion order: declared exposable fields first, then computed
/// keys that were not already present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Exposed {
    fields: Map<String, Value>,
}

impl Exposed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing the value in place if it is already present.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Map<String, Value>> for Exposed {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl From<Exposed> for Value {
    fn from(exposed: Exposed) -> Self {
        Value::Object(exposed.fields)
    }
}

impl IntoIterator for Exposed {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Result of [`expose`](crate::core::exposer::expose): one representation for
/// one model, a sequence for a sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Exposure {
    One(Exposed),
    Many(Vec<Exposed>),
}

impl Exposure {
    pub fn is_many(&self) -> bool {
        matches!(self, Exposure::Many(_))
    }

    pub fn into_one(self) -> Option<Exposed> {
        match self {
            Exposure::One(exposed) => Some(exposed),
            Exposure::Many(_) => None,
        }
    }

    pub fn into_many(self) -> Option<Vec<Exposed>> {
        match self {
            Exposure::Many(exposed) => Some(exposed),
            Exposure::One(_) => None,
        }
    }
}

impl From<Exposure> for Value {
    fn from(exposure: Exposure) -> Self {
        match exposure {
            Exposure::One(exposed) => exposed.into(),
            Exposure::Many(all) => Value::Array(all.into_iter().map(Value::from).collect()),
        }
    }
}
