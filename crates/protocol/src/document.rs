//! The Value Document: the mutable, ordered JSON payload every message owns.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DecodeError;

/// An ordered name -> node mapping wrapping one JSON root.
///
/// The root is usually an object. Received documents may carry anything,
/// so [`Document::is_object`] is the structural precondition every message
/// checks before trusting field lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    root: Value,
}

impl Default for Document {
    fn default() -> Self {
        Document::new()
    }
}

impl Document {
    /// An empty object, ready for field-by-field building.
    pub fn new() -> Self {
        Document {
            root: Value::Object(Map::new()),
        }
    }

    /// Wrap a received node as-is.
    pub fn from_value(root: Value) -> Self {
        Document { root }
    }

    /// Parse JSON text into a document.
    pub fn parse_str(text: &str) -> Result<Self, DecodeError> {
        let root: Value = serde_json::from_str(text)?;
        Ok(Document { root })
    }

    pub fn is_object(&self) -> bool {
        self.root.is_object()
    }

    /// Look up a field. Always `None` when the root is not an object.
    pub fn get_field(&self, name: &str) -> Option<&Value> {
        self.root.as_object().and_then(|map| map.get(name))
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.get_field(name).is_some()
    }

    /// Insert or overwrite a field. A name never appears twice.
    ///
    /// A non-object root is replaced by an empty object first.
    pub fn set_field(&mut self, name: impl Into<String>, value: Value) {
        if !self.root.is_object() {
            self.root = Value::Object(Map::new());
        }
        if let Value::Object(map) = &mut self.root {
            map.insert(name.into(), value);
        }
    }

    /// Remove a field, keeping the order of the remaining ones.
    pub fn remove_field(&mut self, name: &str) -> Option<Value> {
        match &mut self.root {
            Value::Object(map) => map.shift_remove(name),
            _ => None,
        }
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.root
            .as_object()
            .into_iter()
            .flat_map(|map| map.keys().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.root.as_object().map_or(0, Map::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }

    /// Compact JSON text.
    pub fn to_json_string(&self) -> String {
        self.root.to_string()
    }
}

impl From<Value> for Document {
    fn from(root: Value) -> Self {
        Document::from_value(root)
    }
}
