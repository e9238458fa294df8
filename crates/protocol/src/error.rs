use crate::permission::Permission;

/// A document node could not be interpreted as the declared field type.
///
/// Always recoverable: the caller rejects the message, the process keeps running.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A required field is absent from the document.
    #[error("required value is missing")]
    Missing,

    /// The node is present but has the wrong JSON kind or range.
    #[error("expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// An enum ordinal outside the known discriminants.
    #[error("{ordinal} is not a valid {type_name} discriminant")]
    UnknownDiscriminant {
        type_name: &'static str,
        ordinal: i64,
    },

    /// An array element failed to decode.
    #[error("element {index}: {source}")]
    Element {
        index: usize,
        #[source]
        source: Box<DecodeError>,
    },

    /// A named message field failed to decode.
    #[error("field '{field}': {source}")]
    Field {
        field: String,
        #[source]
        source: Box<DecodeError>,
    },

    /// The raw text is not a JSON document.
    #[error("invalid JSON: {message}")]
    Json { message: String },
}

impl DecodeError {
    /// Build a `TypeMismatch` describing the offending node.
    pub fn mismatch(expected: impl Into<String>, found: &serde_json::Value) -> Self {
        DecodeError::TypeMismatch {
            expected: expected.into(),
            found: json_kind(found).to_string(),
        }
    }

    pub(crate) fn in_field(self, field: &str) -> Self {
        DecodeError::Field {
            field: field.to_string(),
            source: Box::new(self),
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        DecodeError::Json {
            message: e.to_string(),
        }
    }
}

/// Short JSON kind name used in error messages.
pub fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(n) if n.is_f64() => "number",
        serde_json::Value::Number(_) => "integer",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// A structurally valid command was submitted in a run-state outside its mask.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{command} cannot execute while the simulator is {state} (allowed: {allowed})")]
pub struct PermissionError {
    pub command: String,
    pub state: String,
    pub allowed: Permission,
}

/// Per-message failures of the decoding protocol.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// The received document is not a JSON object.
    #[error("message is not a JSON object")]
    NotAnObject,

    /// The name field is absent or not a string.
    #[error("message has no '{}' string field", crate::message::NAME_KEY)]
    MissingName,

    /// No constructor is registered under the received name.
    #[error("unknown command: {name}")]
    UnknownCommand { name: String },

    /// The document failed structural validation.
    #[error("malformed {name}: invalid field(s) {}", .fields.join(", "))]
    Malformed { name: String, fields: Vec<String> },

    #[error(transparent)]
    Permission(#[from] PermissionError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Programming errors raised while building or installing a registry.
///
/// These belong to process start-up, never to per-message handling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("'{name}' is already registered")]
    Duplicate { name: String },

    #[error("the process-wide {registry} registry is already installed")]
    AlreadyInstalled { registry: &'static str },
}
