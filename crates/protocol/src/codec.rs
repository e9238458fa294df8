//! Node-level codecs: how one Rust type maps onto one JSON node.
//!
//! Every implementation checks with `is_valid` before extracting in `parse`,
//! so the two cannot disagree.

use serde_json::Value;

use crate::error::DecodeError;

/// Stateless parse/format/validate strategy for one wire type.
pub trait Codec: Sized {
    /// Wire type name as it appears in parameter tables ("int", "array double").
    fn type_name() -> String;

    /// True iff `node` can be losslessly interpreted as `Self`.
    fn is_valid(node: &Value) -> bool;

    /// Decode `node`; fails exactly when `is_valid` is false.
    fn parse(node: &Value) -> Result<Self, DecodeError>;

    /// Encode a value. Total.
    fn format(&self) -> Value;
}

impl Codec for bool {
    fn type_name() -> String {
        "bool".to_string()
    }

    fn is_valid(node: &Value) -> bool {
        node.is_boolean()
    }

    fn parse(node: &Value) -> Result<Self, DecodeError> {
        node.as_bool()
            .ok_or_else(|| DecodeError::mismatch(Self::type_name(), node))
    }

    fn format(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Codec for i32 {
    fn type_name() -> String {
        "int".to_string()
    }

    fn is_valid(node: &Value) -> bool {
        node.as_i64().is_some_and(|n| i32::try_from(n).is_ok())
    }

    fn parse(node: &Value) -> Result<Self, DecodeError> {
        node.as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| DecodeError::mismatch(Self::type_name(), node))
    }

    fn format(&self) -> Value {
        Value::from(*self)
    }
}

impl Codec for i64 {
    fn type_name() -> String {
        "long".to_string()
    }

    fn is_valid(node: &Value) -> bool {
        node.is_i64()
    }

    fn parse(node: &Value) -> Result<Self, DecodeError> {
        node.as_i64()
            .ok_or_else(|| DecodeError::mismatch(Self::type_name(), node))
    }

    fn format(&self) -> Value {
        Value::from(*self)
    }
}

/// Any JSON number is a valid double; integers widen.
impl Codec for f64 {
    fn type_name() -> String {
        "double".to_string()
    }

    fn is_valid(node: &Value) -> bool {
        node.is_number()
    }

    fn parse(node: &Value) -> Result<Self, DecodeError> {
        node.as_f64()
            .ok_or_else(|| DecodeError::mismatch(Self::type_name(), node))
    }

    /// Non-finite values have no JSON form and become `null`.
    fn format(&self) -> Value {
        serde_json::Number::from_f64(*self).map_or(Value::Null, Value::Number)
    }
}

/// Accepts any JSON string. Accepted-value sets are documentation only.
impl Codec for String {
    fn type_name() -> String {
        "string".to_string()
    }

    fn is_valid(node: &Value) -> bool {
        node.is_string()
    }

    fn parse(node: &Value) -> Result<Self, DecodeError> {
        node.as_str()
            .map(str::to_string)
            .ok_or_else(|| DecodeError::mismatch(Self::type_name(), node))
    }

    fn format(&self) -> Value {
        Value::String(self.clone())
    }
}

/// Arrays compose from the element codec; nested arrays follow.
impl<T: Codec> Codec for Vec<T> {
    fn type_name() -> String {
        format!("array {}", T::type_name())
    }

    fn is_valid(node: &Value) -> bool {
        node.as_array()
            .is_some_and(|items| items.iter().all(T::is_valid))
    }

    fn parse(node: &Value) -> Result<Self, DecodeError> {
        let items = node
            .as_array()
            .ok_or_else(|| DecodeError::mismatch(Self::type_name(), node))?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                T::parse(item).map_err(|e| DecodeError::Element {
                    index,
                    source: Box::new(e),
                })
            })
            .collect()
    }

    fn format(&self) -> Value {
        Value::Array(self.iter().map(T::format).collect())
    }
}
