//! Slot-level codecs: how a declared message field occupies its document slot.
//!
//! Plain [`Codec`] types are required fields. `Option<T>` is the optional
//! field: absence is a valid state, distinct from an explicit `null`, and an
//! absent value is written by omitting the field.

use std::fmt;

use serde_json::Value;

use crate::codec::Codec;
use crate::document::Document;
use crate::error::DecodeError;

/// Field-level strategy over a node that may be absent.
pub trait FieldCodec: Sized {
    /// Whether absence is a valid state for this field.
    const OPTIONAL: bool;

    fn type_name() -> String;

    fn is_valid(node: Option<&Value>) -> bool;

    fn parse(node: Option<&Value>) -> Result<Self, DecodeError>;

    /// `None` means "omit the field".
    fn format(&self) -> Option<Value>;
}

/// Implement [`FieldCodec`] for required [`Codec`] types.
#[doc(hidden)]
#[macro_export]
macro_rules! impl_required_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::field::FieldCodec for $ty {
                const OPTIONAL: bool = false;

                fn type_name() -> String {
                    <$ty as $crate::codec::Codec>::type_name()
                }

                fn is_valid(node: Option<&$crate::__private::Value>) -> bool {
                    node.is_some_and(<$ty as $crate::codec::Codec>::is_valid)
                }

                fn parse(
                    node: Option<&$crate::__private::Value>,
                ) -> Result<Self, $crate::error::DecodeError> {
                    match node {
                        Some(node) => <$ty as $crate::codec::Codec>::parse(node),
                        None => Err($crate::error::DecodeError::Missing),
                    }
                }

                fn format(&self) -> Option<$crate::__private::Value> {
                    Some(<$ty as $crate::codec::Codec>::format(self))
                }
            }
        )*
    };
}

impl_required_field!(bool, i32, i64, f64, String);

impl<T: Codec> FieldCodec for Vec<T> {
    const OPTIONAL: bool = false;

    fn type_name() -> String {
        <Vec<T> as Codec>::type_name()
    }

    fn is_valid(node: Option<&Value>) -> bool {
        node.is_some_and(<Vec<T> as Codec>::is_valid)
    }

    fn parse(node: Option<&Value>) -> Result<Self, DecodeError> {
        match node {
            Some(node) => <Vec<T> as Codec>::parse(node),
            None => Err(DecodeError::Missing),
        }
    }

    fn format(&self) -> Option<Value> {
        Some(Codec::format(self))
    }
}

impl<T: Codec> FieldCodec for Option<T> {
    const OPTIONAL: bool = true;

    fn type_name() -> String {
        format!("optional {}", T::type_name())
    }

    fn is_valid(node: Option<&Value>) -> bool {
        node.map_or(true, T::is_valid)
    }

    fn parse(node: Option<&Value>) -> Result<Self, DecodeError> {
        node.map(T::parse).transpose()
    }

    fn format(&self) -> Option<Value> {
        self.as_ref().map(T::format)
    }
}

/// Static declaration of one message field.
#[derive(Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub optional: bool,
    pub type_name: fn() -> String,
    pub is_valid: fn(Option<&Value>) -> bool,
}

impl FieldSpec {
    pub const fn of<T: FieldCodec>(name: &'static str) -> FieldSpec {
        FieldSpec {
            name,
            optional: T::OPTIONAL,
            type_name: T::type_name,
            is_valid: T::is_valid,
        }
    }

    /// Check this field against a live document.
    pub fn check(&self, document: &Document) -> bool {
        (self.is_valid)(document.get_field(self.name))
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("type", &(self.type_name)())
            .finish()
    }
}

/// Decode the named field, tagging failures with the field name.
pub fn read_field<T: FieldCodec>(document: &Document, name: &str) -> Result<T, DecodeError> {
    T::parse(document.get_field(name)).map_err(|e| e.in_field(name))
}

/// Encode into the named field; an absent optional removes the field.
pub fn write_field<T: FieldCodec>(document: &mut Document, name: &str, value: &T) {
    match value.format() {
        Some(node) => document.set_field(name, node),
        None => {
            document.remove_field(name);
        }
    }
}
