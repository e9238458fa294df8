//! Domain enums on the wire.
//!
//! An enum travels as its integer ordinal. Unknown ordinals are rejected;
//! there is no clamping to the nearest known value.

/// Declare a fieldless enum with explicit ordinals and its codecs.
///
/// ```
/// simctl_protocol::wire_enum! {
///     /// Trajectory kind.
///     pub enum Trajectory {
///         Fix = 0,
///         Circular = 1,
///     }
/// }
///
/// assert_eq!(Trajectory::from_ordinal(1), Some(Trajectory::Circular));
/// assert_eq!(Trajectory::Fix.to_string(), "Fix");
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $ordinal:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant = $ordinal ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub const fn ordinal(self) -> i64 {
                self as i64
            }

            pub fn from_ordinal(ordinal: i64) -> Option<Self> {
                match ordinal {
                    $( $ordinal => Some($name::$variant), )*
                    _ => None,
                }
            }

            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant), )*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::codec::Codec for $name {
            fn type_name() -> String {
                stringify!($name).to_string()
            }

            fn is_valid(node: &$crate::__private::Value) -> bool {
                node.as_i64().and_then(Self::from_ordinal).is_some()
            }

            fn parse(node: &$crate::__private::Value) -> Result<Self, $crate::error::DecodeError> {
                let ordinal = node
                    .as_i64()
                    .ok_or_else(|| $crate::error::DecodeError::mismatch(stringify!($name), node))?;
                Self::from_ordinal(ordinal).ok_or($crate::error::DecodeError::UnknownDiscriminant {
                    type_name: stringify!($name),
                    ordinal,
                })
            }

            fn format(&self) -> $crate::__private::Value {
                $crate::__private::Value::from(self.ordinal())
            }
        }

        $crate::impl_required_field!($name);
    };
}

#[cfg(test)]
mod tests {
    use crate::codec::Codec;
    use crate::error::DecodeError;
    use crate::field::FieldCodec;
    use serde_json::{json, Value};

    wire_enum! {
        enum Band {
            L1 = 0,
            L2 = 1,
            L5 = 2,
        }
    }

    #[test]
    fn ordinals_round_trip() {
        for band in Band::ALL {
            assert_eq!(Band::from_ordinal(band.ordinal()), Some(*band));
            let node: Value = <Band as Codec>::format(band);
            assert_eq!(node, json!(band.ordinal()));
            assert_eq!(<Band as Codec>::parse(&node).unwrap(), *band);
        }
    }

    #[test]
    fn out_of_range_ordinal_is_rejected() {
        assert!(!<Band as Codec>::is_valid(&json!(3)));
        assert!(!<Band as Codec>::is_valid(&json!(-1)));
        assert_eq!(
            <Band as Codec>::parse(&json!(3)).unwrap_err(),
            DecodeError::UnknownDiscriminant {
                type_name: "Band",
                ordinal: 3,
            }
        );
    }

    #[test]
    fn names_are_not_accepted_on_the_wire() {
        assert!(!<Band as Codec>::is_valid(&json!("L1")));
        assert!(matches!(
            <Band as Codec>::parse(&json!("L1")).unwrap_err(),
            DecodeError::TypeMismatch { .. }
        ));
    }

    #[test]
    fn enum_is_a_required_field() {
        assert!(!<Band as FieldCodec>::is_valid(None));
        assert!(<Option<Band> as FieldCodec>::is_valid(None));
        assert_eq!(<Vec<Band> as Codec>::type_name(), "array Band");
    }
}
