//! Declaration macros for concrete messages.
//!
//! A concrete message is nothing more than a name, a documentation string,
//! a permission mask (commands only) and a list of typed wire fields. The
//! macros expand that list into the struct, the all-fields constructor, the
//! typed getter/setter pairs, the static field table and the trait impls.

/// Declare a concrete command.
///
/// ```
/// use simctl_protocol::{command, Command, Message, Permission};
///
/// command! {
///     /// Set the satellite motion as fixed.
///     pub struct SetSatMotionFixed {
///         name: "SetSatMotionFixed",
///         documentation: "Keep the satellite at its initial position.",
///         permission: Permission::IDLE,
///         fields {
///             system / set_system: String = "System",
///             sv_id / set_sv_id: i32 = "SvId",
///             is_fixed / set_is_fixed: bool = "IsFixed",
///         }
///     }
/// }
///
/// let cmd = SetSatMotionFixed::new("GPS".to_string(), 3, true);
/// assert!(cmd.is_valid());
/// assert_eq!(cmd.sv_id().unwrap(), 3);
/// assert_eq!(cmd.execute_permission(), Permission::IDLE);
/// ```
#[macro_export]
macro_rules! command {
    (
        $(#[$meta:meta])*
        $vis:vis struct $ty:ident {
            name: $name:literal,
            documentation: $doc:expr,
            permission: $perm:expr,
            fields {
                $( $(#[$fmeta:meta])* $getter:ident / $setter:ident : $fty:ty = $wire:literal ),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $ty {
            document: $crate::document::Document,
        }

        impl $ty {
            const FIELDS: &'static [$crate::field::FieldSpec] =
                &[$( $crate::field::FieldSpec::of::<$fty>($wire) ),*];

            /// Build a fully populated command.
            #[allow(clippy::too_many_arguments)]
            pub fn new($( $getter: $fty ),*) -> Self {
                #[allow(unused_mut)]
                let mut command = <Self as ::std::default::Default>::default();
                $( command.$setter($getter); )*
                command
            }

            $(
                $(#[$fmeta])*
                pub fn $getter(&self) -> Result<$fty, $crate::error::DecodeError> {
                    $crate::field::read_field(&self.document, $wire)
                }

                pub fn $setter(&mut self, value: $fty) {
                    $crate::field::write_field(&mut self.document, $wire, &value);
                }
            )*
        }

        impl ::std::default::Default for $ty {
            fn default() -> Self {
                let mut document = $crate::document::Document::new();
                document.set_field(
                    $crate::message::NAME_KEY,
                    $crate::__private::Value::from($name),
                );
                $ty { document }
            }
        }

        impl $crate::message::Message for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            fn description(&self) -> &'static str {
                $doc
            }

            fn fields(&self) -> &'static [$crate::field::FieldSpec] {
                Self::FIELDS
            }

            fn document(&self) -> &$crate::document::Document {
                &self.document
            }

            fn document_mut(&mut self) -> &mut $crate::document::Document {
                &mut self.document
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }

        impl $crate::message::Command for $ty {
            fn execute_permission(&self) -> $crate::permission::Permission {
                $perm
            }
        }

        impl $crate::message::CommandType for $ty {
            const NAME: &'static str = $name;
            const DESCRIPTION: &'static str = $doc;
        }
    };
}

/// Declare a concrete result.
///
/// The generated constructor takes the related command first: a result is
/// never built standalone.
#[macro_export]
macro_rules! command_result {
    (
        $(#[$meta:meta])*
        $vis:vis struct $ty:ident {
            name: $name:literal,
            documentation: $doc:expr,
            fields {
                $( $(#[$fmeta:meta])* $getter:ident / $setter:ident : $fty:ty = $wire:literal ),* $(,)?
            }
        }
    ) => {
        $crate::command_result! {
            $(#[$meta])*
            $vis struct $ty {
                name: $name,
                documentation: $doc,
                success: true,
                fields {
                    $( $(#[$fmeta])* $getter / $setter : $fty = $wire ),*
                }
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $ty:ident {
            name: $name:literal,
            documentation: $doc:expr,
            success: $success:expr,
            fields {
                $( $(#[$fmeta:meta])* $getter:ident / $setter:ident : $fty:ty = $wire:literal ),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $ty {
            document: $crate::document::Document,
            related_command: Option<::std::sync::Arc<dyn $crate::message::Command>>,
        }

        impl $ty {
            const FIELDS: &'static [$crate::field::FieldSpec] =
                &[$( $crate::field::FieldSpec::of::<$fty>($wire) ),*];

            /// Build a fully populated result for `related_command`.
            #[allow(clippy::too_many_arguments)]
            pub fn new(
                related_command: ::std::sync::Arc<dyn $crate::message::Command>,
                $( $getter: $fty ),*
            ) -> Self {
                let mut result = <Self as ::std::default::Default>::default();
                $crate::message::CommandResult::set_related_command(&mut result, related_command);
                $( result.$setter($getter); )*
                result
            }

            $(
                $(#[$fmeta])*
                pub fn $getter(&self) -> Result<$fty, $crate::error::DecodeError> {
                    $crate::field::read_field(&self.document, $wire)
                }

                pub fn $setter(&mut self, value: $fty) {
                    $crate::field::write_field(&mut self.document, $wire, &value);
                }
            )*
        }

        impl ::std::default::Default for $ty {
            fn default() -> Self {
                let mut document = $crate::document::Document::new();
                document.set_field(
                    $crate::message::NAME_KEY,
                    $crate::__private::Value::from($name),
                );
                $ty {
                    document,
                    related_command: None,
                }
            }
        }

        impl $crate::message::Message for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            fn description(&self) -> &'static str {
                $doc
            }

            fn fields(&self) -> &'static [$crate::field::FieldSpec] {
                Self::FIELDS
            }

            fn document(&self) -> &$crate::document::Document {
                &self.document
            }

            fn document_mut(&mut self) -> &mut $crate::document::Document {
                &mut self.document
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }

        impl $crate::message::CommandResult for $ty {
            fn related_command(
                &self,
            ) -> Option<&::std::sync::Arc<dyn $crate::message::Command>> {
                self.related_command.as_ref()
            }

            fn related_command_slot(
                &mut self,
            ) -> &mut Option<::std::sync::Arc<dyn $crate::message::Command>> {
                &mut self.related_command
            }

            fn is_success(&self) -> bool {
                $success
            }
        }

        impl $crate::message::ResultType for $ty {
            const NAME: &'static str = $name;
            const DESCRIPTION: &'static str = $doc;
        }
    };
}
