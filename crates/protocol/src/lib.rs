//! simctl-protocol: typed command/result protocol core for the simulator
//! remote-control API.
//!
//! Every external action is a named message carried as one JSON object.
//! This crate provides the pieces that turn such an object into a typed,
//! validated, permission-checked command:
//!
//! - [`Document`] -- the mutable JSON tree every message owns
//! - [`Codec`] / [`FieldCodec`] -- per-type `type_name` / `is_valid` /
//!   `parse` / `format`, with `Option<T>` as the optional-field slot
//! - [`command!`] / [`command_result!`] / [`wire_enum!`] -- declaration
//!   macros for concrete messages and domain enums
//! - [`Registry`] -- name-keyed factories ([`CommandFactory`],
//!   [`ResultFactory`])
//! - [`check_permission`] -- the run-state gate
//! - [`decode_command`] / [`decode_result`] -- the decoding protocol
//!
//! Errors are returned, never logged.

pub mod codec;
pub mod declare;
pub mod decode;
pub mod document;
pub mod enumeration;
pub mod error;
pub mod field;
pub mod gate;
pub mod message;
pub mod permission;
pub mod registry;

#[doc(hidden)]
pub mod __private {
    pub use serde_json::Value;
}

// ── Convenience re-exports: value layer ──────────────────────────────

pub use codec::Codec;
pub use document::Document;
pub use field::{read_field, write_field, FieldCodec, FieldSpec};

// ── Convenience re-exports: messages ─────────────────────────────────

pub use message::{
    Command, CommandResult, CommandType, Message, ReportMode, ResultType, NAME_KEY,
    RELATED_COMMAND_KEY, UUID_KEY,
};
pub use permission::Permission;

// ── Convenience re-exports: dispatch ─────────────────────────────────

pub use decode::{decode_command, decode_result, message_name, parse_command, parse_result};
pub use gate::{check_permission, RunState};
pub use registry::{
    commands, install_commands, install_results, results, CommandFactory, Registry,
    ResultFactory,
};

pub use error::{DecodeError, PermissionError, ProtocolError, RegistryError};
