//! Message contracts: commands (requests) and command results (answers).
//!
//! Both own exactly one [`Document`]. Typed field access is generated by the
//! [`command!`](crate::command) and [`command_result!`](crate::command_result)
//! macros on top of [`read_field`](crate::field::read_field) and
//! [`write_field`](crate::field::write_field).

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::Document;
use crate::error::ProtocolError;
use crate::field::FieldSpec;
use crate::permission::Permission;

/// Wire key carrying the registered message name.
pub const NAME_KEY: &str = "CmdName";
/// Wire key carrying the sender-assigned correlation id of a command.
pub const UUID_KEY: &str = "CmdUuid";
/// Wire key carrying the originating command inside a result.
pub const RELATED_COMMAND_KEY: &str = "RelatedCommand";

const RESERVED_KEYS: [&str; 3] = [NAME_KEY, UUID_KEY, RELATED_COMMAND_KEY];

/// How many failing fields a validation error lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// Stop at the first failing field, in declaration order.
    First,
    /// List every failing field, in declaration order.
    #[default]
    All,
}

/// Behaviour shared by every message.
pub trait Message: Any + Send + Sync + fmt::Debug {
    /// Registered name; constant for the lifetime of the object.
    fn name(&self) -> &'static str;

    /// Declared prose, without the parameter table.
    fn description(&self) -> &'static str;

    /// Declared fields, in declaration order.
    fn fields(&self) -> &'static [FieldSpec];

    fn document(&self) -> &Document;

    fn document_mut(&mut self) -> &mut Document;

    fn as_any(&self) -> &dyn Any;

    /// Attach a received document, replacing the current one.
    fn set_document(&mut self, document: Document) {
        *self.document_mut() = document;
    }

    /// Structural validity of the live document.
    ///
    /// Re-evaluated on every call; nothing is memoized.
    fn is_valid(&self) -> bool {
        let document = self.document();
        document.is_object() && self.fields().iter().all(|spec| spec.check(document))
    }

    /// Names of the declared fields that are missing or mistyped.
    fn invalid_fields(&self) -> Vec<&'static str> {
        let document = self.document();
        self.fields()
            .iter()
            .filter(|spec| !spec.check(document))
            .map(|spec| spec.name)
            .collect()
    }

    /// Like [`Message::is_valid`], but names the offending fields.
    fn validate(&self, mode: ReportMode) -> Result<(), ProtocolError> {
        if !self.document().is_object() {
            return Err(ProtocolError::NotAnObject);
        }
        let mut fields = self.invalid_fields();
        if fields.is_empty() {
            return Ok(());
        }
        if mode == ReportMode::First {
            fields.truncate(1);
        }
        Err(ProtocolError::Malformed {
            name: self.name().to_string(),
            fields: fields.into_iter().map(str::to_string).collect(),
        })
    }

    /// Fields present in the document that are neither declared nor reserved.
    fn undeclared_fields(&self) -> Vec<String> {
        let declared = self.fields();
        self.document()
            .field_names()
            .filter(|name| !RESERVED_KEYS.contains(name))
            .filter(|name| !declared.iter().any(|spec| spec.name == *name))
            .map(str::to_string)
            .collect()
    }

    /// The Name/Type table of the declared fields.
    fn parameter_table(&self) -> String {
        render_parameter_table(self.fields())
    }

    /// Human-readable documentation: the prose followed by the parameter
    /// table. Purely descriptive.
    fn documentation(&self) -> String {
        let table = self.parameter_table();
        match (self.description(), table.is_empty()) {
            (prose, true) => prose.to_string(),
            ("", false) => table,
            (prose, false) => format!("{prose}\n\n{table}"),
        }
    }

    /// The wire form of this message.
    fn to_json(&self) -> Value {
        self.document().as_value().clone()
    }
}

/// A request to the simulator.
pub trait Command: Message {
    /// Run-states in which this command may execute.
    fn execute_permission(&self) -> Permission;

    fn uuid(&self) -> Option<&str> {
        self.document().get_field(UUID_KEY).and_then(Value::as_str)
    }

    fn set_uuid(&mut self, uuid: &str) {
        self.document_mut()
            .set_field(UUID_KEY, Value::String(uuid.to_string()));
    }
}

/// An answer correlated to the command that produced it.
///
/// Results are outputs, so they carry no execution permission.
pub trait CommandResult: Message {
    fn related_command(&self) -> Option<&Arc<dyn Command>>;

    /// Storage for the related command. Prefer [`CommandResult::set_related_command`].
    fn related_command_slot(&mut self) -> &mut Option<Arc<dyn Command>>;

    /// Correlate with `command`, embedding its document on the wire.
    fn set_related_command(&mut self, command: Arc<dyn Command>) {
        self.document_mut()
            .set_field(RELATED_COMMAND_KEY, command.to_json());
        *self.related_command_slot() = Some(command);
    }

    fn is_success(&self) -> bool {
        true
    }
}

/// Static side of a concrete command type, used for typed registration.
pub trait CommandType: Command + Default {
    const NAME: &'static str;
    const DESCRIPTION: &'static str;
}

/// Static side of a concrete result type, used for typed registration.
pub trait ResultType: CommandResult + Default {
    const NAME: &'static str;
    const DESCRIPTION: &'static str;
}

impl dyn Command {
    pub fn is<T: Command>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Recover the concrete type behind a decoded command.
    pub fn downcast_ref<T: Command>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl dyn CommandResult {
    pub fn is<T: CommandResult>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: CommandResult>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

fn render_parameter_table(fields: &[FieldSpec]) -> String {
    if fields.is_empty() {
        return String::new();
    }
    let rows: Vec<(&str, String)> = fields
        .iter()
        .map(|spec| (spec.name, (spec.type_name)()))
        .collect();
    let name_width = rows.iter().map(|(n, _)| n.len()).max().unwrap_or(0).max(4);
    let type_width = rows.iter().map(|(_, t)| t.len()).max().unwrap_or(0).max(4);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!("{:<name_width$} Type", "Name"));
    lines.push(format!("{} {}", "-".repeat(name_width), "-".repeat(type_width)));
    for (name, type_name) in &rows {
        lines.push(format!("{:<name_width$} {}", name, type_name));
    }
    lines.join("\n")
}
