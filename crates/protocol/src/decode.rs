//! The decoding protocol: raw document -> validated typed message.
//!
//! read name -> `create(name)` -> attach document -> validate. Nothing is
//! partially applied: a message that fails any step is never handed out.

use std::sync::Arc;

use serde_json::Value;

use crate::document::Document;
use crate::error::ProtocolError;
use crate::message::{Command, CommandResult, ReportMode, NAME_KEY, RELATED_COMMAND_KEY};
use crate::registry::{CommandFactory, ResultFactory};

/// The registered name a document claims to be.
pub fn message_name(document: &Document) -> Result<&str, ProtocolError> {
    if !document.is_object() {
        return Err(ProtocolError::NotAnObject);
    }
    document
        .get_field(NAME_KEY)
        .and_then(Value::as_str)
        .ok_or(ProtocolError::MissingName)
}

/// Materialize and validate the command a document describes.
pub fn decode_command(
    document: Document,
    factory: &CommandFactory,
    mode: ReportMode,
) -> Result<Box<dyn Command>, ProtocolError> {
    let name = message_name(&document)?;
    let mut command = factory
        .create(name)
        .ok_or_else(|| ProtocolError::UnknownCommand {
            name: name.to_string(),
        })?;
    command.set_document(document);
    command.validate(mode)?;
    Ok(command)
}

/// JSON text -> [`decode_command`].
pub fn parse_command(
    text: &str,
    factory: &CommandFactory,
    mode: ReportMode,
) -> Result<Box<dyn Command>, ProtocolError> {
    let document = Document::parse_str(text)?;
    decode_command(document, factory, mode)
}

/// Materialize and validate a result, including its related command.
///
/// A result without a decodable `RelatedCommand` is malformed: results are
/// never standalone.
pub fn decode_result(
    document: Document,
    results: &ResultFactory,
    commands: &CommandFactory,
    mode: ReportMode,
) -> Result<Box<dyn CommandResult>, ProtocolError> {
    let name = message_name(&document)?.to_string();
    let mut result = results
        .create(&name)
        .ok_or_else(|| ProtocolError::UnknownCommand { name: name.clone() })?;

    let related = match document.get_field(RELATED_COMMAND_KEY) {
        Some(node) => decode_command(Document::from_value(node.clone()), commands, mode)?,
        None => {
            return Err(ProtocolError::Malformed {
                name,
                fields: vec![RELATED_COMMAND_KEY.to_string()],
            })
        }
    };

    result.set_document(document);
    result.validate(mode)?;
    *result.related_command_slot() = Some(Arc::from(related));
    Ok(result)
}

/// JSON text -> [`decode_result`].
pub fn parse_result(
    text: &str,
    results: &ResultFactory,
    commands: &CommandFactory,
    mode: ReportMode,
) -> Result<Box<dyn CommandResult>, ProtocolError> {
    let document = Document::parse_str(text)?;
    decode_result(document, results, commands, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::message::Message;
    use crate::permission::Permission;
    use serde_json::json;

    crate::command! {
        struct SetSvPower {
            name: "SetSvPower",
            documentation: "Set the power offset of one satellite.",
            permission: Permission::ANY,
            fields {
                sv_id / set_sv_id: i32 = "SvId",
                offset / set_offset: f64 = "Offset",
                data_set_name / set_data_set_name: Option<String> = "DataSetName",
            }
        }
    }

    crate::command_result! {
        struct SetSvPowerResult {
            name: "SetSvPowerResult",
            documentation: "Echo of the applied power offset.",
            fields {
                offset / set_offset: f64 = "Offset",
            }
        }
    }

    fn factories() -> (CommandFactory, ResultFactory) {
        let mut commands = CommandFactory::new();
        commands.register_type::<SetSvPower>().unwrap();
        let mut results = ResultFactory::new();
        results.register_type::<SetSvPowerResult>().unwrap();
        (commands, results)
    }

    #[test]
    fn decodes_known_command() {
        let (commands, _) = factories();
        let doc = Document::from_value(json!({"CmdName": "SetSvPower", "SvId": 4, "Offset": -1.5}));
        let cmd = decode_command(doc, &commands, ReportMode::All).unwrap();
        let typed = cmd.downcast_ref::<SetSvPower>().unwrap();
        assert_eq!(typed.sv_id().unwrap(), 4);
        assert_eq!(typed.offset().unwrap(), -1.5);
        assert_eq!(typed.data_set_name().unwrap(), None);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let (commands, _) = factories();
        let doc = Document::from_value(json!({"CmdName": "UnknownName123"}));
        let err = decode_command(doc, &commands, ReportMode::All).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::UnknownCommand {
                name: "UnknownName123".to_string()
            }
        );
    }

    #[test]
    fn missing_or_non_string_name_is_rejected() {
        let (commands, _) = factories();
        for doc in [json!({"SvId": 1}), json!({"CmdName": 7})] {
            let err = decode_command(Document::from_value(doc), &commands, ReportMode::All)
                .unwrap_err();
            assert_eq!(err, ProtocolError::MissingName);
        }
        let err = decode_command(Document::from_value(json!([1])), &commands, ReportMode::All)
            .unwrap_err();
        assert_eq!(err, ProtocolError::NotAnObject);
    }

    #[test]
    fn malformed_lists_failing_fields_per_mode() {
        let (commands, _) = factories();
        let raw = json!({"CmdName": "SetSvPower", "SvId": "four", "DataSetName": 3});

        let all = decode_command(Document::from_value(raw.clone()), &commands, ReportMode::All)
            .unwrap_err();
        assert_eq!(
            all,
            ProtocolError::Malformed {
                name: "SetSvPower".to_string(),
                fields: vec![
                    "SvId".to_string(),
                    "Offset".to_string(),
                    "DataSetName".to_string()
                ],
            }
        );

        let first = decode_command(Document::from_value(raw), &commands, ReportMode::First)
            .unwrap_err();
        assert_eq!(
            first,
            ProtocolError::Malformed {
                name: "SetSvPower".to_string(),
                fields: vec!["SvId".to_string()],
            }
        );
    }

    #[test]
    fn bad_json_text_is_a_decode_error() {
        let (commands, _) = factories();
        let err = parse_command("{\"CmdName\":", &commands, ReportMode::All).unwrap_err();
        assert!(matches!(err, ProtocolError::Decode(DecodeError::Json { .. })));
    }

    #[test]
    fn result_round_trips_with_related_command() {
        let (commands, results) = factories();
        let mut cmd = SetSvPower::new(2, 3.5, Some("Default".to_string()));
        cmd.set_uuid("abc-123");
        let cmd: Arc<dyn Command> = Arc::new(cmd);
        let result = SetSvPowerResult::new(cmd, 3.5);

        let text = result.document().to_json_string();
        let decoded = parse_result(&text, &results, &commands, ReportMode::All).unwrap();

        assert!(decoded.is_success());
        let related = decoded.related_command().unwrap();
        assert_eq!(related.name(), "SetSvPower");
        assert_eq!(related.uuid(), Some("abc-123"));
        assert_eq!(
            related.downcast_ref::<SetSvPower>().unwrap().data_set_name().unwrap(),
            Some("Default".to_string())
        );
        let typed = decoded.downcast_ref::<SetSvPowerResult>().unwrap();
        assert_eq!(typed.offset().unwrap(), 3.5);
    }

    #[test]
    fn result_without_related_command_is_malformed() {
        let (commands, results) = factories();
        let doc = Document::from_value(json!({"CmdName": "SetSvPowerResult", "Offset": 1.0}));
        let err = decode_result(doc, &results, &commands, ReportMode::All).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::Malformed {
                name: "SetSvPowerResult".to_string(),
                fields: vec!["RelatedCommand".to_string()],
            }
        );
    }

    #[test]
    fn result_with_invalid_related_command_is_rejected() {
        let (commands, results) = factories();
        let doc = Document::from_value(json!({
            "CmdName": "SetSvPowerResult",
            "Offset": 1.0,
            "RelatedCommand": {"CmdName": "SetSvPower", "SvId": 1}
        }));
        let err = decode_result(doc, &results, &commands, ReportMode::All).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::Malformed {
                name: "SetSvPower".to_string(),
                fields: vec!["Offset".to_string()],
            }
        );
    }
}
