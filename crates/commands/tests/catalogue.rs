//! Catalogue-wide checks: registration, gating, decoding of every field shape.

use std::sync::Arc;

use proptest::prelude::*;
use serde_json::json;
use simctl_commands::ephemeris::{
    GetNavICEphDoubleParamForSV, GetNavICEphDoubleParamForSVResult, SetBeiDouEphDoubleParamForEachSV,
    SetNavICEphemerisDoubleParam,
};
use simctl_commands::satellite::{IsSignalEnabledForSV, SetSatMotionFixed};
use simctl_commands::simulator::{GetSimulatorState, GetSimulatorStateResult};
use simctl_commands::vehicle::{GetVehicleAntennaPhaseOffset, GetVehicleAntennaPhaseOffsetResult};
use simctl_commands::{
    command_factory, result_factory, AntennaPatternType, GnssBand, SimulatorSubState,
};
use simctl_protocol::{
    check_permission, decode_command, decode_result, parse_result, Command, Document, Message,
    Permission, ProtocolError, RegistryError, ReportMode,
};

#[test]
fn every_registered_name_builds_that_message() {
    let commands = command_factory().unwrap();
    assert!(commands.len() >= 20);
    for name in commands.names() {
        let cmd = commands.create(name).unwrap();
        assert_eq!(cmd.name(), name);
        assert!(!cmd.description().is_empty(), "{name} has no documentation");
        assert!(cmd.documentation().starts_with(cmd.description()));
        assert!(!cmd.execute_permission().is_empty(), "{name} can never run");
    }

    let results = result_factory().unwrap();
    for name in results.names() {
        let result = results.create(name).unwrap();
        assert_eq!(result.name(), name);
        assert!(result.related_command().is_none());
    }
    assert!(results.contains("SuccessResult"));
    assert!(results.contains("FailureResult"));
}

#[test]
fn documentation_keeps_value_table_and_adds_parameter_table() {
    let docs = SetNavICEphemerisDoubleParam::default().documentation();
    assert!(docs.starts_with("Please note the command SetNavICEphemerisDoubleParam is deprecated"));
    assert!(docs.contains("  \"ClockDriftRate\"  sec/sec^2\n"));
    assert!(docs.contains("  \"Tgd\"             sec\n\nName"));
    assert!(docs.ends_with("DataSetName optional string"));
}

#[test]
fn non_finite_double_makes_message_invalid() {
    let cmd: Arc<dyn Command> =
        Arc::new(GetNavICEphDoubleParamForSV::new(3, "Tgd".to_string(), None));
    let mut result =
        GetNavICEphDoubleParamForSVResult::new(cmd, 3, "Tgd".to_string(), 1.5e-9, None);
    assert!(result.is_valid());

    result.set_val(f64::NAN);
    assert!(!result.is_valid());
    assert_eq!(result.invalid_fields(), vec!["Val"]);
    assert_eq!(result.to_json()["Val"], serde_json::Value::Null);

    result.set_val(f64::INFINITY);
    assert!(!result.is_valid());
}

#[test]
fn command_and_result_names_do_not_overlap() {
    let commands = command_factory().unwrap();
    let results = result_factory().unwrap();
    for name in results.names() {
        assert!(!commands.contains(name), "{name} registered as both");
    }
}

#[test]
fn registering_a_module_twice_fails() {
    let mut commands = command_factory().unwrap();
    let err = commands.register_type::<SetSatMotionFixed>().unwrap_err();
    assert_eq!(
        err,
        RegistryError::Duplicate {
            name: "SetSatMotionFixed".to_string()
        }
    );
}

#[test]
fn unknown_name_is_not_found() {
    assert!(command_factory().unwrap().create("UnknownName123").is_none());
}

#[test]
fn idle_only_command_follows_run_state() {
    let cmd = SetSatMotionFixed::new("GPS".to_string(), 12, true);
    assert_eq!(cmd.execute_permission(), Permission::IDLE);

    let err = check_permission(&cmd, &SimulatorSubState::Started_Streaming).unwrap_err();
    assert_eq!(err.state, "Started_Streaming");
    assert!(check_permission(&cmd, &SimulatorSubState::Idle_ConfigValid).is_ok());

    let query = IsSignalEnabledForSV::new("L1CA".to_string(), 0);
    assert!(check_permission(&query, &SimulatorSubState::Started_Streaming).is_ok());
    assert!(check_permission(&query, &SimulatorSubState::Idle_ConfigNotValid).is_ok());
}

#[test]
fn missing_then_mistyped_then_correct_field() {
    let commands = command_factory().unwrap();
    let mut raw = json!({"CmdName": "SetSatMotionFixed", "System": "GPS", "IsFixed": false});
    let decode = |raw: &serde_json::Value| {
        decode_command(Document::from_value(raw.clone()), &commands, ReportMode::All)
    };

    assert!(matches!(decode(&raw), Err(ProtocolError::Malformed { fields, .. }) if fields == ["SvId"]));
    raw["SvId"] = json!("3");
    assert!(matches!(decode(&raw), Err(ProtocolError::Malformed { .. })));
    raw["SvId"] = json!(3);
    let cmd = decode(&raw).unwrap();
    assert_eq!(cmd.downcast_ref::<SetSatMotionFixed>().unwrap().sv_id().unwrap(), 3);
}

#[test]
fn array_and_optional_fields_decode() {
    let commands = command_factory().unwrap();
    let doc = Document::from_value(json!({
        "CmdName": "SetBeiDouEphDoubleParamForEachSV",
        "ParamName": "Crs",
        "Val": [0.5, 1, -2.25]
    }));
    let cmd = decode_command(doc, &commands, ReportMode::All).unwrap();
    let typed = cmd.downcast_ref::<SetBeiDouEphDoubleParamForEachSV>().unwrap();
    assert_eq!(typed.val().unwrap(), vec![0.5, 1.0, -2.25]);
    assert_eq!(typed.data_set_name().unwrap(), None);

    let bad = Document::from_value(json!({
        "CmdName": "SetBeiDouEphDoubleParamForEachSV",
        "ParamName": "Crs",
        "Val": [0.5, "x"]
    }));
    assert!(decode_command(bad, &commands, ReportMode::All).is_err());
}

#[test]
fn simulator_state_result_decodes_with_sub_state() {
    let commands = command_factory().unwrap();
    let results = result_factory().unwrap();
    let doc = Document::from_value(json!({
        "CmdName": "GetSimulatorStateResult",
        "RelatedCommand": {"CmdName": "GetSimulatorState", "CmdUuid": "42"},
        "State": "Started",
        "Error": "",
        "SubState": 4
    }));
    let result = decode_result(doc, &results, &commands, ReportMode::All).unwrap();
    let typed = result.downcast_ref::<GetSimulatorStateResult>().unwrap();
    assert_eq!(typed.sub_state().unwrap(), SimulatorSubState::Started_Streaming);
    let related = result.related_command().unwrap();
    assert!(related.is::<GetSimulatorState>());
    assert_eq!(related.uuid(), Some("42"));
}

fn arb_matrix() -> impl Strategy<Value = Vec<Vec<f64>>> {
    prop::collection::vec(prop::collection::vec(-3.2f64..3.2, 0..5), 0..5)
}

proptest! {
    #[test]
    fn antenna_result_round_trips(
        matrix in arb_matrix(),
        pattern in prop::sample::select(AntennaPatternType::ALL),
        band in prop::sample::select(GnssBand::ALL),
        name in prop::option::of("[A-Za-z]{1,8}"),
    ) {
        let commands = command_factory().unwrap();
        let results = result_factory().unwrap();
        let cmd: Arc<dyn Command> = Arc::new(GetVehicleAntennaPhaseOffset::new(band, name.clone()));
        let result = GetVehicleAntennaPhaseOffsetResult::new(
            cmd,
            matrix.clone(),
            pattern,
            band,
            name.clone(),
        );

        let text = result.document().to_json_string();
        let decoded = parse_result(&text, &results, &commands, ReportMode::All).unwrap();
        let typed = decoded.downcast_ref::<GetVehicleAntennaPhaseOffsetResult>().unwrap();
        prop_assert_eq!(typed.phase_offset().unwrap(), matrix);
        prop_assert_eq!(typed.pattern_type().unwrap(), pattern);
        prop_assert_eq!(typed.band().unwrap(), band);
        prop_assert_eq!(typed.antenna_name().unwrap(), name.clone());
        prop_assert_eq!(typed.document().contains_field("Name"), name.is_some());
    }
}
