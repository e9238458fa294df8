//! Navigation message modification events.
//!
//! A bits mod is written `"I:Bits"`, where `I` is a 1-based bit index and
//! each character of `Bits` is `0`, `1`, `-` (unchanged) or `X` (revert).
//! Several mods are joined with commas.

use simctl_protocol::{command, command_result, CommandFactory, Permission, RegistryError, ResultFactory};

command! {
    pub struct SetMessageModificationToBeiDouCNav1 {
        name: "SetMessageModificationToBeiDouCNav1",
        documentation: concat!(
            "Set (or Modify) event to change BeiDou CNAV1 message bits. If you send this command without setting the ID\n",
            "parameter, or if you set the ID with a value never used before, a new Modification event will be\n",
            "created. If you reuse the same event ID, it will modify the existing event.\n",
            "\n",
            "Note that start and stop time are automatically extended to beginning and ending of overlapped\n",
            "messages.\n",
            "\n",
            "The Condition parameter is optional and allows you to add content matching condition before applying\n",
            "bit modifications.\n",
            "\n",
            "BitModifications can be an empty string. The Modification will have no effect until you modify it with at\n",
            "least one bits mod.\n",
            "\n",
            "A bits mod is represented with a string using the following format: \"I:Bits\" where I is a bit\n",
            "index (1 refers to the first transmitted bit) and Bits is a modification mask where each\n",
            "character describes a modification to a single bit. The allowed characters are:\n",
            "   0 : force bit to 0\n",
            "   1 : force bit to 1\n",
            "   - : leave bit unchanged\n",
            "   X : revert bit (0 becomes 1 and 1 becomes 0)\n",
            "\n",
            "For example: \"24:X---10XX\" will: revert bits 24, 30 and 31\n",
            "                 set bit 28 to 1\n",
            "                 set bit 29 to 0\n",
            "The other bits are not affected.\n",
            "\n",
            "You can add multiple bit modifications using commas. For example: \"24:X---10XX,127:100X,231:01\"",
        ),
        permission: Permission::IDLE | Permission::SIMULATING,
        fields {
            signal_array / set_signal_array: Vec<String> = "SignalArray",
            sv_id / set_sv_id: i32 = "SvId",
            start_time / set_start_time: i32 = "StartTime",
            stop_time / set_stop_time: i32 = "StopTime",
            page / set_page: i32 = "Page",
            condition / set_condition: String = "Condition",
            update_crc / set_update_crc: bool = "UpdateCRC",
            bit_modifications / set_bit_modifications: String = "BitModifications",
            id / set_id: String = "Id",
        }
    }
}

command_result! {
    pub struct SetMessageModificationToBeiDouCNav1Result {
        name: "SetMessageModificationToBeiDouCNav1Result",
        documentation: "Result of SetMessageModificationToBeiDouCNav1.",
        fields {
            id / set_id: String = "Id",
        }
    }
}

command! {
    pub struct GetMessageModificationToGlonassNav {
        name: "GetMessageModificationToGlonassNav",
        documentation: "Get infos about the GLONASS NAV message modification with this ID.",
        permission: Permission::IDLE | Permission::SIMULATING,
        fields {
            id / set_id: String = "Id",
        }
    }
}

command_result! {
    pub struct GetMessageModificationToGlonassNavResult {
        name: "GetMessageModificationToGlonassNavResult",
        documentation: "Result of GetMessageModificationToGlonassNav.",
        fields {
            signal_array / set_signal_array: Vec<String> = "SignalArray",
            sv_id / set_sv_id: i32 = "SvId",
            start_time / set_start_time: i32 = "StartTime",
            stop_time / set_stop_time: i32 = "StopTime",
            string_number / set_string_number: i32 = "StringNumber",
            bit_modifications / set_bit_modifications: String = "BitModifications",
            id / set_id: String = "Id",
        }
    }
}

command! {
    pub struct GetAllMessageModificationIdsForSignal {
        name: "GetAllMessageModificationIdsForSignal",
        documentation: "Get all the message modification event's IDs for this signal and SV ID.",
        permission: Permission::IDLE | Permission::SIMULATING,
        fields {
            signal / set_signal: String = "Signal",
            sv_id / set_sv_id: i32 = "SvId",
        }
    }
}

command_result! {
    pub struct GetAllMessageModificationIdsForSignalResult {
        name: "GetAllMessageModificationIdsForSignalResult",
        documentation: "Result of GetAllMessageModificationIdsForSignal.",
        fields {
            signal / set_signal: String = "Signal",
            sv_id / set_sv_id: i32 = "SvId",
            ids / set_ids: Vec<String> = "Ids",
        }
    }
}

pub(crate) fn register_commands(factory: &mut CommandFactory) -> Result<(), RegistryError> {
    factory.register_type::<SetMessageModificationToBeiDouCNav1>()?;
    factory.register_type::<GetMessageModificationToGlonassNav>()?;
    factory.register_type::<GetAllMessageModificationIdsForSignal>()?;
    Ok(())
}

pub(crate) fn register_results(factory: &mut ResultFactory) -> Result<(), RegistryError> {
    factory.register_type::<SetMessageModificationToBeiDouCNav1Result>()?;
    factory.register_type::<GetMessageModificationToGlonassNavResult>()?;
    factory.register_type::<GetAllMessageModificationIdsForSignalResult>()?;
    Ok(())
}
