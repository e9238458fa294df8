//! Interference targets and spoofing transmitters.

use simctl_protocol::{
    command, command_result, CommandFactory, DecodeError, Permission, RegistryError, ResultFactory,
};

/// Output gain (dB) used when a target leaves `Gain` unset or negative.
pub const DEFAULT_INTERFERENCE_GAIN: i32 = 60;

command! {
    pub struct SetModulationTargetInterferences {
        name: "SetModulationTargetInterferences",
        documentation: "Set a modulation target for interference signals.",
        permission: Permission::IDLE,
        fields {
            output / set_output: i32 = "Output",
            min_rate / set_min_rate: i32 = "MinRate",
            max_rate / set_max_rate: i32 = "MaxRate",
            /// 1..=16, or 0 for no group.
            group / set_group: i32 = "Group",
            /// 0.0 lets the simulator pick from `Signal`.
            central_freq / set_central_freq: f64 = "CentralFreq",
            gain / set_gain: Option<i32> = "Gain",
            id / set_id: String = "Id",
            /// Comma separated signal keys.
            signal / set_signal: Option<String> = "Signal",
        }
    }
}

impl SetModulationTargetInterferences {
    /// The gain the target will run at. The default is never written back.
    pub fn effective_gain(&self) -> Result<i32, DecodeError> {
        Ok(resolve_gain(self.gain()?))
    }
}

command! {
    pub struct GetModulationTargetInterferences {
        name: "GetModulationTargetInterferences",
        documentation: "Get the modulation target for interference signals.",
        permission: Permission::IDLE | Permission::SIMULATING,
        fields {
            id / set_id: String = "Id",
        }
    }
}

command_result! {
    pub struct GetModulationTargetInterferencesResult {
        name: "GetModulationTargetInterferencesResult",
        documentation: "Result of GetModulationTargetInterferences.",
        fields {
            output / set_output: i32 = "Output",
            min_rate / set_min_rate: i32 = "MinRate",
            max_rate / set_max_rate: i32 = "MaxRate",
            group / set_group: i32 = "Group",
            central_freq / set_central_freq: f64 = "CentralFreq",
            /// Negative means the default gain.
            gain / set_gain: i32 = "Gain",
            id / set_id: String = "Id",
            signal / set_signal: Option<String> = "Signal",
        }
    }
}

impl GetModulationTargetInterferencesResult {
    pub fn effective_gain(&self) -> Result<i32, DecodeError> {
        Ok(resolve_gain(Some(self.gain()?)))
    }
}

fn resolve_gain(gain: Option<i32>) -> i32 {
    gain.filter(|g| *g >= 0).unwrap_or(DEFAULT_INTERFERENCE_GAIN)
}

command! {
    pub struct GetSpoofTxColor {
        name: "GetSpoofTxColor",
        documentation: "Get the spoofing transmitter color.",
        permission: Permission::IDLE | Permission::SIMULATING,
        fields {
            id / set_id: String = "Id",
        }
    }
}

command_result! {
    pub struct GetSpoofTxColorResult {
        name: "GetSpoofTxColorResult",
        documentation: "Result of GetSpoofTxColor.",
        fields {
            /// A common color name (red, white, ...) or a hex code (#FFFFFF).
            color / set_color: String = "Color",
            id / set_id: String = "Id",
        }
    }
}

pub(crate) fn register_commands(factory: &mut CommandFactory) -> Result<(), RegistryError> {
    factory.register_type::<SetModulationTargetInterferences>()?;
    factory.register_type::<GetModulationTargetInterferences>()?;
    factory.register_type::<GetSpoofTxColor>()?;
    Ok(())
}

pub(crate) fn register_results(factory: &mut ResultFactory) -> Result<(), RegistryError> {
    factory.register_type::<GetModulationTargetInterferencesResult>()?;
    factory.register_type::<GetSpoofTxColorResult>()?;
    Ok(())
}
