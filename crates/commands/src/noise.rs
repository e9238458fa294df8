//! Pseudorange noise.

use simctl_protocol::{command, command_result, CommandFactory, Permission, RegistryError, ResultFactory};

command! {
    pub struct SetPseudorangeNoiseSineWaveForEachSV {
        name: "SetPseudorangeNoiseSineWaveForEachSV",
        documentation: "Set the satellite pseudorange noise sine wave attributes for all satellites.",
        permission: Permission::IDLE | Permission::SIMULATING,
        fields {
            system / set_system: String = "System",
            /// Sine wave number, 0 or 1.
            sine_wave / set_sine_wave: i32 = "SineWave",
            enabled / set_enabled: Vec<bool> = "Enabled",
            /// Meters.
            amplitude / set_amplitude: Vec<f64> = "Amplitude",
            /// Seconds.
            period / set_period: Vec<i32> = "Period",
            /// Radians.
            offset / set_offset: Vec<f64> = "Offset",
        }
    }
}

command! {
    pub struct GetPseudorangeNoiseSineWaveForEachSV {
        name: "GetPseudorangeNoiseSineWaveForEachSV",
        documentation: "Get the satellite pseudorange noise sine wave attributes for all satellites.",
        permission: Permission::IDLE | Permission::SIMULATING,
        fields {
            system / set_system: String = "System",
            sine_wave / set_sine_wave: i32 = "SineWave",
        }
    }
}

command_result! {
    pub struct GetPseudorangeNoiseSineWaveForEachSVResult {
        name: "GetPseudorangeNoiseSineWaveForEachSVResult",
        documentation: "Result of GetPseudorangeNoiseSineWaveForEachSV.",
        fields {
            system / set_system: String = "System",
            sine_wave / set_sine_wave: i32 = "SineWave",
            enabled / set_enabled: Vec<bool> = "Enabled",
            amplitude / set_amplitude: Vec<f64> = "Amplitude",
            period / set_period: Vec<i32> = "Period",
            offset / set_offset: Vec<f64> = "Offset",
        }
    }
}

pub(crate) fn register_commands(factory: &mut CommandFactory) -> Result<(), RegistryError> {
    factory.register_type::<SetPseudorangeNoiseSineWaveForEachSV>()?;
    factory.register_type::<GetPseudorangeNoiseSineWaveForEachSV>()?;
    Ok(())
}

pub(crate) fn register_results(factory: &mut ResultFactory) -> Result<(), RegistryError> {
    factory.register_type::<GetPseudorangeNoiseSineWaveForEachSVResult>()?;
    Ok(())
}
