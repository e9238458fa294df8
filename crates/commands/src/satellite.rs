//! Satellite motion, signal enablement and health.

use simctl_protocol::{command, command_result, CommandFactory, Permission, RegistryError, ResultFactory};

command! {
    pub struct SetSatMotionFixed {
        name: "SetSatMotionFixed",
        documentation: "If IsFixed is set to true, the satellite will not move during the simulation and keep its initial position calculated at the beginning of the simulation.",
        permission: Permission::IDLE,
        fields {
            /// "GPS", "Galileo", "BeiDou", "QZSS" or "NavIC".
            system / set_system: String = "System",
            sv_id / set_sv_id: i32 = "SvId",
            is_fixed / set_is_fixed: bool = "IsFixed",
        }
    }
}

command! {
    pub struct IsSignalEnabledForSV {
        name: "IsSignalEnabledForSV",
        documentation: "Tells if the signal is enabled or disabled.",
        permission: Permission::IDLE | Permission::SIMULATING,
        fields {
            signal / set_signal: String = "Signal",
            /// Use 0 for all the constellation's satellites.
            sv_id / set_sv_id: i32 = "SvId",
        }
    }
}

command_result! {
    pub struct IsSignalEnabledForSVResult {
        name: "IsSignalEnabledForSVResult",
        documentation: "Result of IsSignalEnabledForSV.",
        fields {
            signal / set_signal: String = "Signal",
            sv_id / set_sv_id: i32 = "SvId",
            enabled / set_enabled: bool = "Enabled",
        }
    }
}

command! {
    pub struct GetGpsL5HealthForSV {
        name: "GetGpsL5HealthForSV",
        documentation: "Get GPS L5 health (Health of L5 signal).",
        permission: Permission::IDLE | Permission::SIMULATING,
        fields {
            sv_id / set_sv_id: i32 = "SvId",
            data_set_name / set_data_set_name: Option<String> = "DataSetName",
        }
    }
}

command_result! {
    pub struct GetGpsL5HealthForSVResult {
        name: "GetGpsL5HealthForSVResult",
        documentation: "Result of GetGpsL5HealthForSV.",
        fields {
            sv_id / set_sv_id: i32 = "SvId",
            health / set_health: bool = "Health",
            data_set_name / set_data_set_name: Option<String> = "DataSetName",
        }
    }
}

command! {
    pub struct GetGalileoSignalHealthForSV {
        name: "GetGalileoSignalHealthForSV",
        documentation: "Get Galileo signal health for I/NAV and F/NAV message",
        permission: Permission::IDLE,
        fields {
            sv_id / set_sv_id: i32 = "SvId",
            /// "E1b", "E5b" or "E5a".
            component / set_component: String = "Component",
            data_set_name / set_data_set_name: Option<String> = "DataSetName",
        }
    }
}

command_result! {
    pub struct GetGalileoSignalHealthForSVResult {
        name: "GetGalileoSignalHealthForSVResult",
        documentation: "Result of GetGalileoSignalHealthForSV.",
        fields {
            sv_id / set_sv_id: i32 = "SvId",
            component / set_component: String = "Component",
            health / set_health: i32 = "Health",
            data_set_name / set_data_set_name: Option<String> = "DataSetName",
        }
    }
}

pub(crate) fn register_commands(factory: &mut CommandFactory) -> Result<(), RegistryError> {
    factory.register_type::<SetSatMotionFixed>()?;
    factory.register_type::<IsSignalEnabledForSV>()?;
    factory.register_type::<GetGpsL5HealthForSV>()?;
    factory.register_type::<GetGalileoSignalHealthForSV>()?;
    Ok(())
}

pub(crate) fn register_results(factory: &mut ResultFactory) -> Result<(), RegistryError> {
    factory.register_type::<IsSignalEnabledForSVResult>()?;
    factory.register_type::<GetGpsL5HealthForSVResult>()?;
    factory.register_type::<GetGalileoSignalHealthForSVResult>()?;
    Ok(())
}
