//! Vehicle trajectory and antenna.

use simctl_protocol::{command, command_result, CommandFactory, Permission, RegistryError, ResultFactory};

use crate::types::{AntennaPatternType, GnssBand};

command! {
    pub struct GetVehicleTrajectory {
        name: "GetVehicleTrajectory",
        documentation: "Get the vehicle trajectory type.",
        permission: Permission::IDLE | Permission::SIMULATING,
        fields {}
    }
}

command_result! {
    pub struct GetVehicleTrajectoryResult {
        name: "GetVehicleTrajectoryResult",
        documentation: "Result of GetVehicleTrajectory.",
        fields {
            /// "Fix", "Circular", "HIL", "Track", "Route" or "Orbit".
            trajectory_type / set_trajectory_type: String = "Type",
        }
    }
}

command! {
    pub struct SetVehicleAntennaPhaseOffset {
        name: "SetVehicleAntennaPhaseOffset",
        documentation: "Set the vehicle antenna phase offset pattern for one band.",
        permission: Permission::IDLE,
        fields {
            /// First dimension maps to elevation [-90, 90], second to azimuth [0, 360[.
            phase_offset / set_phase_offset: Vec<Vec<f64>> = "PhaseOffset",
            pattern_type / set_pattern_type: AntennaPatternType = "Type",
            band / set_band: GnssBand = "Band",
            antenna_name / set_antenna_name: Option<String> = "Name",
        }
    }
}

command! {
    pub struct GetVehicleAntennaPhaseOffset {
        name: "GetVehicleAntennaPhaseOffset",
        documentation: "Get the vehicle antenna phase offset pattern for one band.",
        permission: Permission::IDLE | Permission::SIMULATING,
        fields {
            band / set_band: GnssBand = "Band",
            antenna_name / set_antenna_name: Option<String> = "Name",
        }
    }
}

command_result! {
    pub struct GetVehicleAntennaPhaseOffsetResult {
        name: "GetVehicleAntennaPhaseOffsetResult",
        documentation: "Result of GetVehicleAntennaPhaseOffset.",
        fields {
            phase_offset / set_phase_offset: Vec<Vec<f64>> = "PhaseOffset",
            pattern_type / set_pattern_type: AntennaPatternType = "Type",
            band / set_band: GnssBand = "Band",
            antenna_name / set_antenna_name: Option<String> = "Name",
        }
    }
}

command! {
    pub struct RemoveAntennaChange {
        name: "RemoveAntennaChange",
        documentation: "Removes an antenna change event.",
        permission: Permission::IDLE,
        fields {
            id / set_id: String = "Id",
        }
    }
}

pub(crate) fn register_commands(factory: &mut CommandFactory) -> Result<(), RegistryError> {
    factory.register_type::<GetVehicleTrajectory>()?;
    factory.register_type::<SetVehicleAntennaPhaseOffset>()?;
    factory.register_type::<GetVehicleAntennaPhaseOffset>()?;
    factory.register_type::<RemoveAntennaChange>()?;
    Ok(())
}

pub(crate) fn register_results(factory: &mut ResultFactory) -> Result<(), RegistryError> {
    factory.register_type::<GetVehicleTrajectoryResult>()?;
    factory.register_type::<GetVehicleAntennaPhaseOffsetResult>()?;
    Ok(())
}
