//! Simulator state queries.

use simctl_protocol::{command, command_result, CommandFactory, Permission, RegistryError, ResultFactory};

use crate::state::SimulatorSubState;

command! {
    pub struct GetSimulatorState {
        name: "GetSimulatorState",
        documentation: "Get the simulator state.",
        permission: Permission::ANY,
        fields {}
    }
}

command_result! {
    pub struct GetSimulatorStateResult {
        name: "GetSimulatorStateResult",
        documentation: "Result of GetSimulatorState.",
        fields {
            /// "None", "Idle", "Started" or "Error".
            state / set_state: String = "State",
            /// Set when the simulator is in error.
            error / set_error: String = "Error",
            sub_state / set_sub_state: SimulatorSubState = "SubState",
        }
    }
}

pub(crate) fn register_commands(factory: &mut CommandFactory) -> Result<(), RegistryError> {
    factory.register_type::<GetSimulatorState>()
}

pub(crate) fn register_results(factory: &mut ResultFactory) -> Result<(), RegistryError> {
    factory.register_type::<GetSimulatorStateResult>()
}
