//! Simulator run-state as reported by `GetSimulatorState`.

use simctl_protocol::{Permission, RunState};

simctl_protocol::wire_enum! {
    /// The simulator sub-state.
    #[allow(non_camel_case_types)]
    pub enum SimulatorSubState {
        SubStateNone = 0,
        Idle_ConfigNotValid = 1,
        Idle_ConfigValid = 2,
        Started_InitHardware = 3,
        Started_Streaming = 4,
        Started_SyncInit = 5,
        Started_SlaveSync = 6,
        Started_Armed = 7,
        Started_SyncStartTime = 8,
        Error = 9,
        Started_HILSync = 10,
        Started_SyncPPSReset = 11,
        Started_SyncStart = 12,
        Started_WFSlaveInit = 13,
        Started_WFMasterInit = 14,
    }
}

impl SimulatorSubState {
    /// True once a simulation has been started, including while it syncs or arms.
    pub fn is_started(self) -> bool {
        self.as_str().starts_with("Started_")
    }
}

/// Idle-like states (including `SubStateNone` and `Error`, where the
/// simulator is stopped) accept configuration; every `Started_*` state only
/// accepts commands that may run during a simulation.
impl RunState for SimulatorSubState {
    fn granted(&self) -> Permission {
        if self.is_started() {
            Permission::SIMULATING
        } else {
            Permission::IDLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use simctl_protocol::{Codec, DecodeError};

    #[test]
    fn ordinals_match_the_wire() {
        assert_eq!(SimulatorSubState::ALL.len(), 15);
        assert_eq!(SimulatorSubState::Idle_ConfigValid.ordinal(), 2);
        assert_eq!(SimulatorSubState::Started_Streaming.ordinal(), 4);
        assert_eq!(SimulatorSubState::Error.ordinal(), 9);
        assert_eq!(
            SimulatorSubState::parse(&json!(14)).unwrap(),
            SimulatorSubState::Started_WFMasterInit
        );
        assert!(matches!(
            SimulatorSubState::parse(&json!(15)),
            Err(DecodeError::UnknownDiscriminant { ordinal: 15, .. })
        ));
    }

    #[test]
    fn granted_permission_follows_state_family() {
        use SimulatorSubState::*;
        for state in [SubStateNone, Idle_ConfigNotValid, Idle_ConfigValid, Error] {
            assert_eq!(state.granted(), Permission::IDLE, "{state}");
        }
        for state in SimulatorSubState::ALL.iter().filter(|s| s.is_started()) {
            assert_eq!(state.granted(), Permission::SIMULATING, "{state}");
        }
        assert_eq!(
            SimulatorSubState::ALL.iter().filter(|s| s.is_started()).count(),
            11
        );
    }
}
