//! The execution-permission gate.
//!
//! A pure function of (command, current run-state). The run-state is an
//! input supplied by the caller; the gate never reads global simulator state.

use std::fmt;

use crate::error::PermissionError;
use crate::message::Command;
use crate::permission::Permission;

/// A simulator run-state as seen by the gate.
pub trait RunState: fmt::Display {
    /// The permission flag this state grants. `Permission::NONE` denies everything.
    fn granted(&self) -> Permission;
}

impl RunState for Permission {
    fn granted(&self) -> Permission {
        *self
    }
}

/// Allow `command` iff its declared mask covers the current state.
pub fn check_permission<S>(command: &dyn Command, state: &S) -> Result<(), PermissionError>
where
    S: RunState + ?Sized,
{
    let allowed = command.execute_permission();
    if allowed.intersects(state.granted()) {
        Ok(())
    } else {
        Err(PermissionError {
            command: command.name().to_string(),
            state: state.to_string(),
            allowed,
        })
    }
}
