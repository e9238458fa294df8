//! Per-command handlers.

use std::sync::Arc;

use simctl_protocol::{Command, CommandResult};

/// A handler could not carry out a command it accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct HandlerError {
    pub message: String,
}

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        HandlerError {
            message: message.into(),
        }
    }
}

/// What a handler returns: its own result, or `None` for "done, nothing to report".
///
/// A returned result must be valid and either correlated to the command the
/// handler was given or not correlated at all; the executor attaches the
/// command to an uncorrelated result.
pub type HandlerOutput = Result<Option<Box<dyn CommandResult>>, HandlerError>;

/// Carries out one kind of command.
///
/// Handlers only see commands that decoded, validated and passed the
/// permission gate.
pub trait Handler: Send + Sync {
    fn handle(&self, command: &Arc<dyn Command>) -> HandlerOutput;
}

impl<F> Handler for F
where
    F: Fn(&Arc<dyn Command>) -> HandlerOutput + Send + Sync,
{
    fn handle(&self, command: &Arc<dyn Command>) -> HandlerOutput {
        self(command)
    }
}
