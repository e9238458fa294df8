//! Decode -> gate -> handler -> result.
//!
//! One command at a time, synchronously. No retries and no queueing: a
//! command refused by the gate is answered, never parked.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use simctl_commands::{FailureResult, SuccessResult};
use simctl_protocol::{
    check_permission, decode_command, parse_result, Command, CommandFactory, CommandResult,
    Document, Message, PermissionError, ProtocolError, RegistryError, ResultFactory, RunState,
};
use tracing::{debug, info, warn};

use crate::config::ExecutorConfig;
use crate::handler::{Handler, HandlerError};

/// Why a command produced no result of its own.
///
/// Variants other than [`ExecuteError::Protocol`] happen after decoding and
/// carry the command, so the sender can still get a correlated answer.
#[derive(Debug, thiserror::Error)]
pub enum ExecuteError {
    /// The document never became a command: bad JSON, unknown name, malformed.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("{source}")]
    Permission {
        command: Arc<dyn Command>,
        #[source]
        source: PermissionError,
    },

    #[error("no handler registered for {}", .command.name())]
    NoHandler { command: Arc<dyn Command> },

    #[error("{} failed: {source}", .command.name())]
    Handler {
        command: Arc<dyn Command>,
        #[source]
        source: HandlerError,
    },

    #[error("handler for {} produced no result", .command.name())]
    NoResult { command: Arc<dyn Command> },

    #[error("handler for {} produced a {result} correlated to another command", .command.name())]
    Uncorrelated {
        command: Arc<dyn Command>,
        result: &'static str,
    },

    #[error("handler for {} produced an invalid result: {source}", .command.name())]
    InvalidResult {
        command: Arc<dyn Command>,
        #[source]
        source: ProtocolError,
    },
}

impl ExecuteError {
    /// The decoded command this error is about, if decoding got that far.
    pub fn command(&self) -> Option<&Arc<dyn Command>> {
        match self {
            ExecuteError::Protocol(_) => None,
            ExecuteError::Permission { command, .. }
            | ExecuteError::NoHandler { command }
            | ExecuteError::Handler { command, .. }
            | ExecuteError::NoResult { command }
            | ExecuteError::Uncorrelated { command, .. }
            | ExecuteError::InvalidResult { command, .. } => Some(command),
        }
    }
}

/// A command executor over one pair of registries.
pub struct Executor {
    commands: CommandFactory,
    results: ResultFactory,
    handlers: BTreeMap<String, Box<dyn Handler>>,
    config: ExecutorConfig,
}

impl Executor {
    pub fn new(commands: CommandFactory, results: ResultFactory, config: ExecutorConfig) -> Self {
        Executor {
            commands,
            results,
            handlers: BTreeMap::new(),
            config,
        }
    }

    /// An executor over the full message catalogue.
    pub fn from_catalogue(config: ExecutorConfig) -> Result<Self, RegistryError> {
        let commands = simctl_commands::command_factory()?;
        let results = simctl_commands::result_factory()?;
        info!(
            commands = commands.len(),
            results = results.len(),
            "message registries ready"
        );
        Ok(Self::new(commands, results, config))
    }

    /// Route commands named `name` to `handler`, replacing any previous one.
    pub fn with_handler(mut self, name: impl Into<String>, handler: impl Handler + 'static) -> Self {
        let name = name.into();
        if !self.commands.contains(&name) {
            warn!(command = %name, "handler registered for a command the factory does not know");
        }
        self.handlers.insert(name, Box::new(handler));
        self
    }

    pub fn handles(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    pub fn commands(&self) -> &CommandFactory {
        &self.commands
    }

    pub fn results(&self) -> &ResultFactory {
        &self.results
    }

    /// Decode and validate, applying the strict-field policy.
    pub fn decode(&self, document: Document) -> Result<Box<dyn Command>, ProtocolError> {
        let command = decode_command(document, &self.commands, self.config.validation_report)?;
        if self.config.strict_fields {
            let undeclared = command.undeclared_fields();
            if !undeclared.is_empty() {
                return Err(ProtocolError::Malformed {
                    name: command.name().to_string(),
                    fields: undeclared,
                });
            }
        }
        Ok(command)
    }

    /// Run one command against the current run-state.
    pub fn execute<S>(&self, document: Document, state: &S) -> Result<Box<dyn CommandResult>, ExecuteError>
    where
        S: RunState + ?Sized,
    {
        let command: Arc<dyn Command> = match self.decode(document) {
            Ok(command) => Arc::from(command),
            Err(err) => {
                warn!(reason = %err, "command rejected");
                return Err(err.into());
            }
        };
        let name = command.name();
        debug!(command = name, uuid = command.uuid(), state = %state, "dispatching");

        if let Err(source) = check_permission(command.as_ref(), state) {
            warn!(command = name, reason = %source, "command rejected");
            return Err(ExecuteError::Permission { command, source });
        }

        let Some(handler) = self.handlers.get(name) else {
            warn!(command = name, reason = "no handler", "command rejected");
            return Err(ExecuteError::NoHandler { command });
        };

        let outcome = handler.handle(&command);
        match outcome {
            Ok(Some(result)) => {
                let result = self.check_result(&command, result)?;
                debug!(command = name, result = result.name(), "completed");
                Ok(result)
            }
            Ok(None) if self.config.default_success_result => {
                debug!(command = name, result = "SuccessResult", "completed");
                let result: Box<dyn CommandResult> = Box::new(SuccessResult::new(command));
                Ok(result)
            }
            Ok(None) => {
                warn!(command = name, reason = "no result", "command failed");
                Err(ExecuteError::NoResult { command })
            }
            Err(source) => {
                warn!(command = name, reason = %source, "command failed");
                Err(ExecuteError::Handler { command, source })
            }
        }
    }

    /// Correlate a handler's result with `command` and validate it.
    fn check_result(
        &self,
        command: &Arc<dyn Command>,
        mut result: Box<dyn CommandResult>,
    ) -> Result<Box<dyn CommandResult>, ExecuteError> {
        let correlated = result
            .related_command()
            .map(|related| Arc::ptr_eq(related, command));
        match correlated {
            None => result.set_related_command(Arc::clone(command)),
            Some(true) => {}
            Some(false) => {
                warn!(command = command.name(), result = result.name(), "uncorrelated result");
                return Err(ExecuteError::Uncorrelated {
                    command: Arc::clone(command),
                    result: result.name(),
                });
            }
        }
        if let Err(source) = result.validate(self.config.validation_report) {
            warn!(command = command.name(), reason = %source, "invalid result");
            return Err(ExecuteError::InvalidResult {
                command: Arc::clone(command),
                source,
            });
        }
        Ok(result)
    }

    /// JSON text in, result document out.
    ///
    /// Failures after decoding are answered with a `FailureResult`
    /// correlated to the command. Earlier failures have nothing to
    /// correlate with and are returned as errors.
    pub fn respond<S>(&self, text: &str, state: &S) -> Result<Value, ExecuteError>
    where
        S: RunState + ?Sized,
    {
        let document = Document::parse_str(text).map_err(ProtocolError::from)?;
        match self.execute(document, state) {
            Ok(result) => Ok(result.to_json()),
            Err(err) => match err.command() {
                Some(command) => {
                    Ok(FailureResult::new(Arc::clone(command), err.to_string()).to_json())
                }
                None => Err(err),
            },
        }
    }

    /// Client direction: decode a result received from the simulator.
    pub fn decode_result(&self, text: &str) -> Result<Box<dyn CommandResult>, ProtocolError> {
        parse_result(text, &self.results, &self.commands, self.config.validation_report)
    }
}

impl fmt::Debug for Executor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Executor")
            .field("commands", &self.commands.len())
            .field("results", &self.results.len())
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::HandlerOutput;
    use serde_json::json;
    use simctl_commands::satellite::SetSatMotionFixed;
    use simctl_commands::SimulatorSubState;

    fn executor(config: ExecutorConfig) -> Executor {
        Executor::from_catalogue(config)
            .unwrap()
            .with_handler("SetSatMotionFixed", |_: &Arc<dyn Command>| -> HandlerOutput {
                Ok(None)
            })
    }

    fn fixed_motion() -> Document {
        Document::from_value(json!({
            "CmdName": "SetSatMotionFixed",
            "System": "GPS",
            "SvId": 5,
            "IsFixed": true
        }))
    }

    #[test]
    fn default_result_is_correlated_success() {
        let executor = executor(ExecutorConfig::default());
        let result = executor
            .execute(fixed_motion(), &SimulatorSubState::Idle_ConfigValid)
            .unwrap();
        assert!(result.is::<SuccessResult>());
        assert!(result.related_command().unwrap().is::<SetSatMotionFixed>());
    }

    #[test]
    fn no_default_result_is_an_error() {
        let config = ExecutorConfig {
            default_success_result: false,
            ..ExecutorConfig::default()
        };
        let err = executor(config)
            .execute(fixed_motion(), &SimulatorSubState::Idle_ConfigValid)
            .unwrap_err();
        assert!(matches!(err, ExecuteError::NoResult { .. }));
        assert_eq!(err.command().unwrap().name(), "SetSatMotionFixed");
    }

    #[test]
    fn strict_fields_rejects_undeclared() {
        let mut doc = fixed_motion();
        doc.set_field("Colour", json!("blue"));

        let lenient = executor(ExecutorConfig::default());
        assert!(lenient
            .execute(doc.clone(), &SimulatorSubState::Idle_ConfigValid)
            .is_ok());

        let strict = executor(ExecutorConfig {
            strict_fields: true,
            ..ExecutorConfig::default()
        });
        let err = strict
            .execute(doc, &SimulatorSubState::Idle_ConfigValid)
            .unwrap_err();
        assert!(matches!(
            err,
            ExecuteError::Protocol(ProtocolError::Malformed { ref fields, .. }) if fields == &["Colour"]
        ));
        assert!(err.command().is_none());
    }

    #[test]
    fn uncorrelated_result_is_attached_to_the_command() {
        let executor = Executor::from_catalogue(ExecutorConfig::default())
            .unwrap()
            .with_handler("SetSatMotionFixed", |_: &Arc<dyn Command>| -> HandlerOutput {
                Ok(Some(Box::new(SuccessResult::default())))
            });
        let mut doc = fixed_motion();
        doc.set_field("CmdUuid", json!("u-7"));
        let result = executor
            .execute(doc, &SimulatorSubState::Idle_ConfigValid)
            .unwrap();
        let related = result.related_command().unwrap();
        assert!(related.is::<SetSatMotionFixed>());
        assert_eq!(related.uuid(), Some("u-7"));
        assert_eq!(result.to_json()["RelatedCommand"]["CmdUuid"], "u-7");
    }

    #[test]
    fn invalid_result_is_rejected() {
        let executor = Executor::from_catalogue(ExecutorConfig::default())
            .unwrap()
            .with_handler("SetSatMotionFixed", |command: &Arc<dyn Command>| -> HandlerOutput {
                let mut result = FailureResult::default();
                result.set_related_command(Arc::clone(command));
                Ok(Some(Box::new(result)))
            });
        let err = executor
            .execute(fixed_motion(), &SimulatorSubState::Idle_ConfigValid)
            .unwrap_err();
        match err {
            ExecuteError::InvalidResult { ref command, ref source } => {
                assert!(command.is::<SetSatMotionFixed>());
                assert_eq!(
                    *source,
                    ProtocolError::Malformed {
                        name: "FailureResult".to_string(),
                        fields: vec!["Message".to_string()],
                    }
                );
            }
            other => panic!("expected InvalidResult, got {other:?}"),
        }
    }

    #[test]
    fn missing_handler_is_reported() {
        let executor = executor(ExecutorConfig::default());
        assert!(!executor.handles("GetSimulatorState"));
        let err = executor
            .execute(
                Document::from_value(json!({"CmdName": "GetSimulatorState"})),
                &SimulatorSubState::Started_Streaming,
            )
            .unwrap_err();
        assert!(matches!(err, ExecuteError::NoHandler { .. }));
        assert_eq!(err.to_string(), "no handler registered for GetSimulatorState");
    }
}
