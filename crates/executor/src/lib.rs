//! simctl-executor: reference executor for simulator remote-control commands.
//!
//! Receives a command document, decodes it through the catalogue registries,
//! checks it against the simulator's current run-state, hands it to the
//! registered [`Handler`] and answers with a result correlated to the command.
//! Transport is the caller's concern.
//!
//! Emits `tracing` events; installing a subscriber is left to the binary.

pub mod config;
pub mod executor;
pub mod handler;

pub use config::{ConfigError, ExecutorConfig};
pub use executor::{ExecuteError, Executor};
pub use handler::{Handler, HandlerError, HandlerOutput};
