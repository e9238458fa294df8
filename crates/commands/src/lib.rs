//! simctl-commands: the concrete message catalogue.
//!
//! Each module declares its commands and results with the protocol macros
//! and registers them by name. [`command_factory`] and [`result_factory`]
//! build registries holding the whole catalogue; [`install`] makes them the
//! process-wide pair.

pub mod ephemeris;
pub mod interference;
pub mod message_modification;
pub mod noise;
pub mod results;
pub mod satellite;
pub mod simulator;
pub mod state;
pub mod types;
pub mod vehicle;

use simctl_protocol::{install_commands, install_results, CommandFactory, RegistryError, ResultFactory};

pub use interference::DEFAULT_INTERFERENCE_GAIN;
pub use results::{FailureResult, SuccessResult};
pub use state::SimulatorSubState;
pub use types::{AntennaPatternType, GnssBand};

/// A registry holding every command in the catalogue.
pub fn command_factory() -> Result<CommandFactory, RegistryError> {
    let mut factory = CommandFactory::new();
    satellite::register_commands(&mut factory)?;
    ephemeris::register_commands(&mut factory)?;
    vehicle::register_commands(&mut factory)?;
    message_modification::register_commands(&mut factory)?;
    interference::register_commands(&mut factory)?;
    noise::register_commands(&mut factory)?;
    simulator::register_commands(&mut factory)?;
    Ok(factory)
}

/// A registry holding every result in the catalogue, generic ones included.
pub fn result_factory() -> Result<ResultFactory, RegistryError> {
    let mut factory = ResultFactory::new();
    factory.register_type::<SuccessResult>()?;
    factory.register_type::<FailureResult>()?;
    satellite::register_results(&mut factory)?;
    ephemeris::register_results(&mut factory)?;
    vehicle::register_results(&mut factory)?;
    message_modification::register_results(&mut factory)?;
    interference::register_results(&mut factory)?;
    noise::register_results(&mut factory)?;
    simulator::register_results(&mut factory)?;
    Ok(factory)
}

/// Build both registries and install them process-wide.
///
/// Call once at start-up, before any message is decoded. Any error is a
/// start-up failure.
pub fn install() -> Result<(&'static CommandFactory, &'static ResultFactory), RegistryError> {
    let commands = install_commands(command_factory()?)?;
    let results = install_results(result_factory()?)?;
    Ok((commands, results))
}
