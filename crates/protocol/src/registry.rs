//! Name-keyed factories that materialize empty concrete messages.
//!
//! Registries are filled once at process start and read-only afterwards.
//! Tests build their own isolated instances; the executor installs one
//! process-wide pair through [`install_commands`] / [`install_results`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use crate::error::RegistryError;
use crate::message::{Command, CommandResult, CommandType, ResultType};

type Constructor<M> = Box<dyn Fn() -> Box<M> + Send + Sync>;

/// A name -> constructor mapping.
pub struct Registry<M: ?Sized> {
    constructors: BTreeMap<String, Constructor<M>>,
}

/// Factory for incoming commands.
pub type CommandFactory = Registry<dyn Command>;
/// Factory for incoming results.
pub type ResultFactory = Registry<dyn CommandResult>;

impl<M: ?Sized> Default for Registry<M> {
    fn default() -> Self {
        Registry {
            constructors: BTreeMap::new(),
        }
    }
}

impl<M: ?Sized> Registry<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `constructor` under `name`.
    ///
    /// A second registration under the same name is rejected and the first
    /// one is kept. Callers treat the error as fatal start-up failure.
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F) -> Result<(), RegistryError>
    where
        F: Fn() -> Box<M> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.constructors.contains_key(&name) {
            return Err(RegistryError::Duplicate { name });
        }
        self.constructors.insert(name, Box::new(constructor));
        Ok(())
    }

    /// An empty instance of the type registered under `name`.
    pub fn create(&self, name: &str) -> Option<Box<M>> {
        self.constructors.get(name).map(|constructor| constructor())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl Registry<dyn Command> {
    /// Register a concrete command under its declared name.
    pub fn register_type<T: CommandType>(&mut self) -> Result<(), RegistryError> {
        self.register(T::NAME, || Box::new(T::default()) as Box<dyn Command>)
    }
}

impl Registry<dyn CommandResult> {
    /// Register a concrete result under its declared name.
    pub fn register_type<T: ResultType>(&mut self) -> Result<(), RegistryError> {
        self.register(T::NAME, || Box::new(T::default()) as Box<dyn CommandResult>)
    }
}

impl<M: ?Sized> fmt::Debug for Registry<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.constructors.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ── Process-wide instances ──────────────────────────────────────────

static COMMANDS: OnceLock<CommandFactory> = OnceLock::new();
static RESULTS: OnceLock<ResultFactory> = OnceLock::new();

/// Install the process-wide command factory. Write-once.
pub fn install_commands(factory: CommandFactory) -> Result<&'static CommandFactory, RegistryError> {
    install(&COMMANDS, factory, "command")
}

/// Install the process-wide result factory. Write-once.
pub fn install_results(factory: ResultFactory) -> Result<&'static ResultFactory, RegistryError> {
    install(&RESULTS, factory, "result")
}

/// The installed command factory, if start-up has completed.
pub fn commands() -> Option<&'static CommandFactory> {
    COMMANDS.get()
}

/// The installed result factory, if start-up has completed.
pub fn results() -> Option<&'static ResultFactory> {
    RESULTS.get()
}

fn install<M: ?Sized>(
    cell: &'static OnceLock<Registry<M>>,
    factory: Registry<M>,
    registry: &'static str,
) -> Result<&'static Registry<M>, RegistryError> {
    cell.set(factory)
        .map_err(|_| RegistryError::AlreadyInstalled { registry })?;
    cell.get().ok_or(RegistryError::AlreadyInstalled { registry })
}
