//! Command registry: name-keyed store of commands, the engine's single
//! entry point for callers.

use std::collections::HashMap;

use crate::ArgMap;
use crate::command::Command;
use crate::error::EngineError;
use crate::value::Value;

/// Name-to-command mapping. Not internally synchronized; callers wanting
/// cross-thread use wrap it in a lock.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self { commands: HashMap::new() }
    }

    /// Store `cmd` under `name`. Last registration for a name wins.
    /// An empty name is rejected.
    pub fn register(&mut self, name: impl Into<String>, cmd: Box<dyn Command>) -> Result<(), EngineError> {
        let name = name.into();
        if name.is_empty() {
            return Err(EngineError::InvalidRegistration("command name must not be empty".into()));
        }
        self.commands.insert(name, cmd);
        Ok(())
    }

    /// Remove the command under `name`. Returns whether one was registered.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.commands.remove(name).is_some()
    }

    /// Look up `name` and invoke it with `args`. Binder and command errors
    /// propagate unchanged.
    pub fn execute(&self, name: &str, args: &ArgMap) -> Result<Option<Value>, EngineError> {
        let cmd = self
            .commands
            .get(name)
            .ok_or_else(|| EngineError::UnknownCommand(name.to_string()))?;
        cmd.invoke(args)
    }

    pub fn contains(&self, name: &str) -> bool { self.commands.contains_key(name) }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize { self.commands.len() }

    pub fn is_empty(&self) -> bool { self.commands.is_empty() }
}
