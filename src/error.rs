//! Engine error taxonomy. Every variant names the offending parameter or
//! command, so a failure is diagnosable without inspecting internals.

use thiserror::Error;

use crate::value::Kind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// `execute` was given a name with no registered command.
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    /// A registration the registry or a command constructor rejects outright.
    #[error("invalid registration: {0}")]
    InvalidRegistration(String),

    /// Spec-list length disagrees with the bound callable's parameter count.
    /// A registration bug, reported at command construction.
    #[error("callable takes {expected} parameters, {got} specs given")]
    ArityMismatch { expected: usize, got: usize },

    /// A parameter with no map entry and no default.
    #[error("missing required argument `{param}`")]
    MissingArgument { param: String },

    /// A supplied value whose kind differs from the declared kind.
    #[error("argument `{param}` expects {expected}, got {got}")]
    TypeMismatch { param: String, expected: Kind, got: Kind },

    /// A declared default whose kind differs from the declared kind,
    /// discovered only when the default is actually needed.
    #[error("default for `{param}` expects {expected}, got {got}")]
    BadDefault { param: String, expected: Kind, got: Kind },
}
