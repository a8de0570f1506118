//! Parameter specifications: the declared name, kind, and optional default
//! for one formal parameter of an operation.

use crate::value::{Kind, Value};

/// One formal parameter. The `name` is the lookup key into the argument map;
/// `expected` is the declared kind every supplied value (and the default)
/// must match exactly; a missing `default` makes the parameter required.
///
/// A default of the wrong kind is representable on purpose. It is not checked
/// here; the binder reports it if and when the default is actually used.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: String,
    pub expected: Kind,
    pub default: Option<Value>,
}

impl ParamSpec {
    /// A parameter the caller must always supply.
    pub fn required(name: impl Into<String>, expected: Kind) -> Self {
        Self { name: name.into(), expected, default: None }
    }

    /// A parameter that falls back to `default` when absent from the map.
    pub fn with_default(name: impl Into<String>, expected: Kind, default: impl Into<Value>) -> Self {
        Self { name: name.into(), expected, default: Some(default.into()) }
    }

    pub fn is_required(&self) -> bool { self.default.is_none() }
}
