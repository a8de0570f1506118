pub mod binder;
pub mod command;
pub mod error;
pub mod param;
pub mod registry;
pub mod value;

pub use command::{BoundFn, Command, ValueFn};
pub use error::EngineError;
pub use param::ParamSpec;
pub use registry::CommandRegistry;
pub use value::{FromValue, IntoCallResult, Kind, Value};

use std::collections::HashMap;

// ─── Public API types ─────────────────────────────────────────────────────────

/// Dynamic argument map for one invocation: unordered, string-keyed,
/// type-erased values. Owned by the caller, read-only to the engine, never
/// retained beyond the call. Keys that match no declared parameter are
/// silently ignored.
pub type ArgMap = HashMap<String, Value>;
