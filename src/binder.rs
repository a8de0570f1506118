//! Argument binder: turns (ordered specs, dynamic map) into an ordered,
//! correctly-typed argument list, or fails naming one parameter.
//!
//! Resolution is strict. The binder sits at a dynamic/static boundary where
//! silent coercion would hide caller mistakes that are only detectable at
//! this seam, so kinds must match exactly: int never widens to float.
//! Each parameter resolves independently, in spec order; the first failure
//! wins, and the underlying operation is never reached on failure.

use crate::ArgMap;
use crate::error::EngineError;
use crate::param::ParamSpec;
use crate::value::{FromValue, Value};

/// Resolve one parameter to a type-erased value.
///
/// Present in the map: the value must carry the declared kind.
/// Absent: fall back to the default, which must also carry the declared kind;
/// no default means the parameter was required.
pub fn resolve_value(spec: &ParamSpec, args: &ArgMap) -> Result<Value, EngineError> {
    if let Some(v) = args.get(&spec.name) {
        if v.kind() != spec.expected {
            return Err(EngineError::TypeMismatch {
                param: spec.name.clone(),
                expected: spec.expected,
                got: v.kind(),
            });
        }
        return Ok(v.clone());
    }

    match &spec.default {
        None => Err(EngineError::MissingArgument { param: spec.name.clone() }),
        Some(d) if d.kind() != spec.expected => Err(EngineError::BadDefault {
            param: spec.name.clone(),
            expected: spec.expected,
            got: d.kind(),
        }),
        Some(d) => Ok(d.clone()),
    }
}

/// Resolve one parameter and downcast it to `T`.
pub fn resolve_as<T: FromValue>(spec: &ParamSpec, args: &ArgMap) -> Result<T, EngineError> {
    let v = resolve_value(spec, args)?;
    let got = v.kind();
    // Unreachable when the spec's declared kind matches `T` (BoundFn verifies
    // that at construction); kept total for callers that bypass that check.
    T::from_value(v).ok_or_else(|| EngineError::TypeMismatch {
        param: spec.name.clone(),
        expected: T::KIND,
        got,
    })
}

/// Resolve every parameter, in spec order. Output order is positional call
/// order. Map keys that match no spec are ignored and never appear here.
pub fn resolve(specs: &[ParamSpec], args: &ArgMap) -> Result<Vec<Value>, EngineError> {
    specs.iter().map(|spec| resolve_value(spec, args)).collect()
}
