//! Command implementations: the pairing of one callable with its ordered
//! parameter specs, behind a single-method trait.
//!
//! `BoundFn` is the typed binder: closures of fixed arity with statically
//! known parameter types, validated against the specs at construction.
//! `ValueFn` is the dynamic variant: a closure over the resolved `Value`
//! slice, for operations that dispatch over kinds or can fail themselves.

use crate::ArgMap;
use crate::binder;
use crate::error::EngineError;
use crate::param::ParamSpec;
use crate::value::{FromValue, IntoCallResult, Kind, Value};

// ─── Command trait ────────────────────────────────────────────────────────────

/// One capability: accept a dynamic argument map, produce a type-erased
/// result. `None` is the explicitly-absent result of a void operation.
///
/// Implementations hold only immutable per-registration state; all per-call
/// data comes from `args`, so a command is safely reusable across calls.
pub trait Command {
    fn invoke(&self, args: &ArgMap) -> Result<Option<Value>, EngineError>;
}

// ─── Construction-time checks ─────────────────────────────────────────────────

fn check_arity(specs: &[ParamSpec], arity: usize) -> Result<(), EngineError> {
    if specs.len() != arity {
        return Err(EngineError::ArityMismatch { expected: arity, got: specs.len() });
    }
    Ok(())
}

/// Every declared kind must agree with the callable's parameter kind.
/// A spec the callable cannot accept is a registration bug; rejecting it
/// here means the post-binder downcast cannot fail at call time.
fn check_kinds(specs: &[ParamSpec], kinds: &[Kind]) -> Result<(), EngineError> {
    for (spec, &kind) in specs.iter().zip(kinds) {
        if spec.expected != kind {
            return Err(EngineError::InvalidRegistration(format!(
                "parameter `{}` declared as {}, but the bound callable takes {}",
                spec.name, spec.expected, kind,
            )));
        }
    }
    Ok(())
}

// ─── BoundFn ──────────────────────────────────────────────────────────────────

type Call = Box<dyn Fn(&[ParamSpec], &ArgMap) -> Result<Option<Value>, EngineError>>;

/// A closure of fixed arity bound to its parameter specs.
///
/// The receiver, if any, lives inside the closure: capture it by move, or
/// clone an `Rc<RefCell<_>>` in when invocations must share mutable state.
pub struct BoundFn {
    specs: Vec<ParamSpec>,
    call: Call,
}

impl std::fmt::Debug for BoundFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundFn")
            .field("specs", &self.specs)
            .finish_non_exhaustive()
    }
}

impl BoundFn {
    pub fn new0<R, F>(specs: Vec<ParamSpec>, f: F) -> Result<Self, EngineError>
    where
        R: IntoCallResult,
        F: Fn() -> R + 'static,
    {
        check_arity(&specs, 0)?;
        Ok(Self {
            specs,
            call: Box::new(move |_specs: &[ParamSpec], _args: &ArgMap| Ok(f().into_call_result())),
        })
    }

    pub fn new1<A, R, F>(specs: Vec<ParamSpec>, f: F) -> Result<Self, EngineError>
    where
        A: FromValue + 'static,
        R: IntoCallResult,
        F: Fn(A) -> R + 'static,
    {
        check_arity(&specs, 1)?;
        check_kinds(&specs, &[A::KIND])?;
        Ok(Self {
            specs,
            call: Box::new(move |specs, args| {
                let a = binder::resolve_as::<A>(&specs[0], args)?;
                Ok(f(a).into_call_result())
            }),
        })
    }

    pub fn new2<A, B, R, F>(specs: Vec<ParamSpec>, f: F) -> Result<Self, EngineError>
    where
        A: FromValue + 'static,
        B: FromValue + 'static,
        R: IntoCallResult,
        F: Fn(A, B) -> R + 'static,
    {
        check_arity(&specs, 2)?;
        check_kinds(&specs, &[A::KIND, B::KIND])?;
        Ok(Self {
            specs,
            call: Box::new(move |specs, args| {
                let a = binder::resolve_as::<A>(&specs[0], args)?;
                let b = binder::resolve_as::<B>(&specs[1], args)?;
                Ok(f(a, b).into_call_result())
            }),
        })
    }

    pub fn new3<A, B, C, R, F>(specs: Vec<ParamSpec>, f: F) -> Result<Self, EngineError>
    where
        A: FromValue + 'static,
        B: FromValue + 'static,
        C: FromValue + 'static,
        R: IntoCallResult,
        F: Fn(A, B, C) -> R + 'static,
    {
        check_arity(&specs, 3)?;
        check_kinds(&specs, &[A::KIND, B::KIND, C::KIND])?;
        Ok(Self {
            specs,
            call: Box::new(move |specs, args| {
                let a = binder::resolve_as::<A>(&specs[0], args)?;
                let b = binder::resolve_as::<B>(&specs[1], args)?;
                let c = binder::resolve_as::<C>(&specs[2], args)?;
                Ok(f(a, b, c).into_call_result())
            }),
        })
    }

    pub fn specs(&self) -> &[ParamSpec] { &self.specs }
}

impl Command for BoundFn {
    fn invoke(&self, args: &ArgMap) -> Result<Option<Value>, EngineError> {
        (self.call)(&self.specs, args)
    }
}

// ─── ValueFn ──────────────────────────────────────────────────────────────────

/// A closure over the resolved value slice, one element per spec, in spec
/// order. No static parameter types; the closure inspects kinds itself and
/// may fail with its own error.
pub struct ValueFn {
    specs: Vec<ParamSpec>,
    f: Box<dyn Fn(&[Value]) -> Result<Option<Value>, EngineError>>,
}

impl ValueFn {
    pub fn new<F>(specs: Vec<ParamSpec>, f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Option<Value>, EngineError> + 'static,
    {
        Self { specs, f: Box::new(f) }
    }

    pub fn specs(&self) -> &[ParamSpec] { &self.specs }
}

impl Command for ValueFn {
    fn invoke(&self, args: &ArgMap) -> Result<Option<Value>, EngineError> {
        let resolved = binder::resolve(&self.specs, args)?;
        (self.f)(&resolved)
    }
}
