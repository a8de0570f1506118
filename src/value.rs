//! Type-erased value container and its runtime type identity.
//!
//! `Value` is the single currency between dynamic call sites and typed
//! operations. The engine only ever needs two capabilities from it:
//! identity comparison (`kind`) and a checked downcast (`FromValue`).

use std::fmt;

// ─── Value ────────────────────────────────────────────────────────────────────

/// A dynamically-typed value. Tagged union over the supported kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl Value {
    /// Runtime type identity of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_)   => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Bool(_)  => Kind::Bool,
            Value::Str(_)   => Kind::Str,
        }
    }
}

// Only exact-width conversions exist. An `i32` caller must cast explicitly;
// int and float never convert into each other.
impl From<i64>    for Value { fn from(v: i64)    -> Self { Value::Int(v) } }
impl From<f64>    for Value { fn from(v: f64)    -> Self { Value::Float(v) } }
impl From<bool>   for Value { fn from(v: bool)   -> Self { Value::Bool(v) } }
impl From<String> for Value { fn from(v: String) -> Self { Value::Str(v) } }
impl From<&str>   for Value { fn from(v: &str)   -> Self { Value::Str(v.to_string()) } }

// ─── Kind ─────────────────────────────────────────────────────────────────────

/// Type identity, comparable by value. `Int` and `Float` are distinct
/// regardless of numeric magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Int,
    Float,
    Bool,
    Str,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Int   => "int",
            Kind::Float => "float",
            Kind::Bool  => "bool",
            Kind::Str   => "str",
        };
        f.write_str(name)
    }
}

// ─── Checked downcast ─────────────────────────────────────────────────────────

/// Recover a concrete type out of a `Value`.
///
/// `KIND` is the static identity the implementor corresponds to; `from_value`
/// succeeds exactly when the value carries that kind.
pub trait FromValue: Sized {
    const KIND: Kind;
    fn from_value(v: Value) -> Option<Self>;
}

impl FromValue for i64 {
    const KIND: Kind = Kind::Int;
    fn from_value(v: Value) -> Option<Self> {
        match v { Value::Int(x) => Some(x), _ => None }
    }
}

impl FromValue for f64 {
    const KIND: Kind = Kind::Float;
    fn from_value(v: Value) -> Option<Self> {
        match v { Value::Float(x) => Some(x), _ => None }
    }
}

impl FromValue for bool {
    const KIND: Kind = Kind::Bool;
    fn from_value(v: Value) -> Option<Self> {
        match v { Value::Bool(x) => Some(x), _ => None }
    }
}

impl FromValue for String {
    const KIND: Kind = Kind::Str;
    fn from_value(v: Value) -> Option<Self> {
        match v { Value::Str(x) => Some(x), _ => None }
    }
}

// ─── Call results ─────────────────────────────────────────────────────────────

/// Conversion of an operation's return into the engine's type-erased result.
///
/// `()` maps to `None`, the explicitly-absent result of a void operation,
/// distinguishable from any actual value.
pub trait IntoCallResult {
    fn into_call_result(self) -> Option<Value>;
}

impl IntoCallResult for () {
    fn into_call_result(self) -> Option<Value> { None }
}

impl IntoCallResult for Value {
    fn into_call_result(self) -> Option<Value> { Some(self) }
}

impl IntoCallResult for i64 {
    fn into_call_result(self) -> Option<Value> { Some(Value::Int(self)) }
}

impl IntoCallResult for f64 {
    fn into_call_result(self) -> Option<Value> { Some(Value::Float(self)) }
}

impl IntoCallResult for bool {
    fn into_call_result(self) -> Option<Value> { Some(Value::Bool(self)) }
}

impl IntoCallResult for String {
    fn into_call_result(self) -> Option<Value> { Some(Value::Str(self)) }
}
