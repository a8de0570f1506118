//! Argument binder behavior: name lookup, default fallback, strict kind
//! checks, ordering. Exercised directly, without a registry in the way.

use dyncmd::binder::{resolve, resolve_as, resolve_value};
use dyncmd::{ArgMap, EngineError, Kind, ParamSpec, Value};

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn args(pairs: &[(&str, Value)]) -> ArgMap {
    pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

// ─── Single-parameter resolution ─────────────────────────────────────────────

#[test]
fn exact_match_resolves() {
    let spec = ParamSpec::required("a", Kind::Int);
    let got = resolve_value(&spec, &args(&[("a", Value::Int(5))])).unwrap();
    assert_eq!(got, Value::Int(5));
}

#[test]
fn default_substitutes_when_absent() {
    let spec = ParamSpec::with_default("a", Kind::Int, 10i64);
    let got = resolve_value(&spec, &args(&[])).unwrap();
    assert_eq!(got, Value::Int(10));
}

#[test]
fn supplied_value_beats_default() {
    let spec = ParamSpec::with_default("a", Kind::Int, 10i64);
    let got = resolve_value(&spec, &args(&[("a", Value::Int(3))])).unwrap();
    assert_eq!(got, Value::Int(3));
}

#[test]
fn missing_required_names_the_parameter() {
    let spec = ParamSpec::required("a", Kind::Int);
    let err = resolve_value(&spec, &args(&[("b", Value::Int(5))])).unwrap_err();
    assert_eq!(err, EngineError::MissingArgument { param: "a".into() });
}

#[test]
fn kind_mismatch_names_the_parameter() {
    let spec = ParamSpec::required("a", Kind::Int);
    let err = resolve_value(&spec, &args(&[("a", Value::Str("5".into()))])).unwrap_err();
    assert_eq!(
        err,
        EngineError::TypeMismatch { param: "a".into(), expected: Kind::Int, got: Kind::Str }
    );
}

#[test]
fn int_and_float_of_equal_magnitude_still_mismatch() {
    let spec = ParamSpec::required("a", Kind::Int);
    let err = resolve_value(&spec, &args(&[("a", Value::Float(5.0))])).unwrap_err();
    assert_eq!(
        err,
        EngineError::TypeMismatch { param: "a".into(), expected: Kind::Int, got: Kind::Float }
    );
}

// ─── Defaults of the wrong kind ──────────────────────────────────────────────

#[test]
fn bad_default_surfaces_when_used() {
    let spec = ParamSpec::with_default("a", Kind::Int, "oops");
    let err = resolve_value(&spec, &args(&[])).unwrap_err();
    assert_eq!(
        err,
        EngineError::BadDefault { param: "a".into(), expected: Kind::Int, got: Kind::Str }
    );
}

#[test]
fn bad_default_is_never_inspected_when_unused() {
    let spec = ParamSpec::with_default("a", Kind::Int, "oops");
    let got = resolve_value(&spec, &args(&[("a", Value::Int(1))])).unwrap();
    assert_eq!(got, Value::Int(1));
}

#[test]
fn spec_reports_whether_it_is_required() {
    assert!(ParamSpec::required("a", Kind::Int).is_required());
    assert!(!ParamSpec::with_default("a", Kind::Int, 0i64).is_required());
}

// ─── Whole-list resolution ───────────────────────────────────────────────────

#[test]
fn output_follows_spec_order_not_map_order() {
    let specs = vec![
        ParamSpec::required("second", Kind::Str),
        ParamSpec::required("first", Kind::Int),
    ];
    let got = resolve(&specs, &args(&[("first", Value::Int(1)), ("second", Value::Str("s".into()))])).unwrap();
    assert_eq!(got, vec![Value::Str("s".into()), Value::Int(1)]);
}

#[test]
fn extra_keys_are_ignored_and_never_resolved() {
    let specs = vec![ParamSpec::required("a", Kind::Int)];
    let got = resolve(&specs, &args(&[("a", Value::Int(1)), ("z", Value::Bool(true))])).unwrap();
    assert_eq!(got, vec![Value::Int(1)]);
}

#[test]
fn first_failing_parameter_wins() {
    let specs = vec![
        ParamSpec::required("a", Kind::Int),
        ParamSpec::required("b", Kind::Int),
    ];
    let err = resolve(&specs, &args(&[])).unwrap_err();
    assert_eq!(err, EngineError::MissingArgument { param: "a".into() });
}

#[test]
fn empty_spec_list_resolves_to_nothing() {
    let got = resolve(&[], &args(&[("stray", Value::Int(1))])).unwrap();
    assert!(got.is_empty());
}

// ─── Typed resolution ────────────────────────────────────────────────────────

#[test]
fn resolve_as_downcasts_to_the_concrete_type() {
    let spec = ParamSpec::with_default("a", Kind::Float, 2.5f64);
    let got: f64 = resolve_as(&spec, &args(&[])).unwrap();
    assert_eq!(got, 2.5);
}

#[test]
fn resolve_as_rejects_a_spec_the_target_type_cannot_accept() {
    // Declared kind matches the value, but the requested static type does not.
    let spec = ParamSpec::required("a", Kind::Int);
    let err = resolve_as::<String>(&spec, &args(&[("a", Value::Int(5))])).unwrap_err();
    assert_eq!(
        err,
        EngineError::TypeMismatch { param: "a".into(), expected: Kind::Str, got: Kind::Int }
    );
}
