#![cfg(feature = "serde")]

//! Integration tests for the serde wire format.

use rstest::rstest;
use serde_json::{Value, json};
use tryflow::bridge::{SafeParseResult, to_result};
use tryflow::optional::{self, Null, Nullish, Optional};
use tryflow::outcome::{Outcome, failure, success};

// =============================================================================
// Outcome
// =============================================================================

#[rstest]
#[case(success(7), json!({"ok": true, "value": 7}))]
#[case(failure("bad".to_string()), json!({"ok": false, "error": "bad"}))]
fn outcome_serializes_with_discriminant(#[case] outcome: Outcome<i32, String>, #[case] expected: Value) {
    assert_eq!(serde_json::to_value(&outcome).unwrap(), expected);
}

#[rstest]
fn outcome_json_roundtrip() {
    let outcomes: Vec<Outcome<Vec<u8>, String>> =
        vec![success(vec![1, 2]), failure("lost".to_string()), success(Vec::new())];

    let json = serde_json::to_string(&outcomes).unwrap();
    let restored: Vec<Outcome<Vec<u8>, String>> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, outcomes);
}

#[rstest]
fn outcome_key_order_does_not_matter() {
    let outcome: Outcome<i32, String> =
        serde_json::from_str(r#"{"error": "late", "ok": false}"#).unwrap();
    assert_eq!(outcome, failure("late".to_string()));
}

#[rstest]
#[case(json!({"value": 1}), "missing field `ok`")]
#[case(json!({"ok": true}), "missing field `value`")]
#[case(json!({"ok": false, "value": 1}), "missing field `error`")]
#[case(json!({"ok": true, "value": 1, "error": "x"}), "both")]
#[case(json!({"ok": "yes", "value": 1}), "invalid type")]
fn outcome_rejects_malformed_documents(#[case] input: Value, #[case] message: &str) {
    let error = serde_json::from_value::<Outcome<i32, String>>(input).unwrap_err();
    assert!(error.to_string().contains(message), "{error}");
}

#[rstest]
fn outcome_with_unit_payload() {
    let outcome: Outcome<(), String> = success(());
    let json = serde_json::to_value(outcome).unwrap();
    assert_eq!(json, json!({"ok": true, "value": null}));
    assert_eq!(serde_json::from_value::<Outcome<(), String>>(json).unwrap(), success(()));
}

// =============================================================================
// Optional and Nullish
// =============================================================================

#[rstest]
fn optional_is_raw_value_or_null() {
    let present: Optional<i32> = Some(3);
    assert_eq!(serde_json::to_value(present).unwrap(), json!(3));
    assert_eq!(serde_json::to_value(None::<i32>).unwrap(), Value::Null);
}

#[rstest]
#[case(Nullish::Value(4), json!(4))]
#[case(Nullish::Null, Value::Null)]
#[case(Nullish::Absent, Value::Null)]
fn nullish_serializes_like_optional(#[case] value: Nullish<i32>, #[case] expected: Value) {
    assert_eq!(serde_json::to_value(value).unwrap(), expected);
}

#[rstest]
fn nullish_reads_null_as_null() {
    let value: Nullish<i32> = serde_json::from_value(Value::Null).unwrap();
    assert!(value.is_null());
    assert_eq!(optional::from(value), None);

    let value: Nullish<i32> = serde_json::from_value(json!(9)).unwrap();
    assert_eq!(optional::from(value), Some(9));
}

#[rstest]
fn null_marker_is_json_null() {
    assert_eq!(serde_json::to_value(Null).unwrap(), Value::Null);
    assert_eq!(serde_json::from_value::<Null>(Value::Null).unwrap(), Null);
}

// =============================================================================
// SafeParseResult
// =============================================================================

#[rstest]
fn safe_parse_success_bridges_to_success() {
    let shape: SafeParseResult<Value, String> =
        serde_json::from_str(r#"{"success": true, "data": {"id": 1}}"#).unwrap();
    assert_eq!(to_result(shape), success(json!({"id": 1})));
}

#[rstest]
fn safe_parse_failure_bridges_to_failure() {
    let shape: SafeParseResult<Value, String> =
        serde_json::from_str(r#"{"success": false, "error": "bad"}"#).unwrap();
    assert_eq!(to_result(shape), failure("bad".to_string()));
}

#[rstest]
fn safe_parse_error_structure_is_preserved() {
    let shape: SafeParseResult<i32, Vec<Value>> = serde_json::from_value(json!({
        "success": false,
        "error": [{"path": ["age"], "message": "expected number"}]
    }))
    .unwrap();

    let error = to_result(shape).into_error().unwrap();
    assert_eq!(error[0]["path"], json!(["age"]));
}

#[rstest]
fn outcome_serializes_through_bridge_shape() {
    let shape = SafeParseResult::from(success::<i32, String>(5));
    assert_eq!(
        serde_json::to_value(shape).unwrap(),
        json!({"success": true, "data": 5})
    );
}
