//! Serialization of guard failures (requires the `serde` feature).

#![cfg(feature = "serde")]

use bulwark_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn failure_serializes_by_kind() {
    let err = validate("colour", "").and_then(TextGuard::against_empty).unwrap_err();
    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        json!({ "EmptyTarget": { "target_name": "colour" } })
    );
}

#[test]
fn invalid_target_serializes_rendered_value() {
    let err = ValidationFailure::invalid_target("age", Some(-3));
    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        json!({ "InvalidTarget": { "target_name": "age", "target": "-3" } })
    );
}

#[test]
fn to_json_view() {
    let err = ValidationFailure::null_target("colour");
    assert_eq!(
        err.to_json(),
        json!({
            "code": "NULL_TARGET",
            "target_name": "colour",
            "message": "detected a `null` target; `colour` cannot be `null`.",
        })
    );

    let err = ValidationFailure::invalid_target("id", Some("abcd"));
    assert_eq!(
        err.to_json(),
        json!({
            "code": "INVALID_TARGET",
            "target_name": "id",
            "target": "abcd",
            "message": "detected an invalid target; `id` cannot be `abcd`.",
        })
    );
}
