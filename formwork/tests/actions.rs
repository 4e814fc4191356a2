//! Tests for form actions.

use formwork::FormAction;
use serde_json::json;

#[test]
fn test_kind_matches_the_discriminant() {
    let action = FormAction::set_value("test ID", "op1".to_string());

    assert_eq!(action.kind(), "SetValue");
    assert_eq!(action.kind(), FormAction::<String>::SET_VALUE);
}

#[test]
fn test_control_id_accessor() {
    let action = FormAction::set_value("test ID", "op1".to_string());

    assert_eq!(action.control_id().as_str(), "test ID");
}

#[test]
fn test_serializes_with_type_and_payload() {
    let action = FormAction::set_value("test ID", "op1".to_string());

    let value = serde_json::to_value(&action).expect("serializes");

    assert_eq!(
        value,
        json!({
            "type": "SetValue",
            "payload": { "controlId": "test ID", "value": "op1" },
        })
    );
}

#[test]
fn test_deserializes_from_store_format() {
    let action: FormAction<String> = serde_json::from_value(json!({
        "type": "SetValue",
        "payload": { "controlId": "test ID", "value": "op1" },
    }))
    .expect("deserializes");

    assert_eq!(action, FormAction::set_value("test ID", "op1".to_string()));
}
