//! Tests for core types.

use agentchat::error::GatewayError;
use agentchat::types::*;
use pretty_assertions::assert_eq;

#[test]
fn message_constructors_set_role() {
    assert_eq!(Message::user("Hello").role, Role::User);
    assert_eq!(Message::assistant("Hi there!").role, Role::Assistant);
}

#[test]
fn error_message_is_prefixed() {
    let msg = Message::error(&GatewayError::gateway("boom"));
    assert_eq!(msg.role, Role::Assistant);
    assert_eq!(msg.content, "Error: Error querying agent: boom");
    assert!(msg.is_error());
    assert!(!Message::assistant("All good").is_error());
    assert!(!Message::user("Error: pasted log line").is_error());
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
    assert_eq!(Role::User.to_string(), "user");
    assert_eq!("assistant".parse::<Role>().unwrap(), Role::Assistant);
}

#[test]
fn message_json_shape() {
    let msg = Message::user("test");
    let value = serde_json::to_value(&msg).unwrap();
    assert_eq!(value["role"], "user");
    assert_eq!(value["content"], "test");
    assert!(value["timestamp"].is_string());
}
