//! Tests for schema registry operations.

use serde_json::json;
use shapecheck::{ErrorKind, RegistryError, Schema, SchemaRegistry};

fn event_schema() -> Schema {
    Schema::union("event")
        .member("login", Schema::record().field("user", Schema::string()))
        .member(
            "purchase",
            Schema::record()
                .field("user", Schema::string())
                .field("items", Schema::array(Schema::string())),
        )
        .into()
}

#[test]
fn test_register_and_get() {
    let registry = SchemaRegistry::new();
    registry.register("Event", event_schema()).unwrap();

    let schema = registry.get("Event").unwrap();
    assert_eq!(schema.kind_name(), "union");

    assert!(registry.get("Missing").is_none());
}

#[test]
fn test_duplicate_registration_fails() {
    let registry = SchemaRegistry::new();
    registry.register("Event", event_schema()).unwrap();

    let result = registry.register("Event", Schema::string());
    assert!(matches!(result, Err(RegistryError::DuplicateName(name)) if name == "Event"));

    // original schema is kept
    assert_eq!(registry.get("Event").unwrap().kind_name(), "union");
}

#[test]
fn test_validate_with_registry() {
    let registry = SchemaRegistry::new();
    registry.register("Event", event_schema()).unwrap();

    registry
        .validate("Event", &json!({"event": "login", "user": "alice"}))
        .unwrap();

    let result = registry.validate(
        "Event",
        &json!({"event": "purchase", "user": "alice", "items": [1]}),
    );
    match result {
        Err(RegistryError::Invalid(error)) => {
            assert_eq!(error.path.to_string(), ".items[ 0 ]");
            assert_eq!(error.kind(), ErrorKind::TypeMismatch);
        }
        other => panic!("Expected invalid document, got {:?}", other),
    }
}

#[test]
fn test_validate_missing_schema() {
    let registry = SchemaRegistry::new();

    let result = registry.validate("Nope", &json!({}));
    assert!(matches!(result, Err(RegistryError::SchemaNotFound(name)) if name == "Nope"));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        RegistryError::DuplicateName("A".into()).to_string(),
        "schema 'A' already registered"
    );
    assert_eq!(
        RegistryError::SchemaNotFound("B".into()).to_string(),
        "schema 'B' not found"
    );

    let registry = SchemaRegistry::new();
    registry.register("S", Schema::string()).unwrap();
    let error = registry.validate("S", &json!(1)).unwrap_err();
    assert_eq!(error.to_string(), "expected a string, got number");
}

#[test]
fn test_validate_batch_keeps_input_order() {
    let registry = SchemaRegistry::new().with_parallel_threshold(0);
    registry.register("Event", event_schema()).unwrap();

    let documents: Vec<_> = (0..200)
        .map(|i| {
            if i % 3 == 0 {
                json!({"event": "logout", "user": "u"})
            } else {
                json!({"event": "login", "user": format!("u{}", i)})
            }
        })
        .collect();

    let verdicts = registry.validate_batch("Event", &documents).unwrap();
    assert_eq!(verdicts.len(), documents.len());

    for (i, verdict) in verdicts.iter().enumerate() {
        if i % 3 == 0 {
            let error = verdict.as_ref().unwrap_err();
            assert_eq!(error.kind(), ErrorKind::UnknownVariant);
        } else {
            assert!(verdict.is_ok());
        }
    }
}

#[test]
fn test_validate_batch_unknown_schema() {
    let registry = SchemaRegistry::new();
    assert!(registry.validate_batch("Nope", &[json!(1)]).is_err());
}

#[test]
fn test_empty_registry() {
    let registry = SchemaRegistry::default();
    assert!(registry.is_empty());
    assert!(registry.names().is_empty());
}
