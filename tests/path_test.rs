//! Integration tests for JsonPath.

use serde_json::json;
use shapecheck::{JsonPath, PathSegment, Schema, SchemaLike};

#[test]
fn test_path_construction_and_display() {
    assert_eq!(JsonPath::root().to_string(), "");
    assert_eq!(JsonPath::root().push_field("name").to_string(), ".name");
    assert_eq!(JsonPath::root().push_index(0).to_string(), "[ 0 ]");

    let path = JsonPath::root()
        .push_field("users")
        .push_index(0)
        .push_field("address")
        .push_field("city");
    assert_eq!(path.to_string(), ".users[ 0 ].address.city");
}

#[test]
fn test_path_segments_preserved() {
    let path = JsonPath::root()
        .push_field("data")
        .push_index(42)
        .push_field("value");

    let segments: Vec<&PathSegment> = path.segments().collect();
    assert_eq!(segments.len(), 3);

    match &segments[0] {
        PathSegment::Field(name) => assert_eq!(name, "data"),
        _ => panic!("Expected Field segment"),
    }

    match &segments[1] {
        PathSegment::Index(idx) => assert_eq!(*idx, 42),
        _ => panic!("Expected Index segment"),
    }
}

#[test]
fn test_error_path_runs_root_to_leaf() {
    let schema = Schema::record().field(
        "orders",
        Schema::array(Schema::record().field(
            "lines",
            Schema::array(Schema::record().field("qty", Schema::number())),
        )),
    );

    let value = json!({
        "orders": [
            {"lines": [{"qty": 1}]},
            {"lines": [{"qty": 2}, {"qty": "3"}]}
        ]
    });

    let error = schema.validate(&value).unwrap_err();
    let segments: Vec<PathSegment> = error.path.segments().cloned().collect();
    assert_eq!(
        segments,
        vec![
            PathSegment::field("orders"),
            PathSegment::index(1),
            PathSegment::field("lines"),
            PathSegment::index(1),
            PathSegment::field("qty"),
        ]
    );
}

#[test]
fn test_union_member_fields_are_not_nested_under_discriminator() {
    let schema = Schema::union("type").member(
        "a",
        Schema::record().field("inner", Schema::record().field("x", Schema::number())),
    );

    let error = schema
        .validate(&json!({"type": "a", "inner": {"x": false}}))
        .unwrap_err();

    assert_eq!(error.path.to_string(), ".inner.x");
}
