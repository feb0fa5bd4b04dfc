//! Schema definitions for validation.
//!
//! This module provides the closed set of shapes a schema can take and the
//! recursive validation over them. Validation is fail-fast: it stops at the
//! first mismatch and reports where it happened.
//!
//! # Example
//!
//! ```rust
//! use shapecheck::{validate, Schema};
//! use serde_json::json;
//!
//! let schema: Schema = Schema::record()
//!     .field("name", Schema::string())
//!     .into();
//!
//! assert!(validate(&schema, &json!({"name": "Alice"})).is_ok());
//!
//! let error = validate(&schema, &json!({"name": 42})).unwrap_err();
//! assert_eq!(error.path.to_string(), ".name");
//! assert_eq!(error.message, "expected a string, got number");
//! ```

mod array;
mod primitive;
mod record;
mod traits;
mod union;

use std::fmt::Display;

use serde_json::Value;

use crate::path::JsonPath;
use crate::ValidationResult;

pub use array::ArraySchema;
pub use primitive::PrimitiveKind;
pub use record::RecordSchema;
pub use traits::SchemaLike;
pub use union::{MemberBody, UnionMember, UnionSchema};

/// The shape a value is expected to have.
///
/// `Schema` is a closed sum of every supported shape. Schemas are built once,
/// never mutated, and may be shared freely between threads.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, SchemaLike};
/// use serde_json::json;
///
/// let tags = Schema::array(Schema::string());
/// assert!(tags.validate(&json!(["a", "b"])).is_ok());
///
/// let error = tags.validate(&json!(42)).unwrap_err();
/// assert_eq!(error.message, "expected an array, got number");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// A leaf matched by dynamic type.
    Primitive(PrimitiveKind),
    /// A sequence of conforming elements.
    Array(ArraySchema),
    /// An object with mandatory typed fields.
    Record(RecordSchema),
    /// A discriminated union of members.
    Union(UnionSchema),
    /// A single union variant, used on its own.
    Member(UnionMember),
}

impl Schema {
    /// Matches only an absent value.
    pub fn undefined() -> Self {
        Schema::Primitive(PrimitiveKind::Undefined)
    }

    /// Matches only an explicit `null`.
    pub fn null() -> Self {
        Schema::Primitive(PrimitiveKind::Null)
    }

    pub fn string() -> Self {
        Schema::Primitive(PrimitiveKind::String)
    }

    pub fn number() -> Self {
        Schema::Primitive(PrimitiveKind::Number)
    }

    pub fn boolean() -> Self {
        Schema::Primitive(PrimitiveKind::Boolean)
    }

    /// Creates an array schema whose elements conform to `element`.
    pub fn array(element: impl Into<Schema>) -> Self {
        Schema::Array(ArraySchema::new(element))
    }

    /// Creates an empty record schema; declare fields with
    /// [`RecordSchema::field`].
    ///
    /// ```rust
    /// use shapecheck::Schema;
    ///
    /// let point = Schema::record()
    ///     .field("x", Schema::number())
    ///     .field("y", Schema::number());
    /// assert_eq!(point.len(), 2);
    /// ```
    pub fn record() -> RecordSchema {
        RecordSchema::new()
    }

    /// Creates an empty union discriminated by the `discriminator` field; add
    /// members with [`UnionSchema::member`].
    pub fn union(discriminator: impl Into<String>) -> UnionSchema {
        UnionSchema::new(discriminator)
    }

    /// Creates a standalone union member identified by
    /// `discriminator == value`.
    ///
    /// ```rust
    /// use shapecheck::{Schema, SchemaLike};
    /// use serde_json::json;
    ///
    /// let created = Schema::member(
    ///     "event",
    ///     "created",
    ///     Schema::record().field("id", Schema::number()),
    /// );
    ///
    /// assert!(created.validate(&json!({"event": "created", "id": 1})).is_ok());
    ///
    /// let error = created.validate(&json!({"event": "deleted", "id": 1})).unwrap_err();
    /// assert_eq!(error.message, "expected created, got deleted");
    /// ```
    pub fn member(
        discriminator: impl Into<String>,
        value: impl Display,
        body: impl Into<MemberBody>,
    ) -> UnionMember {
        UnionMember::new(discriminator, value, body)
    }

    /// A short name for the shape of this schema.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Schema::Primitive(kind) => kind.name(),
            Schema::Array(_) => "array",
            Schema::Record(_) => "record",
            Schema::Union(_) => "union",
            Schema::Member(_) => "member",
        }
    }
}

impl SchemaLike for Schema {
    fn check(&self, value: Option<&Value>, path: &JsonPath) -> ValidationResult {
        match self {
            Schema::Primitive(kind) => kind.check(value, path),
            Schema::Array(array) => array.check(value, path),
            Schema::Record(record) => record.check(value, path),
            Schema::Union(union) => union.check(value, path),
            Schema::Member(member) => member.check(value, path),
        }
    }
}

impl From<PrimitiveKind> for Schema {
    fn from(kind: PrimitiveKind) -> Self {
        Schema::Primitive(kind)
    }
}

impl From<ArraySchema> for Schema {
    fn from(array: ArraySchema) -> Self {
        Schema::Array(array)
    }
}

impl From<RecordSchema> for Schema {
    fn from(record: RecordSchema) -> Self {
        Schema::Record(record)
    }
}

impl From<UnionSchema> for Schema {
    fn from(union: UnionSchema) -> Self {
        Schema::Union(union)
    }
}

impl From<UnionMember> for Schema {
    fn from(member: UnionMember) -> Self {
        Schema::Member(member)
    }
}

impl From<MemberBody> for Schema {
    fn from(body: MemberBody) -> Self {
        match body {
            MemberBody::Record(record) => Schema::Record(record),
            MemberBody::Union(union) => Schema::Union(union),
            MemberBody::Member(member) => Schema::Member(*member),
        }
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Schema>();
    assert_sync::<Schema>();
};

/// Validates `value` against `schema`, returning the first mismatch.
///
/// ```rust
/// use shapecheck::{validate, Schema};
/// use serde_json::json;
///
/// assert!(validate(&Schema::null(), &json!(null)).is_ok());
/// assert!(validate(&Schema::null(), &json!(0)).is_err());
/// ```
pub fn validate<S: SchemaLike + ?Sized>(schema: &S, value: &Value) -> ValidationResult {
    schema.check(Some(value), &JsonPath::root())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_names() {
        assert_eq!(Schema::undefined().kind_name(), "undefined");
        assert_eq!(Schema::string().kind_name(), "string");
        assert_eq!(Schema::array(Schema::null()).kind_name(), "array");
        assert_eq!(Schema::from(Schema::record()).kind_name(), "record");
        assert_eq!(Schema::from(Schema::union("t")).kind_name(), "union");
        assert_eq!(
            Schema::from(Schema::member("t", "a", Schema::record())).kind_name(),
            "member"
        );
    }

    #[test]
    fn test_missing_precedes_shape_checks() {
        let path = JsonPath::from_field("f");
        let schemas: Vec<Schema> = vec![
            Schema::null(),
            Schema::string(),
            Schema::array(Schema::undefined()),
            Schema::record().into(),
            Schema::union("t").into(),
            Schema::member("t", "a", Schema::record()).into(),
        ];

        for schema in schemas {
            let error = schema.check(None, &path).unwrap_err();
            assert_eq!(error.message, "missing", "schema: {}", schema.kind_name());
            assert_eq!(error.path, path);
        }
    }

    #[test]
    fn test_member_body_converts_back_to_schema() {
        let body = MemberBody::from(Schema::record().field("a", Schema::number()));
        let schema = Schema::from(body);
        assert!(schema.validate(&json!({"a": 1})).is_ok());
    }

    #[test]
    fn test_validate_through_trait_object() {
        let schema: Box<dyn SchemaLike> = Box::new(Schema::string());
        assert!(validate(schema.as_ref(), &json!("x")).is_ok());
    }
}
