//! Discriminated union schemas.
//!
//! A discriminated union is a set of record variants told apart by the string
//! value of one common field, the discriminator. This module provides
//! [`UnionSchema`] for the whole set and [`UnionMember`] for a single variant.
//! A member is a schema in its own right, so a single variant can be
//! validated without the union around it.
//!
//! # Example
//!
//! ```rust
//! use shapecheck::{Schema, SchemaLike};
//! use serde_json::json;
//!
//! let shape = Schema::union("kind")
//!     .member("circle", Schema::record().field("radius", Schema::number()))
//!     .member("square", Schema::record().field("side", Schema::number()));
//!
//! assert!(shape.validate(&json!({"kind": "circle", "radius": 2})).is_ok());
//!
//! let error = shape.validate(&json!({"kind": "hexagon"})).unwrap_err();
//! assert_eq!(error.path.to_string(), ".kind");
//! assert_eq!(error.message, "expected one of circle | square, got hexagon");
//! ```

use std::fmt::Display;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{ErrorKind, ValidationError};
use crate::path::JsonPath;
use crate::ValidationResult;

use super::primitive::PrimitiveKind;
use super::record::RecordSchema;
use super::traits::{require_object, SchemaLike};

/// A union of record variants selected by a discriminator field.
///
/// A value conforms when it is an object whose discriminator field is a
/// string naming one of the members, and the value conforms to that member.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionSchema {
    discriminator: String,
    members: IndexMap<String, UnionMember>,
}

impl UnionSchema {
    /// Creates a union with no members, discriminated by the `discriminator` field.
    pub fn new(discriminator: impl Into<String>) -> Self {
        Self {
            discriminator: discriminator.into(),
            members: IndexMap::new(),
        }
    }

    /// Adds a member selected by `value`, whose remaining fields conform to `body`.
    ///
    /// The member shares this union's discriminator.
    pub fn member(self, value: impl Display, body: impl Into<MemberBody>) -> Self {
        let member = UnionMember::new(self.discriminator.clone(), value, body);
        self.variant(member)
    }

    /// Adds a pre-built member, keyed by its discriminator value.
    ///
    /// The member's discriminator is expected to equal this union's.
    pub fn variant(mut self, member: UnionMember) -> Self {
        self.members.insert(member.value.clone(), member);
        self
    }

    /// The name of the discriminating field.
    pub fn discriminator(&self) -> &str {
        &self.discriminator
    }

    /// Returns the member selected by a discriminator value.
    pub fn get(&self, value: &str) -> Option<&UnionMember> {
        self.members.get(value)
    }

    /// Iterates over the members in declaration order.
    pub fn members(&self) -> impl Iterator<Item = &UnionMember> {
        self.members.values()
    }

    /// The accepted discriminator values in declaration order.
    pub fn member_keys(&self) -> Vec<&str> {
        self.members.keys().map(String::as_str).collect()
    }
}

impl SchemaLike for UnionSchema {
    fn check(&self, value: Option<&Value>, path: &JsonPath) -> ValidationResult {
        let object = require_object(value, path)?;
        let tag_path = path.push_field(&self.discriminator);
        let tag = read_discriminator(object, &self.discriminator, &tag_path)?;

        match self.members.get(tag) {
            Some(member) => member.check(value, path),
            None => {
                let expected = self.member_keys().join(" | ");
                Err(ValidationError::new(
                    tag_path,
                    ErrorKind::UnknownVariant,
                    format!("expected one of {}, got {}", expected, tag),
                )
                .with_expected(expected)
                .with_got(tag))
            }
        }
    }
}

/// One variant of a discriminated union.
///
/// A value conforms when it is an object whose discriminator field equals
/// this member's value exactly and whose fields conform to the body. The body
/// is checked against the same object, so the member's fields sit beside the
/// discriminator rather than under it.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionMember {
    discriminator: String,
    value: String,
    body: MemberBody,
}

impl UnionMember {
    /// Creates a member identified by `discriminator == value`.
    ///
    /// `value` is stringified once, here.
    pub fn new(
        discriminator: impl Into<String>,
        value: impl Display,
        body: impl Into<MemberBody>,
    ) -> Self {
        Self {
            discriminator: discriminator.into(),
            value: value.to_string(),
            body: body.into(),
        }
    }

    pub fn discriminator(&self) -> &str {
        &self.discriminator
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn body(&self) -> &MemberBody {
        &self.body
    }
}

impl SchemaLike for UnionMember {
    fn check(&self, value: Option<&Value>, path: &JsonPath) -> ValidationResult {
        let object = require_object(value, path)?;
        let tag_path = path.push_field(&self.discriminator);
        let tag = read_discriminator(object, &self.discriminator, &tag_path)?;

        if tag != self.value {
            return Err(ValidationError::new(
                tag_path,
                ErrorKind::DiscriminatorMismatch,
                format!("expected {}, got {}", self.value, tag),
            )
            .with_expected(self.value.as_str())
            .with_got(tag));
        }

        self.body.check(value, path)
    }
}

/// The fields of a union member.
///
/// A member always describes a record, so its body is a record or a further
/// union/member layered over the same object. Primitives and arrays cannot
/// appear here.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberBody {
    Record(RecordSchema),
    Union(UnionSchema),
    Member(Box<UnionMember>),
}

impl SchemaLike for MemberBody {
    fn check(&self, value: Option<&Value>, path: &JsonPath) -> ValidationResult {
        match self {
            MemberBody::Record(record) => record.check(value, path),
            MemberBody::Union(union) => union.check(value, path),
            MemberBody::Member(member) => member.check(value, path),
        }
    }
}

impl From<RecordSchema> for MemberBody {
    fn from(record: RecordSchema) -> Self {
        MemberBody::Record(record)
    }
}

impl From<UnionSchema> for MemberBody {
    fn from(union: UnionSchema) -> Self {
        MemberBody::Union(union)
    }
}

impl From<UnionMember> for MemberBody {
    fn from(member: UnionMember) -> Self {
        MemberBody::Member(Box::new(member))
    }
}

/// Reads the discriminator as a string, failing as a string primitive would.
fn read_discriminator<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    path: &JsonPath,
) -> Result<&'a str, ValidationError> {
    let tag = object.get(key);
    PrimitiveKind::String.check(tag, path)?;
    Ok(tag.and_then(Value::as_str).unwrap_or_default())
}
