//! # Shapecheck
//!
//! A structural validator: given a schema describing the shape of a value and
//! an untyped JSON value, decide whether the value conforms, and if it does
//! not, report the first mismatch together with the path that leads to it.
//!
//! ## Overview
//!
//! Validation is fail-fast. The validator walks the schema and the value in
//! lockstep and stops at the first mismatch. Records, arrays and
//! discriminated unions nest freely; the error path names every field and
//! array index between the root and the failing value.
//!
//! Absence and `null` are different things: a record field that is not
//! present fails with `missing`, unless its schema is [`Schema::undefined`],
//! while an explicit `null` is only accepted by [`Schema::null`].
//!
//! ## Core Types
//!
//! - [`Schema`]: The closed set of shapes (primitive, array, record, union, member)
//! - [`SchemaLike`]: The validation trait implemented by every shape
//! - [`ValidationError`]: The first mismatch, with its [`JsonPath`] and message
//! - [`SchemaRegistry`]: Named schemas shared across threads
//!
//! ## Example
//!
//! ```rust
//! use shapecheck::{Schema, SchemaLike};
//! use serde_json::json;
//!
//! let shape = Schema::union("kind")
//!     .member("foo", Schema::record().field("a", Schema::number()))
//!     .member("bar", Schema::record().field("b", Schema::string()));
//!
//! assert!(shape.validate(&json!({"kind": "foo", "a": 1})).is_ok());
//!
//! let error = shape.validate(&json!({"kind": "foo", "a": "x"})).unwrap_err();
//! assert_eq!(error.to_string(), "a\n\nexpected a number, got string");
//! ```

pub mod error;
pub mod path;
pub mod registry;
pub mod schema;

pub use error::{ErrorKind, ValidationError, DEFAULT_INDENT};
pub use path::{JsonPath, PathSegment};
pub use registry::{RegistryError, SchemaRegistry};
pub use schema::{
    validate, ArraySchema, MemberBody, PrimitiveKind, RecordSchema, Schema, SchemaLike,
    UnionMember, UnionSchema,
};

/// Type alias for the outcome of validating one value.
pub type ValidationResult = Result<(), ValidationError>;
