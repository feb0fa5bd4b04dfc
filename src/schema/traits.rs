//! Traits for schema polymorphism.
//!
//! This module provides the [`SchemaLike`] trait implemented by every schema
//! shape, so that the parts of a schema tree can be validated on their own as
//! well as through the [`Schema`](super::Schema) enum.

use serde_json::{Map, Value};

use crate::error::{ErrorKind, ValidationError};
use crate::path::JsonPath;
use crate::ValidationResult;

use super::primitive::type_name;

/// A schema shape that can check a value.
///
/// The `Send + Sync` bounds allow schemas to be shared across threads and
/// validated concurrently.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, SchemaLike};
/// use serde_json::json;
///
/// let user = Schema::record()
///     .field("name", Schema::string())
///     .field("age", Schema::number());
///
/// assert!(user.validate(&json!({"name": "Alice", "age": 30})).is_ok());
/// assert!(user.validate(&json!({"name": "Alice"})).is_err());
/// ```
pub trait SchemaLike: Send + Sync {
    /// Checks a possibly absent value found at `path`.
    ///
    /// `None` stands for an absent value (a field that is not there at all)
    /// and is distinct from an explicit `null`. Returns the first mismatch.
    fn check(&self, value: Option<&Value>, path: &JsonPath) -> ValidationResult;

    /// Validates a root value against this schema.
    fn validate(&self, value: &Value) -> ValidationResult {
        self.check(Some(value), &JsonPath::root())
    }
}

/// Fails with `missing` when the value is absent.
pub(crate) fn require_present<'a>(
    value: Option<&'a Value>,
    path: &JsonPath,
) -> Result<&'a Value, ValidationError> {
    value.ok_or_else(|| ValidationError::missing(path.clone()))
}

/// Fails unless the value is present and object-like.
pub(crate) fn require_object<'a>(
    value: Option<&'a Value>,
    path: &JsonPath,
) -> Result<&'a Map<String, Value>, ValidationError> {
    let value = require_present(value, path)?;
    value
        .as_object()
        .ok_or_else(|| shape_mismatch(path, "object", Some(value)))
}

/// Builds an `expected an <shape>, got <type>` error for `array` or `object`.
pub(crate) fn shape_mismatch(
    path: &JsonPath,
    shape: &'static str,
    value: Option<&Value>,
) -> ValidationError {
    let got = type_name(value);
    ValidationError::new(
        path.clone(),
        ErrorKind::ShapeMismatch,
        format!("expected an {}, got {}", shape, got),
    )
    .with_expected(shape)
    .with_got(got)
}
