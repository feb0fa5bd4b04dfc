//! Record schema validation.
//!
//! This module provides [`RecordSchema`] for validating objects with a fixed
//! set of mandatory, typed fields.

use indexmap::IndexMap;
use serde_json::Value;

use crate::path::JsonPath;
use crate::ValidationResult;

use super::traits::{require_object, SchemaLike};
use super::Schema;

/// A schema for validating object-like values.
///
/// Every declared field is mandatory: a field that is absent from the value
/// fails with `missing`, unless the field's own schema is
/// [`Schema::undefined`]. Fields of the value that the schema does not
/// declare are never inspected. Fields are checked in declaration order and
/// validation stops at the first failure.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, SchemaLike};
/// use serde_json::json;
///
/// let schema = Schema::record()
///     .field("name", Schema::string())
///     .field("tags", Schema::array(Schema::string()));
///
/// let result = schema.validate(&json!({
///     "name": "Alice",
///     "tags": ["admin"],
///     "extra": true
/// }));
/// assert!(result.is_ok());
///
/// let error = schema.validate(&json!({"name": "Alice"})).unwrap_err();
/// assert_eq!(error.path.to_string(), ".tags");
/// assert_eq!(error.message, "missing");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordSchema {
    fields: IndexMap<String, Schema>,
}

impl RecordSchema {
    /// Creates a new record schema with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field.
    ///
    /// Declaring the same name twice replaces the earlier schema but keeps
    /// the field's original position.
    pub fn field(mut self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.fields.insert(name.into(), schema.into());
        self
    }

    /// Returns the schema declared for a field.
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.fields.get(name)
    }

    /// Iterates over the declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.fields.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl SchemaLike for RecordSchema {
    fn check(&self, value: Option<&Value>, path: &JsonPath) -> ValidationResult {
        let object = require_object(value, path)?;

        for (name, schema) in &self.fields {
            schema.check(object.get(name), &path.push_field(name))?;
        }

        Ok(())
    }
}
