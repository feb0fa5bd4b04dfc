//! Array schema validation.
//!
//! This module provides [`ArraySchema`] for validating sequences whose every
//! element conforms to a single element schema.

use serde_json::Value;

use crate::path::JsonPath;
use crate::ValidationResult;

use super::traits::{require_present, shape_mismatch, SchemaLike};
use super::Schema;

/// A schema for validating array values.
///
/// Elements are checked in ascending index order and validation stops at the
/// first element that does not conform. The length of the array is never
/// constrained, so an empty array always conforms.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, SchemaLike};
/// use serde_json::json;
///
/// let schema = Schema::array(Schema::string());
///
/// assert!(schema.validate(&json!(["a", "b"])).is_ok());
/// assert!(schema.validate(&json!([])).is_ok());
///
/// let error = schema.validate(&json!(["a", 42])).unwrap_err();
/// assert_eq!(error.path.to_string(), "[ 1 ]");
/// assert_eq!(error.message, "expected a string, got number");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySchema {
    element: Box<Schema>,
}

impl ArraySchema {
    /// Creates a new array schema with the given element schema.
    pub fn new(element: impl Into<Schema>) -> Self {
        Self {
            element: Box::new(element.into()),
        }
    }

    /// Returns the schema every element must conform to.
    pub fn element(&self) -> &Schema {
        &self.element
    }
}

impl SchemaLike for ArraySchema {
    fn check(&self, value: Option<&Value>, path: &JsonPath) -> ValidationResult {
        let value = require_present(value, path)?;
        let items = value
            .as_array()
            .ok_or_else(|| shape_mismatch(path, "array", Some(value)))?;

        for (index, item) in items.iter().enumerate() {
            self.element.check(Some(item), &path.push_index(index))?;
        }

        Ok(())
    }
}
