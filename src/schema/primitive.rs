//! Primitive (leaf) schemas.

use std::fmt::{self, Display};

use serde_json::Value;

use crate::error::{ErrorKind, ValidationError};
use crate::path::JsonPath;
use crate::ValidationResult;

use super::traits::SchemaLike;

/// The kind of a leaf value.
///
/// A primitive matches a value by its dynamic type name. `Undefined` is the
/// only schema in the crate that accepts an absent value, and it accepts
/// nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Undefined,
    Null,
    String,
    Number,
    Boolean,
}

impl PrimitiveKind {
    /// The dynamic type name this kind matches.
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Undefined => "undefined",
            PrimitiveKind::Null => "null",
            PrimitiveKind::String => "string",
            PrimitiveKind::Number => "number",
            PrimitiveKind::Boolean => "boolean",
        }
    }
}

impl Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl SchemaLike for PrimitiveKind {
    fn check(&self, value: Option<&Value>, path: &JsonPath) -> ValidationResult {
        if value.is_none() && *self != PrimitiveKind::Undefined {
            return Err(ValidationError::missing(path.clone()));
        }

        let got = type_name(value);
        if got == self.name() {
            return Ok(());
        }

        Err(ValidationError::new(
            path.clone(),
            ErrorKind::TypeMismatch,
            format!("expected a {}, got {}", self, got),
        )
        .with_expected(self.name())
        .with_got(got))
    }
}

/// Returns the dynamic type name of a possibly absent value.
pub(crate) fn type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}
