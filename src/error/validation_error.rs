//! The validation error type.
//!
//! Validation is fail-fast: a [`ValidationError`] describes the first
//! mismatch found while walking a schema and a value together.

use std::fmt::{self, Display};

use crate::path::JsonPath;

/// Indent marker placed before each nested path segment when an error is
/// rendered with [`Display`].
pub const DEFAULT_INDENT: &str = "  ";

/// Classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required value is absent.
    Missing,
    /// The value's dynamic type does not match the expected primitive kind.
    TypeMismatch,
    /// An array or object was expected but something else was found.
    ShapeMismatch,
    /// A union discriminator names none of the union's members.
    UnknownVariant,
    /// A member's discriminator field holds a different literal.
    DiscriminatorMismatch,
}

impl ErrorKind {
    /// Machine-readable code for this kind of failure.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Missing => "missing",
            ErrorKind::TypeMismatch => "invalid_type",
            ErrorKind::ShapeMismatch => "invalid_shape",
            ErrorKind::UnknownVariant => "unknown_variant",
            ErrorKind::DiscriminatorMismatch => "discriminator_mismatch",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A validation failure with full context.
///
/// `ValidationError` captures:
/// - **path**: where in the document the mismatch occurred
/// - **message**: human-readable description (e.g. `expected a string, got number`)
/// - **kind**: which class of mismatch this is
/// - **expected** / **got**: the two sides of the mismatch, when there are two
///
/// # Example
///
/// ```rust
/// use shapecheck::{ErrorKind, JsonPath, ValidationError};
///
/// let error = ValidationError::new(
///     JsonPath::root().push_field("name"),
///     ErrorKind::TypeMismatch,
///     "expected a string, got number",
/// )
/// .with_expected("string")
/// .with_got("number");
///
/// assert_eq!(error.code(), "invalid_type");
/// assert_eq!(error.to_string(), "name\n\nexpected a string, got number");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The path to the value that failed validation.
    pub path: JsonPath,
    /// Human-readable error message.
    pub message: String,
    /// Classification of the failure.
    pub kind: ErrorKind,
    /// Description of what was expected.
    pub expected: Option<String>,
    /// What was actually found.
    pub got: Option<String>,
}

impl ValidationError {
    /// Creates a new error with the given path, kind and message.
    pub fn new(path: JsonPath, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            kind,
            expected: None,
            got: None,
        }
    }

    /// Creates a `missing` error at the given path.
    pub fn missing(path: JsonPath) -> Self {
        Self::new(path, ErrorKind::Missing, "missing").with_got("undefined")
    }

    /// Sets the "expected" field and returns self for chaining.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Sets the "got" field and returns self for chaining.
    pub fn with_got(mut self, got: impl Into<String>) -> Self {
        self.got = Some(got.into());
        self
    }

    /// Returns the kind of failure.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the machine-readable code of the failure.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Renders the error using `indent` as the per-level indent marker.
    ///
    /// Each path segment goes on its own line, segment `i` prefixed by `i`
    /// copies of `indent`, followed by a blank line and the message. An error
    /// at the root renders as the bare message.
    ///
    /// ```rust
    /// use shapecheck::{ErrorKind, JsonPath, ValidationError};
    ///
    /// let path = JsonPath::root().push_field("items").push_index(1);
    /// let error = ValidationError::new(path, ErrorKind::Missing, "missing");
    ///
    /// assert_eq!(error.render("--"), "items\n--[ 1 ]\n\nmissing");
    /// ```
    pub fn render(&self, indent: &str) -> String {
        if self.path.is_root() {
            return self.message.clone();
        }

        let lines: Vec<String> = self
            .path
            .segments()
            .enumerate()
            .map(|(depth, segment)| format!("{}{}", indent.repeat(depth), segment))
            .collect();

        format!("{}\n\n{}", lines.join("\n"), self.message)
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_INDENT))
    }
}

impl std::error::Error for ValidationError {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};
