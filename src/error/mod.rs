//! Error types for validation failures.
//!
//! This module provides the single error type produced by validation, with
//! the path to the mismatch, a human-readable message and a classification.

mod validation_error;

pub use validation_error::{ErrorKind, ValidationError, DEFAULT_INDENT};
