//! Schema registry for named, shared schemas.
//!
//! This module provides the [`SchemaRegistry`] type that stores schemas under
//! names so that an application can build them once at startup and validate
//! documents against them by name from any thread.

use parking_lot::RwLock;
use rayon::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ValidationError;
use crate::schema::{Schema, SchemaLike};
use crate::ValidationResult;

/// Type alias for the schema storage map.
type SchemaMap = Arc<RwLock<HashMap<String, Arc<Schema>>>>;

/// Batches smaller than this are validated on the calling thread.
const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// A thread-safe registry for storing and retrieving named schemas.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>` for its name table:
/// - Multiple threads can look up and validate concurrently (read access)
/// - Registration operations are serialized (write access)
///
/// Cloning a registry is cheap and yields a handle to the same table.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, SchemaRegistry};
/// use serde_json::json;
///
/// let registry = SchemaRegistry::new();
/// registry
///     .register("User", Schema::record().field("name", Schema::string()))
///     .unwrap();
///
/// assert!(registry.validate("User", &json!({"name": "Alice"})).is_ok());
/// assert!(registry.validate("User", &json!({"name": 1})).is_err());
/// ```
pub struct SchemaRegistry {
    schemas: SchemaMap,
    parallel_threshold: usize,
}

impl SchemaRegistry {
    /// Creates a new empty schema registry.
    pub fn new() -> Self {
        Self {
            schemas: Arc::new(RwLock::new(HashMap::new())),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Sets the batch size from which [`validate_batch`](Self::validate_batch)
    /// spreads work across the rayon thread pool.
    ///
    /// The default is 64. A threshold of 0 always validates in parallel.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapecheck::SchemaRegistry;
    ///
    /// let registry = SchemaRegistry::new().with_parallel_threshold(1024);
    /// ```
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Registers a schema with the given name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is already registered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapecheck::{Schema, SchemaRegistry};
    ///
    /// let registry = SchemaRegistry::new();
    /// registry.register("Id", Schema::number()).unwrap();
    ///
    /// // Duplicate registration fails
    /// assert!(registry.register("Id", Schema::string()).is_err());
    /// ```
    pub fn register(
        &self,
        name: impl Into<String>,
        schema: impl Into<Schema>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let mut schemas = self.schemas.write();

        if schemas.contains_key(&name) {
            tracing::warn!(schema = %name, "schema already registered");
            return Err(RegistryError::DuplicateName(name));
        }

        let schema = schema.into();
        tracing::debug!(schema = %name, kind = schema.kind_name(), "registered schema");
        schemas.insert(name, Arc::new(schema));
        Ok(())
    }

    /// Retrieves a schema by name.
    pub fn get(&self, name: &str) -> Option<Arc<Schema>> {
        self.schemas.read().get(name).cloned()
    }

    /// Returns true if a schema is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.read().contains_key(name)
    }

    /// Returns the registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.schemas.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }

    /// Validates a value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::SchemaNotFound` if the name is unknown, or
    /// `RegistryError::Invalid` carrying the first mismatch.
    pub fn validate(&self, schema_name: &str, value: &Value) -> Result<(), RegistryError> {
        let schema = self.lookup(schema_name)?;

        schema.validate(value).map_err(|error| {
            tracing::debug!(
                schema = schema_name,
                path = %error.path,
                code = error.code(),
                "document rejected"
            );
            RegistryError::Invalid(error)
        })
    }

    /// Validates many documents against a named schema.
    ///
    /// Returns one verdict per document, in input order. Documents are
    /// independent, so a failure in one does not stop the others.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapecheck::{Schema, SchemaRegistry};
    /// use serde_json::json;
    ///
    /// let registry = SchemaRegistry::new();
    /// registry.register("Flag", Schema::boolean()).unwrap();
    ///
    /// let verdicts = registry
    ///     .validate_batch("Flag", &[json!(true), json!("no"), json!(false)])
    ///     .unwrap();
    ///
    /// assert!(verdicts[0].is_ok());
    /// assert!(verdicts[1].is_err());
    /// assert!(verdicts[2].is_ok());
    /// ```
    pub fn validate_batch(
        &self,
        schema_name: &str,
        values: &[Value],
    ) -> Result<Vec<ValidationResult>, RegistryError> {
        let schema = self.lookup(schema_name)?;

        let verdicts: Vec<ValidationResult> = if values.len() < self.parallel_threshold {
            values.iter().map(|value| schema.validate(value)).collect()
        } else {
            values
                .par_iter()
                .map(|value| schema.validate(value))
                .collect()
        };

        let rejected = verdicts.iter().filter(|v| v.is_err()).count();
        tracing::debug!(
            schema = schema_name,
            documents = values.len(),
            rejected,
            "validated batch"
        );
        Ok(verdicts)
    }

    fn lookup(&self, schema_name: &str) -> Result<Arc<Schema>, RegistryError> {
        self.get(schema_name)
            .ok_or_else(|| RegistryError::SchemaNotFound(schema_name.to_string()))
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SchemaRegistry {
    fn clone(&self) -> Self {
        Self {
            schemas: Arc::clone(&self.schemas),
            parallel_threshold: self.parallel_threshold,
        }
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a schema with a name that already exists.
    #[error("schema '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to validate with a schema name that doesn't exist.
    #[error("schema '{0}' not found")]
    SchemaNotFound(String),

    /// The document does not conform to the schema.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
