//! Path representation for locating values in nested documents.
//!
//! This module provides [`JsonPath`] and [`PathSegment`] types for building
//! and representing the route from the root of a document to the value a
//! validation error refers to.

use std::fmt::{self, Display};

/// A segment of a document path.
///
/// Paths are built from segments that represent either field access or array indexing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A field/property access (e.g., `user`, `kind`)
    Field(String),
    /// An array index access, rendered as `[ 0 ]`
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, "{}", name),
            PathSegment::Index(idx) => write!(f, "[ {} ]", idx),
        }
    }
}

/// A path to a value in a nested JSON-like document.
///
/// `JsonPath` represents locations like `.users[ 0 ].email` and provides
/// methods for building paths incrementally. Extending a path never
/// modifies it, so sibling branches of a traversal can share a parent.
///
/// # Example
///
/// ```rust
/// use shapecheck::JsonPath;
///
/// let path = JsonPath::root()
///     .push_field("users")
///     .push_index(0)
///     .push_field("email");
///
/// assert_eq!(path.to_string(), ".users[ 0 ].email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPath {
    segments: Vec<PathSegment>,
}

impl JsonPath {
    /// Creates an empty path representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a single field segment.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        self.push(PathSegment::Field(name.into()))
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        self.push(PathSegment::Index(index))
    }

    fn push(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments, root first.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the parent path, or None if this is root.
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.segments.split_last()?;
        Some(Self {
            segments: init.to_vec(),
        })
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(_) => write!(f, "{}", segment)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_is_empty() {
        let path = JsonPath::root();
        assert!(path.is_root());
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_single_field() {
        let path = JsonPath::root().push_field("name");
        assert_eq!(path.to_string(), ".name");
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_index_is_space_padded() {
        let path = JsonPath::root().push_index(2);
        assert_eq!(path.to_string(), "[ 2 ]");
        assert_eq!(PathSegment::index(2).to_string(), "[ 2 ]");
    }

    #[test]
    fn test_segment_display_is_bare() {
        assert_eq!(PathSegment::field("kind").to_string(), "kind");
    }

    #[test]
    fn test_complex_path() {
        let path = JsonPath::root()
            .push_field("orders")
            .push_index(3)
            .push_field("lines")
            .push_index(0)
            .push_field("sku");
        assert_eq!(path.to_string(), ".orders[ 3 ].lines[ 0 ].sku");
    }

    #[test]
    fn test_path_immutability() {
        let base = JsonPath::root().push_field("items");
        let first = base.push_index(0);
        let second = base.push_index(1);

        assert_eq!(base.to_string(), ".items");
        assert_eq!(first.to_string(), ".items[ 0 ]");
        assert_eq!(second.to_string(), ".items[ 1 ]");
    }

    #[test]
    fn test_parent_path() {
        let path = JsonPath::root().push_field("a").push_index(0);

        let parent = path.parent().unwrap();
        assert_eq!(parent, JsonPath::from_field("a"));

        let root = parent.parent().unwrap();
        assert!(root.is_root());
        assert!(root.parent().is_none());
    }

    #[test]
    fn test_last_segment() {
        let path = JsonPath::root().push_field("users").push_index(0);
        assert_eq!(path.last(), Some(&PathSegment::Index(0)));
        assert_eq!(JsonPath::root().last(), None);
    }
}
