//! Field paths locating a failure inside a nested record.

use std::fmt;

/// One step in a [`FieldPath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    /// A named field.
    Field(&'static str),
    /// A position within a repeated field.
    Index(usize),
}

/// The path of field names (and list positions) leading from the record root
/// to a failing field.
///
/// Paths render in dotted form with bracketed indices, e.g.
/// `backup.account[2].name`, so a dispatcher can report exactly where inside
/// a deeply nested request a decode failed.
///
/// # Examples
///
/// ```
/// use soapstone::bind::FieldPath;
///
/// let mut path = FieldPath::field("name");
/// path.push_front_item("account", 2);
/// path.push_front_field("backup");
/// assert_eq!(path.to_string(), "backup.account[2].name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Creates a single-field path.
    #[must_use]
    pub fn field(name: &'static str) -> Self {
        Self {
            segments: vec![PathSegment::Field(name)],
        }
    }

    /// Prepends a field segment, used as an error propagates out of a nested
    /// record into its parent.
    pub fn push_front_field(&mut self, name: &'static str) {
        self.segments.insert(0, PathSegment::Field(name));
    }

    /// Prepends an indexed field segment (`name[index]`).
    pub fn push_front_item(&mut self, name: &'static str, index: usize) {
        self.segments.insert(0, PathSegment::Index(index));
        self.segments.insert(0, PathSegment::Field(name));
    }

    /// Returns the path segments from root to leaf.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) => {
                    if !first {
                        write!(f, ".")?;
                    }
                    write!(f, "{name}")?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
            first = false;
        }
        Ok(())
    }
}
