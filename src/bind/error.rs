//! The schema-level error taxonomy shared by decode and validate.

use thiserror::Error;

use super::path::FieldPath;

/// A schema-level binding failure.
///
/// Every variant carries the [`FieldPath`] of the failing field. Errors are
/// terminal for the record being bound: the binder never retries, logs, or
/// substitutes defaults on failure. Translation into a user-visible fault
/// is the dispatcher's job.
///
/// As an error propagates out of a nested record, [`BindError::within`] and
/// [`BindError::within_item`] prepend the enclosing field name so the final
/// path reads from the record root, e.g.
/// `backup.account[2].name: missing required field`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// A required field was absent from the wire fragment (or empty under
    /// programmatic validation).
    #[error("{path}: missing required field")]
    MissingRequiredField {
        /// Path of the absent field.
        path: FieldPath,
    },

    /// An enumerated field carried a value outside its closed set.
    #[error("{path}: unknown value '{value}'")]
    UnknownEnumValue {
        /// Path of the enum field.
        path: FieldPath,
        /// The offending raw wire value.
        value: String,
    },

    /// A boolean field carried something other than `"1"` or `"0"`.
    #[error("{path}: invalid boolean literal '{value}'")]
    InvalidBooleanLiteral {
        /// Path of the boolean field.
        path: FieldPath,
        /// The offending raw wire value.
        value: String,
    },

    /// A field's wire shape did not match its declared type.
    #[error("{path}: expected {expected}, got '{value}'")]
    TypeMismatch {
        /// Path of the mistyped field.
        path: FieldPath,
        /// The declared type, e.g. `i64`.
        expected: &'static str,
        /// The offending raw wire value or tag name.
        value: String,
    },
}

impl BindError {
    /// A missing required field at the given leaf name.
    #[must_use]
    pub fn missing(field: &'static str) -> Self {
        Self::MissingRequiredField {
            path: FieldPath::field(field),
        }
    }

    /// An out-of-set enum value at the given leaf name.
    #[must_use]
    pub fn unknown_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownEnumValue {
            path: FieldPath::field(field),
            value: value.into(),
        }
    }

    /// A non-`"1"`/`"0"` boolean literal at the given leaf name.
    #[must_use]
    pub fn invalid_boolean(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidBooleanLiteral {
            path: FieldPath::field(field),
            value: value.into(),
        }
    }

    /// A type mismatch at the given leaf name.
    #[must_use]
    pub fn type_mismatch(
        field: &'static str,
        expected: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            path: FieldPath::field(field),
            expected,
            value: value.into(),
        }
    }

    /// Returns the path of the failing field.
    #[must_use]
    pub const fn path(&self) -> &FieldPath {
        match self {
            Self::MissingRequiredField { path }
            | Self::UnknownEnumValue { path, .. }
            | Self::InvalidBooleanLiteral { path, .. }
            | Self::TypeMismatch { path, .. } => path,
        }
    }

    /// Prepends the enclosing field name to the path.
    #[must_use]
    pub fn within(mut self, field: &'static str) -> Self {
        self.path_mut().push_front_field(field);
        self
    }

    /// Prepends an enclosing repeated field and position to the path.
    #[must_use]
    pub fn within_item(mut self, field: &'static str, index: usize) -> Self {
        self.path_mut().push_front_item(field, index);
        self
    }

    fn path_mut(&mut self) -> &mut FieldPath {
        match self {
            Self::MissingRequiredField { path }
            | Self::UnknownEnumValue { path, .. }
            | Self::InvalidBooleanLiteral { path, .. }
            | Self::TypeMismatch { path, .. } => path,
        }
    }
}
