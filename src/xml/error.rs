//! Errors raised while reading or writing the XML text form of a fragment.

use thiserror::Error;

/// Errors that can occur converting between XML text and [`Fragment`] trees.
///
/// These are document-level failures (malformed markup, encoding problems),
/// distinct from the schema-level [`BindError`] raised by the binder once a
/// well-formed fragment is in hand.
///
/// [`Fragment`]: crate::xml::Fragment
/// [`BindError`]: crate::bind::BindError
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XmlError {
    /// The input was not well-formed XML.
    #[error("malformed XML: {0}")]
    Malformed(String),

    /// The document contained no root element.
    #[error("document contains no root element")]
    EmptyDocument,

    /// Markup or non-whitespace text appeared after the root element closed.
    #[error("content after the document root")]
    TrailingContent,

    /// Writing the document failed.
    #[error("failed to write document: {0}")]
    Write(String),
}

impl XmlError {
    /// Wraps any displayable parser failure as a [`XmlError::Malformed`].
    pub(crate) fn malformed(err: impl std::fmt::Display) -> Self {
        Self::Malformed(err.to_string())
    }

    /// Wraps any displayable writer failure as a [`XmlError::Write`].
    pub(crate) fn write(err: impl std::fmt::Display) -> Self {
        Self::Write(err.to_string())
    }
}
