//! The record traits every message type implements.

use super::error::BindError;
use crate::xml::Fragment;

/// A record with a fixed wire tag and a schema-driven fragment mapping.
///
/// Implemented by every message record, nested or top-level. Decode and
/// encode are pure functions over the fragment tree: decode validates
/// required-field presence, boolean alphabet, and enum closure as it reads;
/// encode assumes an already-valid record and omits absent optional fields
/// entirely.
pub trait XmlRecord: Sized {
    /// The wire-level tag name this record binds to.
    const TAG: &'static str;

    /// Parses a wire fragment into a populated, validated record.
    ///
    /// # Errors
    ///
    /// Returns a [`BindError`] carrying the path of the first failing field.
    fn decode(fragment: &Fragment) -> Result<Self, BindError>;

    /// Serialises this record under [`XmlRecord::TAG`].
    fn encode(&self) -> Fragment;
}

/// Required-field and enum-closure checks for programmatically constructed
/// records.
///
/// Decoded records have already passed these checks; `validate` exists for
/// the builder path. Required-field presence is enforced by the type system
/// there, so this trait covers what the types cannot express: required
/// strings must be non-empty, and nested records must themselves be valid.
pub trait Validate {
    /// Checks this record against its schema contract.
    ///
    /// # Errors
    ///
    /// Returns a [`BindError`] carrying the path of the first failing field.
    fn validate(&self) -> Result<(), BindError>;
}

/// Fails with [`BindError::MissingRequiredField`] when a required string
/// field is empty.
///
/// # Errors
///
/// Returns the missing-field error named after `field`.
pub fn require_nonempty(field: &'static str, value: &str) -> Result<(), BindError> {
    if value.is_empty() {
        return Err(BindError::missing(field));
    }
    Ok(())
}

/// Validates a nested record, prefixing failures with the enclosing field
/// name.
///
/// # Errors
///
/// Propagates the nested failure with `field` prepended to its path.
pub fn validate_child<T: Validate>(field: &'static str, record: &T) -> Result<(), BindError> {
    record.validate().map_err(|e| e.within(field))
}

/// Validates every item of a repeated field, prefixing failures with the
/// field name and position.
///
/// # Errors
///
/// Propagates the first failing item's error with `field[index]` prepended.
pub fn validate_items<T: Validate>(field: &'static str, items: &[T]) -> Result<(), BindError> {
    items
        .iter()
        .enumerate()
        .try_for_each(|(index, item)| item.validate().map_err(|e| e.within_item(field, index)))
}
