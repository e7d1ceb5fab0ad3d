//! Fragment-to-field decode helpers.
//!
//! Each helper reads one declared field from a [`Fragment`] and reports
//! failures as a [`BindError`] whose path names the field. Nested-record
//! helpers recurse through [`XmlRecord::decode`] and prefix the enclosing
//! field name onto any error propagating upward.

use std::str::FromStr;

use super::error::BindError;
use super::record::XmlRecord;
use crate::xml::Fragment;

// ----------------------------------------------------------------------------
// Attributes
// ----------------------------------------------------------------------------

/// Reads a required string attribute.
///
/// # Errors
///
/// [`BindError::MissingRequiredField`] when the attribute is absent.
pub fn req_attr(fragment: &Fragment, name: &'static str) -> Result<String, BindError> {
    fragment
        .attr(name)
        .map(str::to_owned)
        .ok_or_else(|| BindError::missing(name))
}

/// Reads an optional string attribute; absent decodes to `None`.
#[must_use]
pub fn opt_attr(fragment: &Fragment, name: &str) -> Option<String> {
    fragment.attr(name).map(str::to_owned)
}

/// Reads a required integer attribute.
///
/// # Errors
///
/// [`BindError::MissingRequiredField`] when absent, [`BindError::TypeMismatch`]
/// when the raw value does not parse as `T`.
pub fn req_int_attr<T>(fragment: &Fragment, name: &'static str) -> Result<T, BindError>
where
    T: FromStr,
{
    let raw = req_attr(fragment, name)?;
    parse_int(name, &raw)
}

/// Reads an optional integer attribute; absent decodes to `None`.
///
/// # Errors
///
/// [`BindError::TypeMismatch`] when present but unparseable as `T`.
pub fn opt_int_attr<T>(fragment: &Fragment, name: &'static str) -> Result<Option<T>, BindError>
where
    T: FromStr,
{
    fragment.attr(name).map(|raw| parse_int(name, raw)).transpose()
}

fn parse_int<T: FromStr>(name: &'static str, raw: &str) -> Result<T, BindError> {
    raw.parse()
        .map_err(|_| BindError::type_mismatch(name, std::any::type_name::<T>(), raw))
}

// ----------------------------------------------------------------------------
// Booleans: two-symbol alphabet, "1" / "0"
// ----------------------------------------------------------------------------

/// Maps a raw wire value onto the boolean alphabet.
///
/// # Errors
///
/// [`BindError::InvalidBooleanLiteral`] for anything other than `"1"`/`"0"`;
/// language-native literals like `"true"` are deliberately rejected.
pub fn parse_bool(field: &'static str, raw: &str) -> Result<bool, BindError> {
    match raw {
        "1" => Ok(true),
        "0" => Ok(false),
        other => Err(BindError::invalid_boolean(field, other)),
    }
}

/// Reads a required boolean attribute.
///
/// # Errors
///
/// [`BindError::MissingRequiredField`] when absent,
/// [`BindError::InvalidBooleanLiteral`] for an out-of-alphabet value.
pub fn req_bool_attr(fragment: &Fragment, name: &'static str) -> Result<bool, BindError> {
    let raw = req_attr(fragment, name)?;
    parse_bool(name, &raw)
}

/// Reads an optional boolean attribute; absent decodes to `None`.
///
/// # Errors
///
/// [`BindError::InvalidBooleanLiteral`] for an out-of-alphabet value.
pub fn opt_bool_attr(fragment: &Fragment, name: &'static str) -> Result<Option<bool>, BindError> {
    fragment.attr(name).map(|raw| parse_bool(name, raw)).transpose()
}

/// Reads a defaulted boolean attribute, applying the declared default at
/// decode time when the attribute is absent.
///
/// # Errors
///
/// [`BindError::InvalidBooleanLiteral`] for an out-of-alphabet value.
pub fn bool_attr_or(
    fragment: &Fragment,
    name: &'static str,
    default: bool,
) -> Result<bool, BindError> {
    opt_bool_attr(fragment, name).map(|value| value.unwrap_or(default))
}

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// Reads a required enumerated attribute through the enum's `from_wire`
/// parser.
///
/// # Errors
///
/// [`BindError::MissingRequiredField`] when absent,
/// [`BindError::UnknownEnumValue`] naming the raw value when it falls
/// outside the closed set.
pub fn req_enum_attr<T>(
    fragment: &Fragment,
    name: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, BindError> {
    let raw = req_attr(fragment, name)?;
    parse(&raw).ok_or_else(move || BindError::unknown_value(name, raw))
}

/// Reads an optional enumerated attribute; absent decodes to `None`.
///
/// # Errors
///
/// [`BindError::UnknownEnumValue`] naming the raw value when present but
/// outside the closed set.
pub fn opt_enum_attr<T>(
    fragment: &Fragment,
    name: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, BindError> {
    fragment
        .attr(name)
        .map(|raw| parse(raw).ok_or_else(|| BindError::unknown_value(name, raw)))
        .transpose()
}

// ----------------------------------------------------------------------------
// Nested records
// ----------------------------------------------------------------------------

/// Decodes a required nested record.
///
/// # Errors
///
/// [`BindError::MissingRequiredField`] when no child with the record's tag is
/// present; nested failures propagate with `field` prepended to their path.
pub fn req_child<T: XmlRecord>(fragment: &Fragment, field: &'static str) -> Result<T, BindError> {
    fragment
        .child(T::TAG)
        .ok_or_else(|| BindError::missing(field))
        .and_then(|child| T::decode(child).map_err(|e| e.within(field)))
}

/// Decodes an optional nested record; absent decodes to `None`.
///
/// # Errors
///
/// Nested failures propagate with `field` prepended to their path.
pub fn opt_child<T: XmlRecord>(
    fragment: &Fragment,
    field: &'static str,
) -> Result<Option<T>, BindError> {
    fragment
        .child(T::TAG)
        .map(|child| T::decode(child).map_err(|e| e.within(field)))
        .transpose()
}

/// Decodes an ordered list of nested records, preserving wire order.
///
/// # Errors
///
/// Nested failures propagate with `field[index]` prepended to their path.
pub fn child_list<T: XmlRecord>(
    fragment: &Fragment,
    field: &'static str,
) -> Result<Vec<T>, BindError> {
    fragment
        .children_named(T::TAG)
        .enumerate()
        .map(|(index, child)| T::decode(child).map_err(|e| e.within_item(field, index)))
        .collect()
}

/// Decodes an ordered list grouped under a semantically empty wrapper tag.
///
/// An absent wrapper decodes to an empty list; the wrapper contributes
/// nothing to error paths, which name only the repeated field itself.
///
/// # Errors
///
/// Nested failures propagate with `field[index]` prepended to their path.
pub fn wrapped_list<T: XmlRecord>(
    fragment: &Fragment,
    wrapper: &str,
    field: &'static str,
) -> Result<Vec<T>, BindError> {
    fragment
        .child(wrapper)
        .map_or_else(|| Ok(Vec::new()), |inner| child_list(inner, field))
}

// ----------------------------------------------------------------------------
// Text-content elements
// ----------------------------------------------------------------------------

/// Reads the fragment's own required text content.
///
/// # Errors
///
/// [`BindError::MissingRequiredField`] when the fragment has no (or empty)
/// text content.
pub fn req_text(fragment: &Fragment, field: &'static str) -> Result<String, BindError> {
    match fragment.text() {
        Some(text) if !text.is_empty() => Ok(text.to_owned()),
        _ => Err(BindError::missing(field)),
    }
}

/// Reads the text content of an optional child element; an absent child
/// decodes to `None`.
#[must_use]
pub fn opt_text_child(fragment: &Fragment, tag: &str) -> Option<String> {
    fragment
        .child(tag)
        .and_then(Fragment::text)
        .map(str::to_owned)
}

/// Reads the text content of every child with the given tag, in wire order.
#[must_use]
pub fn text_child_list(fragment: &Fragment, tag: &str) -> Vec<String> {
    fragment
        .children_named(tag)
        .filter_map(Fragment::text)
        .map(str::to_owned)
        .collect()
}
