//! Field-to-fragment encode helpers.
//!
//! Encode assumes an already-valid record. The invariant these helpers keep
//! is omission-correctness: an absent optional field produces no attribute
//! and no empty tag, and a defaulted boolean is emitted only when it differs
//! from its declared default. Value-level round-tripping is the contract;
//! byte-level identity with the originally decoded document is not.

use std::fmt::Display;

use super::record::XmlRecord;
use crate::xml::Fragment;

/// The wire spelling of a boolean: `"1"` for true, `"0"` for false.
#[must_use]
pub const fn bool_str(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Emits an optional string attribute, omitting it entirely when absent.
pub fn push_opt_attr(fragment: &mut Fragment, name: &str, value: Option<&str>) {
    if let Some(present) = value {
        fragment.set_attr(name, present);
    }
}

/// Emits an integer-valued attribute.
pub fn push_int_attr<T: Display>(fragment: &mut Fragment, name: &str, value: T) {
    fragment.set_attr(name, value.to_string());
}

/// Emits an optional integer attribute, omitting it entirely when absent.
pub fn push_opt_int_attr<T: Display>(fragment: &mut Fragment, name: &str, value: Option<T>) {
    if let Some(present) = value {
        push_int_attr(fragment, name, present);
    }
}

/// Emits a boolean attribute unconditionally.
pub fn push_bool_attr(fragment: &mut Fragment, name: &str, value: bool) {
    fragment.set_attr(name, bool_str(value));
}

/// Emits a defaulted boolean attribute only when it differs from the
/// declared default.
pub fn push_bool_attr_unless(fragment: &mut Fragment, name: &str, value: bool, default: bool) {
    if value != default {
        push_bool_attr(fragment, name, value);
    }
}

/// Emits an optional boolean attribute, omitting it entirely when absent.
pub fn push_opt_bool_attr(fragment: &mut Fragment, name: &str, value: Option<bool>) {
    if let Some(present) = value {
        push_bool_attr(fragment, name, present);
    }
}

/// Emits a nested record as a child element.
pub fn push_child<T: XmlRecord>(fragment: &mut Fragment, record: &T) {
    fragment.add_child(record.encode());
}

/// Emits an optional nested record, omitting the element entirely when
/// absent.
pub fn push_opt_child<T: XmlRecord>(fragment: &mut Fragment, record: Option<&T>) {
    if let Some(present) = record {
        push_child(fragment, present);
    }
}

/// Emits an ordered list of nested records in declaration order.
pub fn push_child_list<T: XmlRecord>(fragment: &mut Fragment, records: &[T]) {
    for record in records {
        push_child(fragment, record);
    }
}

/// Emits an ordered list grouped under a wrapper tag, omitting the wrapper
/// entirely when the list is empty.
pub fn push_wrapped_list<T: XmlRecord>(fragment: &mut Fragment, wrapper: &str, records: &[T]) {
    if records.is_empty() {
        return;
    }
    let mut inner = Fragment::new(wrapper);
    push_child_list(&mut inner, records);
    fragment.add_child(inner);
}

/// Emits a text-content child element.
pub fn push_text_child(fragment: &mut Fragment, tag: &str, text: &str) {
    fragment.add_child(Fragment::new(tag).with_text(text));
}

/// Emits an optional text-content child, omitting the element entirely when
/// absent.
pub fn push_opt_text_child(fragment: &mut Fragment, tag: &str, text: Option<&str>) {
    if let Some(present) = text {
        push_text_child(fragment, tag, present);
    }
}

/// Emits one text-content child per item, in order.
pub fn push_text_child_list(fragment: &mut Fragment, tag: &str, items: &[String]) {
    for item in items {
        push_text_child(fragment, tag, item);
    }
}
