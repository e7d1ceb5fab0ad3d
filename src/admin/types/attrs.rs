//! The universal key/value attribute pair of the admin API.

use crate::bind::{BindError, Validate, XmlRecord, decode, require_nonempty};
use crate::xml::Fragment;

/// One named attribute value, serialised as `<a n="key">value</a>`.
///
/// Directory objects (accounts, domains, classes of service) carry their
/// LDAP-style attribute bags as ordered lists of these pairs. The same key
/// may repeat for multi-valued attributes, so order is preserved and no
/// deduplication happens anywhere in the binder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    name: String,
    value: String,
}

impl Attr {
    /// Creates a key/value pair.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The attribute key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attribute value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl XmlRecord for Attr {
    const TAG: &'static str = "a";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            name: decode::req_attr(fragment, "n")?,
            // An empty element is a legitimate empty value.
            value: fragment.text().unwrap_or_default().to_owned(),
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG).with_attr("n", &self.name);
        if !self.value.is_empty() {
            fragment.set_text(&self.value);
        }
        fragment
    }
}

impl Validate for Attr {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("n", &self.name)
    }
}
