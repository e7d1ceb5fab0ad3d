//! The in-memory tagged tree representing one wire-level document fragment.

use serde::{Deserialize, Serialize};

/// One wire-level document fragment: a tag name, an ordered attribute list,
/// an ordered list of child fragments, and optional text content.
///
/// Attribute and child order is preserved exactly as read, and equality is
/// structural over all four parts. The binder relies on this to make
/// `decode(encode(x)) == x` a value-level statement rather than a byte-level
/// one.
///
/// # Examples
///
/// ```
/// use soapstone::xml::Fragment;
///
/// let fragment = Fragment::new("volume")
///     .with_attr("id", "1")
///     .with_attr("name", "primary1");
/// assert_eq!(fragment.attr("id"), Some("1"));
/// assert_eq!(fragment.attr("missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// The tag name.
    name: String,

    /// Ordered `(name, value)` attribute pairs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    attrs: Vec<(String, String)>,

    /// Ordered child fragments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Fragment>,

    /// Text content, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl Fragment {
    /// Creates an empty fragment with the given tag name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Returns the tag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of the named attribute, if present.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns all attributes in wire order.
    #[must_use]
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Sets an attribute, replacing any existing value for the same name.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let key = name.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(existing, _)| *existing == key) {
            slot.1 = value.into();
        } else {
            self.attrs.push((key, value.into()));
        }
    }

    /// Builder form of [`Fragment::set_attr`].
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Returns all child fragments in wire order.
    #[must_use]
    pub fn children(&self) -> &[Fragment] {
        &self.children
    }

    /// Returns the first child with the given tag name, if any.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Fragment> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Returns all children with the given tag name, in wire order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Fragment> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Appends a child fragment.
    pub fn add_child(&mut self, child: Fragment) {
        self.children.push(child);
    }

    /// Builder form of [`Fragment::add_child`].
    #[must_use]
    pub fn with_child(mut self, child: Fragment) -> Self {
        self.add_child(child);
        self
    }

    /// Returns the text content, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replaces the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Builder form of [`Fragment::set_text`].
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Appends to the text content, used by the reader when text is split
    /// across parser events.
    pub(crate) fn append_text(&mut self, more: &str) {
        match &mut self.text {
            Some(existing) => existing.push_str(more),
            None => self.text = Some(more.to_owned()),
        }
    }

    /// Expresses this fragment as an equivalent JSON tree.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialisation fails, which cannot
    /// happen for well-formed fragments but is propagated rather than hidden.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Reconstructs a fragment from its JSON tree expression.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the value does not match the
    /// fragment shape produced by [`Fragment::to_json`].
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}
