//! Allow/block/quarantine (ABQ) device-table configuration messages.

use std::fmt;

use crate::bind::{
    BindError, Validate, XmlRecord, decode, encode, require_nonempty, validate_items,
};
use crate::xml::Fragment;

/// The operation an [`AbqConfigRequest`] performs on the config table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOp {
    /// Read the named entry.
    Get,
    /// Create the named entry.
    Add,
    /// Replace (or, with append, extend) the named entry.
    Modify,
    /// Remove the named entry.
    Delete,
}

impl ConfigOp {
    /// The wire spelling of this operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Add => "add",
            Self::Modify => "modify",
            Self::Delete => "delete",
        }
    }

    /// Parses a wire value; `None` for anything outside the closed set.
    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "get" => Some(Self::Get),
            "add" => Some(Self::Add),
            "modify" => Some(Self::Modify),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request manipulating one entry of the ABQ device-config table.
///
/// `configAppend` defaults to `false` and the default is applied at decode
/// time: a decoded request never observes the attribute as absent, and
/// re-encoding emits it only when `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbqConfigRequest {
    op: ConfigOp,
    config_name: String,
    config_value: Option<String>,
    config_desc: Option<String>,
    config_append: bool,
}

impl AbqConfigRequest {
    /// Creates a request from its required fields.
    #[must_use]
    pub fn new(op: ConfigOp, config_name: impl Into<String>) -> Self {
        Self {
            op,
            config_name: config_name.into(),
            config_value: None,
            config_desc: None,
            config_append: false,
        }
    }

    /// Sets the value written by add/modify operations.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.config_value = Some(value.into());
        self
    }

    /// Sets the human-readable entry description.
    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.config_desc = Some(desc.into());
        self
    }

    /// Makes a modify operation append to the entry instead of replacing it.
    #[must_use]
    pub const fn with_append(mut self, append: bool) -> Self {
        self.config_append = append;
        self
    }

    /// The requested operation.
    #[must_use]
    pub const fn op(&self) -> ConfigOp {
        self.op
    }

    /// The config entry name.
    #[must_use]
    pub fn config_name(&self) -> &str {
        &self.config_name
    }

    /// The value to write, if any.
    #[must_use]
    pub fn config_value(&self) -> Option<&str> {
        self.config_value.as_deref()
    }

    /// The entry description, if any.
    #[must_use]
    pub fn config_desc(&self) -> Option<&str> {
        self.config_desc.as_deref()
    }

    /// Whether a modify appends rather than replaces (wire default:
    /// `false`).
    #[must_use]
    pub const fn config_append(&self) -> bool {
        self.config_append
    }
}

impl XmlRecord for AbqConfigRequest {
    const TAG: &'static str = "AbqConfigRequest";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            op: decode::req_enum_attr(fragment, "op", ConfigOp::from_wire)?,
            config_name: decode::req_attr(fragment, "configName")?,
            config_value: decode::opt_attr(fragment, "configValue"),
            config_desc: decode::opt_attr(fragment, "configDesc"),
            config_append: decode::bool_attr_or(fragment, "configAppend", false)?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        fragment.set_attr("op", self.op.as_str());
        fragment.set_attr("configName", &self.config_name);
        encode::push_opt_attr(&mut fragment, "configValue", self.config_value.as_deref());
        encode::push_opt_attr(&mut fragment, "configDesc", self.config_desc.as_deref());
        encode::push_bool_attr_unless(&mut fragment, "configAppend", self.config_append, false);
        fragment
    }
}

impl Validate for AbqConfigRequest {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("configName", &self.config_name)
    }
}

/// One entry of the config table, as returned by a get operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    name: String,
    value: Option<String>,
    desc: Option<String>,
}

impl ConfigEntry {
    /// Creates an entry from its required name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            desc: None,
        }
    }

    /// Sets the entry value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the entry description.
    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// The entry name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The entry value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The entry description, if any.
    #[must_use]
    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }
}

impl XmlRecord for ConfigEntry {
    const TAG: &'static str = "config";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            name: decode::req_attr(fragment, "name")?,
            value: decode::opt_attr(fragment, "value"),
            desc: decode::opt_attr(fragment, "desc"),
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG).with_attr("name", &self.name);
        encode::push_opt_attr(&mut fragment, "value", self.value.as_deref());
        encode::push_opt_attr(&mut fragment, "desc", self.desc.as_deref());
        fragment
    }
}

impl Validate for ConfigEntry {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("name", &self.name)
    }
}

/// Response carrying the config entries a get operation matched.
///
/// Add, modify, and delete operations return an empty entry list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AbqConfigResponse {
    configs: Vec<ConfigEntry>,
}

impl AbqConfigResponse {
    /// Creates an empty response.
    #[must_use]
    pub const fn new() -> Self {
        Self { configs: Vec::new() }
    }

    /// Adds one config entry.
    #[must_use]
    pub fn with_config(mut self, entry: ConfigEntry) -> Self {
        self.configs.push(entry);
        self
    }

    /// The matched entries, in wire order.
    #[must_use]
    pub fn configs(&self) -> &[ConfigEntry] {
        &self.configs
    }
}

impl XmlRecord for AbqConfigResponse {
    const TAG: &'static str = "AbqConfigResponse";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            configs: decode::child_list(fragment, "config")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_child_list(&mut fragment, &self.configs);
        fragment
    }
}

impl Validate for AbqConfigResponse {
    fn validate(&self) -> Result<(), BindError> {
        validate_items("config", &self.configs)
    }
}
