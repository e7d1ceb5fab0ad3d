//! Selectors identifying a target entity by one of several key types.
//!
//! A selector is a nested element whose `by` attribute names the key type
//! and whose text content carries the key itself, e.g.
//! `<account by="name">user@example.com</account>`.

use std::fmt;

use crate::bind::{BindError, Validate, XmlRecord, decode, require_nonempty};
use crate::xml::Fragment;

/// Key types accepted by [`AccountSelector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountBy {
    /// The account's immutable id.
    Id,
    /// The account's primary address.
    Name,
    /// A foreign-principal mapping.
    ForeignPrincipal,
    /// A Kerberos 5 principal.
    Krb5Principal,
}

impl AccountBy {
    /// The wire spelling of this key type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::ForeignPrincipal => "foreignPrincipal",
            Self::Krb5Principal => "krb5Principal",
        }
    }

    /// Parses a wire value; `None` for anything outside the closed set.
    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "foreignPrincipal" => Some(Self::ForeignPrincipal),
            "krb5Principal" => Some(Self::Krb5Principal),
            _ => None,
        }
    }
}

impl fmt::Display for AccountBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one account by a typed key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSelector {
    by: AccountBy,
    key: String,
}

impl AccountSelector {
    /// Creates a selector for the given key type and key.
    #[must_use]
    pub fn new(by: AccountBy, key: impl Into<String>) -> Self {
        Self { by, key: key.into() }
    }

    /// The key type.
    #[must_use]
    pub const fn by(&self) -> AccountBy {
        self.by
    }

    /// The key value.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl XmlRecord for AccountSelector {
    const TAG: &'static str = "account";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            by: decode::req_enum_attr(fragment, "by", AccountBy::from_wire)?,
            key: decode::req_text(fragment, "account")?,
        })
    }

    fn encode(&self) -> Fragment {
        Fragment::new(Self::TAG)
            .with_attr("by", self.by.as_str())
            .with_text(&self.key)
    }
}

impl Validate for AccountSelector {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("account", &self.key)
    }
}

/// Key types accepted by [`DomainSelector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainBy {
    /// The domain's immutable id.
    Id,
    /// The domain name.
    Name,
    /// A virtual hostname mapped onto the domain.
    VirtualHostname,
}

impl DomainBy {
    /// The wire spelling of this key type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::VirtualHostname => "virtualHostname",
        }
    }

    /// Parses a wire value; `None` for anything outside the closed set.
    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "virtualHostname" => Some(Self::VirtualHostname),
            _ => None,
        }
    }
}

impl fmt::Display for DomainBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one domain by a typed key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSelector {
    by: DomainBy,
    key: String,
}

impl DomainSelector {
    /// Creates a selector for the given key type and key.
    #[must_use]
    pub fn new(by: DomainBy, key: impl Into<String>) -> Self {
        Self { by, key: key.into() }
    }

    /// The key type.
    #[must_use]
    pub const fn by(&self) -> DomainBy {
        self.by
    }

    /// The key value.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl XmlRecord for DomainSelector {
    const TAG: &'static str = "domain";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            by: decode::req_enum_attr(fragment, "by", DomainBy::from_wire)?,
            key: decode::req_text(fragment, "domain")?,
        })
    }

    fn encode(&self) -> Fragment {
        Fragment::new(Self::TAG)
            .with_attr("by", self.by.as_str())
            .with_text(&self.key)
    }
}

impl Validate for DomainSelector {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("domain", &self.key)
    }
}

/// Key types accepted by [`ServerSelector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerBy {
    /// The server's immutable id.
    Id,
    /// The server name.
    Name,
    /// The hostname the mailbox service runs on.
    ServiceHostname,
}

impl ServerBy {
    /// The wire spelling of this key type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::ServiceHostname => "serviceHostname",
        }
    }

    /// Parses a wire value; `None` for anything outside the closed set.
    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "serviceHostname" => Some(Self::ServiceHostname),
            _ => None,
        }
    }
}

impl fmt::Display for ServerBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one server by a typed key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSelector {
    by: ServerBy,
    key: String,
}

impl ServerSelector {
    /// Creates a selector for the given key type and key.
    #[must_use]
    pub fn new(by: ServerBy, key: impl Into<String>) -> Self {
        Self { by, key: key.into() }
    }

    /// The key type.
    #[must_use]
    pub const fn by(&self) -> ServerBy {
        self.by
    }

    /// The key value.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl XmlRecord for ServerSelector {
    const TAG: &'static str = "server";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            by: decode::req_enum_attr(fragment, "by", ServerBy::from_wire)?,
            key: decode::req_text(fragment, "server")?,
        })
    }

    fn encode(&self) -> Fragment {
        Fragment::new(Self::TAG)
            .with_attr("by", self.by.as_str())
            .with_text(&self.key)
    }
}

impl Validate for ServerSelector {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("server", &self.key)
    }
}

/// Key types accepted by [`CosSelector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CosBy {
    /// The class-of-service id.
    Id,
    /// The class-of-service name.
    Name,
}

impl CosBy {
    /// The wire spelling of this key type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
        }
    }

    /// Parses a wire value; `None` for anything outside the closed set.
    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            _ => None,
        }
    }
}

impl fmt::Display for CosBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one class of service by a typed key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CosSelector {
    by: CosBy,
    key: String,
}

impl CosSelector {
    /// Creates a selector for the given key type and key.
    #[must_use]
    pub fn new(by: CosBy, key: impl Into<String>) -> Self {
        Self { by, key: key.into() }
    }

    /// The key type.
    #[must_use]
    pub const fn by(&self) -> CosBy {
        self.by
    }

    /// The key value.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl XmlRecord for CosSelector {
    const TAG: &'static str = "cos";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            by: decode::req_enum_attr(fragment, "by", CosBy::from_wire)?,
            key: decode::req_text(fragment, "cos")?,
        })
    }

    fn encode(&self) -> Fragment {
        Fragment::new(Self::TAG)
            .with_attr("by", self.by.as_str())
            .with_text(&self.key)
    }
}

impl Validate for CosSelector {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("cos", &self.key)
    }
}
