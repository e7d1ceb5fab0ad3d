//! Directory objects returned by lookup and search operations.
//!
//! A directory search response holds one ordered list mixing several entry
//! kinds; [`DirectoryEntry`] is the tagged union over those kinds, with
//! decode dispatching on the wire tag name.

use super::attrs::Attr;
use crate::bind::{
    BindError, FieldPath, Validate, XmlRecord, decode, encode, require_nonempty, validate_items,
};
use crate::xml::Fragment;

/// A provisioned account, with its attribute bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    name: String,
    id: String,
    attrs: Vec<Attr>,
}

impl AccountInfo {
    /// Creates an account entry.
    #[must_use]
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            attrs: Vec::new(),
        }
    }

    /// Adds one attribute pair.
    #[must_use]
    pub fn with_attr(mut self, attr: Attr) -> Self {
        self.attrs.push(attr);
        self
    }

    /// Replaces the attribute list.
    #[must_use]
    pub fn with_attrs(mut self, attrs: Vec<Attr>) -> Self {
        self.attrs = attrs;
        self
    }

    /// The account's primary address.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The account's immutable id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The attribute bag, in wire order.
    #[must_use]
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }
}

impl XmlRecord for AccountInfo {
    const TAG: &'static str = "account";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            name: decode::req_attr(fragment, "name")?,
            id: decode::req_attr(fragment, "id")?,
            attrs: decode::child_list(fragment, "a")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG)
            .with_attr("name", &self.name)
            .with_attr("id", &self.id);
        encode::push_child_list(&mut fragment, &self.attrs);
        fragment
    }
}

impl Validate for AccountInfo {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("name", &self.name)?;
        require_nonempty("id", &self.id)?;
        validate_items("a", &self.attrs)
    }
}

/// A provisioned domain, with its attribute bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainInfo {
    name: String,
    id: String,
    attrs: Vec<Attr>,
}

impl DomainInfo {
    /// Creates a domain entry.
    #[must_use]
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            attrs: Vec::new(),
        }
    }

    /// Adds one attribute pair.
    #[must_use]
    pub fn with_attr(mut self, attr: Attr) -> Self {
        self.attrs.push(attr);
        self
    }

    /// The domain name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The domain's immutable id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The attribute bag, in wire order.
    #[must_use]
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }
}

impl XmlRecord for DomainInfo {
    const TAG: &'static str = "domain";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            name: decode::req_attr(fragment, "name")?,
            id: decode::req_attr(fragment, "id")?,
            attrs: decode::child_list(fragment, "a")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG)
            .with_attr("name", &self.name)
            .with_attr("id", &self.id);
        encode::push_child_list(&mut fragment, &self.attrs);
        fragment
    }
}

impl Validate for DomainInfo {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("name", &self.name)?;
        require_nonempty("id", &self.id)?;
        validate_items("a", &self.attrs)
    }
}

/// A class of service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CosInfo {
    name: String,
    id: String,
    is_default_cos: bool,
    attrs: Vec<Attr>,
}

impl CosInfo {
    /// Creates a class-of-service entry.
    #[must_use]
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            is_default_cos: false,
            attrs: Vec::new(),
        }
    }

    /// Marks this class of service as the directory default.
    #[must_use]
    pub const fn with_default_cos(mut self, is_default: bool) -> Self {
        self.is_default_cos = is_default;
        self
    }

    /// Adds one attribute pair.
    #[must_use]
    pub fn with_attr(mut self, attr: Attr) -> Self {
        self.attrs.push(attr);
        self
    }

    /// The class-of-service name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The class-of-service id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether this is the directory default (wire default: `false`).
    #[must_use]
    pub const fn is_default_cos(&self) -> bool {
        self.is_default_cos
    }

    /// The attribute bag, in wire order.
    #[must_use]
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }
}

impl XmlRecord for CosInfo {
    const TAG: &'static str = "cos";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            name: decode::req_attr(fragment, "name")?,
            id: decode::req_attr(fragment, "id")?,
            is_default_cos: decode::bool_attr_or(fragment, "isDefaultCos", false)?,
            attrs: decode::child_list(fragment, "a")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG)
            .with_attr("name", &self.name)
            .with_attr("id", &self.id);
        encode::push_bool_attr_unless(&mut fragment, "isDefaultCos", self.is_default_cos, false);
        encode::push_child_list(&mut fragment, &self.attrs);
        fragment
    }
}

impl Validate for CosInfo {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("name", &self.name)?;
        require_nonempty("id", &self.id)?;
        validate_items("a", &self.attrs)
    }
}

/// A distribution list and its member addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionListInfo {
    name: String,
    id: String,
    dynamic: bool,
    members: Vec<String>,
}

impl DistributionListInfo {
    /// Creates a distribution-list entry.
    #[must_use]
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            dynamic: false,
            members: Vec::new(),
        }
    }

    /// Marks the list as dynamic (membership computed from a query).
    #[must_use]
    pub const fn with_dynamic(mut self, dynamic: bool) -> Self {
        self.dynamic = dynamic;
        self
    }

    /// Adds one member address.
    #[must_use]
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }

    /// The list address.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The list's immutable id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether membership is query-derived (wire default: `false`).
    #[must_use]
    pub const fn dynamic(&self) -> bool {
        self.dynamic
    }

    /// Member addresses, in wire order.
    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }
}

impl XmlRecord for DistributionListInfo {
    const TAG: &'static str = "dl";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            name: decode::req_attr(fragment, "name")?,
            id: decode::req_attr(fragment, "id")?,
            dynamic: decode::bool_attr_or(fragment, "dynamic", false)?,
            members: decode::text_child_list(fragment, "dlm"),
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG)
            .with_attr("name", &self.name)
            .with_attr("id", &self.id);
        encode::push_bool_attr_unless(&mut fragment, "dynamic", self.dynamic, false);
        encode::push_text_child_list(&mut fragment, "dlm", &self.members);
        fragment
    }
}

impl Validate for DistributionListInfo {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("name", &self.name)?;
        require_nonempty("id", &self.id)
    }
}

/// An alias pointing at a target directory object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasInfo {
    name: String,
    id: String,
    target_name: String,
}

impl AliasInfo {
    /// Creates an alias entry.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        target_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            target_name: target_name.into(),
        }
    }

    /// The alias address.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The alias's immutable id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The address of the object the alias points at.
    #[must_use]
    pub fn target_name(&self) -> &str {
        &self.target_name
    }
}

impl XmlRecord for AliasInfo {
    const TAG: &'static str = "alias";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            name: decode::req_attr(fragment, "name")?,
            id: decode::req_attr(fragment, "id")?,
            target_name: decode::req_attr(fragment, "targetName")?,
        })
    }

    fn encode(&self) -> Fragment {
        Fragment::new(Self::TAG)
            .with_attr("name", &self.name)
            .with_attr("id", &self.id)
            .with_attr("targetName", &self.target_name)
    }
}

impl Validate for AliasInfo {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("name", &self.name)?;
        require_nonempty("id", &self.id)?;
        require_nonempty("targetName", &self.target_name)
    }
}

/// One entry of a mixed directory-search result list.
///
/// The union is closed: an unknown tag inside the entry list is a
/// [`BindError::TypeMismatch`], not a silently skipped element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryEntry {
    /// An account entry.
    Account(AccountInfo),
    /// A domain entry.
    Domain(DomainInfo),
    /// A class-of-service entry.
    Cos(CosInfo),
    /// A distribution-list entry.
    DistributionList(DistributionListInfo),
    /// An alias entry.
    Alias(AliasInfo),
}

impl DirectoryEntry {
    /// Decodes every child of `parent` as one ordered, mixed entry list,
    /// dispatching each child on its wire tag name.
    ///
    /// # Errors
    ///
    /// [`BindError::TypeMismatch`] at `field[index]` for a tag outside the
    /// union; variant decode failures propagate with `field[index]`
    /// prepended to their path.
    pub fn decode_list(parent: &Fragment, field: &'static str) -> Result<Vec<Self>, BindError> {
        parent
            .children()
            .iter()
            .enumerate()
            .map(|(index, child)| {
                Self::decode_variant(child).map_err(|e| e.within_item(field, index))
            })
            .collect()
    }

    /// Dispatches one child on its tag. The unknown-tag error carries an
    /// empty path so `decode_list` can anchor it at `field[index]`.
    fn decode_variant(fragment: &Fragment) -> Result<Self, BindError> {
        match fragment.name() {
            AccountInfo::TAG => AccountInfo::decode(fragment).map(Self::Account),
            DomainInfo::TAG => DomainInfo::decode(fragment).map(Self::Domain),
            CosInfo::TAG => CosInfo::decode(fragment).map(Self::Cos),
            DistributionListInfo::TAG => {
                DistributionListInfo::decode(fragment).map(Self::DistributionList)
            }
            AliasInfo::TAG => AliasInfo::decode(fragment).map(Self::Alias),
            other => Err(BindError::TypeMismatch {
                path: FieldPath::default(),
                expected: "account | domain | cos | dl | alias",
                value: other.to_owned(),
            }),
        }
    }

    /// Encodes this entry under its variant's own tag.
    #[must_use]
    pub fn encode_tagged(&self) -> Fragment {
        match self {
            Self::Account(info) => info.encode(),
            Self::Domain(info) => info.encode(),
            Self::Cos(info) => info.encode(),
            Self::DistributionList(info) => info.encode(),
            Self::Alias(info) => info.encode(),
        }
    }

    /// This entry as an account, if it is one.
    #[must_use]
    pub const fn as_account(&self) -> Option<&AccountInfo> {
        match self {
            Self::Account(info) => Some(info),
            _ => None,
        }
    }

    /// This entry as a domain, if it is one.
    #[must_use]
    pub const fn as_domain(&self) -> Option<&DomainInfo> {
        match self {
            Self::Domain(info) => Some(info),
            _ => None,
        }
    }

    /// This entry as a class of service, if it is one.
    #[must_use]
    pub const fn as_cos(&self) -> Option<&CosInfo> {
        match self {
            Self::Cos(info) => Some(info),
            _ => None,
        }
    }

    /// This entry as a distribution list, if it is one.
    #[must_use]
    pub const fn as_distribution_list(&self) -> Option<&DistributionListInfo> {
        match self {
            Self::DistributionList(info) => Some(info),
            _ => None,
        }
    }

    /// This entry as an alias, if it is one.
    #[must_use]
    pub const fn as_alias(&self) -> Option<&AliasInfo> {
        match self {
            Self::Alias(info) => Some(info),
            _ => None,
        }
    }
}

impl Validate for DirectoryEntry {
    fn validate(&self) -> Result<(), BindError> {
        match self {
            Self::Account(info) => info.validate(),
            Self::Domain(info) => info.validate(),
            Self::Cos(info) => info.validate(),
            Self::DistributionList(info) => info.validate(),
            Self::Alias(info) => info.validate(),
        }
    }
}
