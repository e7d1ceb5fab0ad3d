//! Account provisioning messages.

use crate::admin::types::{AccountInfo, AccountSelector, Attr};
use crate::bind::{
    BindError, Validate, XmlRecord, decode, encode, require_nonempty, validate_child,
    validate_items,
};
use crate::xml::Fragment;

/// Request creating one account with an initial attribute bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountRequest {
    name: String,
    password: Option<String>,
    attrs: Vec<Attr>,
}

impl CreateAccountRequest {
    /// Creates a request for the given account address.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: None,
            attrs: Vec::new(),
        }
    }

    /// Sets the initial password.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Adds one initial attribute pair.
    #[must_use]
    pub fn with_attr(mut self, attr: Attr) -> Self {
        self.attrs.push(attr);
        self
    }

    /// The account address to create.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The initial password, if any.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// The initial attribute bag, in wire order.
    #[must_use]
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }
}

impl XmlRecord for CreateAccountRequest {
    const TAG: &'static str = "CreateAccountRequest";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            name: decode::req_attr(fragment, "name")?,
            password: decode::opt_attr(fragment, "password"),
            attrs: decode::child_list(fragment, "a")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG).with_attr("name", &self.name);
        encode::push_opt_attr(&mut fragment, "password", self.password.as_deref());
        encode::push_child_list(&mut fragment, &self.attrs);
        fragment
    }
}

impl Validate for CreateAccountRequest {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("name", &self.name)?;
        validate_items("a", &self.attrs)
    }
}

/// Response carrying the account just created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountResponse {
    account: AccountInfo,
}

impl CreateAccountResponse {
    /// Creates a response for the given account.
    #[must_use]
    pub const fn new(account: AccountInfo) -> Self {
        Self { account }
    }

    /// The created account.
    #[must_use]
    pub const fn account(&self) -> &AccountInfo {
        &self.account
    }
}

impl XmlRecord for CreateAccountResponse {
    const TAG: &'static str = "CreateAccountResponse";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            account: decode::req_child(fragment, "account")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_child(&mut fragment, &self.account);
        fragment
    }
}

impl Validate for CreateAccountResponse {
    fn validate(&self) -> Result<(), BindError> {
        validate_child("account", &self.account)
    }
}

/// Request fetching one account by selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAccountRequest {
    account: AccountSelector,
    apply_cos: Option<bool>,
    attrs: Option<String>,
}

impl GetAccountRequest {
    /// Creates a request for the given selector.
    #[must_use]
    pub const fn new(account: AccountSelector) -> Self {
        Self {
            account,
            apply_cos: None,
            attrs: None,
        }
    }

    /// Controls whether class-of-service values are flattened into the
    /// returned attribute bag.
    #[must_use]
    pub const fn with_apply_cos(mut self, apply_cos: bool) -> Self {
        self.apply_cos = Some(apply_cos);
        self
    }

    /// Restricts the response to a comma-separated list of attribute names.
    #[must_use]
    pub fn with_attrs(mut self, attrs: impl Into<String>) -> Self {
        self.attrs = Some(attrs.into());
        self
    }

    /// The target account selector.
    #[must_use]
    pub const fn account(&self) -> &AccountSelector {
        &self.account
    }

    /// The class-of-service flattening flag, if set.
    #[must_use]
    pub const fn apply_cos(&self) -> Option<bool> {
        self.apply_cos
    }

    /// The requested attribute-name list, if set.
    #[must_use]
    pub fn attrs(&self) -> Option<&str> {
        self.attrs.as_deref()
    }
}

impl XmlRecord for GetAccountRequest {
    const TAG: &'static str = "GetAccountRequest";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            account: decode::req_child(fragment, "account")?,
            apply_cos: decode::opt_bool_attr(fragment, "applyCos")?,
            attrs: decode::opt_attr(fragment, "attrs"),
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_opt_bool_attr(&mut fragment, "applyCos", self.apply_cos);
        encode::push_opt_attr(&mut fragment, "attrs", self.attrs.as_deref());
        encode::push_child(&mut fragment, &self.account);
        fragment
    }
}

impl Validate for GetAccountRequest {
    fn validate(&self) -> Result<(), BindError> {
        validate_child("account", &self.account)
    }
}

/// Response carrying the fetched account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAccountResponse {
    account: AccountInfo,
}

impl GetAccountResponse {
    /// Creates a response for the given account.
    #[must_use]
    pub const fn new(account: AccountInfo) -> Self {
        Self { account }
    }

    /// The fetched account.
    #[must_use]
    pub const fn account(&self) -> &AccountInfo {
        &self.account
    }
}

impl XmlRecord for GetAccountResponse {
    const TAG: &'static str = "GetAccountResponse";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            account: decode::req_child(fragment, "account")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_child(&mut fragment, &self.account);
        fragment
    }
}

impl Validate for GetAccountResponse {
    fn validate(&self) -> Result<(), BindError> {
        validate_child("account", &self.account)
    }
}

/// Request replacing attributes on one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyAccountRequest {
    id: String,
    attrs: Vec<Attr>,
}

impl ModifyAccountRequest {
    /// Creates a request for the given account id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attrs: Vec::new(),
        }
    }

    /// Adds one attribute pair to write.
    #[must_use]
    pub fn with_attr(mut self, attr: Attr) -> Self {
        self.attrs.push(attr);
        self
    }

    /// The target account id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The attribute pairs to write, in wire order.
    #[must_use]
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }
}

impl XmlRecord for ModifyAccountRequest {
    const TAG: &'static str = "ModifyAccountRequest";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            id: decode::req_attr(fragment, "id")?,
            attrs: decode::child_list(fragment, "a")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG).with_attr("id", &self.id);
        encode::push_child_list(&mut fragment, &self.attrs);
        fragment
    }
}

impl Validate for ModifyAccountRequest {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("id", &self.id)?;
        validate_items("a", &self.attrs)
    }
}

/// Response carrying the account after modification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyAccountResponse {
    account: AccountInfo,
}

impl ModifyAccountResponse {
    /// Creates a response for the given account.
    #[must_use]
    pub const fn new(account: AccountInfo) -> Self {
        Self { account }
    }

    /// The modified account.
    #[must_use]
    pub const fn account(&self) -> &AccountInfo {
        &self.account
    }
}

impl XmlRecord for ModifyAccountResponse {
    const TAG: &'static str = "ModifyAccountResponse";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            account: decode::req_child(fragment, "account")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_child(&mut fragment, &self.account);
        fragment
    }
}

impl Validate for ModifyAccountResponse {
    fn validate(&self) -> Result<(), BindError> {
        validate_child("account", &self.account)
    }
}

/// Request deleting one account by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAccountRequest {
    id: String,
}

impl DeleteAccountRequest {
    /// Creates a request for the given account id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The target account id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl XmlRecord for DeleteAccountRequest {
    const TAG: &'static str = "DeleteAccountRequest";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            id: decode::req_attr(fragment, "id")?,
        })
    }

    fn encode(&self) -> Fragment {
        Fragment::new(Self::TAG).with_attr("id", &self.id)
    }
}

impl Validate for DeleteAccountRequest {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("id", &self.id)
    }
}

/// Empty acknowledgement of an account deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeleteAccountResponse;

impl DeleteAccountResponse {
    /// Creates the acknowledgement.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl XmlRecord for DeleteAccountResponse {
    const TAG: &'static str = "DeleteAccountResponse";

    fn decode(_fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self)
    }

    fn encode(&self) -> Fragment {
        Fragment::new(Self::TAG)
    }
}

impl Validate for DeleteAccountResponse {
    fn validate(&self) -> Result<(), BindError> {
        Ok(())
    }
}
