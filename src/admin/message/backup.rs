//! Mailbox backup messages.

use std::fmt;

use crate::bind::{
    BindError, Validate, XmlRecord, decode, encode, require_nonempty, validate_child,
    validate_items,
};
use crate::xml::Fragment;

/// How a backup run proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupMethod {
    /// Full snapshot of the selected mailboxes.
    Full,
    /// Delta since the previous run.
    Incremental,
    /// Abort the run in progress.
    Abort,
}

impl BackupMethod {
    /// The wire spelling of this method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Incremental => "incremental",
            Self::Abort => "abort",
        }
    }

    /// Parses a wire value; `None` for anything outside the closed set.
    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "full" => Some(Self::Full),
            "incremental" => Some(Self::Incremental),
            "abort" => Some(Self::Abort),
            _ => None,
        }
    }
}

impl fmt::Display for BackupMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One mailbox selected for backup, by account address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupAccount {
    name: String,
}

impl BackupAccount {
    /// Selects the given account address.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The account address.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl XmlRecord for BackupAccount {
    const TAG: &'static str = "account";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            name: decode::req_attr(fragment, "name")?,
        })
    }

    fn encode(&self) -> Fragment {
        Fragment::new(Self::TAG).with_attr("name", &self.name)
    }
}

impl Validate for BackupAccount {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("name", &self.name)
    }
}

/// The backup specification nested inside a [`BackupRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupSpec {
    method: BackupMethod,
    target: Option<String>,
    label: Option<String>,
    sync: Option<bool>,
    zip: bool,
    accounts: Vec<BackupAccount>,
}

impl BackupSpec {
    /// Creates a specification for the given method.
    #[must_use]
    pub fn new(method: BackupMethod) -> Self {
        Self {
            method,
            target: None,
            label: None,
            sync: None,
            zip: false,
            accounts: Vec::new(),
        }
    }

    /// Sets the target directory the backup writes into.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Sets the label identifying this run.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Runs the backup synchronously instead of in the background.
    #[must_use]
    pub const fn with_sync(mut self, sync: bool) -> Self {
        self.sync = Some(sync);
        self
    }

    /// Compresses backed-up blobs into zip archives.
    #[must_use]
    pub const fn with_zip(mut self, zip: bool) -> Self {
        self.zip = zip;
        self
    }

    /// Adds one mailbox to back up.
    #[must_use]
    pub fn with_account(mut self, account: BackupAccount) -> Self {
        self.accounts.push(account);
        self
    }

    /// The backup method.
    #[must_use]
    pub const fn method(&self) -> BackupMethod {
        self.method
    }

    /// The target directory, if set.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// The run label, if set.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The synchronous-run flag, if set.
    #[must_use]
    pub const fn sync(&self) -> Option<bool> {
        self.sync
    }

    /// Whether blobs are zipped (wire default: `false`).
    #[must_use]
    pub const fn zip(&self) -> bool {
        self.zip
    }

    /// The selected mailboxes, in wire order.
    #[must_use]
    pub fn accounts(&self) -> &[BackupAccount] {
        &self.accounts
    }
}

impl XmlRecord for BackupSpec {
    const TAG: &'static str = "backup";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            method: decode::req_enum_attr(fragment, "method", BackupMethod::from_wire)?,
            target: decode::opt_attr(fragment, "target"),
            label: decode::opt_attr(fragment, "label"),
            sync: decode::opt_bool_attr(fragment, "sync")?,
            zip: decode::bool_attr_or(fragment, "zip", false)?,
            accounts: decode::child_list(fragment, "account")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        fragment.set_attr("method", self.method.as_str());
        encode::push_opt_attr(&mut fragment, "target", self.target.as_deref());
        encode::push_opt_attr(&mut fragment, "label", self.label.as_deref());
        encode::push_opt_bool_attr(&mut fragment, "sync", self.sync);
        encode::push_bool_attr_unless(&mut fragment, "zip", self.zip, false);
        encode::push_child_list(&mut fragment, &self.accounts);
        fragment
    }
}

impl Validate for BackupSpec {
    fn validate(&self) -> Result<(), BindError> {
        validate_items("account", &self.accounts)
    }
}

/// Request starting (or aborting) a backup run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupRequest {
    backup: BackupSpec,
}

impl BackupRequest {
    /// Creates a request around the given specification.
    #[must_use]
    pub const fn new(backup: BackupSpec) -> Self {
        Self { backup }
    }

    /// The backup specification.
    #[must_use]
    pub const fn backup(&self) -> &BackupSpec {
        &self.backup
    }
}

impl XmlRecord for BackupRequest {
    const TAG: &'static str = "BackupRequest";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            backup: decode::req_child(fragment, "backup")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_child(&mut fragment, &self.backup);
        fragment
    }
}

impl Validate for BackupRequest {
    fn validate(&self) -> Result<(), BindError> {
        validate_child("backup", &self.backup)
    }
}

/// The label assigned to a started run, nested inside a [`BackupResponse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupLabel {
    label: String,
}

impl BackupLabel {
    /// Creates a label record.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }

    /// The run label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl XmlRecord for BackupLabel {
    const TAG: &'static str = "backup";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            label: decode::req_attr(fragment, "label")?,
        })
    }

    fn encode(&self) -> Fragment {
        Fragment::new(Self::TAG).with_attr("label", &self.label)
    }
}

impl Validate for BackupLabel {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("label", &self.label)
    }
}

/// Response acknowledging a started run with its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupResponse {
    backup: BackupLabel,
}

impl BackupResponse {
    /// Creates a response around the given label record.
    #[must_use]
    pub const fn new(backup: BackupLabel) -> Self {
        Self { backup }
    }

    /// The label record.
    #[must_use]
    pub const fn backup(&self) -> &BackupLabel {
        &self.backup
    }
}

impl XmlRecord for BackupResponse {
    const TAG: &'static str = "BackupResponse";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            backup: decode::req_child(fragment, "backup")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_child(&mut fragment, &self.backup);
        fragment
    }
}

impl Validate for BackupResponse {
    fn validate(&self) -> Result<(), BindError> {
        validate_child("backup", &self.backup)
    }
}
