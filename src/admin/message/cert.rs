//! Certificate management messages.

use std::fmt;

use crate::admin::types::CertInfo;
use crate::bind::{
    BindError, Validate, XmlRecord, decode, encode, require_nonempty, validate_items,
};
use crate::xml::Fragment;

/// The service a certificate request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertType {
    /// Every certificate-bearing service on the server.
    All,
    /// The MTA (SMTP) service.
    Mta,
    /// The directory service.
    Ldap,
    /// The mailbox HTTP service.
    Mailboxd,
    /// The reverse proxy.
    Proxy,
}

impl CertType {
    /// The wire spelling of this certificate target.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Mta => "mta",
            Self::Ldap => "ldap",
            Self::Mailboxd => "mailboxd",
            Self::Proxy => "proxy",
        }
    }

    /// Parses a wire value; `None` for anything outside the closed set.
    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "all" => Some(Self::All),
            "mta" => Some(Self::Mta),
            "ldap" => Some(Self::Ldap),
            "mailboxd" => Some(Self::Mailboxd),
            "proxy" => Some(Self::Proxy),
            _ => None,
        }
    }
}

impl fmt::Display for CertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request reading the certificates installed on a server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetCertRequest {
    server: String,
    cert_type: CertType,
}

impl GetCertRequest {
    /// Creates a request for the given server and target service.
    #[must_use]
    pub fn new(server: impl Into<String>, cert_type: CertType) -> Self {
        Self {
            server: server.into(),
            cert_type,
        }
    }

    /// The target server id.
    #[must_use]
    pub fn server(&self) -> &str {
        &self.server
    }

    /// The target service.
    #[must_use]
    pub const fn cert_type(&self) -> CertType {
        self.cert_type
    }
}

impl XmlRecord for GetCertRequest {
    const TAG: &'static str = "GetCertRequest";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            server: decode::req_attr(fragment, "server")?,
            cert_type: decode::req_enum_attr(fragment, "type", CertType::from_wire)?,
        })
    }

    fn encode(&self) -> Fragment {
        Fragment::new(Self::TAG)
            .with_attr("server", &self.server)
            .with_attr("type", self.cert_type.as_str())
    }
}

impl Validate for GetCertRequest {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("server", &self.server)
    }
}

/// Response listing the matched certificates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetCertResponse {
    certs: Vec<CertInfo>,
}

impl GetCertResponse {
    /// Creates an empty response.
    #[must_use]
    pub const fn new() -> Self {
        Self { certs: Vec::new() }
    }

    /// Adds one certificate record.
    #[must_use]
    pub fn with_cert(mut self, cert: CertInfo) -> Self {
        self.certs.push(cert);
        self
    }

    /// The certificates, in wire order.
    #[must_use]
    pub fn certs(&self) -> &[CertInfo] {
        &self.certs
    }
}

impl XmlRecord for GetCertResponse {
    const TAG: &'static str = "GetCertResponse";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            certs: decode::child_list(fragment, "cert")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_child_list(&mut fragment, &self.certs);
        fragment
    }
}

impl Validate for GetCertResponse {
    fn validate(&self) -> Result<(), BindError> {
        validate_items("cert", &self.certs)
    }
}

/// Request deploying the staged certificate to a server's services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCertRequest {
    server: String,
    cert_type: CertType,
    allow_self_signed: bool,
}

impl InstallCertRequest {
    /// Creates a request for the given server and target service.
    #[must_use]
    pub fn new(server: impl Into<String>, cert_type: CertType) -> Self {
        Self {
            server: server.into(),
            cert_type,
            allow_self_signed: false,
        }
    }

    /// Permits installing a self-signed certificate.
    #[must_use]
    pub const fn with_allow_self_signed(mut self, allow: bool) -> Self {
        self.allow_self_signed = allow;
        self
    }

    /// The target server id.
    #[must_use]
    pub fn server(&self) -> &str {
        &self.server
    }

    /// The target service.
    #[must_use]
    pub const fn cert_type(&self) -> CertType {
        self.cert_type
    }

    /// Whether self-signed certificates are accepted (wire default:
    /// `false`).
    #[must_use]
    pub const fn allow_self_signed(&self) -> bool {
        self.allow_self_signed
    }
}

impl XmlRecord for InstallCertRequest {
    const TAG: &'static str = "InstallCertRequest";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            server: decode::req_attr(fragment, "server")?,
            cert_type: decode::req_enum_attr(fragment, "type", CertType::from_wire)?,
            allow_self_signed: decode::bool_attr_or(fragment, "allowSelfSigned", false)?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG)
            .with_attr("server", &self.server)
            .with_attr("type", self.cert_type.as_str());
        encode::push_bool_attr_unless(
            &mut fragment,
            "allowSelfSigned",
            self.allow_self_signed,
            false,
        );
        fragment
    }
}

impl Validate for InstallCertRequest {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("server", &self.server)
    }
}

/// Response acknowledging an install, optionally with a progress note.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InstallCertResponse {
    message: Option<String>,
}

impl InstallCertResponse {
    /// Creates an empty acknowledgement.
    #[must_use]
    pub const fn new() -> Self {
        Self { message: None }
    }

    /// Attaches a progress note.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The progress note, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl XmlRecord for InstallCertResponse {
    const TAG: &'static str = "InstallCertResponse";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            message: decode::opt_text_child(fragment, "message"),
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_opt_text_child(&mut fragment, "message", self.message.as_deref());
        fragment
    }
}

impl Validate for InstallCertResponse {
    fn validate(&self) -> Result<(), BindError> {
        Ok(())
    }
}
