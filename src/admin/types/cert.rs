//! Certificate records returned by certificate queries.

use crate::bind::{BindError, Validate, XmlRecord, decode, encode, require_nonempty};
use crate::xml::Fragment;

/// One installed certificate, with its parsed identity fields carried as
/// text-content child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertInfo {
    server: String,
    subject: Option<String>,
    issuer: Option<String>,
    not_before: Option<String>,
    not_after: Option<String>,
}

impl CertInfo {
    /// Creates a certificate record for the given server.
    #[must_use]
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            subject: None,
            issuer: None,
            not_before: None,
            not_after: None,
        }
    }

    /// Sets the certificate subject.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Sets the certificate issuer.
    #[must_use]
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Sets the validity start date.
    #[must_use]
    pub fn with_not_before(mut self, not_before: impl Into<String>) -> Self {
        self.not_before = Some(not_before.into());
        self
    }

    /// Sets the validity end date.
    #[must_use]
    pub fn with_not_after(mut self, not_after: impl Into<String>) -> Self {
        self.not_after = Some(not_after.into());
        self
    }

    /// The server the certificate is installed on.
    #[must_use]
    pub fn server(&self) -> &str {
        &self.server
    }

    /// The certificate subject, if parsed.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// The certificate issuer, if parsed.
    #[must_use]
    pub fn issuer(&self) -> Option<&str> {
        self.issuer.as_deref()
    }

    /// The validity start date, if parsed.
    #[must_use]
    pub fn not_before(&self) -> Option<&str> {
        self.not_before.as_deref()
    }

    /// The validity end date, if parsed.
    #[must_use]
    pub fn not_after(&self) -> Option<&str> {
        self.not_after.as_deref()
    }
}

impl XmlRecord for CertInfo {
    const TAG: &'static str = "cert";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            server: decode::req_attr(fragment, "server")?,
            subject: decode::opt_text_child(fragment, "subject"),
            issuer: decode::opt_text_child(fragment, "issuer"),
            not_before: decode::opt_text_child(fragment, "notBefore"),
            not_after: decode::opt_text_child(fragment, "notAfter"),
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG).with_attr("server", &self.server);
        encode::push_opt_text_child(&mut fragment, "subject", self.subject.as_deref());
        encode::push_opt_text_child(&mut fragment, "issuer", self.issuer.as_deref());
        encode::push_opt_text_child(&mut fragment, "notBefore", self.not_before.as_deref());
        encode::push_opt_text_child(&mut fragment, "notAfter", self.not_after.as_deref());
        fragment
    }
}

impl Validate for CertInfo {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("server", &self.server)
    }
}
