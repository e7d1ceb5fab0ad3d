//! Hierarchical storage management (HSM) messages.
//!
//! HSM moves aged blobs from primary to secondary volumes. Starting a run
//! and querying it are separate operations; the request records here are
//! empty, which exercises the degenerate all-optional schema.

use crate::bind::{BindError, Validate, XmlRecord, decode, encode, validate_child};
use crate::xml::Fragment;

/// Request starting an HSM run on the receiving server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HsmRequest;

impl HsmRequest {
    /// Creates the request.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl XmlRecord for HsmRequest {
    const TAG: &'static str = "HsmRequest";

    fn decode(_fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self)
    }

    fn encode(&self) -> Fragment {
        Fragment::new(Self::TAG)
    }
}

impl Validate for HsmRequest {
    fn validate(&self) -> Result<(), BindError> {
        Ok(())
    }
}

/// Empty acknowledgement that an HSM run was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HsmResponse;

impl HsmResponse {
    /// Creates the acknowledgement.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl XmlRecord for HsmResponse {
    const TAG: &'static str = "HsmResponse";

    fn decode(_fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self)
    }

    fn encode(&self) -> Fragment {
        Fragment::new(Self::TAG)
    }
}

impl Validate for HsmResponse {
    fn validate(&self) -> Result<(), BindError> {
        Ok(())
    }
}

/// Request querying the state of the current or last HSM run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetHsmStatusRequest;

impl GetHsmStatusRequest {
    /// Creates the request.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl XmlRecord for GetHsmStatusRequest {
    const TAG: &'static str = "GetHsmStatusRequest";

    fn decode(_fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self)
    }

    fn encode(&self) -> Fragment {
        Fragment::new(Self::TAG)
    }
}

impl Validate for GetHsmStatusRequest {
    fn validate(&self) -> Result<(), BindError> {
        Ok(())
    }
}

/// The state of an HSM run, nested inside [`GetHsmStatusResponse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HsmStatus {
    running: bool,
    aborted: bool,
    start_date: Option<i64>,
    end_date: Option<i64>,
    num_blobs_moved: Option<i64>,
    num_mailboxes: Option<i32>,
    error: Option<String>,
}

impl HsmStatus {
    /// Creates a status record.
    #[must_use]
    pub const fn new(running: bool) -> Self {
        Self {
            running,
            aborted: false,
            start_date: None,
            end_date: None,
            num_blobs_moved: None,
            num_mailboxes: None,
            error: None,
        }
    }

    /// Marks the run as administratively aborted.
    #[must_use]
    pub const fn with_aborted(mut self, aborted: bool) -> Self {
        self.aborted = aborted;
        self
    }

    /// Sets the epoch-millisecond start time.
    #[must_use]
    pub const fn with_start_date(mut self, start_date: i64) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Sets the epoch-millisecond end time.
    #[must_use]
    pub const fn with_end_date(mut self, end_date: i64) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Sets the number of blobs moved so far.
    #[must_use]
    pub const fn with_num_blobs_moved(mut self, count: i64) -> Self {
        self.num_blobs_moved = Some(count);
        self
    }

    /// Sets the number of mailboxes processed so far.
    #[must_use]
    pub const fn with_num_mailboxes(mut self, count: i32) -> Self {
        self.num_mailboxes = Some(count);
        self
    }

    /// Records the error that ended the run.
    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Whether a run is in progress.
    #[must_use]
    pub const fn running(&self) -> bool {
        self.running
    }

    /// Whether the run was aborted (wire default: `false`).
    #[must_use]
    pub const fn aborted(&self) -> bool {
        self.aborted
    }

    /// Epoch milliseconds the run started, if known.
    #[must_use]
    pub const fn start_date(&self) -> Option<i64> {
        self.start_date
    }

    /// Epoch milliseconds the run ended, if it has.
    #[must_use]
    pub const fn end_date(&self) -> Option<i64> {
        self.end_date
    }

    /// Blobs moved so far, if reported.
    #[must_use]
    pub const fn num_blobs_moved(&self) -> Option<i64> {
        self.num_blobs_moved
    }

    /// Mailboxes processed so far, if reported.
    #[must_use]
    pub const fn num_mailboxes(&self) -> Option<i32> {
        self.num_mailboxes
    }

    /// The terminating error, if the run failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl XmlRecord for HsmStatus {
    const TAG: &'static str = "hsm";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            running: decode::req_bool_attr(fragment, "running")?,
            aborted: decode::bool_attr_or(fragment, "aborted", false)?,
            start_date: decode::opt_int_attr(fragment, "startDate")?,
            end_date: decode::opt_int_attr(fragment, "endDate")?,
            num_blobs_moved: decode::opt_int_attr(fragment, "numBlobsMoved")?,
            num_mailboxes: decode::opt_int_attr(fragment, "numMailboxes")?,
            error: decode::opt_attr(fragment, "error"),
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_bool_attr(&mut fragment, "running", self.running);
        encode::push_bool_attr_unless(&mut fragment, "aborted", self.aborted, false);
        encode::push_opt_int_attr(&mut fragment, "startDate", self.start_date);
        encode::push_opt_int_attr(&mut fragment, "endDate", self.end_date);
        encode::push_opt_int_attr(&mut fragment, "numBlobsMoved", self.num_blobs_moved);
        encode::push_opt_int_attr(&mut fragment, "numMailboxes", self.num_mailboxes);
        encode::push_opt_attr(&mut fragment, "error", self.error.as_deref());
        fragment
    }
}

impl Validate for HsmStatus {
    fn validate(&self) -> Result<(), BindError> {
        Ok(())
    }
}

/// Response carrying the state of the current or last HSM run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetHsmStatusResponse {
    hsm: HsmStatus,
}

impl GetHsmStatusResponse {
    /// Creates a response around the given status record.
    #[must_use]
    pub const fn new(hsm: HsmStatus) -> Self {
        Self { hsm }
    }

    /// The status record.
    #[must_use]
    pub const fn hsm(&self) -> &HsmStatus {
        &self.hsm
    }
}

impl XmlRecord for GetHsmStatusResponse {
    const TAG: &'static str = "GetHsmStatusResponse";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            hsm: decode::req_child(fragment, "hsm")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_child(&mut fragment, &self.hsm);
        fragment
    }
}

impl Validate for GetHsmStatusResponse {
    fn validate(&self) -> Result<(), BindError> {
        validate_child("hsm", &self.hsm)
    }
}
