//! Mobile-sync device records.

use std::fmt;

use crate::bind::{BindError, Validate, XmlRecord, decode, encode, require_nonempty};
use crate::xml::Fragment;

/// Lifecycle state of a synchronising device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatus {
    /// Seen but not yet provisioned.
    NeedProvision,
    /// Provisioned and syncing normally.
    Ok,
    /// Sync suspended by an administrator.
    Suspended,
    /// A remote wipe has been requested.
    WipeRequested,
    /// The remote wipe completed.
    WipeCompleted,
}

impl DeviceStatus {
    /// The wire spelling of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NeedProvision => "needProvision",
            Self::Ok => "ok",
            Self::Suspended => "suspended",
            Self::WipeRequested => "wipeRequested",
            Self::WipeCompleted => "wipeCompleted",
        }
    }

    /// Parses a wire value; `None` for anything outside the closed set.
    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "needProvision" => Some(Self::NeedProvision),
            "ok" => Some(Self::Ok),
            "suspended" => Some(Self::Suspended),
            "wipeRequested" => Some(Self::WipeRequested),
            "wipeCompleted" => Some(Self::WipeCompleted),
            _ => None,
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One synchronising device and its sync state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    id: String,
    device_type: Option<String>,
    ua: Option<String>,
    protocol: Option<String>,
    provisionable: bool,
    status: Option<DeviceStatus>,
    first_req_received: Option<i64>,
    last_policy_update: Option<i64>,
}

impl DeviceInfo {
    /// Creates a device record for the given device id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            device_type: None,
            ua: None,
            protocol: None,
            provisionable: false,
            status: None,
            first_req_received: None,
            last_policy_update: None,
        }
    }

    /// Sets the device model class reported by the client.
    #[must_use]
    pub fn with_device_type(mut self, device_type: impl Into<String>) -> Self {
        self.device_type = Some(device_type.into());
        self
    }

    /// Sets the user-agent string reported by the client.
    #[must_use]
    pub fn with_ua(mut self, ua: impl Into<String>) -> Self {
        self.ua = Some(ua.into());
        self
    }

    /// Sets the sync protocol version.
    #[must_use]
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// Marks whether the device accepts provisioning policy.
    #[must_use]
    pub const fn with_provisionable(mut self, provisionable: bool) -> Self {
        self.provisionable = provisionable;
        self
    }

    /// Sets the device's lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: DeviceStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the epoch-millisecond timestamp of the first sync request.
    #[must_use]
    pub const fn with_first_req_received(mut self, timestamp: i64) -> Self {
        self.first_req_received = Some(timestamp);
        self
    }

    /// Sets the epoch-millisecond timestamp of the last policy push.
    #[must_use]
    pub const fn with_last_policy_update(mut self, timestamp: i64) -> Self {
        self.last_policy_update = Some(timestamp);
        self
    }

    /// The device id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The device model class, if reported.
    #[must_use]
    pub fn device_type(&self) -> Option<&str> {
        self.device_type.as_deref()
    }

    /// The user-agent string, if reported.
    #[must_use]
    pub fn ua(&self) -> Option<&str> {
        self.ua.as_deref()
    }

    /// The sync protocol version, if reported.
    #[must_use]
    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }

    /// Whether the device accepts provisioning policy (wire default:
    /// `false`).
    #[must_use]
    pub const fn provisionable(&self) -> bool {
        self.provisionable
    }

    /// The lifecycle status, if known.
    #[must_use]
    pub const fn status(&self) -> Option<DeviceStatus> {
        self.status
    }

    /// Epoch milliseconds of the first sync request, if recorded.
    #[must_use]
    pub const fn first_req_received(&self) -> Option<i64> {
        self.first_req_received
    }

    /// Epoch milliseconds of the last policy push, if recorded.
    #[must_use]
    pub const fn last_policy_update(&self) -> Option<i64> {
        self.last_policy_update
    }
}

impl XmlRecord for DeviceInfo {
    const TAG: &'static str = "device";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            id: decode::req_attr(fragment, "id")?,
            device_type: decode::opt_attr(fragment, "type"),
            ua: decode::opt_attr(fragment, "ua"),
            protocol: decode::opt_attr(fragment, "protocol"),
            provisionable: decode::bool_attr_or(fragment, "provisionable", false)?,
            status: decode::opt_enum_attr(fragment, "status", DeviceStatus::from_wire)?,
            first_req_received: decode::opt_int_attr(fragment, "firstReqReceived")?,
            last_policy_update: decode::opt_int_attr(fragment, "lastPolicyUpdate")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG).with_attr("id", &self.id);
        encode::push_opt_attr(&mut fragment, "type", self.device_type.as_deref());
        encode::push_opt_attr(&mut fragment, "ua", self.ua.as_deref());
        encode::push_opt_attr(&mut fragment, "protocol", self.protocol.as_deref());
        encode::push_bool_attr_unless(&mut fragment, "provisionable", self.provisionable, false);
        if let Some(status) = self.status {
            fragment.set_attr("status", status.as_str());
        }
        encode::push_opt_int_attr(&mut fragment, "firstReqReceived", self.first_req_received);
        encode::push_opt_int_attr(&mut fragment, "lastPolicyUpdate", self.last_policy_update);
        fragment
    }
}

impl Validate for DeviceInfo {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("id", &self.id)
    }
}

/// Identifies one device by id within a device-management request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSelector {
    id: String,
}

impl DeviceSelector {
    /// Creates a selector for the given device id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The device id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl XmlRecord for DeviceSelector {
    const TAG: &'static str = "device";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            id: decode::req_attr(fragment, "id")?,
        })
    }

    fn encode(&self) -> Fragment {
        Fragment::new(Self::TAG).with_attr("id", &self.id)
    }
}

impl Validate for DeviceSelector {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("id", &self.id)
    }
}
