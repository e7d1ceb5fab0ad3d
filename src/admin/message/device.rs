//! Mobile-sync device management messages.
//!
//! Each management request names the owning account by selector and, where
//! it targets a single device, a device selector alongside it.

use crate::admin::types::{AccountSelector, DeviceInfo, DeviceSelector};
use crate::bind::{BindError, Validate, XmlRecord, decode, encode, validate_child, validate_items};
use crate::xml::Fragment;

/// Request listing the sync state of an account's devices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetDeviceStatusRequest {
    account: AccountSelector,
    device: Option<DeviceSelector>,
}

impl GetDeviceStatusRequest {
    /// Creates a request covering every device of the account.
    #[must_use]
    pub const fn new(account: AccountSelector) -> Self {
        Self {
            account,
            device: None,
        }
    }

    /// Restricts the request to a single device.
    #[must_use]
    pub fn with_device(mut self, device: DeviceSelector) -> Self {
        self.device = Some(device);
        self
    }

    /// The owning account.
    #[must_use]
    pub const fn account(&self) -> &AccountSelector {
        &self.account
    }

    /// The single targeted device, if restricted.
    #[must_use]
    pub const fn device(&self) -> Option<&DeviceSelector> {
        self.device.as_ref()
    }
}

impl XmlRecord for GetDeviceStatusRequest {
    const TAG: &'static str = "GetDeviceStatusRequest";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            account: decode::req_child(fragment, "account")?,
            device: decode::opt_child(fragment, "device")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_child(&mut fragment, &self.account);
        encode::push_opt_child(&mut fragment, self.device.as_ref());
        fragment
    }
}

impl Validate for GetDeviceStatusRequest {
    fn validate(&self) -> Result<(), BindError> {
        validate_child("account", &self.account)?;
        self.device
            .as_ref()
            .map_or(Ok(()), |device| validate_child("device", device))
    }
}

/// Response listing device sync states, one `device` element per device.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetDeviceStatusResponse {
    devices: Vec<DeviceInfo>,
}

impl GetDeviceStatusResponse {
    /// Creates an empty response.
    #[must_use]
    pub const fn new() -> Self {
        Self { devices: Vec::new() }
    }

    /// Adds one device record.
    #[must_use]
    pub fn with_device(mut self, device: DeviceInfo) -> Self {
        self.devices.push(device);
        self
    }

    /// The device records, in wire order.
    #[must_use]
    pub fn devices(&self) -> &[DeviceInfo] {
        &self.devices
    }
}

impl XmlRecord for GetDeviceStatusResponse {
    const TAG: &'static str = "GetDeviceStatusResponse";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            devices: decode::child_list(fragment, "device")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_child_list(&mut fragment, &self.devices);
        fragment
    }
}

impl Validate for GetDeviceStatusResponse {
    fn validate(&self) -> Result<(), BindError> {
        validate_items("device", &self.devices)
    }
}

/// Request detaching one device from its account's sync state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveDeviceRequest {
    account: AccountSelector,
    device: DeviceSelector,
}

impl RemoveDeviceRequest {
    /// Creates a request for the given account and device.
    #[must_use]
    pub const fn new(account: AccountSelector, device: DeviceSelector) -> Self {
        Self { account, device }
    }

    /// The owning account.
    #[must_use]
    pub const fn account(&self) -> &AccountSelector {
        &self.account
    }

    /// The targeted device.
    #[must_use]
    pub const fn device(&self) -> &DeviceSelector {
        &self.device
    }
}

impl XmlRecord for RemoveDeviceRequest {
    const TAG: &'static str = "RemoveDeviceRequest";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            account: decode::req_child(fragment, "account")?,
            device: decode::req_child(fragment, "device")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_child(&mut fragment, &self.account);
        encode::push_child(&mut fragment, &self.device);
        fragment
    }
}

impl Validate for RemoveDeviceRequest {
    fn validate(&self) -> Result<(), BindError> {
        validate_child("account", &self.account)?;
        validate_child("device", &self.device)
    }
}

/// Empty acknowledgement of a device removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RemoveDeviceResponse;

impl RemoveDeviceResponse {
    /// Creates the acknowledgement.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl XmlRecord for RemoveDeviceResponse {
    const TAG: &'static str = "RemoveDeviceResponse";

    fn decode(_fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self)
    }

    fn encode(&self) -> Fragment {
        Fragment::new(Self::TAG)
    }
}

impl Validate for RemoveDeviceResponse {
    fn validate(&self) -> Result<(), BindError> {
        Ok(())
    }
}

/// Request suspending sync for one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspendDeviceRequest {
    account: AccountSelector,
    device: DeviceSelector,
}

impl SuspendDeviceRequest {
    /// Creates a request for the given account and device.
    #[must_use]
    pub const fn new(account: AccountSelector, device: DeviceSelector) -> Self {
        Self { account, device }
    }

    /// The owning account.
    #[must_use]
    pub const fn account(&self) -> &AccountSelector {
        &self.account
    }

    /// The targeted device.
    #[must_use]
    pub const fn device(&self) -> &DeviceSelector {
        &self.device
    }
}

impl XmlRecord for SuspendDeviceRequest {
    const TAG: &'static str = "SuspendDeviceRequest";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            account: decode::req_child(fragment, "account")?,
            device: decode::req_child(fragment, "device")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_child(&mut fragment, &self.account);
        encode::push_child(&mut fragment, &self.device);
        fragment
    }
}

impl Validate for SuspendDeviceRequest {
    fn validate(&self) -> Result<(), BindError> {
        validate_child("account", &self.account)?;
        validate_child("device", &self.device)
    }
}

/// Empty acknowledgement of a device suspension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuspendDeviceResponse;

impl SuspendDeviceResponse {
    /// Creates the acknowledgement.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl XmlRecord for SuspendDeviceResponse {
    const TAG: &'static str = "SuspendDeviceResponse";

    fn decode(_fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self)
    }

    fn encode(&self) -> Fragment {
        Fragment::new(Self::TAG)
    }
}

impl Validate for SuspendDeviceResponse {
    fn validate(&self) -> Result<(), BindError> {
        Ok(())
    }
}

/// Request resuming sync for one suspended device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDeviceRequest {
    account: AccountSelector,
    device: DeviceSelector,
}

impl ResumeDeviceRequest {
    /// Creates a request for the given account and device.
    #[must_use]
    pub const fn new(account: AccountSelector, device: DeviceSelector) -> Self {
        Self { account, device }
    }

    /// The owning account.
    #[must_use]
    pub const fn account(&self) -> &AccountSelector {
        &self.account
    }

    /// The targeted device.
    #[must_use]
    pub const fn device(&self) -> &DeviceSelector {
        &self.device
    }
}

impl XmlRecord for ResumeDeviceRequest {
    const TAG: &'static str = "ResumeDeviceRequest";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            account: decode::req_child(fragment, "account")?,
            device: decode::req_child(fragment, "device")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_child(&mut fragment, &self.account);
        encode::push_child(&mut fragment, &self.device);
        fragment
    }
}

impl Validate for ResumeDeviceRequest {
    fn validate(&self) -> Result<(), BindError> {
        validate_child("account", &self.account)?;
        validate_child("device", &self.device)
    }
}

/// Empty acknowledgement of a device resumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResumeDeviceResponse;

impl ResumeDeviceResponse {
    /// Creates the acknowledgement.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl XmlRecord for ResumeDeviceResponse {
    const TAG: &'static str = "ResumeDeviceResponse";

    fn decode(_fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self)
    }

    fn encode(&self) -> Fragment {
        Fragment::new(Self::TAG)
    }
}

impl Validate for ResumeDeviceResponse {
    fn validate(&self) -> Result<(), BindError> {
        Ok(())
    }
}
