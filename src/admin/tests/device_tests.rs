//! Unit tests for mobile-sync device messages.

use rstest::rstest;

use crate::admin::message::device::{
    GetDeviceStatusRequest, GetDeviceStatusResponse, RemoveDeviceRequest, ResumeDeviceRequest,
    SuspendDeviceRequest,
};
use crate::admin::types::{AccountBy, AccountSelector, DeviceInfo, DeviceSelector, DeviceStatus};
use crate::bind::{BindError, XmlRecord};
use crate::xml::Fragment;

#[rstest]
#[case(DeviceStatus::NeedProvision, "needProvision")]
#[case(DeviceStatus::Ok, "ok")]
#[case(DeviceStatus::Suspended, "suspended")]
#[case(DeviceStatus::WipeRequested, "wipeRequested")]
#[case(DeviceStatus::WipeCompleted, "wipeCompleted")]
fn device_status_wire_spellings_round_trip(#[case] status: DeviceStatus, #[case] wire: &str) {
    assert_eq!(status.as_str(), wire);
    assert_eq!(DeviceStatus::from_wire(wire), Some(status));
}

#[test]
fn device_info_with_only_id_applies_defaults() {
    let fragment = Fragment::new("device").with_attr("id", "androidc259148960");

    let device = DeviceInfo::decode(&fragment).expect("decodes");

    assert_eq!(device.id(), "androidc259148960");
    assert!(!device.provisionable());
    assert_eq!(device.status(), None);
    assert_eq!(device.first_req_received(), None);
}

#[test]
fn fully_populated_device_round_trips() {
    let device = DeviceInfo::new("androidc259148960")
        .with_device_type("Android")
        .with_ua("Android/14.0")
        .with_protocol("14.1")
        .with_provisionable(true)
        .with_status(DeviceStatus::Suspended)
        .with_first_req_received(1_724_800_000_000)
        .with_last_policy_update(1_724_860_000_000);

    let decoded = DeviceInfo::decode(&device.encode()).expect("decodes");

    assert_eq!(decoded, device);
}

#[test]
fn out_of_set_status_is_rejected_with_raw_value() {
    let fragment = Fragment::new("device")
        .with_attr("id", "d1")
        .with_attr("status", "retired");

    let err = DeviceInfo::decode(&fragment).expect_err("status set is closed");

    assert_eq!(err, BindError::unknown_value("status", "retired"));
}

#[test]
fn status_request_covers_all_devices_when_unrestricted() {
    let request =
        GetDeviceStatusRequest::new(AccountSelector::new(AccountBy::Name, "user@example.com"));

    let fragment = request.encode();
    assert!(fragment.child("device").is_none());

    let decoded = GetDeviceStatusRequest::decode(&fragment).expect("decodes");
    assert_eq!(decoded.device(), None);
}

#[test]
fn status_request_round_trips_with_a_device_restriction() {
    let request =
        GetDeviceStatusRequest::new(AccountSelector::new(AccountBy::Id, "9e8f-11"))
            .with_device(DeviceSelector::new("androidc259148960"));

    let decoded = GetDeviceStatusRequest::decode(&request.encode()).expect("decodes");

    assert_eq!(decoded, request);
}

#[test]
fn status_request_requires_the_account_selector() {
    let fragment =
        Fragment::new("GetDeviceStatusRequest").with_child(Fragment::new("device").with_attr("id", "d1"));

    let err = GetDeviceStatusRequest::decode(&fragment).expect_err("account is required");

    assert_eq!(err.to_string(), "account: missing required field");
}

#[test]
fn status_response_preserves_device_order() {
    let response = GetDeviceStatusResponse::new()
        .with_device(DeviceInfo::new("d2"))
        .with_device(DeviceInfo::new("d1"));

    let decoded = GetDeviceStatusResponse::decode(&response.encode()).expect("decodes");

    let ids: Vec<&str> = decoded.devices().iter().map(DeviceInfo::id).collect();
    assert_eq!(ids, vec!["d2", "d1"]);
}

#[test]
fn lifecycle_requests_round_trip() {
    let account = AccountSelector::new(AccountBy::Name, "user@example.com");
    let device = DeviceSelector::new("androidc259148960");

    let remove = RemoveDeviceRequest::new(account.clone(), device.clone());
    assert_eq!(RemoveDeviceRequest::decode(&remove.encode()), Ok(remove));

    let suspend = SuspendDeviceRequest::new(account.clone(), device.clone());
    assert_eq!(SuspendDeviceRequest::decode(&suspend.encode()), Ok(suspend));

    let resume = ResumeDeviceRequest::new(account, device);
    assert_eq!(ResumeDeviceRequest::decode(&resume.encode()), Ok(resume));
}
