//! Unit tests for hierarchical storage management messages.

use crate::admin::message::hsm::{
    GetHsmStatusRequest, GetHsmStatusResponse, HsmRequest, HsmResponse, HsmStatus,
};
use crate::bind::{BindError, XmlRecord};
use crate::xml::Fragment;

#[test]
fn start_and_status_requests_are_empty_elements() {
    assert!(HsmRequest::new().encode().attrs().is_empty());
    assert!(GetHsmStatusRequest::new().encode().children().is_empty());
    assert_eq!(HsmResponse::decode(&Fragment::new("HsmResponse")), Ok(HsmResponse::new()));
}

#[test]
fn status_requires_the_running_flag() {
    let fragment = Fragment::new("hsm");

    let err = HsmStatus::decode(&fragment).expect_err("running is required");

    assert_eq!(err, BindError::missing("running"));
}

#[test]
fn status_rejects_word_boolean_literals() {
    let fragment = Fragment::new("hsm").with_attr("running", "true");

    let err = HsmStatus::decode(&fragment).expect_err("alphabet is 1/0");

    assert_eq!(err, BindError::invalid_boolean("running", "true"));
}

#[test]
fn populated_status_round_trips() {
    let status = HsmStatus::new(true)
        .with_start_date(1_724_800_000_000)
        .with_num_blobs_moved(18_450)
        .with_num_mailboxes(12);

    let decoded = HsmStatus::decode(&status.encode()).expect("decodes");

    assert_eq!(decoded, status);
}

#[test]
fn finished_run_carries_abort_and_error_detail() {
    let status = HsmStatus::new(false)
        .with_aborted(true)
        .with_end_date(1_724_860_000_000)
        .with_error("volume store2 is full");

    let fragment = status.encode();
    assert_eq!(fragment.attr("aborted"), Some("1"));
    assert_eq!(fragment.attr("error"), Some("volume store2 is full"));

    let decoded = HsmStatus::decode(&fragment).expect("decodes");
    assert_eq!(decoded, status);
}

#[test]
fn status_response_requires_the_hsm_element() {
    let fragment = Fragment::new("GetHsmStatusResponse");

    let err = GetHsmStatusResponse::decode(&fragment).expect_err("hsm element is required");

    assert_eq!(err.to_string(), "hsm: missing required field");
}

#[test]
fn status_response_round_trips() {
    let response = GetHsmStatusResponse::new(HsmStatus::new(true).with_num_mailboxes(3));

    let decoded = GetHsmStatusResponse::decode(&response.encode()).expect("decodes");

    assert_eq!(decoded, response);
}
