//! Unit tests for mailbox backup messages.

use rstest::rstest;

use crate::admin::message::backup::{
    BackupAccount, BackupLabel, BackupMethod, BackupRequest, BackupResponse, BackupSpec,
};
use crate::bind::XmlRecord;
use crate::xml::Fragment;

#[rstest]
#[case(BackupMethod::Full, "full")]
#[case(BackupMethod::Incremental, "incremental")]
#[case(BackupMethod::Abort, "abort")]
fn backup_method_wire_spellings_round_trip(#[case] method: BackupMethod, #[case] wire: &str) {
    assert_eq!(method.as_str(), wire);
    assert_eq!(BackupMethod::from_wire(wire), Some(method));
}

#[test]
fn populated_request_round_trips() {
    let spec = BackupSpec::new(BackupMethod::Incremental)
        .with_target("/opt/backup")
        .with_label("nightly-2026-08-28")
        .with_sync(false)
        .with_zip(true)
        .with_account(BackupAccount::new("a@example.com"))
        .with_account(BackupAccount::new("b@example.com"));
    let request = BackupRequest::new(spec);

    let decoded = BackupRequest::decode(&request.encode()).expect("decodes");

    assert_eq!(decoded, request);
}

#[test]
fn explicit_sync_false_is_emitted_not_omitted() {
    let spec = BackupSpec::new(BackupMethod::Full).with_sync(false);

    let fragment = spec.encode();

    assert_eq!(fragment.attr("sync"), Some("0"));
    assert_eq!(fragment.attr("zip"), None);
}

#[test]
fn nested_list_failure_reports_the_full_path() {
    let backup = Fragment::new("backup")
        .with_attr("method", "full")
        .with_child(Fragment::new("account").with_attr("name", "a@example.com"))
        .with_child(Fragment::new("account").with_attr("name", "b@example.com"))
        .with_child(Fragment::new("account"));
    let fragment = Fragment::new("BackupRequest").with_child(backup);

    let err = BackupRequest::decode(&fragment).expect_err("third account has no name");

    assert_eq!(
        err.to_string(),
        "backup.account[2].name: missing required field"
    );
}

#[test]
fn request_without_backup_element_is_missing() {
    let fragment = Fragment::new("BackupRequest");

    let err = BackupRequest::decode(&fragment).expect_err("backup element is required");

    assert_eq!(err.to_string(), "backup: missing required field");
}

#[test]
fn account_order_is_preserved_across_the_wire() {
    let spec = BackupSpec::new(BackupMethod::Full)
        .with_account(BackupAccount::new("c@example.com"))
        .with_account(BackupAccount::new("a@example.com"))
        .with_account(BackupAccount::new("b@example.com"));

    let decoded = BackupSpec::decode(&spec.encode()).expect("decodes");

    let names: Vec<&str> = decoded.accounts().iter().map(BackupAccount::name).collect();
    assert_eq!(names, vec!["c@example.com", "a@example.com", "b@example.com"]);
}

#[test]
fn response_round_trips_the_run_label() {
    let response = BackupResponse::new(BackupLabel::new("full-20260828.120000.000"));

    let decoded = BackupResponse::decode(&response.encode()).expect("decodes");

    assert_eq!(decoded.backup().label(), "full-20260828.120000.000");
}
