//! Unit tests for account provisioning messages.

use crate::admin::message::account::{
    CreateAccountRequest, CreateAccountResponse, DeleteAccountRequest, DeleteAccountResponse,
    GetAccountRequest, ModifyAccountRequest,
};
use crate::admin::types::{AccountBy, AccountInfo, AccountSelector, Attr};
use crate::bind::{Validate, XmlRecord};
use crate::xml::Fragment;

#[test]
fn create_request_round_trips_with_password_and_attrs() {
    let request = CreateAccountRequest::new("user@example.com")
        .with_password("s3cret")
        .with_attr(Attr::new("displayName", "User"))
        .with_attr(Attr::new("zimbraMailQuota", "1048576"));

    let decoded = CreateAccountRequest::decode(&request.encode()).expect("decodes");

    assert_eq!(decoded, request);
}

#[test]
fn create_request_without_name_is_missing() {
    let fragment = Fragment::new("CreateAccountRequest").with_attr("password", "x");

    let err = CreateAccountRequest::decode(&fragment).expect_err("name is required");

    assert_eq!(err.to_string(), "name: missing required field");
}

#[test]
fn attr_bag_preserves_repeated_keys_in_order() {
    let request = ModifyAccountRequest::new("9e8f-11")
        .with_attr(Attr::new("zimbraMailAlias", "a@example.com"))
        .with_attr(Attr::new("zimbraMailAlias", "b@example.com"));

    let decoded = ModifyAccountRequest::decode(&request.encode()).expect("decodes");

    let values: Vec<&str> = decoded.attrs().iter().map(Attr::value).collect();
    assert_eq!(values, vec!["a@example.com", "b@example.com"]);
}

#[test]
fn empty_attr_value_round_trips_as_empty_string() {
    let fragment = Fragment::new("a").with_attr("n", "zimbraMailStatus");

    let attr = Attr::decode(&fragment).expect("decodes");

    assert_eq!(attr.value(), "");
    assert_eq!(attr.encode().text(), None);
}

#[test]
fn get_request_requires_the_account_selector() {
    let fragment = Fragment::new("GetAccountRequest");

    let err = GetAccountRequest::decode(&fragment).expect_err("selector is required");

    assert_eq!(err.to_string(), "account: missing required field");
}

#[test]
fn get_request_keeps_apply_cos_tristate() {
    let selector = AccountSelector::new(AccountBy::Name, "user@example.com");
    let request = GetAccountRequest::new(selector);

    let fragment = request.encode();
    assert_eq!(fragment.attr("applyCos"), None);

    let decoded = GetAccountRequest::decode(&fragment).expect("decodes");
    assert_eq!(decoded.apply_cos(), None);

    let flagged = decoded.with_apply_cos(false).encode();
    assert_eq!(flagged.attr("applyCos"), Some("0"));
}

#[test]
fn create_response_round_trips_the_account_entry() {
    let account = AccountInfo::new("user@example.com", "9e8f-11")
        .with_attr(Attr::new("zimbraMailHost", "mbs1"));
    let response = CreateAccountResponse::new(account);

    let decoded = CreateAccountResponse::decode(&response.encode()).expect("decodes");

    assert_eq!(decoded, response);
}

#[test]
fn delete_round_trips_and_acknowledges_empty() {
    let request = DeleteAccountRequest::new("9e8f-11");
    assert_eq!(DeleteAccountRequest::decode(&request.encode()), Ok(request));

    let response = DeleteAccountResponse::new();
    let fragment = response.encode();
    assert!(fragment.attrs().is_empty());
    assert!(fragment.children().is_empty());
    assert_eq!(DeleteAccountResponse::decode(&fragment), Ok(response));
}

#[test]
fn modify_validate_rejects_attr_without_key() {
    let request = ModifyAccountRequest::new("9e8f-11").with_attr(Attr::new("", "orphan"));

    let err = request.validate().expect_err("attr key is required");

    assert_eq!(err.to_string(), "a[0].n: missing required field");
}
