//! Unit tests for the ABQ device-config messages.

use rstest::rstest;

use crate::admin::message::config::{AbqConfigRequest, AbqConfigResponse, ConfigEntry, ConfigOp};
use crate::bind::{BindError, Validate, XmlRecord};
use crate::xml::Fragment;

#[rstest]
#[case(ConfigOp::Get, "get")]
#[case(ConfigOp::Add, "add")]
#[case(ConfigOp::Modify, "modify")]
#[case(ConfigOp::Delete, "delete")]
fn config_op_wire_spellings_round_trip(#[case] op: ConfigOp, #[case] wire: &str) {
    assert_eq!(op.as_str(), wire);
    assert_eq!(ConfigOp::from_wire(wire), Some(op));
}

#[test]
fn decode_applies_append_default_at_decode_time() {
    let fragment = Fragment::new("AbqConfigRequest")
        .with_attr("op", "add")
        .with_attr("configName", "foo");

    let request = AbqConfigRequest::decode(&fragment).expect("decodes");

    assert_eq!(request.op(), ConfigOp::Add);
    assert_eq!(request.config_name(), "foo");
    assert_eq!(request.config_value(), None);
    assert_eq!(request.config_desc(), None);
    assert!(!request.config_append());
}

#[test]
fn encode_omits_absent_optionals_and_default_append() {
    let fragment = AbqConfigRequest::new(ConfigOp::Add, "foo").encode();

    assert_eq!(fragment.attr("op"), Some("add"));
    assert_eq!(fragment.attr("configName"), Some("foo"));
    assert_eq!(fragment.attrs().len(), 2);
}

#[test]
fn missing_config_name_is_reported_by_name() {
    let fragment = Fragment::new("AbqConfigRequest").with_attr("op", "get");

    let err = AbqConfigRequest::decode(&fragment).expect_err("configName is required");

    assert_eq!(err.to_string(), "configName: missing required field");
}

#[test]
fn out_of_set_op_is_rejected_with_raw_value() {
    let fragment = Fragment::new("AbqConfigRequest")
        .with_attr("op", "frobnicate")
        .with_attr("configName", "foo");

    let err = AbqConfigRequest::decode(&fragment).expect_err("op set is closed");

    assert_eq!(err, BindError::unknown_value("op", "frobnicate"));
}

#[test]
fn populated_request_round_trips() {
    let request = AbqConfigRequest::new(ConfigOp::Modify, "allowList")
        .with_value("device-123")
        .with_description("allowed device ids")
        .with_append(true);

    let decoded = AbqConfigRequest::decode(&request.encode()).expect("decodes");

    assert_eq!(decoded, request);
    assert_eq!(request.encode().attr("configAppend"), Some("1"));
}

#[test]
fn validate_rejects_empty_config_name() {
    let request = AbqConfigRequest::new(ConfigOp::Get, "");

    let err = request.validate().expect_err("empty name is invalid");

    assert_eq!(err, BindError::missing("configName"));
}

#[test]
fn response_preserves_config_entry_order() {
    let response = AbqConfigResponse::new()
        .with_config(ConfigEntry::new("allowList").with_value("a"))
        .with_config(ConfigEntry::new("blockList").with_value("b"))
        .with_config(ConfigEntry::new("quarantineList"));

    let decoded = AbqConfigResponse::decode(&response.encode()).expect("decodes");

    let names: Vec<&str> = decoded.configs().iter().map(ConfigEntry::name).collect();
    assert_eq!(names, vec!["allowList", "blockList", "quarantineList"]);
}

#[test]
fn response_list_error_carries_failing_index() {
    let fragment = Fragment::new("AbqConfigResponse")
        .with_child(Fragment::new("config").with_attr("name", "allowList"))
        .with_child(Fragment::new("config"));

    let err = AbqConfigResponse::decode(&fragment).expect_err("second entry has no name");

    assert_eq!(err.to_string(), "config[1].name: missing required field");
}
