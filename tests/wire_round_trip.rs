//! Behavioural integration tests for the full wire cycle.
//!
//! These tests exercise end-to-end scenarios from XML text through the
//! fragment tree into typed records and back, verifying that a document a
//! peer sends decodes into the same record its re-encoding produces.

use soapstone::admin::ADMIN_NAMESPACE;
use soapstone::admin::message::backup::{BackupAccount, BackupRequest};
use soapstone::admin::message::config::{AbqConfigRequest, ConfigOp};
use soapstone::admin::message::search::SearchDirectoryResponse;
use soapstone::bind::XmlRecord;
use soapstone::xml::{parse_document, write_document};

// ============================================================================
// Scenario: A peer's config request survives a full document cycle
// ============================================================================

/// When a peer submits an ABQ config request document, decoding it, writing
/// it back out, and decoding the written text again must yield the same
/// record, with decode-time defaults filled in.
#[test]
fn config_request_survives_a_full_document_cycle() {
    // Arrange
    let xml = concat!(
        r#"<AbqConfigRequest xmlns="urn:mailAdmin" op="modify" configName="allowList" "#,
        r#"configValue="androidc259148960" configAppend="1"/>"#,
    );

    // Act
    let fragment = parse_document(xml).expect("document parses");
    let request = AbqConfigRequest::decode(&fragment).expect("request decodes");

    let written = write_document(&request.encode(), ADMIN_NAMESPACE).expect("document writes");
    let reparsed = parse_document(&written).expect("written document parses");
    let redecoded = AbqConfigRequest::decode(&reparsed).expect("written document decodes");

    // Assert
    assert_eq!(request.op(), ConfigOp::Modify);
    assert_eq!(request.config_name(), "allowList");
    assert!(request.config_append());
    assert_eq!(redecoded, request);
}

// ============================================================================
// Scenario: Decode-time defaults do not reappear in the written document
// ============================================================================

/// A request that never mentions `configAppend` decodes with the default
/// applied, and writing the record back produces a document that still
/// leaves the attribute out.
#[test]
fn defaults_are_observable_in_the_record_but_absent_on_the_wire() {
    // Arrange
    let xml = r#"<AbqConfigRequest xmlns="urn:mailAdmin" op="add" configName="foo"/>"#;

    // Act
    let fragment = parse_document(xml).expect("document parses");
    let request = AbqConfigRequest::decode(&fragment).expect("request decodes");
    let written = write_document(&request.encode(), ADMIN_NAMESPACE).expect("document writes");

    // Assert
    assert!(!request.config_append());
    assert!(!written.contains("configAppend"));
    assert!(written.starts_with(r#"<AbqConfigRequest xmlns="urn:mailAdmin""#));
}

// ============================================================================
// Scenario: A nested backup request round-trips with its account list
// ============================================================================

/// A backup request carrying an ordered account list keeps that order
/// through parse, decode, encode, and write.
#[test]
fn nested_backup_request_round_trips_in_order() {
    // Arrange
    let xml = concat!(
        r#"<BackupRequest xmlns="urn:mailAdmin">"#,
        r#"<backup method="full" zip="1">"#,
        r#"<account name="a@example.com"/>"#,
        r#"<account name="b@example.com"/>"#,
        r#"<account name="c@example.com"/>"#,
        r#"</backup></BackupRequest>"#,
    );

    // Act
    let fragment = parse_document(xml).expect("document parses");
    let request = BackupRequest::decode(&fragment).expect("request decodes");

    let written = write_document(&request.encode(), ADMIN_NAMESPACE).expect("document writes");
    let redecoded =
        BackupRequest::decode(&parse_document(&written).expect("written document parses"))
            .expect("written document decodes");

    // Assert
    let names: Vec<&str> = request
        .backup()
        .accounts()
        .iter()
        .map(BackupAccount::name)
        .collect();
    assert_eq!(names, vec!["a@example.com", "b@example.com", "c@example.com"]);
    assert_eq!(redecoded, request);
}

// ============================================================================
// Scenario: A decode failure inside a document names the nested path
// ============================================================================

/// When the third selected account of a backup request lacks its name, the
/// reported error reads from the record root down to the failing field.
#[test]
fn nested_decode_failure_names_the_full_path() {
    // Arrange
    let xml = concat!(
        r#"<BackupRequest xmlns="urn:mailAdmin"><backup method="full">"#,
        r#"<account name="a@example.com"/>"#,
        r#"<account name="b@example.com"/>"#,
        r#"<account/>"#,
        r#"</backup></BackupRequest>"#,
    );

    // Act
    let fragment = parse_document(xml).expect("document parses");
    let err = BackupRequest::decode(&fragment).expect_err("third account has no name");

    // Assert
    assert_eq!(
        err.to_string(),
        "backup.account[2].name: missing required field"
    );
}

// ============================================================================
// Scenario: A mixed search response document decodes its entry union
// ============================================================================

/// A search response mixing entry kinds decodes each child into its
/// variant, preserving wire order across the union.
#[test]
fn mixed_search_response_document_decodes_the_union() {
    // Arrange
    let xml = concat!(
        r#"<SearchDirectoryResponse xmlns="urn:mailAdmin" more="1" searchTotal="250">"#,
        r#"<account name="user@example.com" id="a-1">"#,
        r#"<a n="zimbraMailHost">mbs1.example.com</a>"#,
        r#"</account>"#,
        r#"<domain name="example.com" id="d-1"/>"#,
        r#"<dl name="team@example.com" id="dl-1" dynamic="1">"#,
        r#"<dlm>user@example.com</dlm><dlm>other@example.com</dlm>"#,
        r#"</dl>"#,
        r#"</SearchDirectoryResponse>"#,
    );

    // Act
    let fragment = parse_document(xml).expect("document parses");
    let response = SearchDirectoryResponse::decode(&fragment).expect("response decodes");

    let written = write_document(&response.encode(), ADMIN_NAMESPACE).expect("document writes");
    let redecoded =
        SearchDirectoryResponse::decode(&parse_document(&written).expect("written document parses"))
            .expect("written document decodes");

    // Assert
    assert!(response.more());
    assert_eq!(response.search_total(), 250);
    assert_eq!(response.entries().len(), 3);
    assert_eq!(response.accounts().count(), 1);
    let members: Vec<&[String]> = response
        .distribution_lists()
        .map(|dl| dl.members())
        .collect();
    assert_eq!(
        members.first().map(|m| m.len()),
        Some(2),
        "both dlm children decode"
    );
    assert_eq!(redecoded, response);
}

// ============================================================================
// Scenario: Escaped attribute and text content survive the cycle
// ============================================================================

/// Entity-escaped characters in attributes and text content are unescaped
/// on parse and re-escaped on write, so the record value never carries
/// entities.
#[test]
fn escaped_content_survives_the_document_cycle() {
    // Arrange
    let xml = concat!(
        r#"<AbqConfigRequest xmlns="urn:mailAdmin" op="add" "#,
        r#"configName="devices &amp; tablets" configDesc="a &lt;temporary&gt; list"/>"#,
    );

    // Act
    let fragment = parse_document(xml).expect("document parses");
    let request = AbqConfigRequest::decode(&fragment).expect("request decodes");

    let written = write_document(&request.encode(), ADMIN_NAMESPACE).expect("document writes");
    let redecoded = AbqConfigRequest::decode(&parse_document(&written).expect("written document parses"))
        .expect("written document decodes");

    // Assert
    assert_eq!(request.config_name(), "devices & tablets");
    assert_eq!(request.config_desc(), Some("a <temporary> list"));
    assert_eq!(redecoded, request);
}
