//! Unit tests for directory search messages and the mixed entry union.

use crate::admin::message::search::{SearchDirectoryRequest, SearchDirectoryResponse};
use crate::admin::types::{
    AccountInfo, AliasInfo, Attr, CosInfo, DirectoryEntry, DistributionListInfo, DomainInfo,
};
use crate::bind::XmlRecord;
use crate::xml::Fragment;

#[test]
fn request_defaults_apply_cos_and_sort_ascending_to_true() {
    let fragment = Fragment::new("SearchDirectoryRequest").with_attr("query", "uid=*");

    let request = SearchDirectoryRequest::decode(&fragment).expect("decodes");

    assert!(request.apply_cos());
    assert!(request.sort_ascending());
}

#[test]
fn request_emits_true_valued_defaults_only_when_overridden() {
    let request = SearchDirectoryRequest::new().with_sort_ascending(false);

    let fragment = request.encode();

    assert_eq!(fragment.attr("applyCos"), None);
    assert_eq!(fragment.attr("sortAscending"), Some("0"));
}

#[test]
fn populated_request_round_trips() {
    let request = SearchDirectoryRequest::new()
        .with_query("(objectClass=zimbraAccount)")
        .with_domain("example.com")
        .with_types("accounts,aliases")
        .with_sort_by("uid")
        .with_max_results(5000)
        .with_limit(100)
        .with_offset(200)
        .with_apply_cos(false);

    let decoded = SearchDirectoryRequest::decode(&request.encode()).expect("decodes");

    assert_eq!(decoded, request);
}

fn mixed_response_fragment() -> Fragment {
    Fragment::new("SearchDirectoryResponse")
        .with_attr("searchTotal", "5")
        .with_child(
            Fragment::new("account")
                .with_attr("name", "user@example.com")
                .with_attr("id", "a-1"),
        )
        .with_child(
            Fragment::new("dl")
                .with_attr("name", "team@example.com")
                .with_attr("id", "dl-1")
                .with_child(Fragment::new("dlm").with_text("user@example.com")),
        )
        .with_child(
            Fragment::new("domain")
                .with_attr("name", "example.com")
                .with_attr("id", "d-1"),
        )
        .with_child(
            Fragment::new("cos")
                .with_attr("name", "standard")
                .with_attr("id", "c-1")
                .with_attr("isDefaultCos", "1"),
        )
        .with_child(
            Fragment::new("alias")
                .with_attr("name", "sales@example.com")
                .with_attr("id", "al-1")
                .with_attr("targetName", "user@example.com"),
        )
}

#[test]
fn mixed_entry_list_decodes_in_wire_order() {
    let response = SearchDirectoryResponse::decode(&mixed_response_fragment()).expect("decodes");

    assert_eq!(response.search_total(), 5);
    assert!(!response.more());
    assert_eq!(response.entries().len(), 5);
    assert!(matches!(response.entries().first(), Some(DirectoryEntry::Account(_))));
    assert!(matches!(response.entries().last(), Some(DirectoryEntry::Alias(_))));
}

#[test]
fn typed_accessors_filter_the_union() {
    let response = SearchDirectoryResponse::decode(&mixed_response_fragment()).expect("decodes");

    let accounts: Vec<&AccountInfo> = response.accounts().collect();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts.first().map(|a| a.name()), Some("user@example.com"));

    let lists: Vec<&DistributionListInfo> = response.distribution_lists().collect();
    assert_eq!(lists.first().map(|dl| dl.members()), Some(&["user@example.com".to_owned()][..]));

    assert_eq!(response.domains().count(), 1);
    assert_eq!(response.coses().count(), 1);
    assert_eq!(response.aliases().count(), 1);
}

#[test]
fn unknown_entry_tag_is_rejected_with_its_position() {
    let fragment = Fragment::new("SearchDirectoryResponse")
        .with_attr("searchTotal", "2")
        .with_child(
            Fragment::new("account")
                .with_attr("name", "user@example.com")
                .with_attr("id", "a-1"),
        )
        .with_child(Fragment::new("widget").with_attr("id", "w-1"));

    let err = SearchDirectoryResponse::decode(&fragment).expect_err("union is closed");

    assert_eq!(
        err.to_string(),
        "entry[1]: expected account | domain | cos | dl | alias, got 'widget'"
    );
}

#[test]
fn invalid_entry_failure_names_its_position() {
    let fragment = Fragment::new("SearchDirectoryResponse")
        .with_attr("searchTotal", "1")
        .with_child(Fragment::new("account").with_attr("name", "user@example.com"));

    let err = SearchDirectoryResponse::decode(&fragment).expect_err("account id is required");

    assert_eq!(err.to_string(), "entry[0].id: missing required field");
}

#[test]
fn response_without_search_total_is_missing() {
    let fragment = Fragment::new("SearchDirectoryResponse");

    let err = SearchDirectoryResponse::decode(&fragment).expect_err("searchTotal is required");

    assert_eq!(err.to_string(), "searchTotal: missing required field");
}

#[test]
fn response_round_trips_through_encode() {
    let response = SearchDirectoryResponse::new(3)
        .with_more(true)
        .with_entry(DirectoryEntry::Account(
            AccountInfo::new("user@example.com", "a-1").with_attr(Attr::new("zimbraMailHost", "mbs1")),
        ))
        .with_entry(DirectoryEntry::Domain(DomainInfo::new("example.com", "d-1")))
        .with_entry(DirectoryEntry::Cos(
            CosInfo::new("standard", "c-1").with_default_cos(true),
        ))
        .with_entry(DirectoryEntry::Alias(AliasInfo::new(
            "sales@example.com",
            "al-1",
            "user@example.com",
        )));

    let decoded = SearchDirectoryResponse::decode(&response.encode()).expect("decodes");

    assert_eq!(decoded, response);
}
