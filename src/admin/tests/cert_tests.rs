//! Unit tests for certificate management messages.

use rstest::rstest;

use crate::admin::message::cert::{
    CertType, GetCertRequest, GetCertResponse, InstallCertRequest, InstallCertResponse,
};
use crate::admin::types::CertInfo;
use crate::bind::{BindError, XmlRecord};
use crate::xml::Fragment;

#[rstest]
#[case(CertType::All, "all")]
#[case(CertType::Mta, "mta")]
#[case(CertType::Ldap, "ldap")]
#[case(CertType::Mailboxd, "mailboxd")]
#[case(CertType::Proxy, "proxy")]
fn cert_type_wire_spellings_round_trip(#[case] cert_type: CertType, #[case] wire: &str) {
    assert_eq!(cert_type.as_str(), wire);
    assert_eq!(CertType::from_wire(wire), Some(cert_type));
}

#[test]
fn get_request_round_trips() {
    let request = GetCertRequest::new("9e8f-11", CertType::Mailboxd);

    let decoded = GetCertRequest::decode(&request.encode()).expect("decodes");

    assert_eq!(decoded, request);
}

#[test]
fn get_request_rejects_out_of_set_type() {
    let fragment = Fragment::new("GetCertRequest")
        .with_attr("server", "9e8f-11")
        .with_attr("type", "imapd");

    let err = GetCertRequest::decode(&fragment).expect_err("type set is closed");

    assert_eq!(err, BindError::unknown_value("type", "imapd"));
}

#[test]
fn cert_identity_fields_ride_as_text_children() {
    let cert = CertInfo::new("9e8f-11")
        .with_subject("CN=mail.example.com")
        .with_issuer("CN=Example CA")
        .with_not_before("Jan 1 00:00:00 2026 GMT")
        .with_not_after("Jan 1 00:00:00 2027 GMT");

    let fragment = cert.encode();
    let subject = fragment.child("subject").expect("subject child is present");
    assert_eq!(subject.text(), Some("CN=mail.example.com"));

    let decoded = CertInfo::decode(&fragment).expect("decodes");
    assert_eq!(decoded, cert);
}

#[test]
fn sparse_cert_omits_absent_identity_children() {
    let cert = CertInfo::new("9e8f-11").with_subject("CN=mail.example.com");

    let fragment = cert.encode();

    assert_eq!(fragment.children().len(), 1);
    assert!(fragment.child("issuer").is_none());
}

#[test]
fn get_response_preserves_cert_order() {
    let response = GetCertResponse::new()
        .with_cert(CertInfo::new("s1"))
        .with_cert(CertInfo::new("s2"));

    let decoded = GetCertResponse::decode(&response.encode()).expect("decodes");

    let servers: Vec<&str> = decoded.certs().iter().map(CertInfo::server).collect();
    assert_eq!(servers, vec!["s1", "s2"]);
}

#[test]
fn install_request_omits_default_self_signed_flag() {
    let request = InstallCertRequest::new("9e8f-11", CertType::Proxy);

    let fragment = request.encode();
    assert_eq!(fragment.attr("allowSelfSigned"), None);

    let permissive = request.with_allow_self_signed(true).encode();
    assert_eq!(permissive.attr("allowSelfSigned"), Some("1"));
}

#[test]
fn install_response_message_is_optional() {
    let bare = InstallCertResponse::new();
    assert!(bare.encode().children().is_empty());

    let noted = InstallCertResponse::new().with_message("deployment in progress");
    let decoded = InstallCertResponse::decode(&noted.encode()).expect("decodes");
    assert_eq!(decoded.message(), Some("deployment in progress"));
}
