//! [`Fragment`] to XML text conversion.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use super::error::XmlError;
use super::fragment::Fragment;

/// Serialises a fragment to XML text with a namespace declaration on the
/// root element.
///
/// This is the document form sent over the wire: the admin namespace is a
/// document-layer concern, so it is attached here rather than carried inside
/// the fragment tree.
///
/// # Errors
///
/// Returns [`XmlError::Write`] if serialisation fails.
pub fn write_document(fragment: &Fragment, namespace: &str) -> Result<String, XmlError> {
    write_inner(fragment, Some(namespace))
}

/// Serialises a bare fragment to XML text, without a namespace declaration.
///
/// # Errors
///
/// Returns [`XmlError::Write`] if serialisation fails.
///
/// # Examples
///
/// ```
/// use soapstone::xml::{Fragment, write_fragment};
///
/// let fragment = Fragment::new("a").with_attr("n", "zimbraId").with_text("1234");
/// assert_eq!(write_fragment(&fragment)?, r#"<a n="zimbraId">1234</a>"#);
/// # Ok::<(), soapstone::xml::XmlError>(())
/// ```
pub fn write_fragment(fragment: &Fragment) -> Result<String, XmlError> {
    write_inner(fragment, None)
}

fn write_inner(fragment: &Fragment, namespace: Option<&str>) -> Result<String, XmlError> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, fragment, namespace)?;
    String::from_utf8(writer.into_inner()).map_err(XmlError::write)
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    fragment: &Fragment,
    namespace: Option<&str>,
) -> Result<(), XmlError> {
    let mut start = BytesStart::new(fragment.name());
    if let Some(uri) = namespace {
        start.push_attribute(("xmlns", uri));
    }
    for (key, value) in fragment.attrs() {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if fragment.children().is_empty() && fragment.text().is_none() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(XmlError::write);
    }

    writer
        .write_event(Event::Start(start))
        .map_err(XmlError::write)?;
    if let Some(text) = fragment.text() {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(XmlError::write)?;
    }
    for child in fragment.children() {
        write_element(writer, child, None)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(fragment.name())))
        .map_err(XmlError::write)
}
