//! XML text to [`Fragment`] conversion.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::error::XmlError;
use super::fragment::Fragment;

/// Parses an XML document into its root [`Fragment`].
///
/// Namespace declarations (`xmlns`, `xmlns:*`) are consumed here and do not
/// appear as fragment attributes. Comments, processing instructions, and the
/// XML declaration are skipped. Whitespace-only text between elements is
/// discarded.
///
/// # Errors
///
/// Returns [`XmlError::Malformed`] for ill-formed markup,
/// [`XmlError::EmptyDocument`] when no root element is present, and
/// [`XmlError::TrailingContent`] when markup follows the closed root.
///
/// # Examples
///
/// ```
/// use soapstone::xml::parse_document;
///
/// let fragment = parse_document(r#"<volume id="1" name="primary1"/>"#)?;
/// assert_eq!(fragment.name(), "volume");
/// assert_eq!(fragment.attr("id"), Some("1"));
/// # Ok::<(), soapstone::xml::XmlError>(())
/// ```
pub fn parse_document(input: &str) -> Result<Fragment, XmlError> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Fragment> = Vec::new();
    let mut root: Option<Fragment> = None;

    loop {
        match reader.read_event().map_err(XmlError::malformed)? {
            Event::Start(start) => {
                if root.is_some() {
                    return Err(XmlError::TrailingContent);
                }
                stack.push(fragment_from_start(&start)?);
            }
            Event::Empty(start) => {
                if root.is_some() {
                    return Err(XmlError::TrailingContent);
                }
                let fragment = fragment_from_start(&start)?;
                match stack.last_mut() {
                    Some(parent) => parent.add_child(fragment),
                    None => root = Some(fragment),
                }
            }
            Event::End(_) => {
                // quick-xml validates end-tag pairing, so a pop always
                // matches the element just closed.
                let Some(closed) = stack.pop() else {
                    return Err(XmlError::Malformed("unmatched close tag".to_owned()));
                };
                match stack.last_mut() {
                    Some(parent) => parent.add_child(closed),
                    None => root = Some(closed),
                }
            }
            Event::Text(text) => {
                let unescaped = text.unescape().map_err(XmlError::malformed)?;
                if let Some(open) = stack.last_mut() {
                    open.append_text(&unescaped);
                } else if !unescaped.trim().is_empty() {
                    return Err(XmlError::TrailingContent);
                }
            }
            Event::CData(data) => {
                let raw = String::from_utf8(data.to_vec()).map_err(XmlError::malformed)?;
                if let Some(open) = stack.last_mut() {
                    open.append_text(&raw);
                }
            }
            Event::Eof => break,
            // Declarations, comments, doctypes, and processing instructions
            // carry no schema content.
            _ => {}
        }
    }

    root.ok_or(XmlError::EmptyDocument)
}

/// Builds a fragment from an opening tag, filtering namespace declarations.
fn fragment_from_start(start: &BytesStart<'_>) -> Result<Fragment, XmlError> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(XmlError::malformed)?
        .to_owned();
    let mut fragment = Fragment::new(name);

    for entry in start.attributes() {
        let attribute = entry.map_err(XmlError::malformed)?;
        let key = std::str::from_utf8(attribute.key.as_ref()).map_err(XmlError::malformed)?;
        if key == "xmlns" || key.starts_with("xmlns:") {
            continue;
        }
        let value = attribute.unescape_value().map_err(XmlError::malformed)?;
        fragment.set_attr(key, value);
    }

    Ok(fragment)
}
