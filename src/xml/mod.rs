//! Wire-level document fragments and their XML text form.
//!
//! The binder operates on [`Fragment`], an ordered tagged tree of attributes,
//! child elements, and optional text content. [`parse_document`] and
//! [`write_document`] convert between fragments and XML text; namespace
//! declarations are a document-layer concern handled here and never surface
//! as fragment attributes.
//!
//! Fragments also carry serde derives, so the same tree can be expressed as
//! an equivalent JSON document via [`Fragment::to_json`] and
//! [`Fragment::from_json`].

mod error;
mod fragment;
mod reader;
mod writer;

pub use error::XmlError;
pub use fragment::Fragment;
pub use reader::parse_document;
pub use writer::{write_document, write_fragment};
