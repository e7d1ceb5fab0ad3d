//! Soapstone: typed schema binding for an administrative SOAP API.
//!
//! This crate is the schema layer of an admin service: for each
//! administrative operation it defines an immutable request and/or response
//! record, the mapping from record fields onto wire-level attributes and
//! elements, and decode/encode/validate operations over that mapping.
//!
//! The crate deliberately contains no dispatcher, no business logic, and no
//! transport handling. Those live in external collaborators; what is here is
//! the contract they exchange.
//!
//! # Modules
//!
//! - [`xml`]: the wire-level tagged tree ([`xml::Fragment`]) and its XML
//!   text reader/writer
//! - [`bind`]: the generic binder core (field paths, the
//!   [`bind::BindError`] taxonomy, and decode/encode helpers)
//! - [`admin`]: the message records themselves, grouped by admin domain
//!
//! # Example
//!
//! ```
//! use soapstone::admin::message::config::{AbqConfigRequest, ConfigOp};
//! use soapstone::bind::XmlRecord;
//!
//! let request = AbqConfigRequest::new(ConfigOp::Add, "trusted-devices");
//! let fragment = request.encode();
//! let decoded = AbqConfigRequest::decode(&fragment).expect("round-trip");
//! assert_eq!(decoded, request);
//! ```

pub mod admin;
pub mod bind;
pub mod xml;
