//! The generic schema binder: field paths, the error taxonomy, record
//! traits, and the decode/encode helper vocabulary.
//!
//! Binding is a pure, stateless, recursive function between `(schema,
//! fragment)` and `(record | error)`. There is no registry, no cache, and no
//! shared mutable state: any number of records may be bound concurrently
//! with no coordination.
//!
//! Records implement [`XmlRecord`] (decode/encode under a fixed tag) and
//! [`Validate`] (the same required-field and enum-closure contract applied
//! to programmatically built values). The [`decode`] and [`encode`] modules
//! hold the per-field helper vocabulary those implementations are written
//! in.

pub mod decode;
pub mod encode;

mod error;
mod path;
mod record;

pub use error::BindError;
pub use path::{FieldPath, PathSegment};
pub use record::{Validate, XmlRecord, require_nonempty, validate_child, validate_items};
