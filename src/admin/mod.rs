//! The administrative message catalogue: the typed contract for each admin
//! operation's request and response.
//!
//! Records are immutable after construction: fields are private, required
//! fields are constructor parameters, optionals are set through `with_*`
//! builders, and only getters are exposed. Every record implements
//! [`XmlRecord`](crate::bind::XmlRecord) for wire binding and
//! [`Validate`](crate::bind::Validate) for the programmatic construction
//! path.
//!
//! [`types`] holds the nested records shared across operations (selectors,
//! attribute pairs, directory entries); [`message`] holds the top-level
//! request/response pairs grouped by admin domain.

pub mod message;
pub mod types;

/// The fixed namespace identifier scoping every admin message document.
pub const ADMIN_NAMESPACE: &str = "urn:mailAdmin";

#[cfg(test)]
mod tests;
