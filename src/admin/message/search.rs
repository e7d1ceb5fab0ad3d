//! Directory search messages.
//!
//! The response entry list is polymorphic: one ordered list mixes accounts,
//! domains, classes of service, distribution lists, and aliases. Decode
//! dispatches on each child's tag through [`DirectoryEntry::decode_list`],
//! and typed accessors filter the union one variant at a time.

use crate::admin::types::DirectoryEntry;
use crate::bind::{BindError, Validate, XmlRecord, decode, encode};
use crate::xml::Fragment;

/// Request searching the directory with an LDAP-style query.
///
/// `applyCos` and `sortAscending` default to `true`, applied at decode
/// time; re-encoding emits them only when `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDirectoryRequest {
    query: Option<String>,
    domain: Option<String>,
    types: Option<String>,
    sort_by: Option<String>,
    max_results: Option<i32>,
    limit: Option<i32>,
    offset: Option<i32>,
    apply_cos: bool,
    sort_ascending: bool,
}

impl SearchDirectoryRequest {
    /// Creates an unconstrained search request.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            query: None,
            domain: None,
            types: None,
            sort_by: None,
            max_results: None,
            limit: None,
            offset: None,
            apply_cos: true,
            sort_ascending: true,
        }
    }

    /// Sets the query expression.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Restricts the search to one domain.
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Restricts the entry kinds returned (comma-separated kind names).
    #[must_use]
    pub fn with_types(mut self, types: impl Into<String>) -> Self {
        self.types = Some(types.into());
        self
    }

    /// Sets the attribute results are sorted on.
    #[must_use]
    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    /// Caps the total matches the server will consider.
    #[must_use]
    pub const fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Caps the number of entries returned.
    #[must_use]
    pub const fn with_limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Skips the first `offset` matches for paging.
    #[must_use]
    pub const fn with_offset(mut self, offset: i32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Controls class-of-service flattening of returned attributes.
    #[must_use]
    pub const fn with_apply_cos(mut self, apply_cos: bool) -> Self {
        self.apply_cos = apply_cos;
        self
    }

    /// Controls the sort direction.
    #[must_use]
    pub const fn with_sort_ascending(mut self, ascending: bool) -> Self {
        self.sort_ascending = ascending;
        self
    }

    /// The query expression, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// The domain restriction, if any.
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// The entry-kind restriction, if any.
    #[must_use]
    pub fn types(&self) -> Option<&str> {
        self.types.as_deref()
    }

    /// The sort attribute, if any.
    #[must_use]
    pub fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }

    /// The total-match cap, if any.
    #[must_use]
    pub const fn max_results(&self) -> Option<i32> {
        self.max_results
    }

    /// The returned-entry cap, if any.
    #[must_use]
    pub const fn limit(&self) -> Option<i32> {
        self.limit
    }

    /// The paging offset, if any.
    #[must_use]
    pub const fn offset(&self) -> Option<i32> {
        self.offset
    }

    /// Whether class-of-service values are flattened (wire default:
    /// `true`).
    #[must_use]
    pub const fn apply_cos(&self) -> bool {
        self.apply_cos
    }

    /// Whether results sort ascending (wire default: `true`).
    #[must_use]
    pub const fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }
}

impl Default for SearchDirectoryRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlRecord for SearchDirectoryRequest {
    const TAG: &'static str = "SearchDirectoryRequest";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            query: decode::opt_attr(fragment, "query"),
            domain: decode::opt_attr(fragment, "domain"),
            types: decode::opt_attr(fragment, "types"),
            sort_by: decode::opt_attr(fragment, "sortBy"),
            max_results: decode::opt_int_attr(fragment, "maxResults")?,
            limit: decode::opt_int_attr(fragment, "limit")?,
            offset: decode::opt_int_attr(fragment, "offset")?,
            apply_cos: decode::bool_attr_or(fragment, "applyCos", true)?,
            sort_ascending: decode::bool_attr_or(fragment, "sortAscending", true)?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_opt_attr(&mut fragment, "query", self.query.as_deref());
        encode::push_opt_attr(&mut fragment, "domain", self.domain.as_deref());
        encode::push_opt_attr(&mut fragment, "types", self.types.as_deref());
        encode::push_opt_attr(&mut fragment, "sortBy", self.sort_by.as_deref());
        encode::push_opt_int_attr(&mut fragment, "maxResults", self.max_results);
        encode::push_opt_int_attr(&mut fragment, "limit", self.limit);
        encode::push_opt_int_attr(&mut fragment, "offset", self.offset);
        encode::push_bool_attr_unless(&mut fragment, "applyCos", self.apply_cos, true);
        encode::push_bool_attr_unless(&mut fragment, "sortAscending", self.sort_ascending, true);
        fragment
    }
}

impl Validate for SearchDirectoryRequest {
    fn validate(&self) -> Result<(), BindError> {
        Ok(())
    }
}

/// Response carrying the mixed entry list a search matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDirectoryResponse {
    more: bool,
    search_total: i64,
    entries: Vec<DirectoryEntry>,
}

impl SearchDirectoryResponse {
    /// Creates a response with the given total match count.
    #[must_use]
    pub const fn new(search_total: i64) -> Self {
        Self {
            more: false,
            search_total,
            entries: Vec::new(),
        }
    }

    /// Marks that more matches exist beyond the returned page.
    #[must_use]
    pub const fn with_more(mut self, more: bool) -> Self {
        self.more = more;
        self
    }

    /// Adds one entry.
    #[must_use]
    pub fn with_entry(mut self, entry: DirectoryEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Whether more matches exist beyond this page (wire default:
    /// `false`).
    #[must_use]
    pub const fn more(&self) -> bool {
        self.more
    }

    /// The total number of matches.
    #[must_use]
    pub const fn search_total(&self) -> i64 {
        self.search_total
    }

    /// The mixed entry list, in wire order.
    #[must_use]
    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    /// The account entries, in wire order.
    pub fn accounts(&self) -> impl Iterator<Item = &crate::admin::types::AccountInfo> {
        self.entries.iter().filter_map(DirectoryEntry::as_account)
    }

    /// The domain entries, in wire order.
    pub fn domains(&self) -> impl Iterator<Item = &crate::admin::types::DomainInfo> {
        self.entries.iter().filter_map(DirectoryEntry::as_domain)
    }

    /// The class-of-service entries, in wire order.
    pub fn coses(&self) -> impl Iterator<Item = &crate::admin::types::CosInfo> {
        self.entries.iter().filter_map(DirectoryEntry::as_cos)
    }

    /// The distribution-list entries, in wire order.
    pub fn distribution_lists(
        &self,
    ) -> impl Iterator<Item = &crate::admin::types::DistributionListInfo> {
        self.entries
            .iter()
            .filter_map(DirectoryEntry::as_distribution_list)
    }

    /// The alias entries, in wire order.
    pub fn aliases(&self) -> impl Iterator<Item = &crate::admin::types::AliasInfo> {
        self.entries.iter().filter_map(DirectoryEntry::as_alias)
    }
}

impl XmlRecord for SearchDirectoryResponse {
    const TAG: &'static str = "SearchDirectoryResponse";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            more: decode::bool_attr_or(fragment, "more", false)?,
            search_total: decode::req_int_attr(fragment, "searchTotal")?,
            entries: DirectoryEntry::decode_list(fragment, "entry")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_bool_attr_unless(&mut fragment, "more", self.more, false);
        encode::push_int_attr(&mut fragment, "searchTotal", self.search_total);
        for entry in &self.entries {
            fragment.add_child(entry.encode_tagged());
        }
        fragment
    }
}

impl Validate for SearchDirectoryResponse {
    fn validate(&self) -> Result<(), BindError> {
        self.entries
            .iter()
            .enumerate()
            .try_for_each(|(index, entry)| entry.validate().map_err(|e| e.within_item("entry", index)))
    }
}
