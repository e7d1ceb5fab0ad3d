//! Message-store volume records.

use std::fmt;

use crate::bind::{BindError, Validate, XmlRecord, decode, encode, require_nonempty};
use crate::xml::Fragment;

/// The role a volume plays in the message store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeType {
    /// Primary message storage.
    Primary,
    /// Secondary (aged-out) message storage.
    Secondary,
    /// Search-index storage.
    Index,
}

impl VolumeType {
    /// The wire spelling of this volume type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Index => "index",
        }
    }

    /// Parses a wire value; `None` for anything outside the closed set.
    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "index" => Some(Self::Index),
            _ => None,
        }
    }
}

impl fmt::Display for VolumeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message-store volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeInfo {
    id: i32,
    volume_type: VolumeType,
    name: String,
    root_path: String,
    compress_blobs: bool,
    compression_threshold: Option<i64>,
    current: bool,
}

impl VolumeInfo {
    /// Creates a volume record from its required fields.
    #[must_use]
    pub fn new(
        id: i32,
        volume_type: VolumeType,
        name: impl Into<String>,
        root_path: impl Into<String>,
    ) -> Self {
        Self {
            id,
            volume_type,
            name: name.into(),
            root_path: root_path.into(),
            compress_blobs: false,
            compression_threshold: None,
            current: false,
        }
    }

    /// Enables blob compression on this volume.
    #[must_use]
    pub const fn with_compress_blobs(mut self, compress: bool) -> Self {
        self.compress_blobs = compress;
        self
    }

    /// Sets the minimum blob size, in bytes, eligible for compression.
    #[must_use]
    pub const fn with_compression_threshold(mut self, threshold: i64) -> Self {
        self.compression_threshold = Some(threshold);
        self
    }

    /// Marks this volume as the current write target for its type.
    #[must_use]
    pub const fn with_current(mut self, current: bool) -> Self {
        self.current = current;
        self
    }

    /// The volume id.
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// The volume's role.
    #[must_use]
    pub const fn volume_type(&self) -> VolumeType {
        self.volume_type
    }

    /// The volume name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The filesystem root the volume stores blobs under.
    #[must_use]
    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    /// Whether blobs are compressed (wire default: `false`).
    #[must_use]
    pub const fn compress_blobs(&self) -> bool {
        self.compress_blobs
    }

    /// The compression size threshold, if one is set.
    #[must_use]
    pub const fn compression_threshold(&self) -> Option<i64> {
        self.compression_threshold
    }

    /// Whether this is the current write target (wire default: `false`).
    #[must_use]
    pub const fn current(&self) -> bool {
        self.current
    }
}

impl XmlRecord for VolumeInfo {
    const TAG: &'static str = "volume";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            id: decode::req_int_attr(fragment, "id")?,
            volume_type: decode::req_enum_attr(fragment, "type", VolumeType::from_wire)?,
            name: decode::req_attr(fragment, "name")?,
            root_path: decode::req_attr(fragment, "rootpath")?,
            compress_blobs: decode::bool_attr_or(fragment, "compressBlobs", false)?,
            compression_threshold: decode::opt_int_attr(fragment, "compressionThreshold")?,
            current: decode::bool_attr_or(fragment, "current", false)?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_int_attr(&mut fragment, "id", self.id);
        fragment.set_attr("type", self.volume_type.as_str());
        fragment.set_attr("name", &self.name);
        fragment.set_attr("rootpath", &self.root_path);
        encode::push_bool_attr_unless(&mut fragment, "compressBlobs", self.compress_blobs, false);
        encode::push_opt_int_attr(&mut fragment, "compressionThreshold", self.compression_threshold);
        encode::push_bool_attr_unless(&mut fragment, "current", self.current, false);
        fragment
    }
}

impl Validate for VolumeInfo {
    fn validate(&self) -> Result<(), BindError> {
        require_nonempty("name", &self.name)?;
        require_nonempty("rootpath", &self.root_path)
    }
}
