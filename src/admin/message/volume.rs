//! Message-store volume management messages.
//!
//! `GetAllVolumesResponse` is the wrapper-tag case: the `volume` list is
//! grouped under a `volumes` element that exists only to group the list and
//! carries no semantic value of its own.

use crate::admin::types::{VolumeInfo, VolumeType};
use crate::bind::{BindError, Validate, XmlRecord, decode, encode, validate_child, validate_items};
use crate::xml::Fragment;

/// Request listing every configured volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetAllVolumesRequest;

impl GetAllVolumesRequest {
    /// Creates the request.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl XmlRecord for GetAllVolumesRequest {
    const TAG: &'static str = "GetAllVolumesRequest";

    fn decode(_fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self)
    }

    fn encode(&self) -> Fragment {
        Fragment::new(Self::TAG)
    }
}

impl Validate for GetAllVolumesRequest {
    fn validate(&self) -> Result<(), BindError> {
        Ok(())
    }
}

/// Response listing every configured volume under the `volumes` wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetAllVolumesResponse {
    volumes: Vec<VolumeInfo>,
}

impl GetAllVolumesResponse {
    /// Creates an empty response.
    #[must_use]
    pub const fn new() -> Self {
        Self { volumes: Vec::new() }
    }

    /// Adds one volume.
    #[must_use]
    pub fn with_volume(mut self, volume: VolumeInfo) -> Self {
        self.volumes.push(volume);
        self
    }

    /// The volumes, in wire order.
    #[must_use]
    pub fn volumes(&self) -> &[VolumeInfo] {
        &self.volumes
    }
}

impl XmlRecord for GetAllVolumesResponse {
    const TAG: &'static str = "GetAllVolumesResponse";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            volumes: decode::wrapped_list(fragment, "volumes", "volume")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_wrapped_list(&mut fragment, "volumes", &self.volumes);
        fragment
    }
}

impl Validate for GetAllVolumesResponse {
    fn validate(&self) -> Result<(), BindError> {
        validate_items("volume", &self.volumes)
    }
}

/// Request creating one volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateVolumeRequest {
    volume: VolumeInfo,
}

impl CreateVolumeRequest {
    /// Creates a request around the given volume definition.
    #[must_use]
    pub const fn new(volume: VolumeInfo) -> Self {
        Self { volume }
    }

    /// The volume definition.
    #[must_use]
    pub const fn volume(&self) -> &VolumeInfo {
        &self.volume
    }
}

impl XmlRecord for CreateVolumeRequest {
    const TAG: &'static str = "CreateVolumeRequest";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            volume: decode::req_child(fragment, "volume")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_child(&mut fragment, &self.volume);
        fragment
    }
}

impl Validate for CreateVolumeRequest {
    fn validate(&self) -> Result<(), BindError> {
        validate_child("volume", &self.volume)
    }
}

/// Response carrying the volume just created, with its assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateVolumeResponse {
    volume: VolumeInfo,
}

impl CreateVolumeResponse {
    /// Creates a response around the given volume.
    #[must_use]
    pub const fn new(volume: VolumeInfo) -> Self {
        Self { volume }
    }

    /// The created volume.
    #[must_use]
    pub const fn volume(&self) -> &VolumeInfo {
        &self.volume
    }
}

impl XmlRecord for CreateVolumeResponse {
    const TAG: &'static str = "CreateVolumeResponse";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            volume: decode::req_child(fragment, "volume")?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_child(&mut fragment, &self.volume);
        fragment
    }
}

impl Validate for CreateVolumeResponse {
    fn validate(&self) -> Result<(), BindError> {
        validate_child("volume", &self.volume)
    }
}

/// Request making one volume the current write target for its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetCurrentVolumeRequest {
    id: i32,
    volume_type: VolumeType,
}

impl SetCurrentVolumeRequest {
    /// Creates a request for the given volume id and type.
    #[must_use]
    pub const fn new(id: i32, volume_type: VolumeType) -> Self {
        Self { id, volume_type }
    }

    /// The volume id.
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// The volume type the id must belong to.
    #[must_use]
    pub const fn volume_type(&self) -> VolumeType {
        self.volume_type
    }
}

impl XmlRecord for SetCurrentVolumeRequest {
    const TAG: &'static str = "SetCurrentVolumeRequest";

    fn decode(fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self {
            id: decode::req_int_attr(fragment, "id")?,
            volume_type: decode::req_enum_attr(fragment, "type", VolumeType::from_wire)?,
        })
    }

    fn encode(&self) -> Fragment {
        let mut fragment = Fragment::new(Self::TAG);
        encode::push_int_attr(&mut fragment, "id", self.id);
        fragment.set_attr("type", self.volume_type.as_str());
        fragment
    }
}

impl Validate for SetCurrentVolumeRequest {
    fn validate(&self) -> Result<(), BindError> {
        Ok(())
    }
}

/// Empty acknowledgement of a current-volume change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetCurrentVolumeResponse;

impl SetCurrentVolumeResponse {
    /// Creates the acknowledgement.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl XmlRecord for SetCurrentVolumeResponse {
    const TAG: &'static str = "SetCurrentVolumeResponse";

    fn decode(_fragment: &Fragment) -> Result<Self, BindError> {
        Ok(Self)
    }

    fn encode(&self) -> Fragment {
        Fragment::new(Self::TAG)
    }
}

impl Validate for SetCurrentVolumeResponse {
    fn validate(&self) -> Result<(), BindError> {
        Ok(())
    }
}
