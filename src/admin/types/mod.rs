//! Nested record types shared across the message catalogue.

mod attrs;
mod cert;
mod device;
mod dir_entry;
mod selector;
mod volume;

pub use attrs::Attr;
pub use cert::CertInfo;
pub use device::{DeviceInfo, DeviceSelector, DeviceStatus};
pub use dir_entry::{
    AccountInfo, AliasInfo, CosInfo, DirectoryEntry, DistributionListInfo, DomainInfo,
};
pub use selector::{
    AccountBy, AccountSelector, CosBy, CosSelector, DomainBy, DomainSelector, ServerBy,
    ServerSelector,
};
pub use volume::{VolumeInfo, VolumeType};
