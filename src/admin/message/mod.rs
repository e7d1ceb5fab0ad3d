//! Top-level request/response records, one module per admin domain.

pub mod account;
pub mod backup;
pub mod cert;
pub mod config;
pub mod device;
pub mod hsm;
pub mod search;
pub mod volume;
