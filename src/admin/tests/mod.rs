//! Unit tests for the admin message catalogue.
//!
//! Tests are organised by admin domain, covering wire decode, encode
//! omission rules, error paths, and programmatic validation.

mod account_tests;
mod backup_tests;
mod cert_tests;
mod config_tests;
mod device_tests;
mod hsm_tests;
mod search_tests;
