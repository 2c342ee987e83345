//! Core types shared by the Vendorup library and binary.
//!
//! Holds the error taxonomy, the platform path helpers and the
//! `METADATA.yaml` record that describes a vendored package.

pub mod core;
pub mod metadata;

pub use core::error::{VendorError, VendorResult};
pub use metadata::{MetadataRecord, MetadataUrl, ThirdParty, UpgradeDate, UrlKind};
