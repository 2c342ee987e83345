//! Vendored package metadata (`METADATA.yaml`)
//!
//! ```yaml
//! name: zlib
//! description: General purpose compression library
//! third_party:
//!   url:
//!     - kind: HOMEPAGE
//!       value: https://zlib.net
//!     - kind: ARCHIVE
//!       value: https://github.com/madler/zlib/archive/v1.3.tar.gz
//!   version: v1.3
//!   last_upgrade_date: { year: 2024, month: 1, day: 15 }
//! ```

use crate::core::error::{VendorError, VendorResult};
use crate::core::path::metadata_file;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// What a recorded URL points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UrlKind {
    Homepage,
    Archive,
    Git,
    Svn,
    Hg,
    Darcs,
    Piper,
    Other,
}

impl fmt::Display for UrlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UrlKind::Homepage => "HOMEPAGE",
            UrlKind::Archive => "ARCHIVE",
            UrlKind::Git => "GIT",
            UrlKind::Svn => "SVN",
            UrlKind::Hg => "HG",
            UrlKind::Darcs => "DARCS",
            UrlKind::Piper => "PIPER",
            UrlKind::Other => "OTHER",
        };
        f.write_str(name)
    }
}

/// A source location recorded for a vendored package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataUrl {
    pub kind: UrlKind,
    pub value: String,
}

impl MetadataUrl {
    pub fn new(kind: UrlKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn archive(value: impl Into<String>) -> Self {
        Self::new(UrlKind::Archive, value)
    }
}

/// Date of the last upstream upgrade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Upstream information for a vendored package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirdParty {
    #[serde(default)]
    pub url: Vec<MetadataUrl>,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_upgrade_date: Option<UpgradeDate>,
}

/// Metadata record stored beside a vendored package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub third_party: ThirdParty,
}

impl MetadataRecord {
    /// Load `METADATA.yaml` from a package directory
    pub fn load(package_dir: &Path) -> VendorResult<Self> {
        let path = metadata_file(package_dir);
        if !path.exists() {
            return Err(VendorError::Metadata(format!(
                "Metadata file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content).map_err(|e| {
            VendorError::Metadata(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save `METADATA.yaml` into a package directory
    pub fn save(&self, package_dir: &Path) -> VendorResult<()> {
        fs::create_dir_all(package_dir)?;

        let content = serde_yaml::to_string(self)
            .map_err(|e| VendorError::Metadata(format!("Failed to serialize metadata: {}", e)))?;

        fs::write(metadata_file(package_dir), content)?;
        Ok(())
    }
}
