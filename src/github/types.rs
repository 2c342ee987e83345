//! GitHub API type definitions

use serde::{Deserialize, Serialize};

/// GitHub release information
///
/// Only `tag_name` is required; everything else the updater does not read is
/// optional so unexpected payload shapes still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubRelease {
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub tarball_url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

impl GitHubRelease {
    /// Release with only a tag and assets set
    pub fn new(tag_name: impl Into<String>, assets: Vec<ReleaseAsset>) -> Self {
        Self {
            tag_name: tag_name.into(),
            assets,
            name: None,
            draft: false,
            prerelease: false,
            tarball_url: None,
            html_url: None,
            published_at: None,
        }
    }
}

/// GitHub release asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseAsset {
    pub browser_download_url: String,
    pub size: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
}

impl ReleaseAsset {
    pub fn new(browser_download_url: impl Into<String>, size: u64) -> Self {
        Self {
            browser_download_url: browser_download_url.into(),
            size,
            name: None,
            content_type: None,
        }
    }
}
