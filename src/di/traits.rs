//! Trait definitions for dependency injection

use crate::cache::DownloadCache;
use crate::core::VendorResult;
use crate::github::types::GitHubRelease;
use crate::metadata::MetadataRecord;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Trait for configuration access
///
/// Provides read-only access to application configuration.
/// Implementations should be thread-safe (Send + Sync).
pub trait ConfigProvider: Send + Sync {
    /// Get the GitHub API base URL
    fn github_api_url(&self) -> &str;

    /// Get the GitHub token, if any
    fn github_token(&self) -> Option<String>;

    /// Get the HTTP timeout (None disables it)
    fn http_timeout(&self) -> Option<Duration>;

    /// Get the directory that holds per-update download caches
    fn work_dir(&self) -> VendorResult<PathBuf>;

    /// Get the files carried over from the old vendored tree
    fn preserve_files(&self) -> &[String];
}

/// Trait for release lookups on the hosting provider
#[async_trait]
pub trait ReleaseProvider: Send + Sync {
    /// Fetch the latest published release of `owner/repo`
    async fn get_latest_release(&self, owner: &str, repo: &str) -> VendorResult<GitHubRelease>;
}

/// Trait for downloading and unpacking release archives
#[async_trait]
pub trait ArchiveFetcher: Send + Sync {
    /// Whether the URL names an archive format this fetcher can extract
    fn is_supported_archive(&self, url: &str) -> bool;

    /// Download `url` into `cache` and extract it, returning the extraction directory
    async fn download_and_extract(&self, url: &str, cache: &DownloadCache) -> VendorResult<PathBuf>;

    /// Locate the package root inside an extraction directory
    fn find_archive_root(&self, extracted: &Path) -> VendorResult<PathBuf>;
}

/// Trait for persisting metadata records
pub trait MetadataStore: Send + Sync {
    /// Read the metadata record stored in `package_dir`
    fn read_metadata(&self, package_dir: &Path) -> VendorResult<MetadataRecord>;

    /// Write `record` into `package_dir`
    fn write_metadata(&self, package_dir: &Path, record: &MetadataRecord) -> VendorResult<()>;
}

/// Trait for swapping a vendored directory with a new tree
pub trait PackageReplacer: Send + Sync {
    /// Replace the contents of `target` with the contents of `new_root`
    fn replace_package(&self, new_root: &Path, target: &Path) -> VendorResult<()>;
}
