//! Updater for packages vendored from GitHub release archives

use crate::cache::DownloadCache;
use crate::core::{VendorError, VendorResult};
use crate::di::ServiceContainer;
use crate::github::types::GitHubRelease;
use crate::github::url::RepositoryIdentity;
use crate::metadata::{MetadataRecord, MetadataUrl};
use crate::updater::selector::select_download_url;
use std::fs;
use std::path::{Path, PathBuf};

/// Latest release of a repository, as returned by [`GithubArchiveUpdater::resolve`]
#[derive(Debug, Clone)]
pub struct ResolvedRelease {
    identity: RepositoryIdentity,
    release: GitHubRelease,
}

impl ResolvedRelease {
    /// Version name of the release (its tag)
    pub fn latest_version(&self) -> &str {
        &self.release.tag_name
    }
}

/// Result of a successful update
#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    /// Version recorded in the new metadata
    pub version: String,
    /// URL the new package was downloaded from
    pub url: String,
    /// Metadata record handed to the metadata store
    pub metadata: MetadataRecord,
}

/// Updates a vendored package from the latest release of its GitHub repository
///
/// Usage is two-phase: [`resolve`](Self::resolve) asks GitHub for the latest
/// release, then [`apply`](Self::apply) installs it. Comparing the resolved
/// version against [`current_version`](Self::current_version) is up to the
/// caller.
///
/// `apply` writes the new metadata through the metadata store before asking
/// the replacer to swap the vendored directory. The two effects are
/// independent: a failed swap does not undo the metadata write.
pub struct GithubArchiveUpdater {
    project_path: PathBuf,
    metadata: MetadataRecord,
    old_url: MetadataUrl,
    identity: RepositoryIdentity,
    services: ServiceContainer,
}

impl GithubArchiveUpdater {
    /// Create an updater anchored on `url`, one of the package's recorded URLs
    ///
    /// # Errors
    ///
    /// - [`VendorError::InvalidUrlKind`] if `url` is not an ARCHIVE url
    /// - [`VendorError::UnsupportedUrlFormat`] if it is not a GitHub release
    ///   or archive download
    pub fn new(
        url: &MetadataUrl,
        project_path: impl Into<PathBuf>,
        metadata: &MetadataRecord,
        services: ServiceContainer,
    ) -> VendorResult<Self> {
        let identity = RepositoryIdentity::from_metadata_url(url)?;

        Ok(Self {
            project_path: project_path.into(),
            metadata: metadata.clone(),
            old_url: url.clone(),
            identity,
            services,
        })
    }

    pub fn identity(&self) -> &RepositoryIdentity {
        &self.identity
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    /// Version recorded in the package's metadata
    pub fn current_version(&self) -> &str {
        &self.metadata.third_party.version
    }

    /// Query the latest release
    pub async fn resolve(&self) -> VendorResult<ResolvedRelease> {
        let release = self
            .services
            .releases
            .get_latest_release(&self.identity.owner, &self.identity.repo)
            .await?;

        tracing::info!(
            repo = %self.identity,
            tag = %release.tag_name,
            assets = release.assets.len(),
            "resolved latest release"
        );

        Ok(ResolvedRelease {
            identity: self.identity.clone(),
            release,
        })
    }

    /// URL `apply` would download for `resolved`
    pub fn select_url(&self, resolved: &ResolvedRelease) -> String {
        let fetcher = &self.services.fetcher;
        select_download_url(&resolved.release, &self.identity, |url| {
            fetcher.is_supported_archive(url)
        })
    }

    /// Copy of the package metadata pointing at `new_url` and the resolved version
    ///
    /// Only the URL entry this updater was created from is rewritten.
    pub fn updated_metadata(&self, resolved: &ResolvedRelease, new_url: &str) -> MetadataRecord {
        let mut record = self.metadata.clone();
        record.third_party.version = resolved.latest_version().to_string();
        for url in record.third_party.url.iter_mut() {
            if *url == self.old_url {
                url.value = new_url.to_string();
            }
        }
        record
    }

    /// Download `resolved`, record it in the metadata and replace the package
    ///
    /// Temporary files are removed on every exit path; failures while
    /// removing them are logged and ignored.
    pub async fn apply(&self, resolved: &ResolvedRelease) -> VendorResult<UpdateOutcome> {
        if resolved.identity != self.identity {
            return Err(VendorError::Release(format!(
                "release of {} cannot update a package tracking {}",
                resolved.identity, self.identity
            )));
        }

        let cache = DownloadCache::create(&self.services.config.work_dir()?)?;
        let mut extracted = None;

        let result = self.install(resolved, &cache, &mut extracted).await;

        Self::cleanup(extracted, cache);
        result
    }

    async fn install(
        &self,
        resolved: &ResolvedRelease,
        cache: &DownloadCache,
        extracted: &mut Option<PathBuf>,
    ) -> VendorResult<UpdateOutcome> {
        let url = self.select_url(resolved);
        tracing::info!(%url, version = %resolved.latest_version(), "downloading release");

        let extract_dir = self
            .services
            .fetcher
            .download_and_extract(&url, cache)
            .await?;
        *extracted = Some(extract_dir.clone());

        let package_root = self.services.fetcher.find_archive_root(&extract_dir)?;

        let metadata = self.updated_metadata(resolved, &url);
        self.services
            .metadata_store
            .write_metadata(&package_root, &metadata)?;

        self.services
            .replacer
            .replace_package(&package_root, &self.project_path)?;

        Ok(UpdateOutcome {
            version: resolved.latest_version().to_string(),
            url,
            metadata,
        })
    }

    fn cleanup(extracted: Option<PathBuf>, cache: DownloadCache) {
        if let Some(dir) = extracted {
            // Gone already when the package root was the extraction dir itself
            if let Err(e) = fs::remove_dir_all(&dir) {
                tracing::debug!(path = %dir.display(), error = %e, "extraction dir not removed");
            }
        }

        let root = cache.root().to_path_buf();
        if let Err(e) = cache.clear() {
            tracing::warn!(path = %root.display(), error = %e, "failed to clear download cache");
        }
    }
}
