//! Choosing which release file to download

use crate::github::types::{GitHubRelease, ReleaseAsset};
use crate::github::url::RepositoryIdentity;

/// Smallest asset whose URL passes `is_supported`, first listed on ties
pub fn smallest_supported_asset<'a, F>(
    release: &'a GitHubRelease,
    is_supported: F,
) -> Option<&'a ReleaseAsset>
where
    F: Fn(&str) -> bool,
{
    release
        .assets
        .iter()
        .filter(|asset| is_supported(&asset.browser_download_url))
        .min_by_key(|asset| asset.size)
}

/// URL to download for `release`
///
/// Prefers the smallest supported asset and falls back to the source tarball
/// GitHub generates for the release tag.
pub fn select_download_url<F>(
    release: &GitHubRelease,
    identity: &RepositoryIdentity,
    is_supported: F,
) -> String
where
    F: Fn(&str) -> bool,
{
    match smallest_supported_asset(release, is_supported) {
        Some(asset) => asset.browser_download_url.clone(),
        None => identity.source_tarball_url(&release.tag_name),
    }
}
