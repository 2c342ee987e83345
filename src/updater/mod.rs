//! Updating vendored packages from upstream releases

pub mod github_archive;
pub mod selector;

pub use github_archive::{GithubArchiveUpdater, ResolvedRelease, UpdateOutcome};
pub use selector::select_download_url;

use crate::core::{VendorError, VendorResult};
use crate::di::ServiceContainer;
use crate::metadata::MetadataRecord;
use std::path::Path;

/// Create an updater for the first recorded URL that points at a GitHub release
///
/// URLs are tried in recorded order. If none qualifies, the error for the
/// last URL tried is returned.
pub fn create_updater(
    metadata: &MetadataRecord,
    project_path: &Path,
    services: &ServiceContainer,
) -> VendorResult<GithubArchiveUpdater> {
    let mut last_error = VendorError::UnsupportedUrlFormat(format!(
        "no url recorded in metadata for {}",
        project_path.display()
    ));

    for url in &metadata.third_party.url {
        match GithubArchiveUpdater::new(url, project_path, metadata, services.clone()) {
            Ok(updater) => return Ok(updater),
            Err(e) => {
                tracing::debug!(url = %url.value, error = %e, "url not usable for update");
                last_error = e;
            }
        }
    }

    Err(last_error)
}
