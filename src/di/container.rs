//! Service container for dependency injection

use super::traits::{
    ArchiveFetcher, ConfigProvider, MetadataStore, PackageReplacer, ReleaseProvider,
};
use crate::archive::HttpArchiveFetcher;
use crate::config::Config;
use crate::core::VendorResult;
use crate::github::GitHubClient;
use crate::package::{DirectoryReplacer, YamlMetadataStore};
use std::sync::Arc;

/// Service container for dependency injection
///
/// Holds every collaborator the updater needs as a trait object, so tests can
/// swap the network and filesystem for in-memory mocks.
///
/// # Example (Production)
///
/// ```no_run
/// use vendorup::di::ServiceContainer;
///
/// # fn example() -> vendorup::core::VendorResult<()> {
/// let container = ServiceContainer::new()?;
/// println!("GitHub API: {}", container.config.github_api_url());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ServiceContainer {
    pub config: Arc<dyn ConfigProvider>,
    pub releases: Arc<dyn ReleaseProvider>,
    pub fetcher: Arc<dyn ArchiveFetcher>,
    pub metadata_store: Arc<dyn MetadataStore>,
    pub replacer: Arc<dyn PackageReplacer>,
}

impl ServiceContainer {
    /// Create a new service container with production implementations
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Config file cannot be loaded or created
    /// - An HTTP client cannot be built
    pub fn new() -> VendorResult<Self> {
        Self::from_config(Config::load()?)
    }

    /// Create a production container from an already loaded config
    pub fn from_config(config: Config) -> VendorResult<Self> {
        let config: Arc<dyn ConfigProvider> = Arc::new(config);

        Ok(Self {
            releases: Arc::new(GitHubClient::new(config.as_ref())?),
            fetcher: Arc::new(HttpArchiveFetcher::new(config.as_ref())?),
            metadata_store: Arc::new(YamlMetadataStore::new()),
            replacer: Arc::new(DirectoryReplacer::new(config.preserve_files().to_vec())),
            config,
        })
    }

    /// Create a service container with custom provider implementations
    ///
    /// This is primarily useful for testing, where you can inject mock
    /// implementations of each service.
    pub fn with_providers(
        config: Arc<dyn ConfigProvider>,
        releases: Arc<dyn ReleaseProvider>,
        fetcher: Arc<dyn ArchiveFetcher>,
        metadata_store: Arc<dyn MetadataStore>,
        replacer: Arc<dyn PackageReplacer>,
    ) -> Self {
        Self {
            config,
            releases,
            fetcher,
            metadata_store,
            replacer,
        }
    }
}
