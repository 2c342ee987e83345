//! Mock implementations of service traits for testing

use super::traits::{
    ArchiveFetcher, ConfigProvider, MetadataStore, PackageReplacer, ReleaseProvider,
};
use crate::archive::{find_archive_root, ArchiveKind};
use crate::cache::DownloadCache;
use crate::core::{VendorError, VendorResult};
use crate::github::types::GitHubRelease;
use crate::metadata::MetadataRecord;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock configuration provider for testing
///
/// # Example
///
/// ```
/// use vendorup::di::mocks::MockConfigProvider;
/// use vendorup::di::ConfigProvider;
/// use std::path::PathBuf;
///
/// let mut config = MockConfigProvider::default();
/// config.work_dir = PathBuf::from("/tmp/vendorup-test-work");
///
/// assert_eq!(config.work_dir().unwrap(), PathBuf::from("/tmp/vendorup-test-work"));
/// ```
#[derive(Clone)]
pub struct MockConfigProvider {
    pub api_url: String,
    pub token: Option<String>,
    pub timeout: Option<Duration>,
    pub work_dir: PathBuf,
    pub preserve_files: Vec<String>,
}

impl Default for MockConfigProvider {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            token: None,
            timeout: Some(Duration::from_secs(30)),
            work_dir: std::env::temp_dir().join("vendorup-test-work"),
            preserve_files: Vec::new(),
        }
    }
}

impl MockConfigProvider {
    /// Config whose work directory is `work_dir`
    pub fn with_work_dir(work_dir: &Path) -> Self {
        Self {
            work_dir: work_dir.to_path_buf(),
            ..Default::default()
        }
    }
}

impl ConfigProvider for MockConfigProvider {
    fn github_api_url(&self) -> &str {
        &self.api_url
    }

    fn github_token(&self) -> Option<String> {
        self.token.clone()
    }

    fn http_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn work_dir(&self) -> VendorResult<PathBuf> {
        Ok(self.work_dir.clone())
    }

    fn preserve_files(&self) -> &[String] {
        &self.preserve_files
    }
}

/// Mock release provider for testing
///
/// Serves canned releases keyed by `owner/repo` and counts lookups.
#[derive(Clone, Default)]
pub struct MockReleaseProvider {
    releases: Arc<Mutex<HashMap<String, GitHubRelease>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockReleaseProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the latest release of `owner/repo`
    pub fn add_release(&self, owner: &str, repo: &str, release: GitHubRelease) {
        self.releases
            .lock()
            .unwrap()
            .insert(format!("{}/{}", owner, repo), release);
    }

    /// Repositories queried so far, as `owner/repo`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReleaseProvider for MockReleaseProvider {
    async fn get_latest_release(&self, owner: &str, repo: &str) -> VendorResult<GitHubRelease> {
        let key = format!("{}/{}", owner, repo);
        self.calls.lock().unwrap().push(key.clone());
        self.releases
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| VendorError::Release(format!("GitHub API error: HTTP 404 for {}", key)))
    }
}

/// Mock archive fetcher for testing
///
/// Instead of downloading, writes the registered files into the download
/// cache, so extraction directories are real and cleanup can be observed.
#[derive(Clone, Default)]
pub struct MockArchiveFetcher {
    archives: Arc<Mutex<HashMap<String, Vec<(String, String)>>>>,
    requested: Arc<Mutex<Vec<String>>>,
    extracted_dirs: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockArchiveFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an archive: relative file paths and their contents
    pub fn add_archive(&self, url: &str, files: &[(&str, &str)]) {
        let files = files
            .iter()
            .map(|(p, c)| (p.to_string(), c.to_string()))
            .collect();
        self.archives.lock().unwrap().insert(url.to_string(), files);
    }

    /// URLs passed to `download_and_extract`
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    /// Extraction directories handed out so far
    pub fn extracted_dirs(&self) -> Vec<PathBuf> {
        self.extracted_dirs.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArchiveFetcher for MockArchiveFetcher {
    fn is_supported_archive(&self, url: &str) -> bool {
        ArchiveKind::from_url(url).is_some()
    }

    async fn download_and_extract(&self, url: &str, cache: &DownloadCache) -> VendorResult<PathBuf> {
        self.requested.lock().unwrap().push(url.to_string());

        let files = self
            .archives
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| VendorError::Archive(format!("Download failed: HTTP 404 for {}", url)))?;

        let extract_dir = cache.extract_dir();
        for (relative, content) in files {
            let path = extract_dir.join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)?;
        }
        fs::create_dir_all(&extract_dir)?;

        self.extracted_dirs.lock().unwrap().push(extract_dir.clone());
        Ok(extract_dir)
    }

    fn find_archive_root(&self, extracted: &Path) -> VendorResult<PathBuf> {
        find_archive_root(extracted)
    }
}

/// Mock metadata store for testing
///
/// Keeps written records in memory.
#[derive(Clone, Default)]
pub struct MockMetadataStore {
    records: Arc<Mutex<HashMap<PathBuf, MetadataRecord>>>,
    writes: Arc<Mutex<Vec<(PathBuf, MetadataRecord)>>>,
}

impl MockMetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `write_metadata` call, in order
    pub fn writes(&self) -> Vec<(PathBuf, MetadataRecord)> {
        self.writes.lock().unwrap().clone()
    }
}

impl MetadataStore for MockMetadataStore {
    fn read_metadata(&self, package_dir: &Path) -> VendorResult<MetadataRecord> {
        self.records
            .lock()
            .unwrap()
            .get(package_dir)
            .cloned()
            .ok_or_else(|| {
                VendorError::Metadata(format!(
                    "Metadata file not found: {}",
                    package_dir.display()
                ))
            })
    }

    fn write_metadata(&self, package_dir: &Path, record: &MetadataRecord) -> VendorResult<()> {
        self.records
            .lock()
            .unwrap()
            .insert(package_dir.to_path_buf(), record.clone());
        self.writes
            .lock()
            .unwrap()
            .push((package_dir.to_path_buf(), record.clone()));
        Ok(())
    }
}

/// A recorded `replace_package` call
#[derive(Debug, Clone)]
pub struct ReplaceCall {
    pub new_root: PathBuf,
    pub target: PathBuf,
    /// Relative paths of the files under `new_root` at call time
    pub files: Vec<String>,
}

/// Mock package replacer for testing
///
/// Records what it was asked to swap without touching the target.
#[derive(Clone, Default)]
pub struct MockPackageReplacer {
    calls: Arc<Mutex<Vec<ReplaceCall>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl MockPackageReplacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following call fail with `message`
    pub fn fail_with(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<ReplaceCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl PackageReplacer for MockPackageReplacer {
    fn replace_package(&self, new_root: &Path, target: &Path) -> VendorResult<()> {
        let mut files: Vec<String> = walkdir::WalkDir::new(new_root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                e.path()
                    .strip_prefix(new_root)
                    .ok()
                    .map(|p| p.to_string_lossy().replace('\\', "/"))
            })
            .collect();
        files.sort();

        self.calls.lock().unwrap().push(ReplaceCall {
            new_root: new_root.to_path_buf(),
            target: target.to_path_buf(),
            files,
        });

        match self.fail_with.lock().unwrap().clone() {
            Some(message) => Err(VendorError::Replace(message)),
            None => Ok(()),
        }
    }
}
