//! HTTP archive fetcher

use crate::archive::{find_archive_root, is_supported_archive, ArchiveExtractor, ArchiveKind};
use crate::cache::DownloadCache;
use crate::core::path::ensure_dir;
use crate::core::{VendorError, VendorResult};
use crate::di::traits::{ArchiveFetcher, ConfigProvider};
use crate::github::client::build_http_client;
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Downloads release archives over HTTP and unpacks them into a download cache
pub struct HttpArchiveFetcher {
    http_client: HttpClient,
}

impl HttpArchiveFetcher {
    pub fn new(config: &dyn ConfigProvider) -> VendorResult<Self> {
        Ok(Self {
            http_client: build_http_client(config, header::HeaderMap::new())?,
        })
    }

    /// Stream `url` to `dest`
    async fn download(&self, url: &str, dest: &Path) -> VendorResult<()> {
        let mut response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(VendorError::Archive(format!(
                "Download failed: HTTP {} for {}",
                response.status(),
                url
            )));
        }

        if let Some(parent) = dest.parent() {
            ensure_dir(parent)?;
        }

        let mut file = File::create(dest)?;
        let mut written: u64 = 0;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk)?;
            written += chunk.len() as u64;
        }
        file.flush()?;

        tracing::debug!(%url, bytes = written, "downloaded archive");
        Ok(())
    }
}

#[async_trait]
impl ArchiveFetcher for HttpArchiveFetcher {
    fn is_supported_archive(&self, url: &str) -> bool {
        is_supported_archive(url)
    }

    async fn download_and_extract(&self, url: &str, cache: &DownloadCache) -> VendorResult<PathBuf> {
        let kind = ArchiveKind::from_url(url)
            .ok_or_else(|| VendorError::Archive(format!("Unsupported archive format: {}", url)))?;

        let archive_path = cache.archive_path(kind);
        self.download(url, &archive_path).await?;

        let extract_dir = cache.extract_dir();
        ArchiveExtractor::new(extract_dir.clone()).extract(&archive_path, kind)?;

        Ok(extract_dir)
    }

    fn find_archive_root(&self, extracted: &Path) -> VendorResult<PathBuf> {
        find_archive_root(extracted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::di::mocks::MockConfigProvider;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::fs;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn targz_bytes(files: &[(&str, &str)]) -> Vec<u8> {
        let encoder = GzEncoder::new(Vec::new(), Compression::default());
        let mut tar = tar::Builder::new(encoder);
        for (name, content) in files {
            let mut header = tar::Header::new_gnu();
            header.set_path(name).unwrap();
            header.set_size(content.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            tar.append(&header, content.as_bytes()).unwrap();
        }
        tar.into_inner().unwrap().finish().unwrap()
    }

    #[tokio::test]
    async fn test_download_and_extract_targz() {
        let mock_server = MockServer::start().await;
        let body = targz_bytes(&[("lib-2.0/README.md", "# lib"), ("lib-2.0/lib.c", "int x;")]);

        Mock::given(method("GET"))
            .and(path("/o/lib/archive/v2.0.tar.gz"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
            .mount(&mock_server)
            .await;

        let temp = TempDir::new().unwrap();
        let cache = DownloadCache::create(temp.path()).unwrap();
        let fetcher = HttpArchiveFetcher::new(&MockConfigProvider::default()).unwrap();

        let url = format!("{}/o/lib/archive/v2.0.tar.gz", mock_server.uri());
        let extracted = fetcher.download_and_extract(&url, &cache).await.unwrap();
        let root = fetcher.find_archive_root(&extracted).unwrap();

        assert!(root.ends_with("lib-2.0"));
        assert_eq!(fs::read_to_string(root.join("README.md")).unwrap(), "# lib");
        assert!(cache.archive_path(ArchiveKind::TarGz).exists());
    }

    #[tokio::test]
    async fn test_download_http_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing.zip"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let temp = TempDir::new().unwrap();
        let cache = DownloadCache::create(temp.path()).unwrap();
        let fetcher = HttpArchiveFetcher::new(&MockConfigProvider::default()).unwrap();

        let url = format!("{}/missing.zip", mock_server.uri());
        let result = fetcher.download_and_extract(&url, &cache).await;
        match result {
            Err(VendorError::Archive(msg)) => assert!(msg.contains("404")),
            other => panic!("Expected Archive error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unsupported_format_rejected_before_download() {
        let temp = TempDir::new().unwrap();
        let cache = DownloadCache::create(temp.path()).unwrap();
        let fetcher = HttpArchiveFetcher::new(&MockConfigProvider::default()).unwrap();

        let result = fetcher
            .download_and_extract("http://127.0.0.1:9/pkg.deb", &cache)
            .await;
        assert!(matches!(result, Err(VendorError::Archive(msg)) if msg.contains("Unsupported")));
        assert!(!fetcher.is_supported_archive("pkg.deb"));
        assert!(fetcher.is_supported_archive("pkg.tgz"));
    }
}
