//! Release archive handling: format detection, download and extraction

pub mod extractor;
pub mod fetcher;

pub use extractor::ArchiveExtractor;
pub use fetcher::HttpArchiveFetcher;

use crate::core::VendorResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Archive formats the updater can unpack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    TarGz,
    Tar,
    Zip,
}

impl ArchiveKind {
    /// Detect the archive format from a URL or file name
    ///
    /// Query strings and fragments are ignored; matching is case-insensitive.
    pub fn from_url(url: &str) -> Option<Self> {
        let path = url.split(['?', '#']).next().unwrap_or(url).to_ascii_lowercase();

        if path.ends_with(".tar.gz") || path.ends_with(".tgz") {
            Some(ArchiveKind::TarGz)
        } else if path.ends_with(".tar") {
            Some(ArchiveKind::Tar)
        } else if path.ends_with(".zip") {
            Some(ArchiveKind::Zip)
        } else {
            None
        }
    }

    /// File extension used for downloaded archives of this kind
    pub fn extension(&self) -> &'static str {
        match self {
            ArchiveKind::TarGz => "tar.gz",
            ArchiveKind::Tar => "tar",
            ArchiveKind::Zip => "zip",
        }
    }
}

/// Whether the URL names an archive format the updater can unpack
pub fn is_supported_archive(url: &str) -> bool {
    ArchiveKind::from_url(url).is_some()
}

/// Find the package root inside an extraction directory
///
/// Archives usually wrap their contents in one or more directories. Descend
/// while a directory holds nothing but a single sub-directory; the first
/// directory that holds files or several sub-directories is the root. A tree
/// with no files at all resolves to `extracted` itself.
pub fn find_archive_root(extracted: &Path) -> VendorResult<PathBuf> {
    let mut current = extracted.to_path_buf();

    loop {
        let mut dirs = Vec::new();
        let mut has_files = false;

        for entry in fs::read_dir(&current)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                dirs.push(entry.path());
            } else {
                has_files = true;
            }
        }

        if has_files || dirs.len() > 1 {
            return Ok(current);
        }

        match dirs.pop() {
            Some(only_child) => current = only_child,
            None => return Ok(extracted.to_path_buf()),
        }
    }
}
