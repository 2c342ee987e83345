//! Repository identity extraction from recorded archive URLs

use crate::core::{VendorError, VendorResult};
use crate::metadata::{MetadataUrl, UrlKind};
use regex::Regex;
use std::fmt;

const GITHUB_ARCHIVE_PATTERN: &str =
    r"^https://github\.com/([-\w]+)/([-\w]+)/(releases/download/|archive/)";

/// Owner and name of a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryIdentity {
    pub owner: String,
    pub repo: String,
}

impl RepositoryIdentity {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Extract the repository from an archive URL recorded in metadata
    ///
    /// Accepts `https://github.com/<owner>/<repo>/releases/download/...` and
    /// `https://github.com/<owner>/<repo>/archive/...`.
    pub fn from_metadata_url(url: &MetadataUrl) -> VendorResult<Self> {
        if url.kind != UrlKind::Archive {
            return Err(VendorError::InvalidUrlKind(format!(
                "only ARCHIVE urls from GitHub are supported, got {}",
                url.kind
            )));
        }
        Self::parse(&url.value)
    }

    /// Extract the repository from a GitHub release or archive download URL
    pub fn parse(value: &str) -> VendorResult<Self> {
        let re = Regex::new(GITHUB_ARCHIVE_PATTERN)
            .map_err(|e| VendorError::UnsupportedUrlFormat(format!("Invalid regex pattern: {}", e)))?;

        let captures = re
            .captures(value)
            .ok_or_else(|| VendorError::UnsupportedUrlFormat(value.to_string()))?;

        match (captures.get(1), captures.get(2)) {
            (Some(owner), Some(repo)) => Ok(Self::new(owner.as_str(), repo.as_str())),
            _ => Err(VendorError::UnsupportedUrlFormat(value.to_string())),
        }
    }

    /// Source tarball GitHub generates for a tag
    pub fn source_tarball_url(&self, tag: &str) -> String {
        format!(
            "https://github.com/{}/{}/archive/{}.tar.gz",
            self.owner, self.repo, tag
        )
    }
}

impl fmt::Display for RepositoryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
