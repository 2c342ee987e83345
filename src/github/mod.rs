//! GitHub integration for vendored packages
//!
//! This module provides functionality for:
//! - Recognising GitHub release and archive download URLs
//! - Fetching the latest release of a repository

pub mod client;
pub mod types;
pub mod url;

pub use client::GitHubClient;
pub use types::{GitHubRelease, ReleaseAsset};
pub use url::RepositoryIdentity;
