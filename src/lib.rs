//! Vendorup: keep vendored third-party packages in sync with GitHub releases
//!
//! A vendored package is a directory with a `METADATA.yaml` sidecar that
//! records where the package came from and which version it is. This crate
//! checks the package's GitHub repository for a newer release and, when asked,
//! downloads it, rewrites the metadata and swaps the directory in place.
//!
//! ```no_run
//! use vendorup::di::ServiceContainer;
//! use vendorup::metadata::MetadataRecord;
//! use vendorup::updater::create_updater;
//! use std::path::Path;
//!
//! # async fn example() -> vendorup::core::VendorResult<()> {
//! let project = Path::new("third_party/zlib");
//! let services = ServiceContainer::new()?;
//! let metadata = MetadataRecord::load(project)?;
//!
//! let updater = create_updater(&metadata, project, &services)?;
//! let resolved = updater.resolve().await?;
//! if resolved.latest_version() != updater.current_version() {
//!     updater.apply(&resolved).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub use vendorup_core::{VendorError, VendorResult};

/// Core module re-exported from vendorup-core.
pub mod core {
    pub use vendorup_core::core::*;

    /// Path module re-exported from vendorup-core.
    pub mod path {
        pub use vendorup_core::core::path::*;
    }
}

/// Metadata record types re-exported from vendorup-core.
pub mod metadata {
    pub use vendorup_core::metadata::*;
}

/// Configuration management.
pub mod config;

/// Scoped transient download cache.
pub mod cache;

/// Archive download and extraction.
pub mod archive;

/// GitHub release queries and URL parsing.
pub mod github;

/// Metadata persistence and directory replacement.
pub mod package;

/// Release resolution and package updates.
pub mod updater;

/// Dependency injection infrastructure.
pub mod di;
