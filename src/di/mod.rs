//! Dependency injection infrastructure for Vendorup
//!
//! The updater talks to the network, the archive layer, the metadata store and
//! the filesystem only through the traits in [`traits`], so tests can swap any
//! of them for the in-memory versions in [`mocks`].
//!
//! # Example (Production)
//! ```no_run
//! use vendorup::di::ServiceContainer;
//!
//! # fn example() -> vendorup::core::VendorResult<()> {
//! let container = ServiceContainer::new()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example (Testing)
//! ```
//! use vendorup::di::{ServiceContainer, mocks::*};
//! use std::sync::Arc;
//!
//! let container = ServiceContainer::with_providers(
//!     Arc::new(MockConfigProvider::default()),
//!     Arc::new(MockReleaseProvider::new()),
//!     Arc::new(MockArchiveFetcher::new()),
//!     Arc::new(MockMetadataStore::new()),
//!     Arc::new(MockPackageReplacer::new()),
//! );
//! ```

pub mod container;
pub mod mocks;
pub mod traits;

pub use container::ServiceContainer;
pub use traits::{ArchiveFetcher, ConfigProvider, MetadataStore, PackageReplacer, ReleaseProvider};
