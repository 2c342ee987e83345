use crate::archive::ArchiveKind;
use crate::core::path::ensure_dir;
use crate::core::VendorResult;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Transient download cache scoped to a single update
///
/// Each cache is a fresh uniquely named directory under the work directory,
/// so updaters running side by side never see each other's files. The
/// directory is removed by [`DownloadCache::clear`] or, failing that, on drop.
#[derive(Debug)]
pub struct DownloadCache {
    dir: TempDir,
}

impl DownloadCache {
    /// Create a new cache under `work_dir`
    pub fn create(work_dir: &Path) -> VendorResult<Self> {
        ensure_dir(work_dir)?;
        let dir = tempfile::Builder::new()
            .prefix("update-")
            .tempdir_in(work_dir)?;
        tracing::debug!(path = %dir.path().display(), "created download cache");
        Ok(Self { dir })
    }

    /// Root of this cache
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Directory holding downloaded archives
    pub fn downloads_dir(&self) -> PathBuf {
        self.root().join("downloads")
    }

    /// Directory archives are extracted into
    pub fn extract_dir(&self) -> PathBuf {
        self.root().join("extract")
    }

    /// Where an archive of the given kind is downloaded to
    pub fn archive_path(&self, kind: ArchiveKind) -> PathBuf {
        self.downloads_dir()
            .join(format!("archive.{}", kind.extension()))
    }

    /// Remove the cache and everything in it
    pub fn clear(self) -> io::Result<()> {
        let path = self.root().to_path_buf();
        self.dir.close()?;
        tracing::debug!(path = %path.display(), "cleared download cache");
        Ok(())
    }
}
