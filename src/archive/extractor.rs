use crate::archive::ArchiveKind;
use crate::core::{VendorError, VendorResult};
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use tar::Archive;

/// Extracts release archives (tar.gz, tar, zip) into a directory
pub struct ArchiveExtractor {
    dest_dir: PathBuf,
}

impl ArchiveExtractor {
    /// Create a new ArchiveExtractor
    pub fn new(dest_dir: PathBuf) -> Self {
        Self { dest_dir }
    }

    /// Extract an archive file into the destination directory
    ///
    /// Anything already in the destination is removed first.
    pub fn extract(&self, archive_path: &Path, kind: ArchiveKind) -> VendorResult<()> {
        if self.dest_dir.exists() {
            fs::remove_dir_all(&self.dest_dir)?;
        }
        fs::create_dir_all(&self.dest_dir)?;

        let result = match kind {
            ArchiveKind::TarGz => {
                let file = File::open(archive_path)?;
                self.extract_tar(GzDecoder::new(file))
            }
            ArchiveKind::Tar => self.extract_tar(File::open(archive_path)?),
            ArchiveKind::Zip => self.extract_zip(archive_path),
        };

        // Don't leave a half-extracted tree behind
        if result.is_err() {
            let _ = fs::remove_dir_all(&self.dest_dir);
        }

        result
    }

    fn extract_tar<R: Read>(&self, reader: R) -> VendorResult<()> {
        let mut archive = Archive::new(reader);
        archive.unpack(&self.dest_dir).map_err(|e| {
            VendorError::Archive(format!("Failed to extract tar archive: {}", e))
        })
    }

    fn extract_zip(&self, archive_path: &Path) -> VendorResult<()> {
        use zip::ZipArchive;

        let file = File::open(archive_path)?;
        let mut archive = ZipArchive::new(file)
            .map_err(|e| VendorError::Archive(format!("Invalid zip: {}", e)))?;

        archive
            .extract(&self.dest_dir)
            .map_err(|e| VendorError::Archive(format!("Extract failed: {}", e)))
    }
}
