//! Swapping a vendored directory for a freshly extracted tree

use crate::core::{VendorError, VendorResult};
use crate::di::traits::PackageReplacer;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Replaces a vendored package directory with a new tree
///
/// The old tree is parked in a hidden sibling directory until the new one is
/// in place, and restored if the move fails.
#[derive(Debug, Clone, Default)]
pub struct DirectoryReplacer {
    preserve_files: Vec<String>,
}

impl DirectoryReplacer {
    /// `preserve_files` are copied from the old tree into the new one when
    /// the new one lacks them
    pub fn new(preserve_files: Vec<String>) -> Self {
        Self { preserve_files }
    }

    fn backup_path(target: &Path) -> VendorResult<PathBuf> {
        let name = target.file_name().ok_or_else(|| {
            VendorError::Replace(format!("Invalid package path: {}", target.display()))
        })?;
        let parent = target.parent().unwrap_or_else(|| Path::new("."));
        Ok(parent.join(format!(".{}.vendorup-old", name.to_string_lossy())))
    }

    fn carry_over_preserved(&self, old_root: &Path, new_root: &Path) -> VendorResult<()> {
        for name in &self.preserve_files {
            let src = old_root.join(name);
            let dst = new_root.join(name);
            if !src.exists() || dst.exists() {
                continue;
            }

            tracing::debug!(file = %name, "preserving file from previous version");
            if src.is_dir() {
                copy_dir_all(&src, &dst)?;
            } else {
                if let Some(parent) = dst.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(&src, &dst)?;
            }
        }
        Ok(())
    }
}

/// Recursively copy a directory tree
fn copy_dir_all(from: &Path, to: &Path) -> VendorResult<()> {
    for entry in WalkDir::new(from) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(|e| VendorError::Path(format!("Failed to compute relative path: {}", e)))?;
        let dest = to.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}

/// Move a directory, copying when a rename is not possible (e.g. across filesystems)
fn move_dir(from: &Path, to: &Path) -> VendorResult<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::debug!(error = %e, "rename failed, copying instead");
            copy_dir_all(from, to)
        }
    }
}

impl PackageReplacer for DirectoryReplacer {
    fn replace_package(&self, new_root: &Path, target: &Path) -> VendorResult<()> {
        if !new_root.is_dir() {
            return Err(VendorError::Replace(format!(
                "New package root is not a directory: {}",
                new_root.display()
            )));
        }

        // "." or ".." have no file name to derive the backup from
        let target = if target.exists() {
            fs::canonicalize(target)?
        } else {
            target.to_path_buf()
        };
        let target = target.as_path();

        let backup = Self::backup_path(target)?;
        if backup.exists() {
            if target.exists() {
                tracing::warn!(backup = %backup.display(), "removing stale backup");
                fs::remove_dir_all(&backup)?;
            } else {
                tracing::warn!(
                    backup = %backup.display(),
                    target = %target.display(),
                    "package missing, restoring backup left by an interrupted update"
                );
                fs::rename(&backup, target)?;
            }
        }

        let had_old = target.exists();
        if had_old {
            self.carry_over_preserved(target, new_root)?;
        } else if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        if had_old {
            fs::rename(target, &backup).map_err(|e| {
                VendorError::Replace(format!(
                    "Failed to move {} aside: {}",
                    target.display(),
                    e
                ))
            })?;
        }

        if let Err(e) = move_dir(new_root, target) {
            let _ = fs::remove_dir_all(target);
            if had_old {
                if let Err(restore_err) = fs::rename(&backup, target) {
                    tracing::warn!(
                        backup = %backup.display(),
                        error = %restore_err,
                        "failed to restore previous package"
                    );
                }
            }
            return Err(VendorError::Replace(format!(
                "Failed to install new package at {}: {}",
                target.display(),
                e
            )));
        }

        if had_old {
            if let Err(e) = fs::remove_dir_all(&backup) {
                tracing::warn!(backup = %backup.display(), error = %e, "failed to remove backup");
            }
        }

        tracing::info!(target = %target.display(), "replaced package contents");
        Ok(())
    }
}
