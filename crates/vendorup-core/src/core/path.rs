use crate::core::error::{VendorError, VendorResult};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the metadata sidecar kept next to a vendored package
pub const METADATA_FILE_NAME: &str = "METADATA.yaml";

/// Get the Vendorup config directory
///
/// Platform-specific locations:
/// - Windows: %APPDATA%\vendorup
/// - Linux: ~/.config/vendorup
/// - macOS: ~/Library/Application Support/vendorup
pub fn vendorup_home() -> VendorResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| VendorError::Path("Could not determine config directory".to_string()))?;
    Ok(config_dir.join("vendorup"))
}

/// Get the cache directory that holds per-update download caches
///
/// Platform-specific locations:
/// - Windows: %LOCALAPPDATA%\vendorup
/// - Linux: ~/.cache/vendorup
/// - macOS: ~/Library/Caches/vendorup
pub fn cache_dir() -> VendorResult<PathBuf> {
    let cache_dir = dirs::cache_dir()
        .ok_or_else(|| VendorError::Path("Could not determine cache directory".to_string()))?;
    Ok(cache_dir.join("vendorup"))
}

/// Get the config file path
pub fn config_file() -> VendorResult<PathBuf> {
    Ok(vendorup_home()?.join("config.yaml"))
}

/// Get the metadata sidecar path for a package directory
pub fn metadata_file(package_dir: &Path) -> PathBuf {
    package_dir.join(METADATA_FILE_NAME)
}

/// Ensure a directory exists, creating it and its parents if needed
pub fn ensure_dir(path: &Path) -> VendorResult<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
