pub mod check;
pub mod update;

use std::path::Path;
use vendorup::metadata::MetadataRecord;

/// Name to show for a package, falling back to its directory name
pub fn display_name(metadata: &MetadataRecord, path: &Path) -> String {
    if !metadata.name.is_empty() {
        return metadata.name.clone();
    }
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
