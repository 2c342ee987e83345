//! `METADATA.yaml` persistence

use crate::core::VendorResult;
use crate::di::traits::MetadataStore;
use crate::metadata::{MetadataRecord, UpgradeDate};
use chrono::{Datelike, Local};
use std::path::Path;

/// Reads and writes `METADATA.yaml` files
///
/// Writing stamps `third_party.last_upgrade_date` with today's date.
#[derive(Debug, Clone, Default)]
pub struct YamlMetadataStore;

impl YamlMetadataStore {
    pub fn new() -> Self {
        Self
    }
}

fn today() -> UpgradeDate {
    let now = Local::now();
    UpgradeDate {
        year: now.year(),
        month: now.month(),
        day: now.day(),
    }
}

impl MetadataStore for YamlMetadataStore {
    fn read_metadata(&self, package_dir: &Path) -> VendorResult<MetadataRecord> {
        MetadataRecord::load(package_dir)
    }

    fn write_metadata(&self, package_dir: &Path, record: &MetadataRecord) -> VendorResult<()> {
        let mut stamped = record.clone();
        stamped.third_party.last_upgrade_date = Some(today());
        stamped.save(package_dir)
    }
}
