pub mod metadata_store;
pub mod replacer;

pub use metadata_store::YamlMetadataStore;
pub use replacer::DirectoryReplacer;
