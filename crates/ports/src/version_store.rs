// crates/ports/src/version_store.rs
use std::path::Path;

use serde::{Deserialize, Serialize};
use textfix_shared_kernel::Result;

/// DTO mirroring the persisted version file, kept free of domain types so
/// adapters stay independent of the domain crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
    pub revision: u32,
    pub start_year: i32,
    #[serde(default)]
    pub files: Vec<String>,
}

/// Port for loading and storing the project version file.
pub trait VersionStore: Send + Sync {
    /// `Ok(None)` when no version file exists yet.
    fn load(&self, path: &Path) -> Result<Option<VersionRecord>>;

    fn save(&self, path: &Path, record: &VersionRecord) -> Result<()>;
}
