// crates/infra/src/version_store.rs
use std::path::Path;

use textfix_ports::version_store::{VersionRecord, VersionStore};
use textfix_shared_kernel::{InfrastructureError, Result};

use crate::persistence::{FileReader, FileWriter};

/// Version-file adapter persisting the record as pretty-printed JSON.
pub struct JsonVersionStore;

impl VersionStore for JsonVersionStore {
    fn load(&self, path: &Path) -> Result<Option<VersionRecord>> {
        if !path.exists() {
            return Ok(None);
        }
        let buf = FileReader::read_to_end(path).map_err(|source| {
            InfrastructureError::FileRead { path: path.to_path_buf(), source }
        })?;
        let record: VersionRecord = serde_json::from_slice(&buf)?;
        Ok(Some(record))
    }

    fn save(&self, path: &Path, record: &VersionRecord) -> Result<()> {
        let mut data = serde_json::to_vec_pretty(record)?;
        data.push(b'\n');
        FileWriter::atomic_write(path, &data).map_err(|source| {
            InfrastructureError::FileWrite { path: path.to_path_buf(), source }.into()
        })
    }
}
