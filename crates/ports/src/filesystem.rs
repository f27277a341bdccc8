// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use textfix_shared_kernel::Result;

/// Port for whole-file reads and writes.
///
/// The engines assume the full input is in memory before any write begins,
/// so implementations must not stream input and output concurrently when
/// both name the same path.
pub trait TextFileStore: Send + Sync {
    /// Read the entire file into memory.
    fn load(&self, path: &Path) -> Result<Vec<u8>>;

    /// Replace the file contents with `data`.
    fn save(&self, path: &Path, data: &[u8]) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;
}

/// Port for locating the project marker that anchors version maintenance.
pub trait ProjectLocator: Send + Sync {
    /// Walk from `start` toward the filesystem root and return the first
    /// solution file found, or `None` when no ancestor carries one.
    fn find_solution(&self, start: &Path) -> Result<Option<PathBuf>>;
}
