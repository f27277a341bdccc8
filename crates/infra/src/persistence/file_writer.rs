// crates/infra/src/persistence/file_writer.rs
use std::{
    fs,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically replace `path` with `data` via a temp file and rename.
    ///
    /// The engines rewrite files in place, so the destination must never
    /// hold a half-written buffer. Best-effort fsync narrows the window
    /// where a crash could lose the rename.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let path = path.as_ref();
        let parent = path.parent().ok_or_else(|| std::io::Error::other("path has no parent"))?;

        // Temp file sits in the destination directory; a cross-device
        // rename would not be atomic. PID + nanos keeps the name unique
        // without probing for collisions.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let mut writer = BufWriter::new(File::create(&tmp)?);
        writer.write_all(data)?;
        writer.flush()?;
        let _ = writer.get_ref().sync_all();

        fs::rename(&tmp, path)?;

        #[cfg(unix)]
        {
            // Sync the directory so the rename itself is durable.
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}
