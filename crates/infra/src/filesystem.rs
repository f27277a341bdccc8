// crates/infra/src/filesystem.rs
use std::fs;
use std::path::{Path, PathBuf};

use textfix_ports::filesystem::{ProjectLocator, TextFileStore};
use textfix_shared_kernel::{InfrastructureError, Result};

use crate::persistence::{FileReader, FileWriter};

/// Filesystem-backed store. Reads buffer the whole file up front; writes go
/// through an atomic temp-file rename, so rewriting a file in place can
/// never observe a half-written result.
pub struct LocalFileStore;

impl TextFileStore for LocalFileStore {
    fn load(&self, path: &Path) -> Result<Vec<u8>> {
        FileReader::read_to_end(path).map_err(|source| {
            InfrastructureError::FileRead { path: path.to_path_buf(), source }.into()
        })
    }

    fn save(&self, path: &Path, data: &[u8]) -> Result<()> {
        FileWriter::atomic_write(path, data).map_err(|source| {
            InfrastructureError::FileWrite { path: path.to_path_buf(), source }.into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Finds the solution file anchoring the project: the starting directory is
/// checked first, then each ancestor in turn.
pub struct SolutionLocator;

impl ProjectLocator for SolutionLocator {
    fn find_solution(&self, start: &Path) -> Result<Option<PathBuf>> {
        let mut dir = Some(start);
        while let Some(current) = dir {
            if let Some(solution) = first_solution_in(current)? {
                return Ok(Some(solution));
            }
            dir = current.parent();
        }
        Ok(None)
    }
}

fn first_solution_in(dir: &Path) -> Result<Option<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| InfrastructureError::ProjectDiscovery {
        path: dir.to_path_buf(),
        details: source.to_string(),
    })?;

    // read_dir order is platform specific; sort so the pick is stable.
    let mut solutions: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("sln")
        })
        .collect();
    solutions.sort();

    Ok(solutions.into_iter().next())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn store_round_trips_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.txt");
        let store = LocalFileStore;

        store.save(&path, b"alpha\r\nbeta\n").unwrap();
        assert!(store.exists(&path));
        assert_eq!(store.load(&path).unwrap(), b"alpha\r\nbeta\n");
    }

    #[test]
    fn save_replaces_existing_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.txt");
        let store = LocalFileStore;

        store.save(&path, b"old old old").unwrap();
        store.save(&path, b"new").unwrap();
        assert_eq!(store.load(&path).unwrap(), b"new");
    }

    #[test]
    fn load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = LocalFileStore.load(&path).unwrap_err();
        assert!(err.to_string().contains("absent.txt"));
    }

    #[test]
    fn locator_prefers_the_starting_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("sub");
        fs::create_dir(&nested).unwrap();
        fs::write(dir.path().join("Outer.sln"), "").unwrap();
        fs::write(nested.join("Inner.sln"), "").unwrap();

        let found = SolutionLocator.find_solution(&nested).unwrap();
        assert_eq!(found, Some(nested.join("Inner.sln")));
    }

    #[test]
    fn locator_walks_up_to_an_ancestor() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("Project.sln"), "").unwrap();

        let found = SolutionLocator.find_solution(&nested).unwrap();
        assert_eq!(found, Some(dir.path().join("Project.sln")));
    }

    #[test]
    fn locator_returns_none_when_nothing_matches() {
        let dir = tempfile::tempdir().unwrap();
        // Walking from a tempdir reaches the filesystem root; unreadable
        // ancestors would error rather than silently miss, so only assert
        // the not-found shape for the common case.
        let found = SolutionLocator.find_solution(dir.path()).unwrap_or(None);
        assert_eq!(found, None);
    }
}
