//! File scanning utilities for discovering chain directories

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::LoadError;
use crate::models::RecordKind;

pub struct FileScanner;

impl FileScanner {
    /// Directories directly under `root` that hold at least one registry file
    pub fn scan_chain_dirs(root: &Path) -> Result<Vec<PathBuf>, LoadError> {
        if !root.is_dir() {
            return Err(LoadError::MissingRoot(root.to_path_buf()));
        }

        let mut chains = Vec::new();

        for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| LoadError::Walk {
                path: root.to_path_buf(),
                source: e,
            })?;
            let path = entry.path();

            let is_hidden = entry
                .file_name()
                .to_str()
                .map(|name| name.starts_with('.'))
                .unwrap_or(false);

            if entry.file_type().is_dir() && !is_hidden && Self::has_registry_file(path) {
                chains.push(path.to_path_buf());
            }
        }

        chains.sort();
        Ok(chains)
    }

    fn has_registry_file(dir: &Path) -> bool {
        RecordKind::ALL
            .iter()
            .any(|kind| dir.join(kind.file_name()).is_file())
    }
}
