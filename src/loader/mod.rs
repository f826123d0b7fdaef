//! Reads and writes the per-chain registry files under a registry root
//!
//! A root holds one directory per chain, each with up to six files named after
//! the record kinds (`account.json`, `asset.json`, ...). A missing file is an
//! empty batch.

mod file_scanner;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub use file_scanner::FileScanner;

use crate::models::RecordKind;
use crate::registry::ChainRegistry;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("registry root {0:?} is not a directory")]
    MissingRoot(PathBuf),

    #[error("chain '{chain}' not found under {root:?}")]
    UnknownChain { chain: String, root: PathBuf },

    #[error("failed to scan {path:?}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to access {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path:?}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub struct RegistryLoader {
    root: PathBuf,
}

impl RegistryLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of every chain directory under the root, sorted
    pub fn discover_chains(&self) -> Result<Vec<String>, LoadError> {
        let chains: Vec<String> = FileScanner::scan_chain_dirs(&self.root)?
            .iter()
            .filter_map(|dir| dir.file_name())
            .filter_map(|name| name.to_str())
            .map(str::to_string)
            .collect();

        debug!("Discovered {} chains under {:?}", chains.len(), self.root);
        Ok(chains)
    }

    pub fn chain_dir(&self, chain: &str) -> PathBuf {
        self.root.join(chain)
    }

    pub fn load_chain(&self, chain: &str) -> Result<ChainRegistry, LoadError> {
        let dir = self.chain_dir(chain);
        if !dir.is_dir() {
            return Err(LoadError::UnknownChain {
                chain: chain.to_string(),
                root: self.root.clone(),
            });
        }

        let registry = ChainRegistry {
            chain: chain.to_string(),
            accounts: read_batch(&dir.join(RecordKind::Account.file_name()))?,
            assets: read_batch(&dir.join(RecordKind::Asset.file_name()))?,
            binaries: read_batch(&dir.join(RecordKind::Binary.file_name()))?,
            contracts: read_batch(&dir.join(RecordKind::Contract.file_name()))?,
            entities: read_batch(&dir.join(RecordKind::Entity.file_name()))?,
            pools: read_batch(&dir.join(RecordKind::Pool.file_name()))?,
        };

        debug!(
            "Loaded chain {}: {} accounts, {} assets, {} binaries, {} contracts, {} entities, {} pools",
            chain,
            registry.accounts.len(),
            registry.assets.len(),
            registry.binaries.len(),
            registry.contracts.len(),
            registry.entities.len(),
            registry.pools.len()
        );

        Ok(registry)
    }

    /// Rewrite the given kinds' files from `registry`
    pub fn write_kinds(
        &self,
        registry: &ChainRegistry,
        kinds: &[RecordKind],
    ) -> Result<(), LoadError> {
        let dir = self.chain_dir(&registry.chain);

        for kind in kinds {
            let path = dir.join(kind.file_name());
            match kind {
                RecordKind::Account => write_batch(&path, &registry.accounts)?,
                RecordKind::Asset => write_batch(&path, &registry.assets)?,
                RecordKind::Binary => write_batch(&path, &registry.binaries)?,
                RecordKind::Contract => write_batch(&path, &registry.contracts)?,
                RecordKind::Entity => write_batch(&path, &registry.entities)?,
                RecordKind::Pool => write_batch(&path, &registry.pools)?,
            }
            info!("Rewrote {:?}", path);
        }

        Ok(())
    }
}

/// Decode a JSON array of records; a missing file is an empty batch
pub fn read_batch<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>, LoadError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_batch(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_batch<R: DeserializeOwned>(content: &str) -> Result<Vec<R>, serde_json::Error> {
    serde_json::from_str(content)
}

/// Two-space indented JSON with a trailing newline
pub fn to_json<R: Serialize>(batch: &[R]) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(batch)?;
    json.push('\n');
    Ok(json)
}

pub fn write_batch<R: Serialize>(path: &Path, batch: &[R]) -> Result<(), LoadError> {
    let json = to_json(batch).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    std::fs::write(path, json).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests;
