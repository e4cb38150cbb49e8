// File: src/storage_node/node.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings a storage node needs before it can start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Address that receives payouts
    pub payment_address: String,
    /// Directory holding the node's shards
    pub storage_path: PathBuf,
    /// Maximum space the node may use, e.g. "512GB"
    pub storage_allocation: String,
}

impl NodeConfig {
    pub fn new(
        payment_address: impl Into<String>,
        storage_path: impl Into<PathBuf>,
        storage_allocation: impl Into<String>,
    ) -> Self {
        Self {
            payment_address: payment_address.into(),
            storage_path: storage_path.into(),
            storage_allocation: storage_allocation.into(),
        }
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads the configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}
