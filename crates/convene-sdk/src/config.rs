use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SdkError, SdkResult};

/// Which key-value backend holds the partitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Nothing persists past the process.
    Memory,
    /// One JSON file per partition under `data_dir`.
    #[default]
    File,
}

/// Content store configuration, usually read from `convene.toml`.
///
/// ```toml
/// backend = "file"
/// data_dir = "./site-data"
/// seed_on_open = true
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: Backend,
    pub data_dir: PathBuf,
    /// Populate absent partitions from the bundled fixtures on open.
    pub seed_on_open: bool,
    /// Byte limit for the memory backend. Ignored by the file backend.
    pub quota_bytes: Option<usize>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: Backend::File,
            data_dir: PathBuf::from(".convene"),
            seed_on_open: true,
            quota_bytes: None,
        }
    }
}

impl StoreConfig {
    /// An unseeded in-memory configuration, handy for tests.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory,
            seed_on_open: false,
            ..Default::default()
        }
    }

    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> SdkResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SdkError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> SdkResult<Self> {
        toml::from_str(raw).map_err(|e| SdkError::Config(e.to_string()))
    }
}
