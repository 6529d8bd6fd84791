//! Configuration structures for commitkit-core.
//!
//! The enum variant orders a deployment uses are a fixed, versioned constant
//! of the protocol and are meant to live in a checked-in JSON file:
//!
//! ```json
//! {
//!   "version": "v1",
//!   "enums": {
//!     "ActionInput": ["Activate", "SendFleet"],
//!     "Destination": ["Eventual", "Known"]
//!   }
//! }
//! ```
//!
//! The core crate itself does not read environment variables or files. The
//! caller reads the bytes and hands them over.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CommitError, CommitResult};
use crate::hash::HashAlg;
use crate::registry::{self, EnumRegistry};
use crate::version::RegistryVersion;

/// Global configuration container.
#[derive(Debug, Clone, Default)]
pub struct CoreConfig {
    pub hashing: HashingConfig,
    pub enums: EnumConfig,
}

/// Hashing-related configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashingConfig {
    #[serde(default)]
    pub algorithm: HashAlg,
}

/// Serialized form of an enum registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumConfig {
    pub version: String,
    #[serde(default)]
    pub enums: BTreeMap<String, Vec<String>>,
}

impl Default for EnumConfig {
    fn default() -> Self {
        Self {
            version: RegistryVersion::default().as_str().to_string(),
            enums: BTreeMap::new(),
        }
    }
}

impl EnumConfig {
    pub fn from_json_str(s: &str) -> CommitResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| CommitError::serialization(format!("invalid enum config: {e}")))
    }

    pub fn from_json_slice(bytes: &[u8]) -> CommitResult<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| CommitError::serialization(format!("invalid enum config: {e}")))
    }

    pub fn to_json_pretty(&self) -> CommitResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CommitError::serialization(format!("failed to serialize enum config: {e}")))
    }

    /// Build a validated registry. Every entry goes through registration checks.
    pub fn to_registry(&self) -> CommitResult<EnumRegistry> {
        RegistryVersion::parse(&self.version)?;

        let mut reg = EnumRegistry::new();
        for (name, variants) in &self.enums {
            reg.register(name, variants.iter().cloned())?;
        }
        debug!(version = %self.version, enums = reg.len(), "loaded enum config");
        Ok(reg)
    }

    /// Validate and install every entry in the process-wide registry.
    ///
    /// Nothing is installed unless the whole config is valid.
    pub fn install_global(&self) -> CommitResult<EnumRegistry> {
        let reg = self.to_registry()?;
        registry::register_all(&reg);
        Ok(reg)
    }
}

impl From<&EnumRegistry> for EnumConfig {
    fn from(reg: &EnumRegistry) -> Self {
        Self {
            version: RegistryVersion::default().as_str().to_string(),
            enums: reg.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        }
    }
}

/// Validate a full configuration object.
pub fn validate_config(cfg: &CoreConfig) -> CommitResult<()> {
    cfg.enums.to_registry().map(|_| ())
}
