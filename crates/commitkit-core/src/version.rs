//! Version helpers.
//!
//! Enum configuration files carry a version tag. Parsing is strict: an
//! unknown version is an error rather than a best-effort read, because a
//! misread variant order silently changes every commitment.

use std::fmt;

use crate::errors::{CommitError, CommitResult};

/// Known enum configuration versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistryVersion {
    #[default]
    V1,
}

impl RegistryVersion {
    /// Parse a version string (e.g. "v1").
    pub fn parse(s: &str) -> CommitResult<Self> {
        match s {
            "v1" => Ok(Self::V1),
            _ => Err(CommitError::invalid_config(format!(
                "unsupported enum config version: {s}"
            ))),
        }
    }

    /// Return the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
        }
    }
}

impl fmt::Display for RegistryVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
