//! Hash primitives over encoded bytes.
//!
//! `sha256` is the algorithm the on-chain program uses and the default
//! everywhere. `blake3` is available behind the `blake3` feature for
//! off-chain uses that do not need to match the chain.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

use crate::bytes::Digest;
use crate::errors::{CommitError, CommitResult};

/// Hash algorithm identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlg {
    #[default]
    Sha256,
    #[cfg(feature = "blake3")]
    Blake3,
}

impl HashAlg {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlg::Sha256 => "sha256",
            #[cfg(feature = "blake3")]
            HashAlg::Blake3 => "blake3",
        }
    }
}

impl FromStr for HashAlg {
    type Err = CommitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha256" => Ok(HashAlg::Sha256),
            #[cfg(feature = "blake3")]
            "blake3" => Ok(HashAlg::Blake3),
            _ => Err(CommitError::invalid_config(format!(
                "unsupported hash algorithm: {s}"
            ))),
        }
    }
}

impl fmt::Display for HashAlg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hash raw bytes using the selected algorithm.
pub fn hash_bytes(alg: HashAlg, bytes: &[u8]) -> Digest {
    match alg {
        HashAlg::Sha256 => sha256(bytes),
        #[cfg(feature = "blake3")]
        HashAlg::Blake3 => Digest(*blake3::hash(bytes).as_bytes()),
    }
}

/// SHA-256 of `bytes`, matching the chain's `sha256` over the same buffer.
pub fn sha256(bytes: &[u8]) -> Digest {
    let mut h = Sha256::new();
    h.update(bytes);
    Digest(h.finalize().into())
}

/// Hash raw bytes and return `0x`-prefixed hex.
pub fn hash_bytes_hex(alg: HashAlg, bytes: &[u8]) -> String {
    hash_bytes(alg, bytes).to_hex()
}

/// Parse an algorithm name, for config and CLI input.
pub fn parse_alg(s: &str) -> CommitResult<HashAlg> {
    s.parse()
}
