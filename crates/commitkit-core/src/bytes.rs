//! Fixed-size 32-byte values: `b256` inputs and hash digests.
//!
//! Both are exchanged with the outside world as `0x`-prefixed, 64-character
//! hex strings. Parsing is strict: the prefix is required, the length must be
//! exact and every character must be a hex digit. Output is always lowercase.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{CommitError, CommitResult};

/// Length in bytes of a `b256` value and of every digest produced here.
pub const BYTES32_LEN: usize = 32;

/// Parse a `0x` + 64 hex literal into 32 raw bytes.
pub fn parse_hex32(input: &str) -> CommitResult<[u8; BYTES32_LEN]> {
    let body = input
        .strip_prefix("0x")
        .ok_or_else(|| CommitError::malformed_bytes32(input))?;

    if body.len() != BYTES32_LEN * 2 {
        return Err(CommitError::malformed_bytes32(input));
    }

    let mut out = [0u8; BYTES32_LEN];
    hex::decode_to_slice(body, &mut out).map_err(|_| CommitError::malformed_bytes32(input))?;
    Ok(out)
}

/// Render 32 bytes as `0x` + 64 lowercase hex characters.
pub fn to_hex32(bytes: &[u8; BYTES32_LEN]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// A `b256` input value, such as a secret or an on-chain identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Bytes32(pub [u8; BYTES32_LEN]);

impl Bytes32 {
    pub const ZERO: Bytes32 = Bytes32([0u8; BYTES32_LEN]);

    pub fn new(bytes: [u8; BYTES32_LEN]) -> Self {
        Self(bytes)
    }

    /// Decode a hex literal. See [`parse_hex32`].
    pub fn from_hex(input: &str) -> CommitResult<Self> {
        parse_hex32(input).map(Self)
    }

    pub fn to_hex(&self) -> String {
        to_hex32(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8; BYTES32_LEN] {
        &self.0
    }
}

impl From<[u8; BYTES32_LEN]> for Bytes32 {
    fn from(bytes: [u8; BYTES32_LEN]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Bytes32 {
    type Err = CommitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes32({})", self.to_hex())
    }
}

impl Serialize for Bytes32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Bytes32 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// The output of a hash over an encoded byte buffer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest(pub [u8; BYTES32_LEN]);

impl Digest {
    pub fn as_bytes(&self) -> &[u8; BYTES32_LEN] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// `0x`-prefixed lowercase hex, as submitted to the chain.
    pub fn to_hex(&self) -> String {
        to_hex32(&self.0)
    }

    pub fn from_hex(input: &str) -> CommitResult<Self> {
        parse_hex32(input).map(Self)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Digest {
    type Err = CommitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
