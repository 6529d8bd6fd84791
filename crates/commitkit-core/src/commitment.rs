//! Commit-reveal assembly.
//!
//! A commitment is `encode(actions) ++ encode(secret)`, hashed. The action
//! count is not encoded, so the bytes cannot be parsed back: a reveal is
//! checked by recomputing the digest over the revealed actions and secret.

use tracing::debug;

use crate::bytes::{Bytes32, Digest};
use crate::encoder::encode_into;
use crate::errors::CommitResult;
use crate::hash::{hash_bytes, HashAlg};
use crate::registry::Resolver;
use crate::value::{ToValue, Value};

/// Encoded commitment bytes and their digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commitment {
    pub bytes: Vec<u8>,
    pub digest: Digest,
}

impl Commitment {
    /// Build the commitment over `actions` (one element each, no count) and `secret`.
    pub fn build(actions: &[Value], secret: &Bytes32, resolver: &Resolver<'_>) -> CommitResult<Self> {
        Self::build_with_alg(actions, secret, resolver, HashAlg::Sha256)
    }

    pub fn build_with_alg(
        actions: &[Value],
        secret: &Bytes32,
        resolver: &Resolver<'_>,
        alg: HashAlg,
    ) -> CommitResult<Self> {
        let bytes = commit_bytes(actions, secret, resolver)?;
        let digest = hash_bytes(alg, &bytes);
        debug!(
            actions = actions.len(),
            bytes = bytes.len(),
            digest = %digest,
            "built commitment"
        );
        Ok(Self { bytes, digest })
    }

    /// Typed convenience for application actions.
    pub fn from_actions<T: ToValue>(
        actions: &[T],
        secret: &Bytes32,
        resolver: &Resolver<'_>,
    ) -> CommitResult<Self> {
        let values: Vec<Value> = actions.iter().map(ToValue::to_value).collect();
        Self::build(&values, secret, resolver)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// `encode(actions) ++ encode(secret)`.
pub fn commit_bytes(actions: &[Value], secret: &Bytes32, resolver: &Resolver<'_>) -> CommitResult<Vec<u8>> {
    let mut out = Vec::new();
    for action in actions {
        encode_into(&mut out, action, resolver)?;
    }
    out.extend_from_slice(secret.as_bytes());
    Ok(out)
}

/// SHA-256 commitment hash over `actions` and `secret`.
pub fn commitment_hash(actions: &[Value], secret: &Bytes32, resolver: &Resolver<'_>) -> CommitResult<Digest> {
    Commitment::build(actions, secret, resolver).map(|c| c.digest)
}

/// Recompute the commitment over revealed data and compare with `expected`.
pub fn verify_reveal(
    actions: &[Value],
    secret: &Bytes32,
    expected: &Digest,
    resolver: &Resolver<'_>,
) -> CommitResult<bool> {
    let actual = commitment_hash(actions, secret, resolver)?;
    let ok = actual == *expected;
    if !ok {
        debug!(expected = %expected, actual = %actual, "reveal does not match commitment");
    }
    Ok(ok)
}
