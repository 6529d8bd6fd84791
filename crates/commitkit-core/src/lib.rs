//! commitkit-core
//!
//! Canonical encoding and hashing for commit-reveal against an on-chain
//! program. The program hashes structured values with a fixed byte layout;
//! this crate reproduces that layout off-chain so a client can compute a
//! commitment that the program will later recompute byte-for-byte.
//!
//! - `value`: the encodable value model
//! - `registry`: enum discriminant resolution (declaration order)
//! - `encoder`: the canonical byte layout
//! - `hasher`: incremental hashing over encoded segments
//! - `commitment`: `encode(actions) ++ encode(secret)` and reveal checks
//! - `protocol`: the fleet game contract's enums and typed actions

pub mod bytes;
pub mod commitment;
pub mod config;
pub mod encoder;
pub mod errors;
pub mod hash;
pub mod hasher;
pub mod protocol;
pub mod registry;
pub mod value;
pub mod version;

pub use crate::errors::{CommitError, CommitResult};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::bytes::{Bytes32, Digest};
    pub use crate::commitment::{commit_bytes, commitment_hash, verify_reveal, Commitment};
    pub use crate::config::{EnumConfig, HashingConfig};
    pub use crate::encoder::{encode, encode_into, encode_many, encode_with};
    pub use crate::hash::{hash_bytes, sha256, HashAlg};
    pub use crate::hasher::Hasher;
    pub use crate::registry::{register, resolve, EnumRegistry, Resolver};
    pub use crate::value::{ToValue, Value};
    pub use crate::{CommitError, CommitResult};
}
