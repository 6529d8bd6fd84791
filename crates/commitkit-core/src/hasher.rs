//! Incremental hasher over canonically encoded values.
//!
//! A [`Hasher`] keeps an append-only buffer of encoded segments. Finalizing
//! hashes the whole buffer from the start and leaves it in place, so the
//! hasher can keep accumulating after a digest has been taken.
//!
//! ```
//! use commitkit_core::prelude::*;
//!
//! let ctx = EnumRegistry::new()
//!     .with("ActionInput", ["Activate", "SendFleet"])?;
//! let mut hasher = Hasher::with_context(ctx);
//! let digest = hasher
//!     .update(&Value::from(7u64))?
//!     .update(&Value::variant(
//!         "ActionInput",
//!         "Activate",
//!         Value::record([("system", Value::from(1u64))]),
//!     ))?
//!     .finalize();
//! assert_eq!(hasher.get_bytes().len(), 8 + 9);
//! assert_eq!(digest, sha256(hasher.get_bytes()));
//! # Ok::<(), CommitError>(())
//! ```

use tracing::trace;

use crate::bytes::Digest;
use crate::encoder::encode_into;
use crate::errors::CommitResult;
use crate::hash::{hash_bytes, HashAlg};
use crate::registry::{EnumRegistry, Resolver};
use crate::value::{ToValue, Value};

#[derive(Debug, Clone, Default)]
pub struct Hasher {
    buf: Vec<u8>,
    context: Option<EnumRegistry>,
    alg: HashAlg,
}

impl Hasher {
    /// Empty SHA-256 hasher resolving variants against the global registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty hasher whose updates consult `context` before the global registry.
    pub fn with_context(context: EnumRegistry) -> Self {
        Self {
            context: Some(context),
            ..Self::default()
        }
    }

    /// Switch the digest algorithm. The buffer is unaffected.
    pub fn algorithm(mut self, alg: HashAlg) -> Self {
        self.alg = alg;
        self
    }

    pub fn alg(&self) -> HashAlg {
        self.alg
    }

    pub fn context(&self) -> Option<&EnumRegistry> {
        self.context.as_ref()
    }

    /// Append the encoding of `value`.
    ///
    /// If encoding fails nothing is appended.
    pub fn update(&mut self, value: &Value) -> CommitResult<&mut Self> {
        let resolver = Resolver::new(self.context.as_ref());
        encode_into(&mut self.buf, value, &resolver)?;
        trace!(total = self.buf.len(), "hasher updated");
        Ok(self)
    }

    /// Append the encoding of `value`, using `context` for this call instead of
    /// the hasher's own context.
    pub fn update_with(&mut self, value: &Value, context: &EnumRegistry) -> CommitResult<&mut Self> {
        encode_into(&mut self.buf, value, &Resolver::new(Some(context)))?;
        trace!(total = self.buf.len(), "hasher updated with call context");
        Ok(self)
    }

    /// Append any [`ToValue`] application type.
    pub fn update_typed<T: ToValue + ?Sized>(&mut self, item: &T) -> CommitResult<&mut Self> {
        self.update(&item.to_value())
    }

    /// Digest of everything appended since creation or the last reset.
    pub fn finalize(&self) -> Digest {
        hash_bytes(self.alg, &self.buf)
    }

    /// Alias of [`Hasher::finalize`].
    pub fn digest(&self) -> Digest {
        self.finalize()
    }

    pub fn get_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Clear the buffer, keeping the context and algorithm.
    pub fn reset(&mut self) -> &mut Self {
        self.buf.clear();
        self
    }
}
