//! Canonical byte encoding of [`Value`] trees.
//!
//! Layout, matching the on-chain hasher:
//! - `u64`: 8 bytes big-endian
//! - `bool`: 1 byte, `1` or `0`
//! - `b256`: the 32 raw bytes
//! - text: raw UTF-8, no length, no terminator
//! - variant: 1 discriminant byte, then the payload (unit adds nothing)
//! - record: each field in declared order, concatenated
//! - sequence: each element in order, concatenated, no count
//!
//! No padding, separators or length prefixes anywhere. Encoding never
//! mutates a registry.

use tracing::trace;

use crate::errors::CommitResult;
use crate::registry::{EnumRegistry, Resolver};
use crate::value::Value;

/// Encode `value`, resolving variants against `context` then the global registry.
pub fn encode(value: &Value, context: Option<&EnumRegistry>) -> CommitResult<Vec<u8>> {
    encode_with(value, &Resolver::new(context))
}

/// Encode `value` with an explicit resolution policy.
pub fn encode_with(value: &Value, resolver: &Resolver<'_>) -> CommitResult<Vec<u8>> {
    let mut out = Vec::with_capacity(encoded_len_hint(value));
    write_value(&mut out, value, resolver)?;
    Ok(out)
}

/// Append the encoding of `value` to `out`.
///
/// On error `out` is left exactly as it was.
pub fn encode_into(out: &mut Vec<u8>, value: &Value, resolver: &Resolver<'_>) -> CommitResult<()> {
    let start = out.len();
    if let Err(e) = write_value(out, value, resolver) {
        out.truncate(start);
        return Err(e);
    }
    trace!(kind = value.kind(), bytes = out.len() - start, "encoded value");
    Ok(())
}

/// Concatenate the encodings of `values` in order.
///
/// Used for commitments over heterogeneous tuples (turn, timestamp, actions,
/// secret) without building an intermediate record.
pub fn encode_many<'v, I>(values: I, context: Option<&EnumRegistry>) -> CommitResult<Vec<u8>>
where
    I: IntoIterator<Item = &'v Value>,
{
    let resolver = Resolver::new(context);
    let mut out = Vec::new();
    for v in values {
        encode_into(&mut out, v, &resolver)?;
    }
    Ok(out)
}

fn write_value(out: &mut Vec<u8>, value: &Value, resolver: &Resolver<'_>) -> CommitResult<()> {
    match value {
        Value::Unit => {}
        Value::Unsigned64(n) => out.extend_from_slice(&n.to_be_bytes()),
        Value::Boolean(b) => out.push(u8::from(*b)),
        Value::Bytes32(b) => out.extend_from_slice(b.as_bytes()),
        Value::Text(s) => out.extend_from_slice(s.as_bytes()),
        Value::Variant {
            type_name,
            variant_name,
            payload,
        } => {
            let discriminant = resolver.resolve(type_name, variant_name)?;
            out.push(discriminant);
            write_value(out, payload, resolver)?;
        }
        Value::Record(fields) => {
            for (_, field) in fields {
                write_value(out, field, resolver)?;
            }
        }
        Value::Sequence(items) => {
            for item in items {
                write_value(out, item, resolver)?;
            }
        }
    }
    Ok(())
}

/// Exact size for fixed-width leaves, a lower bound otherwise.
fn encoded_len_hint(value: &Value) -> usize {
    match value {
        Value::Unit => 0,
        Value::Unsigned64(_) => 8,
        Value::Boolean(_) => 1,
        Value::Bytes32(_) => 32,
        Value::Text(s) => s.len(),
        Value::Variant { payload, .. } => 1 + encoded_len_hint(payload),
        Value::Record(fields) => fields.iter().map(|(_, v)| encoded_len_hint(v)).sum(),
        Value::Sequence(items) => items.iter().map(encoded_len_hint).sum(),
    }
}
