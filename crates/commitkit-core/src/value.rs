//! The encodable value vocabulary.
//!
//! A [`Value`] tree is what callers hand to the encoder. Whether something is
//! a tagged variant or an ordered record is decided when the tree is built,
//! never by inspecting names at encode time.
//!
//! JSON form (used by the CLI and by fixtures):
//!
//! ```json
//! { "seq": [
//!   { "variant": { "type": "ActionInput", "name": "Activate",
//!                  "payload": { "record": [["system", { "u64": 1 }]] } } },
//!   "unit"
//! ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::bytes::Bytes32;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Value {
    /// No payload. Contributes zero bytes.
    #[default]
    #[serde(rename = "unit")]
    Unit,

    #[serde(rename = "u64")]
    Unsigned64(u64),

    #[serde(rename = "bool")]
    Boolean(bool),

    #[serde(rename = "b256")]
    Bytes32(Bytes32),

    /// Raw UTF-8, no length prefix and no terminator.
    #[serde(rename = "text")]
    Text(String),

    /// A tagged-union instance. The discriminant is resolved from
    /// `type_name` + `variant_name` at encode time.
    #[serde(rename = "variant")]
    Variant {
        #[serde(rename = "type")]
        type_name: String,
        #[serde(rename = "name")]
        variant_name: String,
        #[serde(default)]
        payload: Box<Value>,
    },

    /// Fields in declared order. The order is part of the encoding.
    #[serde(rename = "record")]
    Record(Vec<(String, Value)>),

    /// Elements in order, with no count prefix.
    #[serde(rename = "seq")]
    Sequence(Vec<Value>),
}

impl Value {
    pub fn variant(
        type_name: impl Into<String>,
        variant_name: impl Into<String>,
        payload: impl Into<Value>,
    ) -> Self {
        Value::Variant {
            type_name: type_name.into(),
            variant_name: variant_name.into(),
            payload: Box::new(payload.into()),
        }
    }

    /// A variant with no payload, e.g. `Direction::North`.
    pub fn unit_variant(type_name: impl Into<String>, variant_name: impl Into<String>) -> Self {
        Self::variant(type_name, variant_name, Value::Unit)
    }

    pub fn record<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Record(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn seq<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Value::Sequence(items.into_iter().collect())
    }

    /// Short name of the value kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Unit => "unit",
            Value::Unsigned64(_) => "u64",
            Value::Boolean(_) => "bool",
            Value::Bytes32(_) => "b256",
            Value::Text(_) => "text",
            Value::Variant { .. } => "variant",
            Value::Record(_) => "record",
            Value::Sequence(_) => "seq",
        }
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Unsigned64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<Bytes32> for Value {
    fn from(v: Bytes32) -> Self {
        Value::Bytes32(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Sequence(v)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Unit
    }
}

/// Conversion from an application type into its encodable shape.
///
/// Implementors must emit record fields in the order the on-chain program
/// declares them.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::Sequence(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}
