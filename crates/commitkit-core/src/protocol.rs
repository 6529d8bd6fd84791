//! Enum declarations and typed actions of the fleet game contract.
//!
//! These mirror the contract's source. The variant lists are a versioned
//! protocol constant: changing the order here without changing the contract
//! breaks every commitment.
//!
//! ```text
//! enum ActionInput { Activate: ActivateInput, SendFleet: SendFleetInput }
//! enum Destination { Eventual: b256, Known: u64 }
//! struct ActivateInput { system: u64 }
//! struct SendFleetInput { from: u64, spaceships: u64, destination: Destination }
//! ```

use serde::{Deserialize, Serialize};

use crate::bytes::Bytes32;
use crate::errors::CommitResult;
use crate::registry::{register, EnumRegistry};
use crate::value::{ToValue, Value};

pub const ACTION_INPUT: &str = "ActionInput";
pub const ACTION_INPUT_VARIANTS: [&str; 2] = ["Activate", "SendFleet"];

pub const DESTINATION: &str = "Destination";
pub const DESTINATION_VARIANTS: [&str; 2] = ["Eventual", "Known"];

/// Registry holding the contract's enums.
pub fn registry() -> CommitResult<EnumRegistry> {
    EnumRegistry::new()
        .with(ACTION_INPUT, ACTION_INPUT_VARIANTS)?
        .with(DESTINATION, DESTINATION_VARIANTS)
}

/// Install the contract's enums in the process-wide registry.
pub fn register_defaults() -> CommitResult<()> {
    register(ACTION_INPUT, ACTION_INPUT_VARIANTS)?;
    register(DESTINATION, DESTINATION_VARIANTS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Destination {
    /// A not-yet-revealed target, identified by hash.
    Eventual(Bytes32),
    Known(u64),
}

impl ToValue for Destination {
    fn to_value(&self) -> Value {
        match self {
            Destination::Eventual(h) => Value::variant(DESTINATION, "Eventual", *h),
            Destination::Known(id) => Value::variant(DESTINATION, "Known", *id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionInput {
    Activate {
        system: u64,
    },
    SendFleet {
        from: u64,
        spaceships: u64,
        destination: Destination,
    },
}

impl ToValue for ActionInput {
    fn to_value(&self) -> Value {
        match self {
            ActionInput::Activate { system } => Value::variant(
                ACTION_INPUT,
                "Activate",
                Value::record([("system", Value::from(*system))]),
            ),
            ActionInput::SendFleet {
                from,
                spaceships,
                destination,
            } => Value::variant(
                ACTION_INPUT,
                "SendFleet",
                Value::record([
                    ("from", Value::from(*from)),
                    ("spaceships", Value::from(*spaceships)),
                    ("destination", destination.to_value()),
                ]),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode_with;
    use crate::registry::Resolver;

    fn enc(v: &Value) -> Vec<u8> {
        let reg = registry().unwrap();
        encode_with(v, &Resolver::with_base(None, &reg)).unwrap()
    }

    #[test]
    fn activate_layout() {
        let a = ActionInput::Activate { system: 1 };
        assert_eq!(enc(&a.to_value()), [0, 0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn eventual_destination_layout() {
        let target: Bytes32 = "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
            .parse()
            .unwrap();
        let a = ActionInput::SendFleet {
            from: 1,
            spaceships: 100,
            destination: Destination::Eventual(target),
        };
        let bytes = enc(&a.to_value());
        assert_eq!(bytes.len(), 1 + 8 + 8 + 1 + 32);
        assert_eq!(&bytes[..18], &[1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 100, 0]);
        assert_eq!(&bytes[18..], target.as_bytes());
    }

    #[test]
    fn known_destination_discriminant() {
        assert_eq!(enc(&Destination::Known(42).to_value())[0], 1);
    }

    #[test]
    fn typed_serde_shape() {
        let a: ActionInput = serde_json::from_str(
            r#"{ "SendFleet": { "from": 1, "spaceships": 100, "destination": { "Known": 2 } } }"#,
        )
        .unwrap();
        assert_eq!(
            a,
            ActionInput::SendFleet {
                from: 1,
                spaceships: 100,
                destination: Destination::Known(2),
            }
        );
    }
}
