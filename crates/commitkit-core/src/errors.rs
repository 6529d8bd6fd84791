//! Error types for commitkit-core.
//!
//! Every failure is local to a single encode/resolve/registration call and is
//! returned synchronously. Nothing here is fatal to the process: a caller can
//! register the missing enum (or fix its input) and try again.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type CommitResult<T> = Result<T, CommitError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    /// A variant's discriminant could not be determined, either because its
    /// enum type is unknown or because the variant is not in the declared list.
    #[error("enum variant '{variant_name}' of type '{type_name}' not found in provided context or global registry")]
    UnresolvedVariant {
        type_name: String,
        variant_name: String,
    },

    /// A hash literal was not `0x` followed by exactly 64 hex characters.
    #[error("malformed b256 literal: {input:?} (expected 0x followed by 64 hex characters)")]
    MalformedBytes32 { input: String },

    /// A value of unsupported shape was presented to the encoder.
    #[error("value cannot be encoded: {description}")]
    UnencodableValue { description: String },

    /// A registration was rejected before touching any registry.
    #[error("invalid registration for enum '{type_name}': {reason}")]
    InvalidRegistration { type_name: String, reason: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl CommitError {
    pub fn unresolved(type_name: impl Into<String>, variant_name: impl Into<String>) -> Self {
        Self::UnresolvedVariant {
            type_name: type_name.into(),
            variant_name: variant_name.into(),
        }
    }

    pub fn malformed_bytes32(input: impl Into<String>) -> Self {
        Self::MalformedBytes32 {
            input: input.into(),
        }
    }

    pub fn unencodable(description: impl Into<String>) -> Self {
        Self::UnencodableValue {
            description: description.into(),
        }
    }

    pub fn invalid_registration(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRegistration {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Stable machine-readable code for CLI/JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnresolvedVariant { .. } => "unresolved_variant",
            Self::MalformedBytes32 { .. } => "malformed_bytes32",
            Self::UnencodableValue { .. } => "unencodable_value",
            Self::InvalidRegistration { .. } => "invalid_registration",
            Self::InvalidConfig(_) => "invalid_config",
            Self::Serialization(_) => "serialization",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_message_names_variant_and_type() {
        let e = CommitError::unresolved("Direction", "Up");
        let msg = e.to_string();
        assert!(msg.contains("'Up'"));
        assert!(msg.contains("'Direction'"));
        assert_eq!(e.code(), "unresolved_variant");
    }

    #[test]
    fn malformed_message_quotes_input() {
        let e = CommitError::malformed_bytes32("0x12");
        assert!(e.to_string().contains("\"0x12\""));
    }
}
