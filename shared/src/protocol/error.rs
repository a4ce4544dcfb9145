use thiserror::Error;

use replica_serde::SerdeErr;

use crate::WireCode;

/// Errors that can occur while registering or resolving message types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Message type was never registered
    #[error("Message type {type_name} is not registered. Message types must be registered with Protocol via add_message()")]
    NotRegistered {
        type_name: &'static str,
    },

    /// Wire code has no registered type, usually a protocol mismatch between peers
    #[error("Wire code {code} has no registered message type. Both peers must register the same types in the same order")]
    UnknownType {
        code: WireCode,
    },

    /// Message type registered twice
    #[error("Message type {type_name} is already registered")]
    AlreadyRegistered {
        type_name: &'static str,
    },

    /// All one-byte wire codes are taken
    #[error("Cannot register more than 256 message types")]
    CodeSpaceExhausted,
}

/// Errors that can occur during protocol operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// Protocol is locked and cannot be modified
    #[error("Protocol is already locked and cannot be modified. Protocol.lock() has been called and no further changes are allowed")]
    AlreadyLocked,

    /// Registering a message type failed
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Errors that can occur while framing or unframing a single message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Message had no bytes, not even a wire code
    #[error("Empty message, expected at least a wire code")]
    Empty,

    /// Wire code has no registered type
    #[error("Unknown wire code {code}")]
    UnknownType {
        code: WireCode,
    },

    /// Tried to write a message type that was never registered
    #[error("Message type {type_name} is not registered")]
    NotRegistered {
        type_name: &'static str,
    },

    /// Payload decoded but bytes were left over
    #[error("{count} trailing byte(s) after message payload")]
    TrailingBytes {
        count: usize,
    },

    /// Payload failed to decode
    #[error("Payload error: {0}")]
    Serde(#[from] SerdeErr),
}
