use std::io;

use thiserror::Error;

use crate::{CodecError, SendError};

/// Errors that can occur while sending through a component socket
#[derive(Debug, Error)]
pub enum SocketError {
    /// No transport is attached
    #[error("Socket is not open. Attach a transport before sending")]
    NotOpen,

    /// Encoded message is larger than the configured maximum
    #[error("Encoded message of {size} bytes exceeds the maximum payload of {max} bytes")]
    Oversized {
        size: usize,
        max: usize,
    },

    /// Message could not be framed
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// Transport rejected the packet
    #[error("Send error: {0}")]
    Send(#[from] SendError),

    /// Binding the transport failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
