use std::{io, net::SocketAddr};

use thiserror::Error;

/// Errors that can occur while handing a packet to a transport
#[derive(Debug, Error)]
pub enum SendError {
    /// The other end of the transport is gone
    #[error("Transport is closed")]
    Closed,

    /// The transport cannot reach this address
    #[error("Address {address} is not reachable over this transport")]
    Unreachable {
        address: SocketAddr,
    },

    /// The underlying socket failed
    #[error("IO error while sending: {0}")]
    Io(#[from] io::Error),
}

/// Errors that can occur while polling a transport for packets
#[derive(Debug, Error)]
pub enum RecvError {
    /// The other end of the transport is gone
    #[error("Transport is closed")]
    Closed,

    /// The underlying socket failed
    #[error("IO error while receiving: {0}")]
    Io(#[from] io::Error),
}
