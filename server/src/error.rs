use thiserror::Error;

use replica_shared::{ConnectionId, SocketError};

/// Errors that can occur while sending from the server
#[derive(Debug, Error)]
pub enum ServerError {
    /// No transport is attached
    #[error("Server is not listening. Call listen() before sending")]
    NotListening,

    /// The connection id was never assigned, or has been disconnected
    #[error("Unknown connection {id}")]
    UnknownConnection {
        id: ConnectionId,
    },

    #[error("Socket error: {0}")]
    Socket(#[from] SocketError),
}
