use thiserror::Error;

use replica_shared::SocketError;

/// Errors that can occur while sending from the client
#[derive(Debug, Error)]
pub enum ClientError {
    /// No server endpoint is set
    #[error("Client is not connected. Call connect() before sending")]
    NotConnected,

    #[error("Socket error: {0}")]
    Socket(#[from] SocketError),
}
