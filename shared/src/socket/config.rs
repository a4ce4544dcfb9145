use replica_serde::MTU_SIZE_BYTES;

/// Contains Config properties which will be used by a Server or Client socket
#[derive(Clone, Debug)]
pub struct SocketConfig {
    /// Largest encoded message, wire code included, that will be sent or accepted
    pub max_payload_bytes: usize,
    /// Size of the buffer each datagram is received into
    pub receive_buffer_bytes: usize,
    /// Instances kept per registered message type for decoding into
    pub pool_capacity: usize,
}

impl Default for SocketConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: MTU_SIZE_BYTES,
            receive_buffer_bytes: 2048,
            pool_capacity: 1,
        }
    }
}
