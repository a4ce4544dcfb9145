use std::net::SocketAddr;

cfg_if! {
    if #[cfg(feature = "transport_udp")] {
        pub mod udp;
    } else {}
}

pub mod channel;
mod delivery;
mod error;

pub use delivery::{Delivery, DeliveryMode};
pub use error::{RecvError, SendError};

pub trait PacketSender: Send + Sync {
    /// Sends a packet to `address`
    fn send(&self, address: &SocketAddr, payload: &[u8], delivery: Delivery)
        -> Result<(), SendError>;
    /// The address packets are sent from
    fn local_addr(&self) -> SocketAddr;
}

pub trait PacketReceiver: Send {
    /// Receives the next pending packet and its sender, if any
    fn receive(&mut self) -> Result<Option<(SocketAddr, &[u8])>, RecvError>;
}
