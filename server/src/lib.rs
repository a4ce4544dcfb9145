//! # Replica Server
//! A server socket that receives registered replica messages from many peers over UDP or an
//! in-memory transport, and assigns each peer a connection id on its first packet.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

#[macro_use]
extern crate cfg_if;

pub mod shared {
    pub use replica_shared::{
        transport, ConnectionId, DeliveryMode, Element, Protocol, SocketConfig,
    };
}

mod error;
mod server_config;
mod server_socket;

pub use error::ServerError;
pub use server_config::ServerConfig;
pub use server_socket::ServerSocket;
