//! # Replica Client
//! A client socket that sends registered replica messages to one server endpoint and receives
//! the server's messages back, over UDP or an in-memory transport.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

#[macro_use]
extern crate cfg_if;

pub mod shared {
    pub use replica_shared::{transport, DeliveryMode, Element, Protocol, SocketConfig};
}

mod client_config;
mod client_socket;
mod error;

pub use client_config::ClientConfig;
pub use client_socket::ClientSocket;
pub use error::ClientError;
