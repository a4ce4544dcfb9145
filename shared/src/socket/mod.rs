mod component_socket;
mod config;
mod error;

pub use component_socket::ComponentSocket;
pub use config::SocketConfig;
pub use error::SocketError;
