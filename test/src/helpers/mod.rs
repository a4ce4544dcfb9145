pub mod assertions;
pub mod fixtures;
pub mod packet_exchange;

pub use fixtures::{init_logger, populated_commands, populated_session, position};
pub use packet_exchange::{poll_client_until, poll_server_until, udp_pair};
