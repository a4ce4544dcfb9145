use std::net::SocketAddr;

use log::{debug, info};

use replica_shared::{
    transport::{PacketReceiver, PacketSender},
    ComponentSocket, DeliveryMode, Element, Protocol,
};

use crate::{ClientConfig, ClientError};

cfg_if! {
    if #[cfg(feature = "transport_udp")] {
        use std::net::{IpAddr, Ipv4Addr};

        use replica_shared::{transport::udp::UdpTransport, SocketError};
    }
}

/// Talks to a single server endpoint. Packets from any other address are ignored.
pub struct ClientSocket {
    socket: ComponentSocket,
    server_addr: Option<SocketAddr>,
}

impl ClientSocket {
    pub fn new(protocol: Protocol, config: ClientConfig) -> Self {
        Self {
            socket: ComponentSocket::new(protocol, config.socket),
            server_addr: None,
        }
    }

    /// Binds an ephemeral UDP port on the matching local interface and targets `server_addr`
    #[cfg(feature = "transport_udp")]
    pub fn connect(&mut self, server_addr: SocketAddr) -> Result<(), ClientError> {
        let local_ip = if server_addr.ip().is_loopback() {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        };
        let (sender, receiver) = UdpTransport::bind(
            SocketAddr::new(local_ip, 0),
            self.socket.config().receive_buffer_bytes,
        )
        .map_err(SocketError::from)?;
        self.connect_with(server_addr, sender, receiver);
        Ok(())
    }

    /// Targets `server_addr` over an already bound transport
    pub fn connect_with(
        &mut self,
        server_addr: SocketAddr,
        sender: Box<dyn PacketSender>,
        receiver: Box<dyn PacketReceiver>,
    ) {
        info!("client targeting server {}", server_addr);
        self.socket.open(sender, receiver);
        self.server_addr = Some(server_addr);
    }

    pub fn is_connected(&self) -> bool {
        self.server_addr.is_some() && self.socket.is_open()
    }

    pub fn server_addr(&self) -> Option<SocketAddr> {
        self.server_addr
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.socket.local_addr()
    }

    pub fn protocol(&self) -> &Protocol {
        self.socket.protocol()
    }

    /// Default channel for messages of type `T`
    pub fn set_channel<T: Element>(&mut self, channel: u8) {
        self.socket.set_channel::<T>(channel);
    }

    pub fn try_send(&mut self, message: &dyn Element, mode: DeliveryMode) -> Result<(), ClientError> {
        let server_addr = self.server_addr.ok_or(ClientError::NotConnected)?;
        self.socket.try_send(message, &server_addr, mode)?;
        Ok(())
    }

    /// Returns whether the message was handed to the transport; failures are logged.
    ///
    /// # Panics
    ///
    /// Panics if the message type is not registered with the protocol.
    pub fn send(&mut self, message: &dyn Element, mode: DeliveryMode) -> bool {
        match self.server_addr {
            Some(server_addr) => self.socket.send(message, &server_addr, mode),
            None => false,
        }
    }

    /// Decodes every pending message from the server. Returns how many were delivered.
    pub fn poll_received(&mut self, mut callback: impl FnMut(&dyn Element)) -> usize {
        let Some(server_addr) = self.server_addr else {
            return 0;
        };
        let mut delivered = 0;
        self.socket.poll_received(|address, message| {
            if address != server_addr {
                debug!("ignoring {} from {}", message.type_name(), address);
                return;
            }
            delivered += 1;
            callback(message);
        });
        delivered
    }

    pub fn close(&mut self) {
        self.socket.close();
        self.server_addr = None;
    }
}

#[cfg(test)]
mod tests {
    use replica_shared::{
        component, transport::channel::PacketChannel, Property, SocketConfig,
    };

    use super::*;

    component! {
        struct Move {
            x: Property<f32>,
            y: Property<f32>,
        }
    }

    fn protocol() -> Protocol {
        Protocol::builder().add_message::<Move>().build()
    }

    fn client_with_server() -> (ClientSocket, ComponentSocket, SocketAddr) {
        let server_addr: SocketAddr = "10.0.0.1:4000".parse().unwrap();
        let client_addr: SocketAddr = "10.0.0.2:5000".parse().unwrap();
        let ((client_sender, client_receiver), (server_sender, server_receiver)) =
            PacketChannel::pair(client_addr, server_addr);

        let mut client = ClientSocket::new(protocol(), ClientConfig::default());
        client.connect_with(server_addr, client_sender, client_receiver);
        let mut server = ComponentSocket::new(protocol(), SocketConfig::default());
        server.open(server_sender, server_receiver);
        (client, server, client_addr)
    }

    #[test]
    fn round_trip_with_server() {
        let (mut client, mut server, client_addr) = client_with_server();
        let mut step = Move::default();
        step.x.set(1.5);
        assert!(client.send(&step, DeliveryMode::UnreliableSequenced));

        let mut from = None;
        server.poll_received(|address, message| {
            from = Some(address);
            assert_eq!(message.downcast_ref::<Move>(), Some(&step));
        });
        assert_eq!(from, Some(client_addr));

        server.send(&step, &client_addr, DeliveryMode::Unreliable);
        let mut count = 0;
        assert_eq!(client.poll_received(|_| count += 1), 1);
        assert_eq!(count, 1);
    }

    #[test]
    fn unconnected_client_sends_nothing() {
        let mut client = ClientSocket::new(protocol(), ClientConfig::default());

        assert!(!client.is_connected());
        assert!(!client.send(&Move::default(), DeliveryMode::Unreliable));
        assert!(matches!(
            client.try_send(&Move::default(), DeliveryMode::Unreliable),
            Err(ClientError::NotConnected)
        ));
        assert_eq!(client.poll_received(|_| panic!("nothing to poll")), 0);
    }

    #[test]
    fn close_disconnects() {
        let (mut client, _, _) = client_with_server();
        client.close();

        assert!(!client.is_connected());
        assert_eq!(client.server_addr(), None);
    }
}
