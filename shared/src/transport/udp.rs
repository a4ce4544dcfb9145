use std::{
    io,
    net::{SocketAddr, UdpSocket},
    sync::Arc,
};

use log::{info, trace};

use super::{Delivery, PacketReceiver, PacketSender, RecvError, SendError};

/// Non-blocking `std::net` UDP transport. Delivery metadata is ignored: every packet is a
/// single unreliable datagram.
pub struct UdpTransport;

impl UdpTransport {
    /// Binds `address` (port 0 picks a free port) and splits the socket into its two halves
    pub fn bind(
        address: SocketAddr,
        receive_buffer_bytes: usize,
    ) -> io::Result<(Box<dyn PacketSender>, Box<dyn PacketReceiver>)> {
        let socket = UdpSocket::bind(address)?;
        socket.set_nonblocking(true)?;
        let local_addr = socket.local_addr()?;
        info!("UDP socket bound to {}", local_addr);

        let socket = Arc::new(socket);
        Ok((
            Box::new(UdpPacketSender {
                socket: socket.clone(),
                local_addr,
            }),
            Box::new(UdpPacketReceiver {
                socket,
                buffer: vec![0; receive_buffer_bytes].into_boxed_slice(),
            }),
        ))
    }
}

struct UdpPacketSender {
    socket: Arc<UdpSocket>,
    local_addr: SocketAddr,
}

impl PacketSender for UdpPacketSender {
    fn send(
        &self,
        address: &SocketAddr,
        payload: &[u8],
        delivery: Delivery,
    ) -> Result<(), SendError> {
        trace!("UDP {} -> {} ({:?})", self.local_addr, address, delivery);
        self.socket.send_to(payload, address)?;
        Ok(())
    }

    fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }
}

struct UdpPacketReceiver {
    socket: Arc<UdpSocket>,
    buffer: Box<[u8]>,
}

impl PacketReceiver for UdpPacketReceiver {
    fn receive(&mut self) -> Result<Option<(SocketAddr, &[u8])>, RecvError> {
        match self.socket.recv_from(&mut self.buffer) {
            Ok((length, address)) => Ok(Some((address, &self.buffer[..length]))),
            Err(err) if err.kind() == io::ErrorKind::WouldBlock => Ok(None),
            // a previous send hit a closed port; not fatal for a connectionless socket
            Err(err) if err.kind() == io::ErrorKind::ConnectionReset => {
                trace!("ignoring connection reset on UDP receive");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{thread, time::Duration};

    use super::*;

    #[test]
    fn loopback_datagram() {
        let any: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let (a_sender, _a_receiver) = UdpTransport::bind(any, 1500).unwrap();
        let (b_sender, mut b_receiver) = UdpTransport::bind(any, 1500).unwrap();

        a_sender
            .send(&b_sender.local_addr(), &[4, 5, 6], Delivery::default())
            .unwrap();

        let mut received = None;
        for _ in 0..100 {
            if let Some((from, payload)) = b_receiver.receive().unwrap() {
                received = Some((from, payload.to_vec()));
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(received, Some((a_sender.local_addr(), vec![4, 5, 6])));
    }

    #[test]
    fn nothing_pending() {
        let (_, mut receiver) = UdpTransport::bind("127.0.0.1:0".parse().unwrap(), 64).unwrap();

        assert!(receiver.receive().unwrap().is_none());
    }
}
