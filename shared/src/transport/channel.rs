use std::net::SocketAddr;

use log::trace;
use smol::{
    channel,
    channel::{Receiver, Sender, TryRecvError},
};

use super::{Delivery, PacketReceiver, PacketSender, RecvError, SendError};

type Packet = (SocketAddr, Box<[u8]>);

/// In-memory transport: two endpoints joined by unbounded channels
pub struct PacketChannel;

impl PacketChannel {
    /// Endpoints for `a` and `b`; each one's sender delivers to the other's receiver
    pub fn pair(
        a: SocketAddr,
        b: SocketAddr,
    ) -> (
        (Box<dyn PacketSender>, Box<dyn PacketReceiver>),
        (Box<dyn PacketSender>, Box<dyn PacketReceiver>),
    ) {
        let (to_b, b_inbox) = channel::unbounded();
        let (to_a, a_inbox) = channel::unbounded();
        (
            (
                Box::new(PacketChannelSender::new(a, b, to_b)),
                Box::new(PacketChannelReceiver::new(a_inbox)),
            ),
            (
                Box::new(PacketChannelSender::new(b, a, to_a)),
                Box::new(PacketChannelReceiver::new(b_inbox)),
            ),
        )
    }
}

struct PacketChannelSender {
    local: SocketAddr,
    peer: SocketAddr,
    sender: Sender<Packet>,
}

impl PacketChannelSender {
    fn new(local: SocketAddr, peer: SocketAddr, sender: Sender<Packet>) -> Self {
        Self {
            local,
            peer,
            sender,
        }
    }
}

impl PacketSender for PacketChannelSender {
    fn send(
        &self,
        address: &SocketAddr,
        payload: &[u8],
        delivery: Delivery,
    ) -> Result<(), SendError> {
        if *address != self.peer {
            return Err(SendError::Unreachable { address: *address });
        }
        trace!("channel {} -> {} ({:?})", self.local, address, delivery);
        self.sender
            .try_send((self.local, payload.into()))
            .map_err(|_| SendError::Closed)
    }

    fn local_addr(&self) -> SocketAddr {
        self.local
    }
}

struct PacketChannelReceiver {
    receiver: Receiver<Packet>,
    current_payload: Option<Box<[u8]>>,
}

impl PacketChannelReceiver {
    fn new(receiver: Receiver<Packet>) -> Self {
        Self {
            receiver,
            current_payload: None,
        }
    }
}

impl PacketReceiver for PacketChannelReceiver {
    fn receive(&mut self) -> Result<Option<(SocketAddr, &[u8])>, RecvError> {
        match self.receiver.try_recv() {
            Ok((address, payload)) => {
                let payload: &[u8] = self.current_payload.insert(payload);
                Ok(Some((address, payload)))
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Closed) => Err(RecvError::Closed),
        }
    }
}
