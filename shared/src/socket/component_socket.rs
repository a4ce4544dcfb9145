use std::{
    any::{Any, TypeId},
    collections::HashMap,
    net::SocketAddr,
};

use log::{info, trace, warn};

use replica_serde::{ByteReader, ByteWriter};

use crate::{
    CodecError, Delivery, DeliveryMode, Element, PacketReceiver, PacketSender, Pool, Protocol,
};

use super::{SocketConfig, SocketError};

type Transport = (Box<dyn PacketSender>, Box<dyn PacketReceiver>);

/// Sends and receives whole element trees over a packet transport.
///
/// Every inbound frame is decoded into a pooled instance of its type, handed to the poll
/// callback, then returned to the pool. A frame that fails to decode is dropped whole.
pub struct ComponentSocket {
    protocol: Protocol,
    config: SocketConfig,
    // indexed by wire code
    pools: Vec<Pool<Box<dyn Element>>>,
    channels: HashMap<TypeId, u8>,
    writer: ByteWriter,
    transport: Option<Transport>,
}

impl ComponentSocket {
    /// Locks `protocol` if it is not locked yet; registration is over once a socket exists.
    pub fn new(mut protocol: Protocol, config: SocketConfig) -> Self {
        if !protocol.is_locked() {
            protocol.lock();
        }
        let pools = protocol
            .message_kinds
            .iter()
            .map(|kind| {
                let prototype = kind.instantiate();
                Pool::strict(config.pool_capacity, move || prototype.box_clone())
            })
            .collect();

        Self {
            writer: ByteWriter::with_capacity(config.max_payload_bytes),
            protocol,
            config,
            pools,
            channels: HashMap::new(),
            transport: None,
        }
    }

    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }

    pub fn config(&self) -> &SocketConfig {
        &self.config
    }

    pub fn open(&mut self, sender: Box<dyn PacketSender>, receiver: Box<dyn PacketReceiver>) {
        info!("socket open on {}", sender.local_addr());
        self.transport = Some((sender, receiver));
    }

    pub fn is_open(&self) -> bool {
        self.transport.is_some()
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.transport
            .as_ref()
            .map(|(sender, _)| sender.local_addr())
    }

    /// Drops the transport. Pending inbound packets are lost.
    pub fn close(&mut self) {
        if let Some((sender, _)) = self.transport.take() {
            info!("socket on {} closed", sender.local_addr());
        }
        for pool in &mut self.pools {
            pool.release_all();
        }
    }

    /// Default channel for messages of type `T`
    pub fn set_channel<T: Element>(&mut self, channel: u8) {
        self.channels.insert(TypeId::of::<T>(), channel);
    }

    pub fn channel_of(&self, message: &dyn Element) -> u8 {
        self.channels
            .get(&Any::type_id(message.as_any()))
            .copied()
            .unwrap_or_default()
    }

    pub fn try_send(
        &mut self,
        message: &dyn Element,
        address: &SocketAddr,
        mode: DeliveryMode,
    ) -> Result<(), SocketError> {
        let Some((sender, _)) = &self.transport else {
            return Err(SocketError::NotOpen);
        };

        self.writer.reset();
        self.protocol.write_message(message, &mut self.writer)?;
        let size = self.writer.bytes_written();
        if size > self.config.max_payload_bytes {
            return Err(SocketError::Oversized {
                size,
                max: self.config.max_payload_bytes,
            });
        }

        let delivery = Delivery::new(mode, self.channel_of(message));
        sender.send(address, self.writer.as_slice(), delivery)?;
        Ok(())
    }

    /// Returns whether the message was handed to the transport. Failures are logged; retrying
    /// is up to the caller.
    ///
    /// # Panics
    ///
    /// Panics if the message type is not registered with the protocol.
    pub fn send(&mut self, message: &dyn Element, address: &SocketAddr, mode: DeliveryMode) -> bool {
        match self.try_send(message, address, mode) {
            Ok(()) => true,
            Err(SocketError::Codec(err @ CodecError::NotRegistered { .. })) => panic!("{}", err),
            Err(err) => {
                warn!("dropping message to {}: {}", address, err);
                false
            }
        }
    }

    /// Decodes every pending packet and hands each message to `callback` with its sender.
    /// Returns how many messages were delivered.
    pub fn poll_received(&mut self, mut callback: impl FnMut(SocketAddr, &dyn Element)) -> usize {
        let Some((_, receiver)) = &mut self.transport else {
            return 0;
        };

        let mut delivered = 0;
        loop {
            let (address, payload) = match receiver.receive() {
                Ok(Some(packet)) => packet,
                Ok(None) => break,
                Err(err) => {
                    warn!("receive failed: {}", err);
                    break;
                }
            };
            if payload.len() > self.config.max_payload_bytes {
                warn!(
                    "dropping {} byte message from {}: larger than {} bytes",
                    payload.len(),
                    address,
                    self.config.max_payload_bytes
                );
                continue;
            }
            match receive_one(&self.protocol, &mut self.pools, address, payload, &mut callback) {
                Ok(()) => delivered += 1,
                Err(err) => warn!("dropping message from {}: {}", address, err),
            }
        }
        delivered
    }
}

fn receive_one(
    protocol: &Protocol,
    pools: &mut [Pool<Box<dyn Element>>],
    address: SocketAddr,
    payload: &[u8],
    callback: &mut dyn FnMut(SocketAddr, &dyn Element),
) -> Result<(), CodecError> {
    let mut reader = ByteReader::new(payload);
    let code = protocol.read_code(&mut reader)?;
    let pool = pools
        .get_mut(usize::from(code))
        .ok_or(CodecError::UnknownType { code })?;

    let key = pool.obtain();
    let mut result = Ok(());
    if let Some(message) = pool.get_mut(key) {
        result = protocol.read_payload(&mut reader, message.as_mut());
        match &result {
            Ok(()) => {
                trace!("received {} from {}", message.type_name(), address);
                callback(address, message.as_ref());
            }
            // never leave a half-decoded instance in the pool
            Err(_) => {
                if let Ok(kind) = protocol.message_kinds.try_kind(code) {
                    *message = kind.instantiate();
                }
            }
        }
    }
    pool.release(key);
    result
}
