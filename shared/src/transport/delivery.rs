/// Reliability and ordering requested for a message. Transports may honor it; this crate only
/// carries it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeliveryMode {
    #[default]
    Unreliable,
    UnreliableSequenced,
    ReliableUnordered,
    ReliableSequenced,
    ReliableOrdered,
}

/// Per-message delivery metadata handed to the transport
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Delivery {
    pub mode: DeliveryMode,
    pub channel: u8,
}

impl Delivery {
    pub fn new(mode: DeliveryMode, channel: u8) -> Self {
        Self { mode, channel }
    }
}

impl From<DeliveryMode> for Delivery {
    fn from(mode: DeliveryMode) -> Self {
        Self { mode, channel: 0 }
    }
}
