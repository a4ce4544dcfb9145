use std::fmt;

pub type Tick = u32;

/// One-byte identifier of a registered message type on the wire
pub type WireCode = u8;

/// Small integer a server assigns to each remote endpoint, in order of first contact
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(pub u16);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
