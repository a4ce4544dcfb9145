//! # Replica Shared
//! The replicated state-tree engine shared between replica-server & replica-client: the
//! element model, the codec/copy/interpolation engine, history & prediction buffers, the
//! message protocol and the component socket.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

#[macro_use]
extern crate cfg_if;

pub use glam::{Quat, Vec3};
pub use replica_serde::{
    ByteCounter, ByteReader, ByteWrite, ByteWriter, ConstByteLength, Serde, SerdeErr,
    MTU_SIZE_BYTES,
};

mod collections;
mod element;
mod engine;
mod history;
mod prediction;
mod protocol;
pub mod schema;
mod socket;
pub mod transport;
mod types;

pub use collections::{CollectionError, CyclicArray, DualMap, DurationAverage, Pool, PoolKey};
pub use element::{
    ArrayBase, ArrayElement, Component, Container, Element, ElementError, ElementMut, ElementRef,
    ElementType, Interpolation, ListProperty, Property, PropertyBase, PropertyMeta,
    PropertyValue, StringProperty, DEFAULT_STRING_CAPACITY, MAX_STRING_CAPACITY,
};
#[doc(hidden)]
pub use element::warn_mismatch;
pub use engine::{
    byte_length, clone_element, copy_to, deserialize, equal_to, interpolate_into, merge_to,
    navigate, navigate_mut, navigate_zipped, navigate_zipped3_mut, navigate_zipped_mut,
    predicted_equal_to, reset, serialize, stringify, zero, ElementExt, Navigation,
};
pub use history::{History, RenderSource, Snapshot};
pub use prediction::{Prediction, Verification};
pub use protocol::{
    CodecError, MessageKind, MessageKinds, Protocol, ProtocolError, RegistryError,
};
pub use socket::{ComponentSocket, SocketConfig, SocketError};
pub use transport::{Delivery, DeliveryMode, PacketReceiver, PacketSender, RecvError, SendError};
pub use types::{ConnectionId, Tick, WireCode};
