//! # Replica Serde
//! Fixed-width, little-endian byte codec for replicated values.
//!
//! Every value is written with a constant number of bytes for its type, so decoding never
//! branches on a length except for the few explicitly length-prefixed types (strings).

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod byte_counter;
mod byte_reader;
mod byte_writer;
mod error;
mod impls;
mod serde;

pub use byte_counter::ByteCounter;
pub use byte_reader::ByteReader;
pub use byte_writer::{ByteWrite, ByteWriter, MTU_SIZE_BYTES};
pub use error::SerdeErr;
pub use serde::{ConstByteLength, Serde};
