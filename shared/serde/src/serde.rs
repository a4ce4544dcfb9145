use crate::{ByteReader, ByteWrite, SerdeErr};

/// A value with a deterministic byte encoding
pub trait Serde: Sized + Clone + PartialEq {
    /// Encodes into the writer
    fn ser(&self, writer: &mut dyn ByteWrite);

    /// Decodes a value, consuming exactly the bytes `ser` produced
    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr>;

    /// Number of bytes `ser` writes for this value
    fn byte_length(&self) -> u32;
}

/// A value whose encoding always has the same length
pub trait ConstByteLength {
    fn const_byte_length() -> u32;
}
