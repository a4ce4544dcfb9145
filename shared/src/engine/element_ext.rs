use replica_serde::{ByteReader, ByteWrite, SerdeErr};

use crate::Element;

use super::{
    byte_length, copy_to, deserialize, equal_to, interpolate_into, merge_to, predicted_equal_to,
    reset, serialize, stringify, zero,
};

/// Method forms of the engine operations for concrete element types
pub trait ElementExt: Element + Sized {
    fn copy_from(&mut self, source: &Self) {
        copy_to(source, self);
    }

    fn merge_from(&mut self, source: &Self) {
        merge_to(source, self);
    }

    fn equal_to(&self, other: &Self) -> bool {
        equal_to(self, other)
    }

    fn predicted_equal_to(&self, verified: &Self) -> bool {
        predicted_equal_to(self, verified)
    }

    fn interpolate_between(&mut self, from: &Self, to: &Self, t: f32) {
        interpolate_into(from, to, self, t);
    }

    fn reset(&mut self) {
        reset(self);
    }

    fn zero(&mut self) {
        zero(self);
    }

    fn serialize(&self, writer: &mut dyn ByteWrite) {
        serialize(self, writer);
    }

    fn deserialize(&mut self, reader: &mut ByteReader) -> Result<(), SerdeErr> {
        deserialize(self, reader)
    }

    fn byte_length(&self) -> u32 {
        byte_length(self)
    }

    fn stringify(&self) -> String {
        stringify(self)
    }
}

impl<T: Element> ElementExt for T {}
