use replica_serde::{ByteCounter, ByteReader, ByteWrite, SerdeErr};

use crate::{Element, ElementMut, ElementRef};

use super::navigate::{navigate, navigate_mut, Navigation};

/// Writes every serialized property of the tree depth-first, in declaration order.
///
/// There are no per-child lengths or counts: the schema on both ends fixes the shape.
pub fn serialize(element: &dyn Element, writer: &mut dyn ByteWrite) {
    navigate(element, &mut |element| {
        if let ElementRef::Property(property) = element.kind() {
            if property.meta().serialized {
                property.write(writer);
            }
        }
        Navigation::Continue
    });
}

/// Reads into an existing tree. On error the tree is left partially written and should be
/// discarded or reset by the caller.
pub fn deserialize(element: &mut dyn Element, reader: &mut ByteReader) -> Result<(), SerdeErr> {
    let mut result = Ok(());
    navigate_mut(element, &mut |element| {
        if let ElementMut::Property(property) = element.kind_mut() {
            if property.meta().serialized {
                if let Err(err) = property.read(reader) {
                    result = Err(err);
                    return Navigation::Exit;
                }
            }
        }
        Navigation::Continue
    });
    result
}

pub fn byte_length(element: &dyn Element) -> u32 {
    let mut counter = ByteCounter::new();
    serialize(element, &mut counter);
    counter.byte_count()
}
