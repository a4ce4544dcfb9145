use glam::{Quat, Vec3};

use crate::{ByteReader, ByteWrite, ConstByteLength, Serde, SerdeErr};

impl Serde for Vec3 {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        self.x.ser(writer);
        self.y.ser(writer);
        self.z.ser(writer);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(Vec3::new(f32::de(reader)?, f32::de(reader)?, f32::de(reader)?))
    }

    fn byte_length(&self) -> u32 {
        <Self as ConstByteLength>::const_byte_length()
    }
}

impl ConstByteLength for Vec3 {
    fn const_byte_length() -> u32 {
        12
    }
}

// x, y, z, w
impl Serde for Quat {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        for component in self.to_array() {
            component.ser(writer);
        }
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(Quat::from_xyzw(
            f32::de(reader)?,
            f32::de(reader)?,
            f32::de(reader)?,
            f32::de(reader)?,
        ))
    }

    fn byte_length(&self) -> u32 {
        <Self as ConstByteLength>::const_byte_length()
    }
}

impl ConstByteLength for Quat {
    fn const_byte_length() -> u32 {
        16
    }
}
