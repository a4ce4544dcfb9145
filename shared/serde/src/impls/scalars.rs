use crate::{ByteReader, ByteWrite, ConstByteLength, Serde, SerdeErr};

impl Serde for bool {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        writer.write_byte(u8::from(*self));
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        match reader.read_byte()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(SerdeErr::malformed(format!(
                "expected boolean byte 0 or 1, found {}",
                other
            ))),
        }
    }

    fn byte_length(&self) -> u32 {
        <Self as ConstByteLength>::const_byte_length()
    }
}

impl ConstByteLength for bool {
    fn const_byte_length() -> u32 {
        1
    }
}

impl Serde for () {
    fn ser(&self, _writer: &mut dyn ByteWrite) {}

    fn de(_reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(())
    }

    fn byte_length(&self) -> u32 {
        0
    }
}

impl ConstByteLength for () {
    fn const_byte_length() -> u32 {
        0
    }
}

macro_rules! impl_serde_le {
    ($($t:ty),*) => {$(
        impl Serde for $t {
            fn ser(&self, writer: &mut dyn ByteWrite) {
                writer.write_bytes(&self.to_le_bytes());
            }

            fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
                Ok(<$t>::from_le_bytes(reader.read_array()?))
            }

            fn byte_length(&self) -> u32 {
                <Self as ConstByteLength>::const_byte_length()
            }
        }

        impl ConstByteLength for $t {
            fn const_byte_length() -> u32 {
                std::mem::size_of::<$t>() as u32
            }
        }
    )*};
}

impl_serde_le!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl<T: Serde> Serde for Option<T> {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        match self {
            Some(value) => {
                true.ser(writer);
                value.ser(writer);
            }
            None => false.ser(writer),
        }
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        if bool::de(reader)? {
            Ok(Some(T::de(reader)?))
        } else {
            Ok(None)
        }
    }

    fn byte_length(&self) -> u32 {
        1 + self.as_ref().map_or(0, Serde::byte_length)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ByteReader, ByteWriter, Serde, SerdeErr};

    fn encode<T: Serde>(value: &T) -> Box<[u8]> {
        let mut writer = ByteWriter::new();
        value.ser(&mut writer);
        writer.to_bytes()
    }

    #[test]
    fn integers_are_little_endian() {
        assert_eq!(encode(&0x0102_u16).as_ref(), &[0x02, 0x01]);
        assert_eq!(encode(&0x0102_0304_u32).as_ref(), &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(encode(&-1_i16).as_ref(), &[0xFF, 0xFF]);
    }

    #[test]
    fn float_round_trip() {
        let bytes = encode(&1.5_f32);
        let mut reader = ByteReader::new(&bytes);

        assert_eq!(f32::de(&mut reader), Ok(1.5));
        assert_eq!(1.5_f32.byte_length(), 4);
    }

    #[test]
    fn invalid_bool_is_malformed() {
        let mut reader = ByteReader::new(&[2]);

        assert!(matches!(bool::de(&mut reader), Err(SerdeErr::Malformed { .. })));
    }

    #[test]
    fn option_writes_flag_then_payload() {
        assert_eq!(encode(&Some(7_u8)).as_ref(), &[1, 7]);
        assert_eq!(encode(&None::<u8>).as_ref(), &[0]);
        assert_eq!(Some(7_u32).byte_length(), 5);
    }

    #[test]
    fn truncated_integer() {
        let mut reader = ByteReader::new(&[1, 2, 3]);

        assert!(matches!(
            u64::de(&mut reader),
            Err(SerdeErr::Truncated { needed: 8, remaining: 3 })
        ));
    }
}
