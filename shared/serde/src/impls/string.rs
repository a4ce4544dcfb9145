use crate::{ByteReader, ByteWrite, Serde, SerdeErr};

// u16 byte length, then UTF-8 bytes
impl Serde for String {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        let mut end = self.len().min(u16::MAX as usize);
        while !self.is_char_boundary(end) {
            end -= 1;
        }
        (end as u16).ser(writer);
        writer.write_bytes(&self.as_bytes()[..end]);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let length = u16::de(reader)? as usize;
        let bytes = reader.read_bytes(length)?;
        String::from_utf8(bytes.to_vec())
            .map_err(|err| SerdeErr::malformed(format!("invalid UTF-8 string: {}", err)))
    }

    fn byte_length(&self) -> u32 {
        let mut end = self.len().min(u16::MAX as usize);
        while !self.is_char_boundary(end) {
            end -= 1;
        }
        2 + end as u32
    }
}
