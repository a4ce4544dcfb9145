use replica_serde::{ByteReader, ByteWrite, Serde};

use crate::{deserialize, serialize, Element, WireCode};

use super::{CodecError, Protocol};

// Frame: [wire code: u8][payload]

impl Protocol {
    /// Writes the message's wire code followed by its payload
    pub fn write_message(
        &self,
        message: &dyn Element,
        writer: &mut dyn ByteWrite,
    ) -> Result<(), CodecError> {
        let code = self
            .message_kinds
            .try_code_of(message)
            .map_err(|_| CodecError::NotRegistered {
                type_name: message.type_name(),
            })?;
        code.ser(writer);
        serialize(message, writer);
        Ok(())
    }

    /// Reads and resolves the wire code at the front of a frame
    pub fn read_code(&self, reader: &mut ByteReader) -> Result<WireCode, CodecError> {
        if reader.is_finished() {
            return Err(CodecError::Empty);
        }
        let code = WireCode::de(reader)?;
        self.message_kinds
            .try_kind(code)
            .map_err(|_| CodecError::UnknownType { code })?;
        Ok(code)
    }

    /// Decodes the rest of a frame into `message`, which must be an instance of the type the
    /// frame's code resolved to. On error `message` may be partially written.
    pub fn read_payload(
        &self,
        reader: &mut ByteReader,
        message: &mut dyn Element,
    ) -> Result<(), CodecError> {
        deserialize(message, reader)?;
        if !reader.is_finished() {
            return Err(CodecError::TrailingBytes {
                count: reader.remaining(),
            });
        }
        Ok(())
    }

    /// Decodes a whole frame into a newly built instance of its type
    pub fn read_message(&self, bytes: &[u8]) -> Result<Box<dyn Element>, CodecError> {
        let mut reader = ByteReader::new(bytes);
        let code = self.read_code(&mut reader)?;
        let mut message = self
            .message_kinds
            .try_kind(code)
            .map_err(|_| CodecError::UnknownType { code })?
            .instantiate();
        self.read_payload(&mut reader, message.as_mut())?;
        Ok(message)
    }
}
