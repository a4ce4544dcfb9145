use crate::SerdeErr;

pub struct ByteReader<'b> {
    buffer: &'b [u8],
    position: usize,
}

impl<'b> ByteReader<'b> {
    pub fn new(buffer: &'b [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_byte(&mut self) -> Result<u8, SerdeErr> {
        let Some(byte) = self.buffer.get(self.position) else {
            return Err(SerdeErr::Truncated {
                needed: 1,
                remaining: 0,
            });
        };
        self.position += 1;
        Ok(*byte)
    }

    pub fn read_bytes(&mut self, count: usize) -> Result<&'b [u8], SerdeErr> {
        let remaining = self.remaining();
        if count > remaining {
            return Err(SerdeErr::Truncated {
                needed: count,
                remaining,
            });
        }
        let bytes = &self.buffer[self.position..self.position + count];
        self.position += count;
        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], SerdeErr> {
        let mut array = [0; N];
        array.copy_from_slice(self.read_bytes(N)?);
        Ok(array)
    }
}
