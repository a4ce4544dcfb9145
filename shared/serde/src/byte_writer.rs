/// Maximum payload a single datagram may carry
pub const MTU_SIZE_BYTES: usize = 1200;

pub trait ByteWrite {
    fn write_byte(&mut self, byte: u8);
    fn write_bytes(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.write_byte(*byte);
        }
    }
    fn is_counter(&self) -> bool;
    fn count_bytes(&mut self, bytes: u32);
}

/// A growable byte buffer. Reused across messages via [`ByteWriter::reset`].
pub struct ByteWriter {
    buffer: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::with_capacity(MTU_SIZE_BYTES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Discards written bytes but keeps the allocation
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    pub fn bytes_written(&self) -> usize {
        self.buffer.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    pub fn to_bytes(self) -> Box<[u8]> {
        self.buffer.into_boxed_slice()
    }
}

impl Default for ByteWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteWrite for ByteWriter {
    fn write_byte(&mut self, byte: u8) {
        self.buffer.push(byte);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    fn is_counter(&self) -> bool {
        false
    }

    fn count_bytes(&mut self, _bytes: u32) {
        // only counters track lengths
    }
}
