use crate::ByteWrite;

/// A [`ByteWrite`] that only measures, used to size a message before writing it
pub struct ByteCounter {
    count: u32,
}

impl ByteCounter {
    pub fn new() -> Self {
        Self { count: 0 }
    }

    pub fn byte_count(&self) -> u32 {
        self.count
    }
}

impl Default for ByteCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteWrite for ByteCounter {
    fn write_byte(&mut self, _byte: u8) {
        self.count += 1;
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.count += bytes.len() as u32;
    }

    fn is_counter(&self) -> bool {
        true
    }

    fn count_bytes(&mut self, bytes: u32) {
        self.count += bytes;
    }
}
