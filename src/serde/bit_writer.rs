/// Sink for bit-level serialization. Values are packed MSB-first into bytes.
pub trait BitWrite {
    fn write_bit(&mut self, bit: bool);
    fn write_byte(&mut self, byte: u8);
}

/// A growable [`BitWrite`] implementation backed by a `Vec<u8>`.
///
/// Bits accumulate in a scratch byte and are flushed to the buffer every 8
/// bits; `to_bytes` pads the final partial byte with zero bits.
pub struct BitWriter {
    scratch: u8,
    scratch_index: u8,
    buffer: Vec<u8>,
    bits_written: u32,
}

impl BitWriter {
    pub fn new() -> Self {
        Self {
            scratch: 0,
            scratch_index: 0,
            buffer: Vec::with_capacity(64),
            bits_written: 0,
        }
    }

    pub fn bits_written(&self) -> u32 {
        self.bits_written
    }

    pub fn to_bytes(mut self) -> Vec<u8> {
        if self.scratch_index > 0 {
            let byte = self.scratch << (8 - self.scratch_index);
            self.buffer.push(byte);
        }
        self.buffer
    }
}

impl BitWrite for BitWriter {
    fn write_bit(&mut self, bit: bool) {
        self.scratch <<= 1;
        if bit {
            self.scratch |= 1;
        }

        self.scratch_index += 1;
        self.bits_written += 1;

        if self.scratch_index >= 8 {
            self.buffer.push(self.scratch);
            self.scratch = 0;
            self.scratch_index = 0;
        }
    }

    fn write_byte(&mut self, byte: u8) {
        if self.scratch_index == 0 {
            // Aligned fast path
            self.buffer.push(byte);
            self.bits_written += 8;
            return;
        }
        for shift in (0..8).rev() {
            self.write_bit((byte >> shift) & 1 != 0);
        }
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}
