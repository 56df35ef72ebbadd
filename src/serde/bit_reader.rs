use crate::serde::error::SerdeErr;

/// Mirror of [`crate::BitWriter`]: reads MSB-first packed bits from a byte
/// slice.
pub struct BitReader<'a> {
    buffer: &'a [u8],
    bit_index: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            bit_index: 0,
        }
    }

    pub fn read_bit(&mut self) -> Result<bool, SerdeErr> {
        let byte_index = self.bit_index / 8;
        let Some(byte) = self.buffer.get(byte_index) else {
            return Err(SerdeErr::UnexpectedEnd);
        };
        let shift = 7 - (self.bit_index % 8);
        self.bit_index += 1;
        Ok((byte >> shift) & 1 != 0)
    }

    pub fn read_byte(&mut self) -> Result<u8, SerdeErr> {
        if self.bit_index % 8 == 0 {
            // Aligned fast path
            let byte_index = self.bit_index / 8;
            let Some(byte) = self.buffer.get(byte_index) else {
                return Err(SerdeErr::UnexpectedEnd);
            };
            self.bit_index += 8;
            return Ok(*byte);
        }
        let mut byte = 0u8;
        for _ in 0..8 {
            byte = (byte << 1) | u8::from(self.read_bit()?);
        }
        Ok(byte)
    }
}
