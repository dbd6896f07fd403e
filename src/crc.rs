use crate::error::{Error, Result};

/// Register start value used by the nRF24L01 for 2-byte CRC mode.
pub const DEFAULT_SEED: u16 = 0xFFFF;

/// CRC-16-CCITT generator, x^16 + x^12 + x^5 + 1 (x^16 term implicit).
pub const DEFAULT_POLYNOMIAL: u16 = 0x1021;

/// Bit-serial CRC-16 accumulator, shift-register compatible with the
/// nRF24L01 CRC engine.
///
/// `Crc16::default()` is the zero state and must be initialized with
/// [`Crc16::init`] before feeding; [`Crc16::new`] returns a context that is
/// already initialized with the defaults.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Crc16 {
    register: u16,
    polynomial: u16,
}

impl Crc16 {
    pub fn new() -> Self {
        Self::with_params(DEFAULT_SEED, DEFAULT_POLYNOMIAL)
    }

    pub fn with_params(seed: u16, polynomial: u16) -> Self {
        let mut crc = Self::default();
        crc.init(seed, polynomial);
        crc
    }

    /// Start a new computation, discarding whatever was accumulated.
    pub fn init(&mut self, seed: u16, polynomial: u16) {
        self.register = seed;
        self.polynomial = polynomial;
    }

    pub fn init_default(&mut self) {
        self.init(DEFAULT_SEED, DEFAULT_POLYNOMIAL);
    }

    pub fn polynomial(&self) -> u16 {
        self.polynomial
    }

    /// Feed one bit: bit 7 (0x80) of `top_bit`. The lower bits are ignored,
    /// so a byte can be fed by shifting it left once per call.
    pub fn feed_top_bit(&mut self, top_bit: u8) {
        self.register ^= ((top_bit as u16) << 8) & 0x8000;
        if self.register & 0x8000 != 0 {
            self.register = (self.register << 1) ^ self.polynomial;
        } else {
            self.register <<= 1;
        }
    }

    pub fn feed_bit(&mut self, bit: bool) {
        self.feed_top_bit(if bit { 0x80 } else { 0x00 });
    }

    fn feed_byte(&mut self, byte: u8) {
        let mut bits = byte;
        for _ in 0..8 {
            self.feed_top_bit(bits);
            bits <<= 1;
        }
    }

    /// Feed the first `len` bytes of `data` in ascending order, MSB first.
    ///
    /// Fails without touching the register if `data` is shorter than `len`.
    pub fn feed_forward(&mut self, data: &[u8], len: u8) -> Result<()> {
        let range = checked_range(data, len)?;
        tracing::trace!(len, "crc feed forward");
        self.update(range);
        Ok(())
    }

    /// Feed the first `len` bytes of `data` starting from `data[len - 1]`
    /// down to `data[0]`. Bits within each byte still go MSB first.
    pub fn feed_reverse(&mut self, data: &[u8], len: u8) -> Result<()> {
        let range = checked_range(data, len)?;
        tracing::trace!(len, "crc feed reverse");
        self.update_reverse(range);
        Ok(())
    }

    /// Feed the whole slice in ascending order.
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.feed_byte(byte);
        }
    }

    /// Feed the whole slice in descending order.
    pub fn update_reverse(&mut self, data: &[u8]) {
        for &byte in data.iter().rev() {
            self.feed_byte(byte);
        }
    }

    pub fn result(&self) -> u16 {
        self.register
    }
}

fn checked_range(data: &[u8], len: u8) -> Result<&[u8]> {
    data.get(..len as usize).ok_or(Error::OutOfBounds {
        len: len as usize,
        available: data.len(),
    })
}

/// One-shot CRC-16/CCITT (seed 0xFFFF, poly 0x1021) over `data`.
pub fn crc16(data: &[u8]) -> u16 {
    let mut crc = Crc16::new();
    crc.update(data);
    crc.result()
}
