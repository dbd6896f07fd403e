//! Bit-serial CRC-16-CCITT as computed by the nRF24L01 2.4GHz transceiver.
//! Provides the incremental accumulator and the ShockBurst frame CRC built
//! on top of it.

pub mod crc;
pub mod error;
pub mod esb;

pub use crc::{Crc16, DEFAULT_POLYNOMIAL, DEFAULT_SEED, crc16};
pub use error::{Error, Result};
