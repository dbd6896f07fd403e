//! CRC of an nRF24L01 (Enhanced) ShockBurst air frame.
//!
//! The radio covers address, packet control field and payload with its CRC.
//! Addresses are configured least significant byte first (`RX_ADDR_Px`,
//! `TX_ADDR`) but sent MSB first, so they are fed in reverse.

use crate::crc::Crc16;
use crate::error::{Error, Result};

pub const MAX_PAYLOAD: usize = 32;

/// The 9-bit packet control field of a dynamic payload frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketControl {
    payload_len: u8,
    pid: u8,
    no_ack: bool,
}

impl PacketControl {
    pub fn new(payload_len: u8, pid: u8, no_ack: bool) -> Result<Self> {
        if payload_len as usize > MAX_PAYLOAD {
            return Err(Error::PayloadLength(payload_len as usize));
        }
        if pid > 3 {
            return Err(Error::Pid(pid));
        }
        Ok(Self {
            payload_len,
            pid,
            no_ack,
        })
    }

    /// Length (6 bits), PID (2 bits) then NO_ACK (1 bit), all MSB first.
    fn feed(&self, crc: &mut Crc16) {
        crc.update(&[(self.payload_len << 2) | self.pid]);
        crc.feed_bit(self.no_ack);
    }
}

/// Fields of one frame as the caller already holds them. Static payload
/// frames have no packet control field.
pub struct EsbFrame<'a> {
    pub address: &'a [u8],
    pub control: Option<PacketControl>,
    pub payload: &'a [u8],
}

impl<'a> EsbFrame<'a> {
    pub fn new(
        address: &'a [u8],
        control: Option<PacketControl>,
        payload: &'a [u8],
    ) -> Result<Self> {
        if !(3..=5).contains(&address.len()) {
            return Err(Error::AddressWidth(address.len()));
        }
        if payload.len() > MAX_PAYLOAD {
            return Err(Error::PayloadLength(payload.len()));
        }
        Ok(Self {
            address,
            control,
            payload,
        })
    }

    pub fn crc(&self) -> u16 {
        let mut crc = Crc16::new();
        crc.update_reverse(self.address);
        if let Some(control) = &self.control {
            control.feed(&mut crc);
        }
        crc.update(self.payload);
        crc.result()
    }

    /// Compare against the trailing CRC of a received frame.
    pub fn verify(&self, received: u16) -> bool {
        self.crc() == received
    }
}

pub fn frame_crc(address: &[u8], control: Option<PacketControl>, payload: &[u8]) -> Result<u16> {
    Ok(EsbFrame::new(address, control, payload)?.crc())
}

pub fn verify(
    address: &[u8],
    control: Option<PacketControl>,
    payload: &[u8],
    received: u16,
) -> Result<bool> {
    Ok(EsbFrame::new(address, control, payload)?.verify(received))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: [u8; 5] = [0x01, 0x02, 0x03, 0x04, 0x05];

    #[test]
    fn dynamic_payload_frame() {
        let pcf = PacketControl::new(2, 1, false).unwrap();
        assert_eq!(frame_crc(&ADDRESS, Some(pcf), b"hi").unwrap(), 0xDB2D);

        let no_ack = PacketControl::new(2, 1, true).unwrap();
        assert_eq!(frame_crc(&ADDRESS, Some(no_ack), b"hi").unwrap(), 0xEC1D);
    }

    #[test]
    fn static_payload_frame() {
        let crc = frame_crc(&ADDRESS, None, b"hi").unwrap();
        assert_eq!(crc, 0xC54E);

        // Address bytes go out most significant first.
        let mut expected = Crc16::new();
        expected.update(&[0x05, 0x04, 0x03, 0x02, 0x01]);
        expected.update(b"hi");
        assert_eq!(crc, expected.result());
    }

    #[test]
    fn verify_detects_corruption() {
        let pcf = PacketControl::new(2, 1, false).unwrap();
        assert!(verify(&ADDRESS, Some(pcf), b"hi", 0xDB2D).unwrap());
        assert!(!verify(&ADDRESS, Some(pcf), b"ho", 0xDB2D).unwrap());
    }

    #[test]
    fn rejects_invalid_fields() {
        assert_eq!(
            frame_crc(&[0x01, 0x02], None, &[]),
            Err(Error::AddressWidth(2))
        );
        assert_eq!(
            frame_crc(&ADDRESS, None, &[0u8; 33]),
            Err(Error::PayloadLength(33))
        );
        assert_eq!(PacketControl::new(33, 0, false), Err(Error::PayloadLength(33)));
        assert_eq!(PacketControl::new(0, 4, false), Err(Error::Pid(4)));
    }
}
