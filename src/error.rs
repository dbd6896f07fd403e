use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A byte range asked for more bytes than the slice holds.
    #[error("byte range of length {len} exceeds buffer of {available} bytes")]
    OutOfBounds { len: usize, available: usize },
    #[error("address width must be 3..=5 bytes, got {0}")]
    AddressWidth(usize),
    #[error("payload length must be at most 32 bytes, got {0}")]
    PayloadLength(usize),
    #[error("packet id must be 0..=3, got {0}")]
    Pid(u8),
}
