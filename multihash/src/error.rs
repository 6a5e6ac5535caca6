//! Error types for multihash operations

use thiserror::Error;

/// Error type for multihash encoding, decoding, and digest computation.
#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed varint")]
    Malformed,
    #[error("multihash too short: must be at least 3 bytes")]
    TooShort,
    #[error("multihash too long: must be at most 129 bytes")]
    TooLong,
    #[error("multihash length inconsistent: declared {declared}, found {actual}")]
    LengthMismatch { declared: usize, actual: usize },
    #[error("unknown multihash code {0:#x}")]
    UnknownCode(u64),
    #[error("no hasher registered for code {0:#x}")]
    Unsupported(u64),
    #[error("no default length for code {0:#x}")]
    NoDefaultLength(u64),
    #[error("requested length {requested} exceeds digest size {actual}")]
    LenTooLarge { requested: usize, actual: usize },
    #[error("digest too long for the fixed-prefix format: {0} > 127 bytes")]
    DigestTooLong(usize),
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("invalid base58: {0}")]
    Base58(#[from] bs58::decode::Error),
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}
