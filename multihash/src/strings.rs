//! String-form conversions
//!
//! Hex, base58btc, and standard base64 renderings of the wire format. Every
//! decoder routes the recovered bytes through [cast], so a syntactically
//! valid string whose bytes are not a structurally valid multihash fails
//! with the same granularity as decoding raw bytes.

use crate::{multihash::cast, Error, Multihash};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

impl Multihash {
    /// Lowercase hex rendering of the wire format.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// Base58btc rendering of the wire format.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.as_bytes()).into_string()
    }

    /// Standard (padded) base64 rendering of the wire format.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.as_bytes())
    }
}

/// Decodes a hex string into a validated multihash.
pub fn from_hex(s: &str) -> Result<Multihash, Error> {
    cast(hex::decode(s)?)
}

/// Decodes a base58btc string into a validated multihash.
pub fn from_base58(s: &str) -> Result<Multihash, Error> {
    cast(bs58::decode(s).into_vec()?)
}

/// Decodes a standard base64 string into a validated multihash.
pub fn from_base64(s: &str) -> Result<Multihash, Error> {
    cast(BASE64.decode(s)?)
}
