//! Historical fixed-prefix revision
//!
//! The first revision of the wire format used one raw byte for each header
//! field, capping codes and digest lengths at 127 and the whole multihash
//! at 129 bytes. For everything it can represent, its bytes coincide with
//! the current varint revision, so [encode] produces ordinary [Multihash]
//! values.

use crate::{
    codes,
    multihash::{self, DecodedMultihash, Multihash},
    Error,
};

/// Maximum total length of a fixed-prefix multihash.
pub const MAX_LENGTH: usize = 129;

/// Maximum digest length representable in the one-byte length field.
pub const MAX_DIGEST_LENGTH: usize = 127;

/// Encodes a digest in the fixed-prefix revision.
///
/// Codes at or above 0x80 postdate this revision and are rejected as
/// unknown; digests longer than [MAX_DIGEST_LENGTH] do not fit its length
/// field.
pub fn encode(digest: &[u8], code: u64) -> Result<Multihash, Error> {
    if code > 0x7f {
        return Err(Error::UnknownCode(code));
    }
    if digest.len() > MAX_DIGEST_LENGTH {
        return Err(Error::DigestTooLong(digest.len()));
    }
    // Single-byte header fields make the two revisions bit-identical.
    multihash::encode(digest, code)
}

/// Decodes a fixed-prefix multihash: one raw byte per header field.
pub fn decode(buf: &[u8]) -> Result<DecodedMultihash<'_>, Error> {
    if buf.len() < 3 {
        return Err(Error::TooShort);
    }
    if buf.len() > MAX_LENGTH {
        return Err(Error::TooLong);
    }

    let code = u64::from(buf[0]);
    let declared = usize::from(buf[1]);
    let digest = &buf[2..];
    if digest.len() != declared {
        return Err(Error::LengthMismatch {
            declared,
            actual: digest.len(),
        });
    }

    Ok(DecodedMultihash {
        code,
        name: codes::name(code),
        length: declared,
        digest,
    })
}
