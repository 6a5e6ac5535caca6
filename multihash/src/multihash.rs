//! Wire-format codec
//!
//! A multihash is `[varint function-code][varint digest-length][digest]`.
//! [decode] checks structural soundness only — header fields parse and the
//! declared length matches the trailing byte count. Whether the code is
//! *known* is layered in [cast], which revalidates against the code table
//! before reinterpreting the buffer as a [Multihash].

use crate::{codes, varint, Error};
use bytes::{BufMut, Bytes, BytesMut};
use std::borrow::Cow;
use std::fmt;

/// A validated multihash: an immutable byte buffer whose structure has been
/// checked at construction. Created by [encode], [cast], or [crate::sum];
/// never mutated afterward.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Multihash(Bytes);

/// Borrowed view over a decoded multihash. The digest is a slice into the
/// source buffer and cannot outlive it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMultihash<'a> {
    pub code: u64,
    /// Symbolic name, when the code is known to the code table.
    pub name: Option<Cow<'static, str>>,
    /// Declared digest length in bytes.
    pub length: usize,
    pub digest: &'a [u8],
}

/// Encodes a digest along with the specified function code. The length
/// field is derived from the digest itself.
pub fn encode(digest: &[u8], code: u64) -> Result<Multihash, Error> {
    if !codes::valid_code(code) {
        return Err(Error::UnknownCode(code));
    }

    let length = digest.len() as u64;
    let mut buf =
        BytesMut::with_capacity(varint::size(code) + varint::size(length) + digest.len());
    varint::write(code, &mut buf);
    varint::write(length, &mut buf);
    buf.put_slice(digest);
    Ok(Multihash(buf.freeze()))
}

/// Decodes the structure of a multihash buffer.
///
/// The code is not required to be known here — an unrecognized code with a
/// sound structure decodes fine and fails only in [cast].
pub fn decode(buf: &[u8]) -> Result<DecodedMultihash<'_>, Error> {
    if buf.len() < 3 {
        return Err(Error::TooShort);
    }

    let mut reader = buf;
    let code = varint::read(&mut reader)?;
    let declared = varint::read(&mut reader)?;
    let declared = usize::try_from(declared).map_err(|_| Error::Malformed)?;
    if reader.len() != declared {
        return Err(Error::LengthMismatch {
            declared,
            actual: reader.len(),
        });
    }

    Ok(DecodedMultihash {
        code,
        name: codes::name(code),
        length: declared,
        digest: reader,
    })
}

/// Validates a buffer and reinterprets it as a [Multihash] without copying.
///
/// On top of the structural checks in [decode], the code must satisfy
/// [codes::valid_code].
pub fn cast(buf: impl Into<Bytes>) -> Result<Multihash, Error> {
    let bytes = buf.into();
    let decoded = decode(&bytes)?;
    if !codes::valid_code(decoded.code) {
        return Err(Error::UnknownCode(decoded.code));
    }
    Ok(Multihash(bytes))
}

impl Multihash {
    /// The raw wire-format bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the multihash, returning the underlying buffer.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Decoded view over this multihash.
    pub fn decoded(&self) -> DecodedMultihash<'_> {
        decode(&self.0).expect("validated at construction")
    }

    /// The function code.
    pub fn code(&self) -> u64 {
        self.decoded().code
    }

    /// The digest length in bytes.
    pub fn length(&self) -> usize {
        self.decoded().length
    }

    /// The digest bytes, skipping both header fields without decoding them.
    pub fn digest(&self) -> &[u8] {
        let code_len = varint::length(&self.0).expect("validated at construction");
        let length_len = varint::length(&self.0[code_len..]).expect("validated at construction");
        &self.0[code_len + length_len..]
    }
}

impl AsRef<[u8]> for Multihash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl fmt::Debug for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl TryFrom<Vec<u8>> for Multihash {
    type Error = Error;

    fn try_from(buf: Vec<u8>) -> Result<Self, Self::Error> {
        cast(buf)
    }
}

impl TryFrom<Bytes> for Multihash {
    type Error = Error;

    fn try_from(buf: Bytes) -> Result<Self, Self::Error> {
        cast(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{BLAKE2B_MIN, SHA1, SHA2_256};

    #[test]
    fn test_round_trip() {
        let cases: &[(u64, usize)] = &[
            (SHA1, 20),
            (SHA2_256, 32),
            (SHA2_256, 16),
            (0x05, 4),
            (BLAKE2B_MIN + 31, 32),
        ];
        for &(code, length) in cases {
            let digest: Vec<u8> = (0..length as u8).collect();
            let hash = encode(&digest, code).unwrap();
            let decoded = decode(hash.as_bytes()).unwrap();
            assert_eq!(decoded.code, code);
            assert_eq!(decoded.length, length);
            assert_eq!(decoded.digest, digest);

            assert_eq!(hash.code(), code);
            assert_eq!(hash.length(), length);
            assert_eq!(hash.digest(), digest);
        }
    }

    #[test]
    fn test_encode_unknown_code() {
        assert!(matches!(
            encode(&[0u8; 32], 0x21),
            Err(Error::UnknownCode(0x21))
        ));
        assert!(matches!(
            encode(&[0u8; 32], 0x10),
            Err(Error::UnknownCode(0x10))
        ));
    }

    #[test]
    fn test_decode_too_short() {
        assert!(matches!(decode(&[]), Err(Error::TooShort)));
        assert!(matches!(decode(&[0x12]), Err(Error::TooShort)));
        assert!(matches!(decode(&[0x12, 0x20]), Err(Error::TooShort)));
    }

    #[test]
    fn test_decode_length_mismatch() {
        let hash = encode(&[0xaa; 32], SHA2_256).unwrap();

        // Perturb the declared length upward and downward.
        let mut longer = hash.as_bytes().to_vec();
        longer[1] = 33;
        assert!(matches!(
            decode(&longer),
            Err(Error::LengthMismatch { declared: 33, actual: 32 })
        ));

        let mut shorter = hash.as_bytes().to_vec();
        shorter[1] = 31;
        assert!(matches!(
            decode(&shorter),
            Err(Error::LengthMismatch { declared: 31, actual: 32 })
        ));

        // Truncating the digest without fixing the header is also caught.
        let truncated = &hash.as_bytes()[..hash.as_bytes().len() - 1];
        assert!(matches!(decode(truncated), Err(Error::LengthMismatch { .. })));
    }

    #[test]
    fn test_decode_malformed_header() {
        // Code varint never terminates within the buffer.
        assert!(matches!(decode(&[0x80, 0x80, 0x80]), Err(Error::Malformed)));
        // Length varint missing entirely.
        assert!(matches!(decode(&[0x80, 0x01, 0x80]), Err(Error::Malformed)));
    }

    #[test]
    fn test_decode_does_not_require_known_code() {
        // 0x21 is unassigned: decode succeeds, cast refuses.
        let buf = vec![0x21, 0x02, 0xaa, 0xbb];
        let decoded = decode(&buf).unwrap();
        assert_eq!(decoded.code, 0x21);
        assert_eq!(decoded.name, None);
        assert!(matches!(cast(buf), Err(Error::UnknownCode(0x21))));
    }

    #[test]
    fn test_cast_app_range() {
        // Application-range codes are valid without any registration.
        let hash = cast(vec![0x05, 0x02, 0xaa, 0xbb]).unwrap();
        assert_eq!(hash.code(), 0x05);
        assert_eq!(hash.digest(), &[0xaa, 0xbb]);
    }

    #[test]
    fn test_multibyte_code_header() {
        let digest = [0u8; 32];
        let hash = encode(&digest, BLAKE2B_MIN + 31).unwrap();

        // 0xb220 encodes as [0xa0, 0xe4, 0x02].
        assert_eq!(&hash.as_bytes()[..4], &[0xa0, 0xe4, 0x02, 0x20]);
        assert_eq!(hash.digest(), digest);
    }

    #[test]
    fn test_length_perturbation() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..64 {
            let len = rng.gen_range(1..=64usize);
            let mut digest = vec![0u8; len];
            rng.fill(&mut digest[..]);
            let hash = encode(&digest, SHA2_256).unwrap();
            assert_eq!(decode(hash.as_bytes()).unwrap().digest, digest);

            // Lengths below 127 occupy a single header byte, so any bump of
            // the declared length disagrees with the trailing byte count.
            let mut corrupt = hash.as_bytes().to_vec();
            corrupt[1] += rng.gen_range(1..=10u8);
            assert!(matches!(
                decode(&corrupt),
                Err(Error::LengthMismatch { .. })
            ));
        }
    }

    #[test]
    fn test_decoded_name() {
        let hash = encode(&[0xaa; 20], SHA1).unwrap();
        assert_eq!(hash.decoded().name.unwrap(), "sha1");
    }

    #[test]
    fn test_display_is_hex() {
        let hash = encode(&[0xaa, 0xbb], 0x05).unwrap();
        assert_eq!(hash.to_string(), "0502aabb");
    }
}
