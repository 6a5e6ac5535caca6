//! Digest computation dispatcher

use crate::{
    codes,
    multihash::{encode, Multihash},
    registry::Registry,
    Error,
};

/// Computes the multihash of `data` under the function `code`, truncated to
/// `length` bytes (`None` selects the code's canonical length).
///
/// Resolution order is fixed: the identity function first, then the
/// registry's activated variable-output families (whose member size is part
/// of the code itself), then the flat registry. Digests shorter than the
/// requested length fail — a multihash is never padded.
pub fn sum(
    registry: &Registry,
    data: &[u8],
    code: u64,
    length: Option<usize>,
) -> Result<Multihash, Error> {
    if !codes::valid_code(code) {
        return Err(Error::UnknownCode(code));
    }

    // Identity is pure pass-through: no notion of truncation exists for it,
    // so an explicit length must equal the input length exactly.
    if code == codes::IDENTITY {
        if let Some(requested) = length {
            if requested != data.len() {
                return Err(Error::LengthMismatch {
                    declared: requested,
                    actual: data.len(),
                });
            }
        }
        return encode(data, code);
    }

    let length = match length {
        Some(requested) => requested,
        None => codes::default_length(code).ok_or(Error::NoDefaultLength(code))?,
    };

    let digest = match registry.family(code) {
        Some((family, size)) => family.digest(data, size),
        None => {
            let mut hasher = registry.get_hasher(code)?;
            hasher.update(data);
            hasher.finalize()
        }
    };

    if digest.len() < length {
        return Err(Error::LenTooLarge {
            requested: length,
            actual: digest.len(),
        });
    }
    encode(&digest[..length], code)
}
