//! Function-code tables
//!
//! Multihash function codes are reserved in the multiformats code table.
//! A single static table maps each flat code to its symbolic name and
//! canonical digest length, so the name-to-code and code-to-name directions
//! cannot drift apart. Variable-output families (BLAKE2b, BLAKE2s) are not
//! table rows: their digest size is encoded in the code itself as a
//! contiguous range, and membership is a range check.

use std::borrow::Cow;

pub const IDENTITY: u64 = 0x00;
pub const SHA1: u64 = 0x11;
pub const SHA2_256: u64 = 0x12;
pub const SHA2_512: u64 = 0x13;
pub const SHA3_512: u64 = 0x14;
pub const SHA3_384: u64 = 0x15;
pub const SHA3_256: u64 = 0x16;
pub const SHA3_224: u64 = 0x17;
pub const SHAKE_128: u64 = 0x18;
pub const SHAKE_256: u64 = 0x19;
pub const KECCAK_224: u64 = 0x1a;
pub const KECCAK_256: u64 = 0x1b;
pub const KECCAK_384: u64 = 0x1c;
pub const KECCAK_512: u64 = 0x1d;
pub const BLAKE3: u64 = 0x1e;
pub const SHA2_224: u64 = 0x1f;
pub const SHA2_384: u64 = 0x20;
pub const MURMUR3_X64_64: u64 = 0x22;
pub const MURMUR3_32: u64 = 0x23;
pub const DBL_SHA2_256: u64 = 0x56;
pub const MD5: u64 = 0xd5;
pub const SHA2_512_224: u64 = 0x1014;
pub const SHA2_512_256: u64 = 0x1015;

pub const BLAKE2B_MIN: u64 = 0xb201;
pub const BLAKE2B_MAX: u64 = 0xb240;
pub const BLAKE2S_MIN: u64 = 0xb241;
pub const BLAKE2S_MAX: u64 = 0xb260;

/// A flat code-table row.
struct Entry {
    code: u64,
    name: &'static str,
    default_length: Option<usize>,
}

const TABLE: &[Entry] = &[
    Entry { code: IDENTITY, name: "identity", default_length: None },
    Entry { code: SHA1, name: "sha1", default_length: Some(20) },
    Entry { code: SHA2_256, name: "sha2-256", default_length: Some(32) },
    Entry { code: SHA2_512, name: "sha2-512", default_length: Some(64) },
    Entry { code: SHA3_512, name: "sha3-512", default_length: Some(64) },
    Entry { code: SHA3_384, name: "sha3-384", default_length: Some(48) },
    Entry { code: SHA3_256, name: "sha3-256", default_length: Some(32) },
    Entry { code: SHA3_224, name: "sha3-224", default_length: Some(28) },
    Entry { code: SHAKE_128, name: "shake-128", default_length: Some(32) },
    Entry { code: SHAKE_256, name: "shake-256", default_length: Some(64) },
    Entry { code: KECCAK_224, name: "keccak-224", default_length: Some(28) },
    Entry { code: KECCAK_256, name: "keccak-256", default_length: Some(32) },
    Entry { code: KECCAK_384, name: "keccak-384", default_length: Some(48) },
    Entry { code: KECCAK_512, name: "keccak-512", default_length: Some(64) },
    Entry { code: BLAKE3, name: "blake3", default_length: Some(32) },
    Entry { code: SHA2_224, name: "sha2-224", default_length: Some(28) },
    Entry { code: SHA2_384, name: "sha2-384", default_length: Some(48) },
    Entry { code: MURMUR3_X64_64, name: "murmur3-x64-64", default_length: Some(8) },
    Entry { code: MURMUR3_32, name: "murmur3-32", default_length: Some(4) },
    Entry { code: DBL_SHA2_256, name: "dbl-sha2-256", default_length: Some(32) },
    Entry { code: MD5, name: "md5", default_length: Some(16) },
    Entry { code: SHA2_512_224, name: "sha2-512-224", default_length: Some(28) },
    Entry { code: SHA2_512_256, name: "sha2-512-256", default_length: Some(32) },
];

/// A variable-output family: a contiguous block of codes where the digest
/// size is `code - min + 1` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Family {
    pub name: &'static str,
    pub min: u64,
    pub max: u64,
}

impl Family {
    /// Digest size in bytes for a member code, or `None` if the code is
    /// outside this family's range.
    pub fn size(&self, code: u64) -> Option<usize> {
        if code < self.min || code > self.max {
            return None;
        }
        Some((code - self.min + 1) as usize)
    }

    /// Member code for a digest size in bytes, or `None` if the size is
    /// outside this family's range.
    pub fn code(&self, size: usize) -> Option<u64> {
        if size == 0 {
            return None;
        }
        let code = self.min + size as u64 - 1;
        (code <= self.max).then_some(code)
    }
}

pub const BLAKE2B: Family = Family { name: "blake2b", min: BLAKE2B_MIN, max: BLAKE2B_MAX };
pub const BLAKE2S: Family = Family { name: "blake2s", min: BLAKE2S_MIN, max: BLAKE2S_MAX };

/// Every known variable-output family.
pub const FAMILIES: &[Family] = &[BLAKE2B, BLAKE2S];

fn flat(code: u64) -> Option<&'static Entry> {
    TABLE.iter().find(|entry| entry.code == code)
}

/// Resolves a code to the family containing it and the member's digest size.
pub fn family(code: u64) -> Option<(&'static Family, usize)> {
    FAMILIES
        .iter()
        .find_map(|family| family.size(code).map(|size| (family, size)))
}

/// Symbolic name for a function code, if the code is known. Family members
/// are named `{family}-{bits}` (e.g. `blake2b-256` for the 32-byte member).
pub fn name(code: u64) -> Option<Cow<'static, str>> {
    if let Some(entry) = flat(code) {
        return Some(Cow::Borrowed(entry.name));
    }
    family(code).map(|(family, size)| Cow::Owned(format!("{}-{}", family.name, size * 8)))
}

/// Function code for a symbolic name. `"sha3"` is accepted as a legacy alias
/// for `"sha3-512"`.
pub fn code_for_name(name: &str) -> Option<u64> {
    if name == "sha3" {
        return Some(SHA3_512);
    }
    if let Some(entry) = TABLE.iter().find(|entry| entry.name == name) {
        return Some(entry.code);
    }
    for family in FAMILIES {
        let Some(rest) = name
            .strip_prefix(family.name)
            .and_then(|rest| rest.strip_prefix('-'))
        else {
            continue;
        };
        let Ok(bits) = rest.parse::<usize>() else {
            continue;
        };
        if bits == 0 || bits % 8 != 0 {
            continue;
        }
        if let Some(code) = family.code(bits / 8) {
            return Some(code);
        }
    }
    None
}

/// Canonical digest length in bytes for a code, used when the caller does
/// not request a truncation length. Family members resolve closed-form to
/// their encoded size.
pub fn default_length(code: u64) -> Option<usize> {
    if let Some(entry) = flat(code) {
        return entry.default_length;
    }
    family(code).map(|(_, size)| size)
}

/// Whether a code is in the application-specific range, reserved for
/// caller-defined meanings. Zero is excluded: it identifies the identity
/// function, a registered code.
pub fn app_code(code: u64) -> bool {
    code > 0 && code < 0x10
}

/// Whether a code is a valid multihash function code: in the application
/// range, or known to the code table (flat row or family range).
pub fn valid_code(code: u64) -> bool {
    app_code(code) || flat(code).is_some() || family(code).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_consistent() {
        // Codes and names are unique in both directions, and every row
        // round-trips through both lookups.
        let mut codes = HashSet::new();
        let mut names = HashSet::new();
        for entry in TABLE {
            assert!(codes.insert(entry.code), "duplicate code {:#x}", entry.code);
            assert!(names.insert(entry.name), "duplicate name {}", entry.name);
            assert_eq!(name(entry.code).unwrap(), entry.name);
            assert_eq!(code_for_name(entry.name), Some(entry.code));
        }
    }

    #[test]
    fn test_sha3_alias() {
        assert_eq!(code_for_name("sha3"), Some(SHA3_512));
        assert_eq!(name(SHA3_512).unwrap(), "sha3-512");
    }

    #[test]
    fn test_family_names() {
        assert_eq!(name(BLAKE2B_MIN).unwrap(), "blake2b-8");
        assert_eq!(name(BLAKE2B_MIN + 31).unwrap(), "blake2b-256");
        assert_eq!(name(BLAKE2B_MAX).unwrap(), "blake2b-512");
        assert_eq!(name(BLAKE2S_MAX).unwrap(), "blake2s-256");

        assert_eq!(code_for_name("blake2b-256"), Some(BLAKE2B_MIN + 31));
        assert_eq!(code_for_name("blake2s-256"), Some(BLAKE2S_MAX));

        // Sizes outside the range and non-byte bit counts do not parse.
        assert_eq!(code_for_name("blake2b-520"), None);
        assert_eq!(code_for_name("blake2b-12"), None);
        assert_eq!(code_for_name("blake2b-0"), None);
    }

    #[test]
    fn test_family_arithmetic() {
        for code in BLAKE2B_MIN..=BLAKE2B_MAX {
            let (family, size) = family(code).unwrap();
            assert_eq!(family.name, "blake2b");
            assert_eq!(size, (code - BLAKE2B_MIN + 1) as usize);
            assert_eq!(family.code(size), Some(code));
            assert_eq!(default_length(code), Some(size));
        }
        assert!(family(BLAKE2B_MIN - 1).is_none());
        assert_eq!(family(BLAKE2S_MIN).unwrap().1, 1);
        assert!(family(BLAKE2S_MAX + 1).is_none());
    }

    #[test]
    fn test_app_range_boundaries() {
        // Zero is identity, not an application code; 0x10 is outside the
        // range entirely.
        assert!(!app_code(0));
        assert!(app_code(0x01));
        assert!(app_code(0x0f));
        assert!(!app_code(0x10));

        assert!(valid_code(0), "identity is valid via the code table");
        assert!(valid_code(0x05));
        assert!(!valid_code(0x10));
        assert!(!valid_code(0x21));
    }

    #[test]
    fn test_default_lengths() {
        assert_eq!(default_length(SHA1), Some(20));
        assert_eq!(default_length(SHA2_256), Some(32));
        assert_eq!(default_length(SHA2_512), Some(64));
        assert_eq!(default_length(MD5), Some(16));
        assert_eq!(default_length(IDENTITY), None);
        assert_eq!(default_length(0x05), None);
    }
}
