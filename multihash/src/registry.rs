//! Hash registry
//!
//! Maps function codes to hasher factories. The registry is an explicit
//! value owned by the application and injected into [crate::sum], never
//! ambient global state: the activated algorithm set is whatever the
//! builder chain composed at startup.
//!
//! Registration is last-write-wins with no error on overwrite. An
//! application with a strong opinion about an implementation (say, a
//! hardware-accelerated sha2-256) re-registers the code and every
//! subsequent lookup uses the new factory. The map is guarded by a
//! read-write lock: registrations made before any lookup are guaranteed
//! visible, and late registrations racing with lookups settle on
//! last-write-wins without corrupting the map.

use crate::{
    codes::{self, Family},
    hasher::{
        Blake3, DigestHasher, DoubleSha256, Hasher, Identity, Murmur3X64_64, Murmur3_32, Xof,
    },
    Error,
};
use blake2::{
    digest::{Update as _, VariableOutput},
    Blake2bVar, Blake2sVar,
};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest as _, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::{
    Keccak224, Keccak256, Keccak384, Keccak512, Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128,
    Shake256,
};
use std::{
    collections::HashMap,
    sync::RwLock,
};

/// Zero-argument factory producing a fresh hasher instance.
pub type HasherFactory = Box<dyn Fn() -> Box<dyn Hasher> + Send + Sync>;

/// A variable-output family activated in a registry: the range descriptor
/// plus a digest routine parameterized by the member's output size.
///
/// The algorithm itself is configured for the exact size — truncating a
/// longer variant's output does not equal the shorter variant for these
/// families.
pub(crate) struct FamilyHasher {
    family: &'static Family,
    digest: fn(&[u8], usize) -> Vec<u8>,
}

impl FamilyHasher {
    pub(crate) fn digest(&self, data: &[u8], size: usize) -> Vec<u8> {
        (self.digest)(data, size)
    }
}

fn blake2b_digest(data: &[u8], size: usize) -> Vec<u8> {
    let mut hasher = Blake2bVar::new(size).expect("size bounded by the family range");
    hasher.update(data);
    hasher.finalize_boxed().into_vec()
}

fn blake2s_digest(data: &[u8], size: usize) -> Vec<u8> {
    let mut hasher = Blake2sVar::new(size).expect("size bounded by the family range");
    hasher.update(data);
    hasher.finalize_boxed().into_vec()
}

/// Process-lifetime mapping from function codes to hasher factories, plus
/// the ordered list of activated variable-output families.
pub struct Registry {
    hashers: RwLock<HashMap<u64, HasherFactory>>,
    families: Vec<FamilyHasher>,
}

impl Registry {
    /// Creates an empty registry with no hashers activated.
    pub fn new() -> Self {
        Self {
            hashers: RwLock::new(HashMap::new()),
            families: Vec::new(),
        }
    }

    /// A registry with the standard hashes activated.
    pub fn standard() -> Self {
        Self::new().with_standard_hashes()
    }

    /// A registry with every built-in algorithm activated.
    pub fn all() -> Self {
        Self::new()
            .with_standard_hashes()
            .with_sha3()
            .with_blake2()
            .with_blake3()
            .with_murmur3()
    }

    /// Adds or replaces the factory for a code. The last registration for a
    /// given code wins; overwriting is policy, not an error.
    pub fn register<F>(&self, code: u64, factory: F)
    where
        F: Fn() -> Box<dyn Hasher> + Send + Sync + 'static,
    {
        let mut hashers = self.hashers.write().expect("registry lock poisoned");
        hashers.insert(code, Box::new(factory));
    }

    /// Instantiates a fresh hasher for a code. Every call returns an
    /// independent instance; no hasher state is shared between callers.
    pub fn get_hasher(&self, code: u64) -> Result<Box<dyn Hasher>, Error> {
        let hashers = self.hashers.read().expect("registry lock poisoned");
        let factory = hashers.get(&code).ok_or(Error::Unsupported(code))?;
        Ok(factory())
    }

    /// Whether a factory is registered for a code. Family members resolve
    /// separately and do not appear here.
    pub fn is_registered(&self, code: u64) -> bool {
        let hashers = self.hashers.read().expect("registry lock poisoned");
        hashers.contains_key(&code)
    }

    /// Resolves a code against the activated families, in activation order.
    /// Checked before the flat map when computing a digest.
    pub(crate) fn family(&self, code: u64) -> Option<(&FamilyHasher, usize)> {
        self.families
            .iter()
            .find_map(|entry| entry.family.size(code).map(|size| (entry, size)))
    }

    /// Activates the hashes assumed universally available: identity, md5,
    /// sha1, the sha2 variants, and double sha2-256.
    pub fn with_standard_hashes(self) -> Self {
        self.register(codes::IDENTITY, || Box::new(Identity::default()));
        self.register(codes::MD5, || Box::new(DigestHasher(Md5::new())));
        self.register(codes::SHA1, || Box::new(DigestHasher(Sha1::new())));
        self.register(codes::SHA2_256, || Box::new(DigestHasher(Sha256::new())));
        self.register(codes::SHA2_512, || Box::new(DigestHasher(Sha512::new())));
        self.register(codes::SHA2_224, || Box::new(DigestHasher(Sha224::new())));
        self.register(codes::SHA2_384, || Box::new(DigestHasher(Sha384::new())));
        self.register(codes::SHA2_512_224, || {
            Box::new(DigestHasher(Sha512_224::new()))
        });
        self.register(codes::SHA2_512_256, || {
            Box::new(DigestHasher(Sha512_256::new()))
        });
        self.register(codes::DBL_SHA2_256, || Box::new(DoubleSha256::default()));
        self
    }

    /// Activates the SHA-3 standard's functions: sha3, shake, and the
    /// pre-standard keccak variants.
    pub fn with_sha3(self) -> Self {
        self.register(codes::SHA3_224, || Box::new(DigestHasher(Sha3_224::new())));
        self.register(codes::SHA3_256, || Box::new(DigestHasher(Sha3_256::new())));
        self.register(codes::SHA3_384, || Box::new(DigestHasher(Sha3_384::new())));
        self.register(codes::SHA3_512, || Box::new(DigestHasher(Sha3_512::new())));
        self.register(codes::SHAKE_128, || {
            Box::new(Xof::new(Shake128::default(), 32))
        });
        self.register(codes::SHAKE_256, || {
            Box::new(Xof::new(Shake256::default(), 64))
        });
        self.register(codes::KECCAK_224, || {
            Box::new(DigestHasher(Keccak224::new()))
        });
        self.register(codes::KECCAK_256, || {
            Box::new(DigestHasher(Keccak256::new()))
        });
        self.register(codes::KECCAK_384, || {
            Box::new(DigestHasher(Keccak384::new()))
        });
        self.register(codes::KECCAK_512, || {
            Box::new(DigestHasher(Keccak512::new()))
        });
        self
    }

    /// Activates the BLAKE2b and BLAKE2s families across their whole code
    /// ranges.
    pub fn with_blake2(mut self) -> Self {
        self.families.push(FamilyHasher {
            family: &codes::BLAKE2B,
            digest: blake2b_digest,
        });
        self.families.push(FamilyHasher {
            family: &codes::BLAKE2S,
            digest: blake2s_digest,
        });
        self
    }

    /// Activates BLAKE3.
    pub fn with_blake3(self) -> Self {
        self.register(codes::BLAKE3, || Box::new(Blake3::default()));
        self
    }

    /// Activates the murmur3 variants.
    pub fn with_murmur3(self) -> Self {
        self.register(codes::MURMUR3_X64_64, || {
            Box::new(Murmur3X64_64::default())
        });
        self.register(codes::MURMUR3_32, || Box::new(Murmur3_32::default()));
        self
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}
