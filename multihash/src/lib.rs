//! Self-describing hash digests.
//!
//! # Overview
//!
//! A multihash prefixes a digest with the function that produced it and the
//! digest's length, so provenance and size decode without external context:
//!
//! ```text
//! [varint function-code][varint digest-length][digest bytes]
//! ```
//!
//! The crate provides the wire-format codec ([encode]/[decode]/[cast]), a
//! [Registry] of hash implementations composed explicitly at startup, the
//! [sum] dispatcher that computes and wraps digests, and hex/base58/base64
//! string forms. Hash algorithms themselves are consumed as opaque
//! streaming capabilities through the [Hasher] trait.
//!
//! # Example
//!
//! ```
//! use multihash::{sum, Registry, SHA2_256};
//!
//! let registry = Registry::standard();
//!
//! // Canonical length.
//! let hash = sum(&registry, b"foo", SHA2_256, None).unwrap();
//! assert_eq!(hash.code(), SHA2_256);
//! assert_eq!(hash.length(), 32);
//!
//! // Explicit truncation.
//! let hash = sum(&registry, b"foo", SHA2_256, Some(16)).unwrap();
//! assert_eq!(hash.to_hex(), "12102c26b46b68ffc68ff99b453c1d304134");
//! ```
//!
//! # Choosing the activated algorithm set
//!
//! The registry is an explicit value, not ambient global state. Builders
//! compose the set of activated algorithms, and later registrations for the
//! same code replace earlier ones:
//!
//! ```
//! use multihash::{sum, Registry, BLAKE2B_MIN};
//!
//! let registry = Registry::new()
//!     .with_standard_hashes()
//!     .with_blake2()
//!     .with_blake3();
//!
//! // BLAKE2b's output size is encoded in the code itself.
//! let hash = sum(&registry, b"foo", BLAKE2B_MIN + 31, None).unwrap();
//! assert_eq!(hash.length(), 32);
//! ```

pub mod codes;
mod error;
mod hasher;
pub mod legacy;
mod multihash;
mod registry;
mod strings;
mod sum;
pub mod varint;

pub use codes::{
    app_code, code_for_name, default_length, name, valid_code, BLAKE2B_MAX, BLAKE2B_MIN,
    BLAKE2S_MAX, BLAKE2S_MIN, BLAKE3, DBL_SHA2_256, IDENTITY, KECCAK_224, KECCAK_256, KECCAK_384,
    KECCAK_512, MD5, MURMUR3_32, MURMUR3_X64_64, SHA1, SHA2_224, SHA2_256, SHA2_384, SHA2_512,
    SHA2_512_224, SHA2_512_256, SHA3_224, SHA3_256, SHA3_384, SHA3_512, SHAKE_128, SHAKE_256,
};
pub use error::Error;
pub use hasher::Hasher;
pub use multihash::{cast, decode, encode, DecodedMultihash, Multihash};
pub use registry::{HasherFactory, Registry};
pub use strings::{from_base58, from_base64, from_hex};
pub use sum::sum;
