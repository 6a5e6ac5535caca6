//! Streaming-hash capability and built-in adapters
//!
//! The registry hands out hashers as boxed trait objects: a hasher accepts
//! repeated byte writes and yields a digest on finalize. Most algorithms
//! come through the RustCrypto [digest] traits; the remainder (identity,
//! double SHA-256, the XOF-backed functions, murmur3) get small adapters
//! here.

use digest::{DynDigest, ExtendableOutputReset, Reset, Update, XofReader};
use sha2::{Digest, Sha256};

/// Number of XOF bytes exposed for BLAKE3. Truncation lengths up to this
/// ceiling succeed; longer requests fail.
pub(crate) const BLAKE3_MAX_LENGTH: usize = 128;

/// A streaming hash: accepts bytes incrementally and yields a digest on
/// finalize. Finalizing resets the hasher to its initial state.
pub trait Hasher: Send {
    /// Append message to previously recorded data.
    fn update(&mut self, data: &[u8]);

    /// Hash all recorded data and reset the hasher to the initial state.
    fn finalize(&mut self) -> Vec<u8>;

    /// Reset the hasher without generating a digest.
    fn reset(&mut self);
}

/// Adapter over any fixed-output RustCrypto digest.
pub(crate) struct DigestHasher<D>(pub(crate) D);

impl<D: DynDigest + Send> Hasher for DigestHasher<D> {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn finalize(&mut self) -> Vec<u8> {
        self.0.finalize_reset().into_vec()
    }

    fn reset(&mut self) {
        self.0.reset();
    }
}

/// The identity function: the "digest" is the input itself.
#[derive(Default)]
pub(crate) struct Identity {
    buf: Vec<u8>,
}

impl Hasher for Identity {
    fn update(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    fn finalize(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }

    fn reset(&mut self) {
        self.buf.clear();
    }
}

/// SHA-256 applied twice.
pub(crate) struct DoubleSha256(Sha256);

impl Default for DoubleSha256 {
    fn default() -> Self {
        Self(Sha256::new())
    }
}

impl Hasher for DoubleSha256 {
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.0, data);
    }

    fn finalize(&mut self) -> Vec<u8> {
        let first = Digest::finalize_reset(&mut self.0);
        Sha256::digest(first).to_vec()
    }

    fn reset(&mut self) {
        self.0 = Sha256::new();
    }
}

/// Adapter over an extendable-output function pinned to a fixed size.
pub(crate) struct Xof<S> {
    inner: S,
    size: usize,
}

impl<S> Xof<S> {
    pub(crate) fn new(inner: S, size: usize) -> Self {
        Self { inner, size }
    }
}

impl<S: Update + ExtendableOutputReset + Reset + Send> Hasher for Xof<S> {
    fn update(&mut self, data: &[u8]) {
        Update::update(&mut self.inner, data);
    }

    fn finalize(&mut self) -> Vec<u8> {
        let mut out = vec![0u8; self.size];
        self.inner.finalize_xof_reset().read(&mut out);
        out
    }

    fn reset(&mut self) {
        Reset::reset(&mut self.inner);
    }
}

/// BLAKE3, exposing the first [BLAKE3_MAX_LENGTH] bytes of its XOF stream.
/// The default length (32) and any explicit length up to the ceiling are
/// prefixes of the same stream.
#[derive(Default)]
pub(crate) struct Blake3 {
    inner: blake3::Hasher,
}

impl Hasher for Blake3 {
    fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn finalize(&mut self) -> Vec<u8> {
        let mut out = vec![0u8; BLAKE3_MAX_LENGTH];
        self.inner.finalize_xof().fill(&mut out);
        self.inner.reset();
        out
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}

/// MurmurHash3, 64-bit variant: the first 8 bytes of the big-endian 128-bit
/// x64 digest. Murmur3 is not incremental, so input is buffered.
#[derive(Default)]
pub(crate) struct Murmur3X64_64 {
    buf: Vec<u8>,
}

impl Hasher for Murmur3X64_64 {
    fn update(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    fn finalize(&mut self) -> Vec<u8> {
        let mut source: &[u8] = &self.buf;
        let digest = murmur3::murmur3_x64_128(&mut source, 0)
            .expect("reading from memory cannot fail");
        self.buf.clear();
        digest.to_be_bytes()[..8].to_vec()
    }

    fn reset(&mut self) {
        self.buf.clear();
    }
}

/// MurmurHash3, 32-bit variant, rendered big-endian.
#[derive(Default)]
pub(crate) struct Murmur3_32 {
    buf: Vec<u8>,
}

impl Hasher for Murmur3_32 {
    fn update(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    fn finalize(&mut self) -> Vec<u8> {
        let mut source: &[u8] = &self.buf;
        let digest = murmur3::murmur3_32(&mut source, 0)
            .expect("reading from memory cannot fail");
        self.buf.clear();
        digest.to_be_bytes().to_vec()
    }

    fn reset(&mut self) {
        self.buf.clear();
    }
}
