//!
//! Scoring primitives for the ranking engine.
//!
//! A [`Digest`] is a resettable, byte-streaming hash. The ranking engine
//! resets it, writes the member identifier followed by the key, and compares
//! the resulting byte strings. Any deterministic implementation can be
//! injected; the built-ins cover SHA-256 (default), SHA-512 and xxh3.
//!

mod sha;
mod xxh3;

pub use sha::{Sha2Digest, Sha256Digest, Sha512Digest};
pub use xxh3::Xxh3Digest;

use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Digest
///
/// Deterministic, order-sensitive byte hash. `sum` reads the current state
/// without consuming or resetting it.
///

pub trait Digest: Send {
    fn reset(&mut self);

    fn write(&mut self, bytes: &[u8]);

    fn sum(&self) -> Vec<u8>;
}

impl<D: Digest + ?Sized> Digest for Box<D> {
    fn reset(&mut self) {
        (**self).reset();
    }

    fn write(&mut self, bytes: &[u8]) {
        (**self).write(bytes);
    }

    fn sum(&self) -> Vec<u8> {
        (**self).sum()
    }
}

///
/// DigestAlgorithm
/// Run-time selector for the built-in digests.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    #[default]
    #[display("sha256")]
    Sha256,

    #[display("sha512")]
    Sha512,

    #[display("xxh3")]
    Xxh3,
}

impl DigestAlgorithm {
    #[must_use]
    pub fn build(self) -> AnyDigest {
        match self {
            Self::Sha256 => AnyDigest::Sha256(Sha256Digest::new()),
            Self::Sha512 => AnyDigest::Sha512(Sha512Digest::new()),
            Self::Xxh3 => AnyDigest::Xxh3(Xxh3Digest::new()),
        }
    }
}

///
/// AnyDigest
/// One of the built-in digests, chosen at run time.
///

#[derive(Clone, Debug)]
pub enum AnyDigest {
    Sha256(Sha256Digest),
    Sha512(Sha512Digest),
    Xxh3(Xxh3Digest),
}

impl AnyDigest {
    #[must_use]
    pub const fn algorithm(&self) -> DigestAlgorithm {
        match self {
            Self::Sha256(_) => DigestAlgorithm::Sha256,
            Self::Sha512(_) => DigestAlgorithm::Sha512,
            Self::Xxh3(_) => DigestAlgorithm::Xxh3,
        }
    }
}

impl Default for AnyDigest {
    fn default() -> Self {
        DigestAlgorithm::default().build()
    }
}

impl Digest for AnyDigest {
    fn reset(&mut self) {
        match self {
            Self::Sha256(d) => d.reset(),
            Self::Sha512(d) => d.reset(),
            Self::Xxh3(d) => d.reset(),
        }
    }

    fn write(&mut self, bytes: &[u8]) {
        match self {
            Self::Sha256(d) => d.write(bytes),
            Self::Sha512(d) => d.write(bytes),
            Self::Xxh3(d) => d.write(bytes),
        }
    }

    fn sum(&self) -> Vec<u8> {
        match self {
            Self::Sha256(d) => d.sum(),
            Self::Sha512(d) => d.sum(),
            Self::Xxh3(d) => d.sum(),
        }
    }
}

///
/// TESTS
///
