//!
//! xxh3 scoring.
//!
//! ✅ Extremely fast, deterministic across platforms
//! ⚠️ Not cryptographically secure; adversarial keys can force collisions
//!
use super::Digest;
use std::fmt;
use xxhash_rust::xxh3::Xxh3;

///
/// Xxh3Digest
///
/// Streaming xxh3-64. The sum is the big-endian encoding of the hash so that
/// byte-wise ordering equals numeric ordering.
///

#[derive(Clone)]
pub struct Xxh3Digest {
    hasher: Xxh3,
}

impl Xxh3Digest {
    #[must_use]
    pub fn new() -> Self {
        Self {
            hasher: Xxh3::new(),
        }
    }
}

impl Default for Xxh3Digest {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Xxh3Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Xxh3Digest").finish_non_exhaustive()
    }
}

impl Digest for Xxh3Digest {
    fn reset(&mut self) {
        self.hasher.reset();
    }

    fn write(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    fn sum(&self) -> Vec<u8> {
        self.hasher.digest().to_be_bytes().to_vec()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use xxhash_rust::xxh3::xxh3_64;

    #[test]
    fn streaming_matches_one_shot() {
        let mut digest = Xxh3Digest::new();
        digest.write(b"node1");
        digest.write(b"item");

        assert_eq!(digest.sum(), xxh3_64(b"node1item").to_be_bytes());
    }
}
