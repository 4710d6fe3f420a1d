use super::Digest;
use sha2::{Sha256, Sha512};

pub type Sha256Digest = Sha2Digest<Sha256>;
pub type Sha512Digest = Sha2Digest<Sha512>;

///
/// Sha2Digest
/// SHA-2 family digest; the default scoring function is SHA-256.
///

#[derive(Clone, Debug, Default)]
pub struct Sha2Digest<H> {
    hasher: H,
}

impl<H: Default> Sha2Digest<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H> Digest for Sha2Digest<H>
where
    H: sha2::Digest + Clone + Default + Send,
{
    fn reset(&mut self) {
        self.hasher = H::default();
    }

    fn write(&mut self, bytes: &[u8]) {
        sha2::Digest::update(&mut self.hasher, bytes);
    }

    fn sum(&self) -> Vec<u8> {
        sha2::Digest::finalize(self.hasher.clone()).to_vec()
    }
}

///
/// TESTS
///
