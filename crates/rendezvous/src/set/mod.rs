//!
//! Thread-safe member sets with rendezvous placement.
//!
//! Two locking disciplines are offered:
//! - [`RankedMemberSet`] guards the members *and* one shared digest with a
//!   single mutex, so every call is serialized.
//! - [`ConcurrentRankedMemberSet`] guards only the members with a
//!   reader-writer lock and gives each ranking call a private digest, so
//!   ranking calls run in parallel and serialize only against mutation.
//!

mod builder;
mod concurrent;
mod ranked;

pub use builder::Builder;
pub use concurrent::ConcurrentRankedMemberSet;
pub use ranked::RankedMemberSet;

use crate::Error;

///
/// Placement
///
/// Operations derived from the full priority list. Each derived result is
/// cut from a single `priority_list` call, so it reflects one consistent
/// membership snapshot.
///

pub trait Placement {
    /// All members, best first, for `key`. Empty when there are no members.
    fn priority_list(&self, key: impl AsRef<[u8]>) -> Vec<String>;

    /// The single top-ranked member for `key`.
    fn owner(&self, key: impl AsRef<[u8]>) -> Result<String, Error> {
        self.priority_list(key)
            .into_iter()
            .next()
            .ok_or(Error::EmptyMembership)
    }

    /// The first `min(n, len)` members of the priority list for `key`.
    fn place(&self, key: impl AsRef<[u8]>, n: usize) -> Vec<String> {
        if n == 0 {
            return Vec::new();
        }

        let mut placed = self.priority_list(key);
        placed.truncate(n);

        placed
    }
}
