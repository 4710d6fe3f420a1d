use crate::{
    digest::{Digest, Sha256Digest},
    ranking::SortOrder,
    set::{ConcurrentRankedMemberSet, RankedMemberSet},
};
use std::collections::BTreeSet;

///
/// Builder
///
/// Construction options for both set types. The digest and sort order are
/// fixed once the set is built; only membership changes afterwards.
///

#[derive(Clone, Debug)]
pub struct Builder<D = Sha256Digest> {
    digest: D,
    order: SortOrder,
    members: BTreeSet<String>,
}

impl Builder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            digest: Sha256Digest::new(),
            order: SortOrder::default(),
            members: BTreeSet::new(),
        }
    }
}

impl<D> Builder<D> {
    /// Replace the scoring digest.
    #[must_use]
    pub fn digest<E: Digest>(self, digest: E) -> Builder<E> {
        Builder {
            digest,
            order: self.order,
            members: self.members,
        }
    }

    #[must_use]
    pub const fn sort_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Seed the initial membership; may be called more than once.
    #[must_use]
    pub fn members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members.extend(members.into_iter().map(Into::into));
        self
    }
}

impl<D: Digest> Builder<D> {
    #[must_use]
    pub fn build(self) -> RankedMemberSet<D> {
        RankedMemberSet::from_parts(self.members, self.digest, self.order)
    }
}

impl<D: Digest + Clone> Builder<D> {
    #[must_use]
    pub fn build_concurrent(self) -> ConcurrentRankedMemberSet<D> {
        ConcurrentRankedMemberSet::from_parts(self.members, self.digest, self.order)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::Xxh3Digest;

    #[test]
    fn defaults_are_highest_first_and_empty() {
        let set = Builder::new().build();

        assert_eq!(set.sort_order(), SortOrder::HighestFirst);
        assert!(set.is_empty());
    }

    #[test]
    fn members_accumulate_and_deduplicate() {
        let set = Builder::new()
            .members(["b", "a"])
            .members(vec![String::from("a"), String::from("c")])
            .build();

        assert_eq!(set.members(), ["a", "b", "c"]);
    }

    #[test]
    fn options_carry_across_digest_swap() {
        let set = Builder::new()
            .sort_order(SortOrder::LowestFirst)
            .members(["x"])
            .digest(Xxh3Digest::new())
            .build_concurrent();

        assert_eq!(set.sort_order(), SortOrder::LowestFirst);
        assert_eq!(set.members(), ["x"]);
    }
}
