use crate::{
    digest::{Digest, Sha256Digest},
    log,
    log::Topic,
    ranking::{self, SortOrder},
    set::{Builder, Placement},
};
use std::{
    collections::BTreeSet,
    sync::{Mutex, MutexGuard, PoisonError},
};

///
/// RankedMemberSet
///
/// Member set plus one shared digest behind a single mutex. Every operation,
/// including the whole ranking pass, holds the lock for its full duration.
///

#[derive(Debug)]
pub struct RankedMemberSet<D = Sha256Digest> {
    state: Mutex<State<D>>,
    order: SortOrder,
}

#[derive(Debug)]
struct State<D> {
    members: BTreeSet<String>,
    digest: D,
}

impl RankedMemberSet {
    /// Empty set scored with SHA-256, highest score first.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> Builder {
        Builder::new()
    }
}

impl Default for RankedMemberSet {
    fn default() -> Self {
        Builder::default().build()
    }
}

impl<D: Digest> RankedMemberSet<D> {
    pub(crate) const fn from_parts(members: BTreeSet<String>, digest: D, order: SortOrder) -> Self {
        Self {
            state: Mutex::new(State { members, digest }),
            order,
        }
    }

    // No mutation can leave the state half-written, so a poisoned lock is
    // still consistent.
    fn lock(&self) -> MutexGuard<'_, State<D>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.order
    }

    /// Insert each member; existing members are left alone.
    pub fn add_members<I, S>(&self, members: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = self.lock();
        state.members.extend(members.into_iter().map(Into::into));

        log!(Topic::Membership, Debug, "members added, now {}", state.members.len());
    }

    /// Remove each member if present.
    pub fn remove_members<I, S>(&self, members: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = self.lock();
        for member in members {
            state.members.remove(member.as_ref());
        }

        log!(Topic::Membership, Debug, "members removed, now {}", state.members.len());
    }

    /// Replace the whole membership in one step.
    pub fn set_members<I, S>(&self, members: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members: BTreeSet<String> = members.into_iter().map(Into::into).collect();
        let len = members.len();

        self.lock().members = members;

        log!(Topic::Membership, Debug, "members replaced, now {len}");
    }

    /// Current members in ascending order.
    #[must_use]
    pub fn members(&self) -> Vec<String> {
        self.lock().members.iter().cloned().collect()
    }

    #[must_use]
    pub fn contains(&self, member: &str) -> bool {
        self.lock().members.contains(member)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().members.is_empty()
    }
}

impl<D: Digest> Placement for RankedMemberSet<D> {
    fn priority_list(&self, key: impl AsRef<[u8]>) -> Vec<String> {
        let mut guard = self.lock();
        let State { members, digest } = &mut *guard;

        ranking::priority_list(members.iter().map(String::as_str), key.as_ref(), self.order, digest)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    ///
    /// CountingDigest
    /// Wraps SHA-256 and counts resets, one per scored member.
    ///

    #[derive(Default)]
    struct CountingDigest {
        inner: Sha256Digest,
        resets: Arc<AtomicUsize>,
    }

    impl Digest for CountingDigest {
        fn reset(&mut self) {
            self.resets.fetch_add(1, Ordering::Relaxed);
            self.inner.reset();
        }

        fn write(&mut self, bytes: &[u8]) {
            self.inner.write(bytes);
        }

        fn sum(&self) -> Vec<u8> {
            self.inner.sum()
        }
    }

    fn five_nodes() -> RankedMemberSet {
        RankedMemberSet::builder()
            .members(["node1", "node2", "node3", "node4", "node5"])
            .build()
    }

    #[test]
    fn membership_lifecycle() {
        let set = RankedMemberSet::new();
        assert!(set.members().is_empty());

        set.add_members(["node1", "node2"]);
        assert_eq!(set.members(), ["node1", "node2"]);

        set.remove_members(["node1"]);
        assert_eq!(set.members(), ["node2"]);

        set.remove_members(["node2"]);
        assert!(set.members().is_empty());

        set.set_members(["node1", "node2"]);
        assert_eq!(set.members(), ["node1", "node2"]);
    }

    #[test]
    fn duplicate_add_and_missing_remove_are_noops() {
        let set = RankedMemberSet::new();
        set.add_members(["a", "b"]);

        set.add_members(["a"]);
        set.remove_members(["zzz"]);

        assert_eq!(set.members(), ["a", "b"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn set_members_replaces_and_deduplicates() {
        let set = RankedMemberSet::new();
        set.add_members(["old"]);

        set.set_members(["n2", "n1", "n2"]);

        assert_eq!(set.members(), ["n1", "n2"]);
        assert!(!set.contains("old"));
    }

    #[test]
    fn listing_is_sorted_regardless_of_insert_order() {
        let set = RankedMemberSet::new();
        set.add_members(["charlie", "alpha", "bravo"]);

        assert_eq!(set.members(), ["alpha", "bravo", "charlie"]);
    }

    #[test]
    fn five_node_scenario() {
        let set = five_nodes();

        assert_eq!(set.owner("item").unwrap(), "node3");
        assert_eq!(set.place("item", 3), ["node3", "node5", "node1"]);
        assert_eq!(
            set.priority_list("item"),
            ["node3", "node5", "node1", "node2", "node4"]
        );
    }

    #[test]
    fn lowest_first_reverses_the_scenario() {
        let set = RankedMemberSet::builder()
            .sort_order(SortOrder::LowestFirst)
            .members(["node1", "node2", "node3", "node4", "node5"])
            .build();

        assert_eq!(
            set.priority_list("item"),
            ["node4", "node2", "node1", "node5", "node3"]
        );
    }

    #[test]
    fn empty_set_behaviour() {
        let set = RankedMemberSet::new();

        assert!(set.priority_list("item").is_empty());
        assert!(set.place("item", 0).is_empty());
        assert!(set.place("item", 1).is_empty());
        assert!(set.place("item", 2).is_empty());
        assert!(matches!(set.owner("item"), Err(Error::EmptyMembership)));
    }

    #[test]
    fn single_member_behaviour() {
        let resets = Arc::new(AtomicUsize::new(0));
        let set = RankedMemberSet::builder()
            .digest(CountingDigest {
                resets: Arc::clone(&resets),
                ..CountingDigest::default()
            })
            .members(["node1"])
            .build();

        assert_eq!(set.priority_list("item"), ["node1"]);
        assert!(set.place("item", 0).is_empty());
        assert_eq!(set.place("item", 1), ["node1"]);
        assert_eq!(set.place("item", 3), ["node1"]);
        assert_eq!(set.owner("anything").unwrap(), "node1");
        assert_eq!(resets.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn place_clamps_and_prefixes() {
        let set = five_nodes();
        let full = set.priority_list("item");

        for n in 0..8 {
            assert_eq!(set.place("item", n), full[..n.min(full.len())]);
        }
    }

    #[test]
    fn place_zero_does_not_hash() {
        let resets = Arc::new(AtomicUsize::new(0));
        let set = RankedMemberSet::builder()
            .digest(CountingDigest {
                resets: Arc::clone(&resets),
                ..CountingDigest::default()
            })
            .members(["a", "b", "c"])
            .build();

        assert!(set.place("item", 0).is_empty());
        assert_eq!(resets.load(Ordering::Relaxed), 0);

        set.priority_list("item");
        assert_eq!(resets.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn byte_keys_match_string_keys() {
        let set = five_nodes();

        assert_eq!(set.priority_list(b"item"), set.priority_list("item"));
        assert_eq!(set.priority_list(vec![b'i', b't', b'e', b'm']), set.priority_list("item"));
    }

    #[test]
    fn removing_a_member_only_moves_its_keys() {
        let set = five_nodes();
        let keys: Vec<String> = (0..200).map(|i| format!("key-{i}")).collect();
        let before: Vec<String> = keys.iter().map(|k| set.owner(k).unwrap()).collect();

        set.remove_members(["node2"]);

        for (key, old_owner) in keys.iter().zip(&before) {
            let new_owner = set.owner(key).unwrap();
            if old_owner != "node2" {
                assert_eq!(&new_owner, old_owner, "key {key} moved needlessly");
            }
        }
    }
}
