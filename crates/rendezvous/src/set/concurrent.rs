use crate::{
    digest::{Digest, Sha256Digest},
    log,
    log::Topic,
    ranking::{self, SortOrder},
    set::{Builder, Placement},
};
use std::{
    collections::BTreeSet,
    sync::{Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

///
/// ConcurrentRankedMemberSet
///
/// Members behind a reader-writer lock. Each ranking call clones a private
/// digest from `prototype`, so concurrent ranking calls share only the read
/// lock and never contend on digest state. The prototype sits behind its own
/// mutex, held just long enough to clone, so the set is `Sync` whenever the
/// digest is `Send`.
///

#[derive(Debug)]
pub struct ConcurrentRankedMemberSet<D = Sha256Digest> {
    members: RwLock<BTreeSet<String>>,
    prototype: Mutex<D>,
    order: SortOrder,
}

impl ConcurrentRankedMemberSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> Builder {
        Builder::new()
    }
}

impl Default for ConcurrentRankedMemberSet {
    fn default() -> Self {
        Builder::default().build_concurrent()
    }
}

impl<D: Digest + Clone> ConcurrentRankedMemberSet<D> {
    pub(crate) const fn from_parts(members: BTreeSet<String>, prototype: D, order: SortOrder) -> Self {
        Self {
            members: RwLock::new(members),
            prototype: Mutex::new(prototype),
            order,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeSet<String>> {
        self.members.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeSet<String>> {
        self.members.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn fresh_digest(&self) -> D {
        self.prototype
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
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
        let mut current = self.write();
        current.extend(members.into_iter().map(Into::into));

        log!(Topic::Membership, Debug, "members added, now {}", current.len());
    }

    /// Remove each member if present.
    pub fn remove_members<I, S>(&self, members: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut current = self.write();
        for member in members {
            current.remove(member.as_ref());
        }

        log!(Topic::Membership, Debug, "members removed, now {}", current.len());
    }

    /// Replace the whole membership in one step.
    pub fn set_members<I, S>(&self, members: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members: BTreeSet<String> = members.into_iter().map(Into::into).collect();
        let len = members.len();

        *self.write() = members;

        log!(Topic::Membership, Debug, "members replaced, now {len}");
    }

    /// Current members in ascending order.
    #[must_use]
    pub fn members(&self) -> Vec<String> {
        self.read().iter().cloned().collect()
    }

    #[must_use]
    pub fn contains(&self, member: &str) -> bool {
        self.read().contains(member)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl<D: Digest + Clone> Placement for ConcurrentRankedMemberSet<D> {
    fn priority_list(&self, key: impl AsRef<[u8]>) -> Vec<String> {
        let members = self.read();
        let mut digest = self.fresh_digest();

        ranking::priority_list(
            members.iter().map(String::as_str),
            key.as_ref(),
            self.order,
            &mut digest,
        )
    }
}

///
/// TESTS
///
