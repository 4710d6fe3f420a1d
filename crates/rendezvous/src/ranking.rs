//! HRW (Highest Random Weight) ranking.
//!
//! Deterministic and pure over its inputs.
//! Given a key and a member snapshot, every member is scored with
//! `digest(member || key)` and the members are ordered by score.
//!
//! Used by [`RankedMemberSet`] and [`ConcurrentRankedMemberSet`] while
//! they hold their lock.
//!
//! [`RankedMemberSet`]: crate::RankedMemberSet
//! [`ConcurrentRankedMemberSet`]: crate::ConcurrentRankedMemberSet

use crate::digest::Digest;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// SortOrder
/// Which end of the score range ranks first.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    HighestFirst,
    LowestFirst,
}

/// Score of one (member, key) pair: `digest(member || key)`, no delimiter.
pub fn score<D: Digest + ?Sized>(digest: &mut D, member: &str, key: &[u8]) -> Vec<u8> {
    digest.reset();
    digest.write(member.as_bytes());
    digest.write(key);

    digest.sum()
}

/// Rank `members` for `key`.
///
/// The result is always a permutation of `members`. Scores compare as
/// unsigned big-endian byte strings; equal scores fall back to the member
/// identifier, so `HighestFirst` is the exact reverse of `LowestFirst`.
pub fn priority_list<'a, I, D>(
    members: I,
    key: &[u8],
    order: SortOrder,
    digest: &mut D,
) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
    D: Digest + ?Sized,
{
    let members: Vec<&str> = members.into_iter().collect();

    match members.as_slice() {
        [] => return Vec::new(),
        // a lone member needs no score
        [only] => return vec![(*only).to_string()],
        _ => {}
    }

    let mut scored: Vec<(Vec<u8>, &str)> = members
        .into_iter()
        .map(|member| (score(digest, member, key), member))
        .collect();

    scored.sort_unstable_by(|(a_score, a), (b_score, b)| {
        a_score.cmp(b_score).then_with(|| a.cmp(b))
    });

    if order == SortOrder::HighestFirst {
        scored.reverse();
    }

    scored
        .into_iter()
        .map(|(_, member)| member.to_string())
        .collect()
}

///
/// TESTS
///
