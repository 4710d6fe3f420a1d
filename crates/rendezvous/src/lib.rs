//!
//! Rendezvous (highest random weight) hashing over a dynamic member set.
//!
//! Every member is scored against a key with a pluggable [`Digest`] over
//! `member ++ key`, and the members are ranked by that score. The ranking
//! for a key only changes for the members that join or leave, so placement
//! decisions stay stable under churn without any central coordinator.
//!
//! ```
//! use rendezvous::{Placement, RankedMemberSet};
//!
//! let set = RankedMemberSet::builder()
//!     .members(["node1", "node2", "node3", "node4", "node5"])
//!     .build();
//!
//! assert_eq!(set.owner("item").unwrap(), "node3");
//! assert_eq!(set.place("item", 3), ["node3", "node5", "node1"]);
//! assert_eq!(
//!     set.priority_list("item"),
//!     ["node3", "node5", "node1", "node2", "node4"],
//! );
//! ```
//!

pub mod config;
pub mod digest;
pub mod error;
pub mod log;
pub mod ranking;
pub mod set;

pub use config::{ConfigError, HasherConfig};
pub use digest::{AnyDigest, Digest, DigestAlgorithm, Sha256Digest, Sha512Digest, Xxh3Digest};
pub use error::Error;
pub use ranking::SortOrder;
pub use set::{Builder, ConcurrentRankedMemberSet, Placement, RankedMemberSet};

pub(crate) use thiserror::Error as ThisError;
