use crate::{ThisError, config::ConfigError};

///
/// Error
///
/// Top-level error for the crate. Ranking and membership mutation never
/// fail; only owner lookup and configuration loading can.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("no members are configured")]
    EmptyMembership,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

///
/// TESTS
///
