pub mod schema;

use crate::{
    ConcurrentRankedMemberSet, RankedMemberSet, ThisError,
    digest::AnyDigest,
    log,
    log::Topic,
    set::Builder,
};
use schema::{ConfigSchemaError, Validate};

pub use schema::HasherConfig;

/// Errors related to configuration parsing and validation.
#[derive(Debug, ThisError)]
pub enum ConfigError {
    /// TOML could not be parsed into the expected structure.
    #[error("toml error: {0}")]
    CannotParseToml(String),

    #[error("toml serialize error: {0}")]
    CannotSerializeToml(String),

    /// Wrapper for data schema-level errors.
    #[error(transparent)]
    ConfigSchema(#[from] ConfigSchemaError),
}

impl HasherConfig {
    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml(config_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(config_str).map_err(|e| ConfigError::CannotParseToml(e.to_string()))?;

        // validate
        config.validate()?;

        log!(
            Topic::Config,
            Info,
            "loaded config: digest={} order={} members={}",
            config.digest,
            config.sort_order,
            config.members.len(),
        );

        Ok(config)
    }

    /// Return the configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::CannotSerializeToml(e.to_string()))
    }

    fn builder(&self) -> Builder<AnyDigest> {
        Builder::new()
            .digest(self.digest.build())
            .sort_order(self.sort_order)
            .members(self.members.iter().cloned())
    }

    #[must_use]
    pub fn build(&self) -> RankedMemberSet<AnyDigest> {
        self.builder().build()
    }

    #[must_use]
    pub fn build_concurrent(&self) -> ConcurrentRankedMemberSet<AnyDigest> {
        self.builder().build_concurrent()
    }
}

///
/// TESTS
///
