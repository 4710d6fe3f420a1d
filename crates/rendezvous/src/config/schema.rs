use crate::{ThisError, digest::DigestAlgorithm, ranking::SortOrder};
use serde::{Deserialize, Serialize};

///
/// ConfigSchemaError
///

#[derive(Debug, ThisError)]
pub enum ConfigSchemaError {
    #[error("validation error: {0}")]
    ValidationError(String),
}

///
/// Validate
///

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigSchemaError>;
}

///
/// HasherConfig
///
/// Construction options for a ranked member set. Applied once at build
/// time; the digest and sort order cannot change afterwards. Repeated
/// members are absorbed, as with `add_members`.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HasherConfig {
    #[serde(default)]
    pub digest: DigestAlgorithm,

    #[serde(default)]
    pub sort_order: SortOrder,

    #[serde(default)]
    pub members: Vec<String>,
}

impl Validate for HasherConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.members.iter().any(String::is_empty) {
            return Err(ConfigSchemaError::ValidationError(
                "member identifiers must not be empty".into(),
            ));
        }

        Ok(())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn with_members(members: &[&str]) -> HasherConfig {
        HasherConfig {
            members: members.iter().map(ToString::to_string).collect(),
            ..HasherConfig::default()
        }
    }

    #[test]
    fn distinct_members_pass() {
        assert!(with_members(&["a", "b"]).validate().is_ok());
        assert!(with_members(&[]).validate().is_ok());
    }

    #[test]
    fn blank_member_fails() {
        let err = with_members(&["a", ""]).validate().unwrap_err();

        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn repeated_member_passes() {
        assert!(with_members(&["a", "b", "a"]).validate().is_ok());
    }
}
