//! Error types for strict validation and option parsing.

use thiserror::Error;

/// Raised by [`ImageUrlBuilder::try_build_url`](crate::ImageUrlBuilder::try_build_url)
/// when strict validation is enabled and a setter dropped a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("invalid value `{value}` for `{key}`: expected {expected}")]
    InvalidParameter {
        key: String,
        value: String,
        expected: &'static str,
    },
}

/// A token that is not part of the API vocabulary (alignment, fit, mask, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct ParseOptionError {
    kind: &'static str,
    value: String,
}

impl ParseOptionError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
