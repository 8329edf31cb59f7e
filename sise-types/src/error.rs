use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the sise workspace.
///
/// This wraps numeric-parse misses, argument validation errors, tier-tagged
/// acquisition failures, and data-shape issues. Resolution coming up empty is
/// *not* an error (see `Resolution::Exhausted` in `sise-core`); only
/// configuration problems are treated as fatal by the pipeline.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SiseError {
    /// The numeric canonicalizer found no token matching any accepted pattern.
    #[error("no numeric token found: {0}")]
    Parse(String),

    /// Invalid input argument or configuration.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A document tier failed to acquire its document.
    #[error("{tier} failed to acquire document: {msg}")]
    Acquisition {
        /// Tier name that failed.
        tier: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Issues with the returned or expected data (missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl SiseError {
    /// Helper: build a `Parse` error describing the rejected input.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build an `Acquisition` error tagged with the tier name.
    pub fn acquisition(tier: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Acquisition {
            tier: tier.into(),
            msg: msg.into(),
        }
    }
}
