//!
//! Defines error types for COM access rules.

use crate::rights::ComAccessRights;

/// Errors raised while building a [`ComAccessRule`](crate::rule::ComAccessRule).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// The supplied rights do not include `EXECUTE`. COM access masks are
    /// meaningless to the platform without it, for grants and denials alike.
    #[error("COM access rights must always have the Execute bit set (got {rights})")]
    InvalidRightsCombination { rights: ComAccessRights },
}

/// Errors raised while parsing a [`ComAccessRights`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RightsParseError {
    /// Input was empty or only separators.
    #[error("empty COM access rights expression")]
    Empty,
    /// A `|`-separated component was neither a known right nor a numeric mask.
    #[error("unknown COM access right: {0}")]
    UnknownRight(String),
}
