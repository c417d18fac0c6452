#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! com-acl-core models a single access-control entry for a COM security
//! principal: who the rule is for, which COM rights it covers, and whether it
//! allows or denies them.
//!
//! Identity resolution, ACL storage and enforcement live in the platform
//! layer; this crate only guarantees that every rule it hands out carries the
//! `Execute` right and compares and hashes by value.

// Platform-facing types (RightsMask, AccessControlType, IdentityToken, flags).
pub mod types;

// Module for Rights Algebra logic.
pub mod rights;

// Module for rule error types.
pub mod error;

// The validated access rule itself.
pub mod rule;

pub use error::{RightsParseError, RuleError};
pub use rights::ComAccessRights;
pub use rule::ComAccessRule;
pub use types::{AccessControlType, IdentityToken, InheritanceFlags, PropagationFlags, RightsMask};
