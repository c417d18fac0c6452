//!
//! The COM access rule: one validated ACL entry (identity, rights, allow/deny).
//!
//! A rule can only be obtained through [`ComAccessRule::new`], which rejects
//! any rights mask lacking `EXECUTE`. Nothing mutates a rule afterwards, so
//! every live `ComAccessRule` satisfies that invariant.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::RuleError;
use crate::rights::{self, ComAccessRights};
use crate::types::{AccessControlType, IdentityToken, InheritanceFlags, PropagationFlags, RightsMask};

const HASH_SEED: u64 = 17;
const HASH_FACTOR: u64 = 23;

/// Grants or denies `rights` on a COM server to `identity`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawComAccessRule<I>"))]
#[derive(Debug, Clone, Eq)]
pub struct ComAccessRule<I: IdentityToken> {
    identity: I,
    rights: ComAccessRights,
    decision: AccessControlType,
}

impl<I: IdentityToken> ComAccessRule<I> {
    /// COM rules never apply to child objects.
    pub const INHERITANCE_FLAGS: InheritanceFlags = InheritanceFlags::NONE;
    /// COM rules never propagate.
    pub const PROPAGATION_FLAGS: PropagationFlags = PropagationFlags::NONE;

    /// Builds a rule, rejecting `rights` that lack `EXECUTE`.
    ///
    /// The mask is taken as given: `EXECUTE` is never added on the caller's
    /// behalf and unnamed bits are kept.
    pub fn new(identity: I, rights: ComAccessRights, decision: AccessControlType) -> Result<Self, RuleError> {
        if !rights::has_execute(rights.bits()) {
            tracing::debug!(
                rights = rights.bits(),
                ?decision,
                "Rejecting COM access rule without the Execute bit."
            );
            return Err(RuleError::InvalidRightsCombination { rights });
        }
        tracing::trace!(?identity, rights = rights.bits(), ?decision, "Built COM access rule.");
        Ok(ComAccessRule { identity, rights, decision })
    }

    pub fn identity(&self) -> &I {
        &self.identity
    }

    pub fn rights(&self) -> ComAccessRights {
        self.rights
    }

    /// Whether the rule grants or denies its rights.
    pub fn access_control_type(&self) -> AccessControlType {
        self.decision
    }

    /// Raw integer mask, as the platform ACL API stores it.
    pub fn access_mask(&self) -> RightsMask {
        self.rights.bits()
    }

    /// Always false: rules are built as explicit entries.
    pub fn is_inherited(&self) -> bool {
        false
    }

    pub fn inheritance_flags(&self) -> InheritanceFlags {
        Self::INHERITANCE_FLAGS
    }

    pub fn propagation_flags(&self) -> PropagationFlags {
        Self::PROPAGATION_FLAGS
    }

    /// Splits the rule into its validated parts for the platform ACL API.
    pub fn into_parts(self) -> (I, ComAccessRights, AccessControlType) {
        (self.identity, self.rights, self.decision)
    }

    /// Hash over exactly the fields compared by `==`.
    ///
    /// Seeds with 17 and folds in rights, identity and decision as
    /// `acc * 23 + field_hash`, wrapping on overflow. Field hashes come from a
    /// fixed-key hasher, so the value is deterministic for a given build.
    pub fn hash_code(&self) -> u64 {
        let mut acc = HASH_SEED;
        acc = acc.wrapping_mul(HASH_FACTOR).wrapping_add(field_hash(&self.rights));
        acc = acc.wrapping_mul(HASH_FACTOR).wrapping_add(field_hash(&self.identity));
        acc = acc.wrapping_mul(HASH_FACTOR).wrapping_add(field_hash(&self.decision));
        acc
    }
}

fn field_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

impl<I: IdentityToken> PartialEq for ComAccessRule<I> {
    fn eq(&self, other: &Self) -> bool {
        self.rights == other.rights && self.identity == other.identity && self.decision == other.decision
    }
}

impl<I: IdentityToken> Hash for ComAccessRule<I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<I: IdentityToken> fmt::Display for ComAccessRule<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}: {}", self.decision, self.identity, self.rights)
    }
}

/// Unvalidated wire shape; decoding always goes through `ComAccessRule::new`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawComAccessRule<I> {
    identity: I,
    rights: ComAccessRights,
    decision: AccessControlType,
}

#[cfg(feature = "serde")]
impl<I: IdentityToken> TryFrom<RawComAccessRule<I>> for ComAccessRule<I> {
    type Error = RuleError;

    fn try_from(raw: RawComAccessRule<I>) -> Result<Self, Self::Error> {
        ComAccessRule::new(raw.identity, raw.rights, raw.decision)
    }
}
