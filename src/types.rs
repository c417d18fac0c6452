// Shared platform-facing types. None of these carry behaviour of their own:
// they are the opaque inputs the platform ACL layer hands to a rule and
// expects back from it.

use std::fmt::Debug;
use std::hash::Hash;

/// RightsMask, the 32-bit integer form of a COM access mask as the platform
/// ACL API stores it.
/// - Bits 0-4: COM rights (EXECUTE, EXECUTE_LOCAL, EXECUTE_REMOTE, ACTIVATE_LOCAL, ACTIVATE_REMOTE).
/// - Bits 5-31: not interpreted here; carried through untouched.
pub type RightsMask = u32;

/// Whether a rule grants or denies its rights.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessControlType {
    Allow,
    Deny,
}

impl std::fmt::Display for AccessControlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessControlType::Allow => f.write_str("Allow"),
            AccessControlType::Deny => f.write_str("Deny"),
        }
    }
}

/// Opaque reference to a security principal (user, group, service).
///
/// Resolution and lifetime of the principal belong to the platform; a rule
/// only clones, compares and hashes the token. Any `Eq + Hash + Clone + Debug`
/// type qualifies, so a SID string, an interned handle or an `Arc` to a
/// platform object can all be used directly.
pub trait IdentityToken: Clone + Debug + Eq + Hash {}

impl<T: Clone + Debug + Eq + Hash> IdentityToken for T {}

/// Inheritance flags of a platform access rule. COM rules never inherit, so
/// only `NONE` is ever produced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InheritanceFlags(u32);

impl InheritanceFlags {
    pub const NONE: InheritanceFlags = InheritanceFlags(0);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Propagation flags of a platform access rule. Fixed to `NONE` for COM rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PropagationFlags(u32);

impl PropagationFlags {
    pub const NONE: PropagationFlags = PropagationFlags(0);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}
