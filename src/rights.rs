//!
//! Rights algebra for COM access masks.
//! Defines the COM rights bit flags, the `ComAccessRights` set type built on
//! them, and helpers for validating raw masks.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

use crate::error::RightsParseError;
use crate::types::RightsMask; // RightsMask is u32

/// COM rights bit flags (bits 0-4 defined by the platform, 5-31 uninterpreted).
pub mod core {
    use super::RightsMask;

    /// Permission to call into the object at all. Required in every COM access mask.
    pub const EXECUTE: RightsMask = 1 << 0; // 0b00001
    /// Permission to call from the local machine.
    pub const EXECUTE_LOCAL: RightsMask = 1 << 1; // 0b00010
    /// Permission to call from a remote machine.
    pub const EXECUTE_REMOTE: RightsMask = 1 << 2; // 0b00100
    /// Permission to activate (launch) the server locally.
    pub const ACTIVATE_LOCAL: RightsMask = 1 << 3; // 0b01000
    /// Permission to activate (launch) the server remotely.
    pub const ACTIVATE_REMOTE: RightsMask = 1 << 4; // 0b10000

    /// Every bit the platform enumeration defines.
    pub const ALL: RightsMask = EXECUTE | EXECUTE_LOCAL | EXECUTE_REMOTE | ACTIVATE_LOCAL | ACTIVATE_REMOTE;
}

// Display order and names, lowest bit first.
const NAMED: [(RightsMask, &str); 5] = [
    (core::EXECUTE, "Execute"),
    (core::EXECUTE_LOCAL, "ExecuteLocal"),
    (core::EXECUTE_REMOTE, "ExecuteRemote"),
    (core::ACTIVATE_LOCAL, "ActivateLocal"),
    (core::ACTIVATE_REMOTE, "ActivateRemote"),
];

/// Checks whether a raw mask carries the mandatory `EXECUTE` bit.
#[inline]
pub fn has_execute(mask: RightsMask) -> bool {
    (mask & core::EXECUTE) == core::EXECUTE
}

/// A set of COM access rights.
///
/// Bits outside [`core::ALL`] are kept as given. They are not interpreted,
/// but they do take part in equality and hashing.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ComAccessRights(RightsMask);

impl ComAccessRights {
    pub const EXECUTE: ComAccessRights = ComAccessRights(core::EXECUTE);
    pub const EXECUTE_LOCAL: ComAccessRights = ComAccessRights(core::EXECUTE_LOCAL);
    pub const EXECUTE_REMOTE: ComAccessRights = ComAccessRights(core::EXECUTE_REMOTE);
    pub const ACTIVATE_LOCAL: ComAccessRights = ComAccessRights(core::ACTIVATE_LOCAL);
    pub const ACTIVATE_REMOTE: ComAccessRights = ComAccessRights(core::ACTIVATE_REMOTE);

    pub const fn empty() -> Self {
        ComAccessRights(0)
    }

    /// Every right in the platform enumeration.
    pub const fn all() -> Self {
        ComAccessRights(core::ALL)
    }

    /// Wraps a raw mask. All bits are retained, including ones this crate
    /// does not name.
    pub const fn from_bits(bits: RightsMask) -> Self {
        ComAccessRights(bits)
    }

    pub const fn bits(self) -> RightsMask {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `other` is also set in `self`.
    pub const fn contains(self, other: ComAccessRights) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for ComAccessRights {
    type Output = ComAccessRights;

    fn bitor(self, rhs: ComAccessRights) -> ComAccessRights {
        ComAccessRights(self.0 | rhs.0)
    }
}

impl BitOrAssign for ComAccessRights {
    fn bitor_assign(&mut self, rhs: ComAccessRights) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ComAccessRights {
    type Output = ComAccessRights;

    fn bitand(self, rhs: ComAccessRights) -> ComAccessRights {
        ComAccessRights(self.0 & rhs.0)
    }
}

impl From<ComAccessRights> for RightsMask {
    fn from(rights: ComAccessRights) -> RightsMask {
        rights.0
    }
}

/// Renders as `Execute | ExecuteLocal`, with any unnamed bits appended as a
/// single hex literal. The empty set renders as `0x0`.
impl fmt::Display for ComAccessRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("0x0");
        }
        let mut first = true;
        for (bit, name) in NAMED {
            if self.0 & bit != 0 {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        let unnamed = self.0 & !core::ALL;
        if unnamed != 0 {
            if !first {
                f.write_str(" | ")?;
            }
            write!(f, "{:#x}", unnamed)?;
        }
        Ok(())
    }
}

/// Parses the `Display` form back: `|`-separated right names (case-insensitive)
/// and/or numeric masks in hex (`0x..`) or decimal.
impl FromStr for ComAccessRights {
    type Err = RightsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut mask: RightsMask = 0;
        let mut seen = false;
        for part in s.split('|').map(str::trim).filter(|p| !p.is_empty()) {
            mask |= parse_component(part)?;
            seen = true;
        }
        if !seen {
            return Err(RightsParseError::Empty);
        }
        Ok(ComAccessRights(mask))
    }
}

fn parse_component(part: &str) -> Result<RightsMask, RightsParseError> {
    if let Some((bit, _)) = NAMED.iter().find(|(_, name)| name.eq_ignore_ascii_case(part)) {
        return Ok(*bit);
    }
    let numeric = match part.strip_prefix("0x").or_else(|| part.strip_prefix("0X")) {
        Some(hex) => RightsMask::from_str_radix(hex, 16),
        None => part.parse::<RightsMask>(),
    };
    numeric.map_err(|_| RightsParseError::UnknownRight(part.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_execute() {
        assert!(has_execute(core::EXECUTE));
        assert!(has_execute(core::EXECUTE | core::ACTIVATE_REMOTE));
        assert!(has_execute(u32::MAX));
        assert!(!has_execute(0));
        assert!(!has_execute(core::ALL & !core::EXECUTE));
    }

    #[test]
    fn test_union_and_contains() {
        let rights = ComAccessRights::EXECUTE | ComAccessRights::EXECUTE_LOCAL;
        assert!(rights.contains(ComAccessRights::EXECUTE));
        assert!(rights.contains(ComAccessRights::EXECUTE_LOCAL));
        assert!(!rights.contains(ComAccessRights::EXECUTE_REMOTE));
        assert!(rights.contains(ComAccessRights::empty()));
        assert_eq!(rights.bits(), 0b11);

        let mut acc = ComAccessRights::empty();
        assert!(acc.is_empty());
        acc |= ComAccessRights::ACTIVATE_LOCAL;
        assert_eq!(acc & ComAccessRights::all(), ComAccessRights::ACTIVATE_LOCAL);
    }

    #[test]
    fn test_unknown_bits_retained() {
        let rights = ComAccessRights::from_bits(core::EXECUTE | (1 << 20));
        assert_eq!(rights.bits(), core::EXECUTE | (1 << 20));
        assert_ne!(rights, ComAccessRights::EXECUTE);
        assert_eq!(RightsMask::from(rights), rights.bits());
    }

    #[test]
    fn test_display() {
        assert_eq!(ComAccessRights::empty().to_string(), "0x0");
        assert_eq!(ComAccessRights::EXECUTE.to_string(), "Execute");
        assert_eq!(
            (ComAccessRights::EXECUTE | ComAccessRights::ACTIVATE_REMOTE).to_string(),
            "Execute | ActivateRemote"
        );
        assert_eq!(ComAccessRights::from_bits(1 | 0x100).to_string(), "Execute | 0x100");
        assert_eq!(ComAccessRights::from_bits(0x40).to_string(), "0x40");
    }

    #[test]
    fn test_parse() {
        assert_eq!("Execute".parse::<ComAccessRights>(), Ok(ComAccessRights::EXECUTE));
        assert_eq!(
            "execute | executeremote".parse::<ComAccessRights>(),
            Ok(ComAccessRights::EXECUTE | ComAccessRights::EXECUTE_REMOTE)
        );
        assert_eq!("0x1f".parse::<ComAccessRights>(), Ok(ComAccessRights::all()));
        assert_eq!("Execute | 256".parse::<ComAccessRights>(), Ok(ComAccessRights::from_bits(0x101)));
        assert_eq!("".parse::<ComAccessRights>(), Err(RightsParseError::Empty));
        assert_eq!(" | ".parse::<ComAccessRights>(), Err(RightsParseError::Empty));
        assert_eq!(
            "Execute | Launch".parse::<ComAccessRights>(),
            Err(RightsParseError::UnknownRight("Launch".to_string()))
        );
    }

    #[test]
    fn test_display_parse_agree() {
        for bits in [0x1u32, 0x3, 0x1f, 0x11, 0x1 | 0x8000_0000] {
            let rights = ComAccessRights::from_bits(bits);
            assert_eq!(rights.to_string().parse::<ComAccessRights>(), Ok(rights));
        }
    }
}
