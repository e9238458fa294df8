//! Execution-permission bit set.
//!
//! Each command declares the simulator run-states in which it may execute.
//! The run-state enumeration itself lives with the simulator; it maps each of
//! its states onto one of these flags (see [`crate::gate::RunState`]).

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A set of run-state flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Permission(u32);

impl Permission {
    /// Allowed nowhere. Also what an unmapped run-state grants.
    pub const NONE: Permission = Permission(0);
    /// The simulator is stopped (configuring).
    pub const IDLE: Permission = Permission(1 << 0);
    /// The simulator is running.
    pub const SIMULATING: Permission = Permission(1 << 1);
    pub const ANY: Permission = Permission(Self::IDLE.0 | Self::SIMULATING.0);

    const NAMED: [(Permission, &'static str); 2] =
        [(Self::IDLE, "idle"), (Self::SIMULATING, "simulating")];

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Rebuild a set from raw bits, dropping unknown ones.
    pub const fn from_bits_truncate(bits: u32) -> Permission {
        Permission(bits & Self::ANY.0)
    }

    pub const fn contains(self, other: Permission) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Permission) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Permission {
    type Output = Permission;

    fn bitor(self, rhs: Permission) -> Permission {
        Permission(self.0 | rhs.0)
    }
}

impl BitOrAssign for Permission {
    fn bitor_assign(&mut self, rhs: Permission) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (flag, name) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
