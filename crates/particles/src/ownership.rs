// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::{fmt, ops::BitOr};

/// Who a slot's particle belongs to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OwnershipState {
    /// An inert padding slot with no identity. Never contributes to or receives force.
    #[default]
    Dummy = 0,
    /// The local process holds the authoritative state of this particle.
    Owned = 1,
    /// A mirror of a particle owned by a neighbouring domain, visible for interactions only.
    Halo = 2,
}

impl OwnershipState {
    #[inline]
    pub fn is_dummy(self) -> bool {
        self == OwnershipState::Dummy
    }

    #[inline]
    pub fn is_owned(self) -> bool {
        self == OwnershipState::Owned
    }

    #[inline]
    pub fn is_halo(self) -> bool {
        self == OwnershipState::Halo
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for OwnershipState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OwnershipState::Dummy => "dummy",
            OwnershipState::Owned => "owned",
            OwnershipState::Halo => "halo",
        };
        f.write_str(name)
    }
}

/// The set of ownership states a slot iteration visits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IteratorBehavior(u8);

impl IteratorBehavior {
    pub const DUMMY: Self = Self(1 << OwnershipState::Dummy as u8);
    pub const OWNED: Self = Self(1 << OwnershipState::Owned as u8);
    pub const HALO: Self = Self(1 << OwnershipState::Halo as u8);
    pub const OWNED_OR_HALO: Self = Self(Self::OWNED.0 | Self::HALO.0);
    pub const OWNED_OR_HALO_OR_DUMMY: Self = Self(Self::OWNED_OR_HALO.0 | Self::DUMMY.0);

    /// True if slots in `state` are visited.
    #[inline]
    pub fn contains(self, state: OwnershipState) -> bool {
        self.0 & state.bit() != 0
    }
}

impl BitOr for IteratorBehavior {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}


// End of File
