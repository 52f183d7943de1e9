// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Compile-time attribute tags.
//!
//! Each particle attribute is a zero-sized tag type whose [`Attribute::Value`] fixes the column's
//! element type, so `soa.write::<Force>(slot, 1.0)` does not compile.  The set is closed: the
//! trait is sealed and every tag also has a fixed small integer index in [`AttributeName`].
//!
//! ```
//! use glam::DVec3;
//! use ljmd_particles::{attribute::{Force, Position}, Particle, SoA, HostSpace};
//!
//! let mut soa = SoA::<HostSpace>::new();
//! let slot = soa.push(&Particle::owned(7, DVec3::new(1.0, 2.0, 3.0)));
//! soa.write::<Force>(slot, DVec3::X);
//! assert_eq!(soa.read::<Position>(slot).y, 2.0);
//! ```

use std::fmt;

use common::{ParticleId, ParticleTypeId};
use glam::DVec3;

use crate::{space::MemorySpace, OwnershipState, Particle, SoA, SoAView, SoAViewMut};

mod sealed {
    pub trait Sealed {}
}

/// A particle attribute: one column of [`SoA`] and one field of [`Particle`].
pub trait Attribute: sealed::Sealed + Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Element type of the column.
    type Value: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static;

    /// Run-time name and index of the attribute.
    const NAME: AttributeName;

    fn column<M: MemorySpace>(soa: &SoA<M>) -> &[Self::Value];

    fn column_mut<M: MemorySpace>(soa: &mut SoA<M>) -> &mut [Self::Value];

    fn view_column<'a, M: MemorySpace>(view: &SoAView<'a, M>) -> &'a [Self::Value];

    fn view_column_mut<'s, M: MemorySpace>(view: &'s mut SoAViewMut<'_, M>) -> &'s mut [Self::Value];

    fn get(particle: &Particle) -> Self::Value;

    fn set(particle: &mut Particle, value: Self::Value);
}

macro_rules! attributes {
    ($($(#[$doc:meta])* $tag:ident($field:ident): $value:ty = $index:literal;)*) => {
        /// The attribute set, in column order.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum AttributeName {
            $($tag = $index,)*
        }

        impl AttributeName {
            /// Every attribute, ordered by index.
            pub const ALL: &'static [AttributeName] = &[$(AttributeName::$tag,)*];

            /// Column name, as used in log output.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(AttributeName::$tag => stringify!($field),)*
                }
            }

            /// The fixed small integer tag of this attribute.
            pub fn index(self) -> usize {
                self as usize
            }
        }

        $(
            $(#[$doc])*
            #[derive(Copy, Clone, Debug, Default)]
            pub struct $tag;

            impl sealed::Sealed for $tag {}

            impl Attribute for $tag {
                type Value = $value;

                const NAME: AttributeName = AttributeName::$tag;

                #[inline]
                fn column<M: MemorySpace>(soa: &SoA<M>) -> &[$value] {
                    &soa.$field
                }

                #[inline]
                fn column_mut<M: MemorySpace>(soa: &mut SoA<M>) -> &mut [$value] {
                    &mut soa.$field
                }

                #[inline]
                fn view_column<'a, M: MemorySpace>(view: &SoAView<'a, M>) -> &'a [$value] {
                    view.$field
                }

                #[inline]
                fn view_column_mut<'s, M: MemorySpace>(
                    view: &'s mut SoAViewMut<'_, M>,
                ) -> &'s mut [$value] {
                    &mut *view.$field
                }

                #[inline]
                fn get(particle: &Particle) -> $value {
                    particle.$field
                }

                #[inline]
                fn set(particle: &mut Particle, value: $value) {
                    particle.$field = value;
                }
            }
        )*
    };
}

attributes! {
    /// Unique particle id.
    Id(id): ParticleId = 0;
    /// Current location.
    Position(position): DVec3 = 1;
    /// Snapshot of the position taken at the last neighbour-structure rebuild.
    RebuildPosition(rebuild_position): DVec3 = 2;
    Velocity(velocity): DVec3 = 3;
    /// Force accumulated during the current evaluation pass.
    Force(force): DVec3 = 4;
    /// Force captured at the start of the current integration step.
    PreviousForce(previous_force): DVec3 = 5;
    Mass(mass): f64 = 6;
    /// Species tag.
    TypeId(type_id): ParticleTypeId = 7;
    Ownership(ownership): OwnershipState = 8;
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


// End of File
