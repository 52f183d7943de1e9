// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # Columnar particle storage
//!
//! Particle state is held as a structure of arrays: one column per attribute, every column the
//! same length, one slot per particle.  Columns are addressed through zero-sized attribute tags
//! (see [`attribute`]) so that asking for the wrong value type is a compile error rather than a
//! run-time one.
//!
//! Storage is generic over a [`MemorySpace`], which fixes at build time where the columns live
//! and which [`ExecutionSpace`] runs the per-slot kernels over them.  The default space is
//! [`HostSpace`]; building with the `device` feature makes it [`DeviceSpace`] instead.
//!
//! Slots that only pad a batch to the space's parallel width are tagged
//! [`OwnershipState::Dummy`].  Kernels must skip them; nothing assumes they sit at the tail.

pub mod attribute;
mod ownership;
mod particle;
mod soa;
pub mod space;
mod view;

pub use attribute::{Attribute, AttributeName};
pub use ownership::{IteratorBehavior, OwnershipState};
pub use particle::Particle;
pub use soa::SoA;
pub use space::{DefaultSpace, DeviceSpace, ExecutionSpace, HostSpace, MemorySpace, Serial, Threads};
pub use view::{SlotMut, SlotRef, SoAView, SoAViewMut};

/// A module which is typically glob imported.
pub mod prelude {
    pub use super::attribute::{self, Attribute};
    pub use super::{
        DefaultSpace, DeviceSpace, ExecutionSpace, HostSpace, IteratorBehavior, MemorySpace,
        OwnershipState, Particle, SlotMut, SlotRef, SoA, SoAView, SoAViewMut,
    };
}

// End of File
