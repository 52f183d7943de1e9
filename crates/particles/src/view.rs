// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Borrowed views over all columns of a storage batch, and per-slot references.
//!
//! Views hold one slice per column, so a kernel can borrow the columns it reads and the column
//! it writes independently.  Views split like slices, which is how a container carves one
//! storage into several batches.

use std::marker::PhantomData;

use common::{ParticleId, ParticleTypeId};
use glam::DVec3;
use rayon::prelude::*;

use crate::{space::MemorySpace, Attribute, IteratorBehavior, OwnershipState, Particle};

/// Shared view of a batch of slots.
#[derive(Debug)]
pub struct SoAView<'a, M: MemorySpace> {
    pub id: &'a [ParticleId],
    pub position: &'a [DVec3],
    pub rebuild_position: &'a [DVec3],
    pub velocity: &'a [DVec3],
    pub force: &'a [DVec3],
    pub previous_force: &'a [DVec3],
    pub mass: &'a [f64],
    pub type_id: &'a [ParticleTypeId],
    pub ownership: &'a [OwnershipState],
    pub(crate) space: PhantomData<M>,
}

impl<M: MemorySpace> Clone for SoAView<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: MemorySpace> Copy for SoAView<'_, M> {}

impl<'a, M: MemorySpace> SoAView<'a, M> {
    /// Number of slots, dummies included.
    pub fn len(&self) -> usize {
        self.ownership.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ownership.is_empty()
    }

    #[inline]
    pub fn read<A: Attribute>(&self, slot: usize) -> A::Value {
        A::view_column(self)[slot]
    }

    /// Splits into the slots `[0, mid)` and `[mid, len)`.
    pub fn split_at(self, mid: usize) -> (Self, Self) {
        let (id_a, id_b) = self.id.split_at(mid);
        let (position_a, position_b) = self.position.split_at(mid);
        let (rebuild_a, rebuild_b) = self.rebuild_position.split_at(mid);
        let (velocity_a, velocity_b) = self.velocity.split_at(mid);
        let (force_a, force_b) = self.force.split_at(mid);
        let (previous_a, previous_b) = self.previous_force.split_at(mid);
        let (mass_a, mass_b) = self.mass.split_at(mid);
        let (type_a, type_b) = self.type_id.split_at(mid);
        let (ownership_a, ownership_b) = self.ownership.split_at(mid);
        (
            Self {
                id: id_a,
                position: position_a,
                rebuild_position: rebuild_a,
                velocity: velocity_a,
                force: force_a,
                previous_force: previous_a,
                mass: mass_a,
                type_id: type_a,
                ownership: ownership_a,
                space: PhantomData,
            },
            Self {
                id: id_b,
                position: position_b,
                rebuild_position: rebuild_b,
                velocity: velocity_b,
                force: force_b,
                previous_force: previous_b,
                mass: mass_b,
                type_id: type_b,
                ownership: ownership_b,
                space: PhantomData,
            },
        )
    }

    /// References into slot `slot`.
    pub fn slot(&self, slot: usize) -> SlotRef<'a> {
        SlotRef {
            id: &self.id[slot],
            position: &self.position[slot],
            rebuild_position: &self.rebuild_position[slot],
            velocity: &self.velocity[slot],
            force: &self.force[slot],
            previous_force: &self.previous_force[slot],
            mass: &self.mass[slot],
            type_id: &self.type_id[slot],
            ownership: &self.ownership[slot],
        }
    }

    /// Parallel iterator over the slots whose ownership state `behavior` contains.
    pub fn par_slots(self, behavior: IteratorBehavior) -> impl ParallelIterator<Item = SlotRef<'a>> {
        (
            self.id.into_par_iter(),
            self.position.into_par_iter(),
            self.rebuild_position.into_par_iter(),
            self.velocity.into_par_iter(),
            self.force.into_par_iter(),
            self.previous_force.into_par_iter(),
            self.mass.into_par_iter(),
            self.type_id.into_par_iter(),
            self.ownership.into_par_iter(),
        )
            .into_par_iter()
            .filter(move |(.., ownership)| behavior.contains(**ownership))
            .map(
                |(id, position, rebuild_position, velocity, force, previous_force, mass, type_id, ownership)| {
                    SlotRef {
                        id,
                        position,
                        rebuild_position,
                        velocity,
                        force,
                        previous_force,
                        mass,
                        type_id,
                        ownership,
                    }
                },
            )
    }
}

/// Exclusive view of a batch of slots.
#[derive(Debug)]
pub struct SoAViewMut<'a, M: MemorySpace> {
    pub id: &'a mut [ParticleId],
    pub position: &'a mut [DVec3],
    pub rebuild_position: &'a mut [DVec3],
    pub velocity: &'a mut [DVec3],
    pub force: &'a mut [DVec3],
    pub previous_force: &'a mut [DVec3],
    pub mass: &'a mut [f64],
    pub type_id: &'a mut [ParticleTypeId],
    pub ownership: &'a mut [OwnershipState],
    pub(crate) space: PhantomData<M>,
}

impl<'a, M: MemorySpace> SoAViewMut<'a, M> {
    /// Number of slots, dummies included.
    pub fn len(&self) -> usize {
        self.ownership.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ownership.is_empty()
    }

    #[inline]
    pub fn read<A: Attribute>(&self, slot: usize) -> A::Value {
        A::view_column(&self.as_view())[slot]
    }

    #[inline]
    pub fn write<A: Attribute>(&mut self, slot: usize, value: A::Value) {
        A::view_column_mut(self)[slot] = value;
    }

    /// Shortens the borrow so the view can be handed to a kernel and used again afterwards.
    pub fn reborrow(&mut self) -> SoAViewMut<'_, M> {
        SoAViewMut {
            id: &mut *self.id,
            position: &mut *self.position,
            rebuild_position: &mut *self.rebuild_position,
            velocity: &mut *self.velocity,
            force: &mut *self.force,
            previous_force: &mut *self.previous_force,
            mass: &mut *self.mass,
            type_id: &mut *self.type_id,
            ownership: &mut *self.ownership,
            space: PhantomData,
        }
    }

    pub fn as_view(&self) -> SoAView<'_, M> {
        SoAView {
            id: &*self.id,
            position: &*self.position,
            rebuild_position: &*self.rebuild_position,
            velocity: &*self.velocity,
            force: &*self.force,
            previous_force: &*self.previous_force,
            mass: &*self.mass,
            type_id: &*self.type_id,
            ownership: &*self.ownership,
            space: PhantomData,
        }
    }

    /// Splits into the slots `[0, mid)` and `[mid, len)`.
    pub fn split_at(self, mid: usize) -> (Self, Self) {
        let (id_a, id_b) = self.id.split_at_mut(mid);
        let (position_a, position_b) = self.position.split_at_mut(mid);
        let (rebuild_a, rebuild_b) = self.rebuild_position.split_at_mut(mid);
        let (velocity_a, velocity_b) = self.velocity.split_at_mut(mid);
        let (force_a, force_b) = self.force.split_at_mut(mid);
        let (previous_a, previous_b) = self.previous_force.split_at_mut(mid);
        let (mass_a, mass_b) = self.mass.split_at_mut(mid);
        let (type_a, type_b) = self.type_id.split_at_mut(mid);
        let (ownership_a, ownership_b) = self.ownership.split_at_mut(mid);
        (
            Self {
                id: id_a,
                position: position_a,
                rebuild_position: rebuild_a,
                velocity: velocity_a,
                force: force_a,
                previous_force: previous_a,
                mass: mass_a,
                type_id: type_a,
                ownership: ownership_a,
                space: PhantomData,
            },
            Self {
                id: id_b,
                position: position_b,
                rebuild_position: rebuild_b,
                velocity: velocity_b,
                force: force_b,
                previous_force: previous_b,
                mass: mass_b,
                type_id: type_b,
                ownership: ownership_b,
                space: PhantomData,
            },
        )
    }

    /// Parallel iterator of exclusive per-slot references, restricted to the slots whose
    /// ownership state `behavior` contains.  Every slot is yielded at most once, so visitors
    /// never race on a slot.
    pub fn into_par_slots(self, behavior: IteratorBehavior) -> impl ParallelIterator<Item = SlotMut<'a>> {
        (
            self.id.into_par_iter(),
            self.position.into_par_iter(),
            self.rebuild_position.into_par_iter(),
            self.velocity.into_par_iter(),
            self.force.into_par_iter(),
            self.previous_force.into_par_iter(),
            self.mass.into_par_iter(),
            self.type_id.into_par_iter(),
            self.ownership.into_par_iter(),
        )
            .into_par_iter()
            .filter(move |(.., ownership)| behavior.contains(**ownership))
            .map(
                |(id, position, rebuild_position, velocity, force, previous_force, mass, type_id, ownership)| {
                    SlotMut {
                        id,
                        position,
                        rebuild_position,
                        velocity,
                        force,
                        previous_force,
                        mass,
                        type_id,
                        ownership,
                    }
                },
            )
    }
}

/// Shared references to the attributes of one slot.
#[derive(Copy, Clone, Debug)]
pub struct SlotRef<'a> {
    pub id: &'a ParticleId,
    pub position: &'a DVec3,
    pub rebuild_position: &'a DVec3,
    pub velocity: &'a DVec3,
    pub force: &'a DVec3,
    pub previous_force: &'a DVec3,
    pub mass: &'a f64,
    pub type_id: &'a ParticleTypeId,
    pub ownership: &'a OwnershipState,
}

impl SlotRef<'_> {
    /// Rebuild snapshot minus current position.
    pub fn displacement_since_rebuild(&self) -> DVec3 {
        *self.rebuild_position - *self.position
    }

    /// Kinetic energy `m v² / 2`.
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * *self.mass * self.velocity.length_squared()
    }

    /// Copies the slot out into a standalone record.
    pub fn to_particle(&self) -> Particle {
        Particle {
            id: *self.id,
            position: *self.position,
            rebuild_position: *self.rebuild_position,
            velocity: *self.velocity,
            force: *self.force,
            previous_force: *self.previous_force,
            mass: *self.mass,
            type_id: *self.type_id,
            ownership: *self.ownership,
        }
    }
}

/// Exclusive references to the attributes of one slot, handed to per-slot visitors.
#[derive(Debug)]
pub struct SlotMut<'a> {
    pub id: &'a mut ParticleId,
    pub position: &'a mut DVec3,
    pub rebuild_position: &'a mut DVec3,
    pub velocity: &'a mut DVec3,
    pub force: &'a mut DVec3,
    pub previous_force: &'a mut DVec3,
    pub mass: &'a mut f64,
    pub type_id: &'a mut ParticleTypeId,
    pub ownership: &'a mut OwnershipState,
}

impl SlotMut<'_> {
    /// Rebuild snapshot minus current position.
    pub fn displacement_since_rebuild(&self) -> DVec3 {
        *self.rebuild_position - *self.position
    }

    pub fn reset_rebuild_position(&mut self) {
        *self.rebuild_position = *self.position;
    }

    /// Tombstones the slot.
    pub fn mark_as_deleted(&mut self) {
        *self.ownership = OwnershipState::Dummy;
    }

    pub fn to_particle(&self) -> Particle {
        Particle {
            id: *self.id,
            position: *self.position,
            rebuild_position: *self.rebuild_position,
            velocity: *self.velocity,
            force: *self.force,
            previous_force: *self.previous_force,
            mass: *self.mass,
            type_id: *self.type_id,
            ownership: *self.ownership,
        }
    }
}

// End of File
