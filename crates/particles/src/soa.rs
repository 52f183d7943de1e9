// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::{fmt, marker::PhantomData};

use common::{ParticleId, ParticleTypeId};
use glam::DVec3;
use rayon::prelude::*;
use static_assertions::assert_impl_all;

use crate::{
    space::{ExecutionSpace, MemorySpace},
    Attribute, IteratorBehavior, OwnershipState, Particle, SoAView, SoAViewMut,
};

/// Columnar particle storage: one column per attribute, all columns the same length.
///
/// The storage owns every attribute of every slot. Slot indices passed to the accessors must be
/// below [`SoA::len`]; out-of-range indices are a caller bug and panic.
pub struct SoA<M: MemorySpace = crate::DefaultSpace> {
    pub(crate) id: Vec<ParticleId>,
    pub(crate) position: Vec<DVec3>,
    pub(crate) rebuild_position: Vec<DVec3>,
    pub(crate) velocity: Vec<DVec3>,
    pub(crate) force: Vec<DVec3>,
    pub(crate) previous_force: Vec<DVec3>,
    pub(crate) mass: Vec<f64>,
    pub(crate) type_id: Vec<ParticleTypeId>,
    pub(crate) ownership: Vec<OwnershipState>,
    space: PhantomData<M>,
}

assert_impl_all!(SoA<crate::HostSpace>: Send, Sync);
assert_impl_all!(SoA<crate::DeviceSpace>: Send, Sync);

impl<M: MemorySpace> Default for SoA<M> {
    fn default() -> Self {
        Self {
            id: Vec::new(),
            position: Vec::new(),
            rebuild_position: Vec::new(),
            velocity: Vec::new(),
            force: Vec::new(),
            previous_force: Vec::new(),
            mass: Vec::new(),
            type_id: Vec::new(),
            ownership: Vec::new(),
            space: PhantomData,
        }
    }
}

impl<M: MemorySpace> Clone for SoA<M> {
    fn clone(&self) -> Self {
        self.to_space::<M>()
    }
}

impl<M: MemorySpace> fmt::Debug for SoA<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoA")
            .field("space", &M::NAME)
            .field("len", &self.len())
            .field("real", &self.num_real())
            .finish()
    }
}

impl<M: MemorySpace> SoA<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: Vec::with_capacity(capacity),
            position: Vec::with_capacity(capacity),
            rebuild_position: Vec::with_capacity(capacity),
            velocity: Vec::with_capacity(capacity),
            force: Vec::with_capacity(capacity),
            previous_force: Vec::with_capacity(capacity),
            mass: Vec::with_capacity(capacity),
            type_id: Vec::with_capacity(capacity),
            ownership: Vec::with_capacity(capacity),
            space: PhantomData,
        }
    }

    /// Number of slots, dummies included.
    pub fn len(&self) -> usize {
        self.ownership.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ownership.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.ownership.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.id.reserve(additional);
        self.position.reserve(additional);
        self.rebuild_position.reserve(additional);
        self.velocity.reserve(additional);
        self.force.reserve(additional);
        self.previous_force.reserve(additional);
        self.mass.reserve(additional);
        self.type_id.reserve(additional);
        self.ownership.reserve(additional);
    }

    /// Number of slots that are not dummies.
    pub fn num_real(&self) -> usize {
        self.ownership.iter().filter(|s| !s.is_dummy()).count()
    }

    /// Number of slots whose ownership state `behavior` contains.
    pub fn count(&self, behavior: IteratorBehavior) -> usize {
        self.ownership.iter().filter(|s| behavior.contains(**s)).count()
    }

    #[inline]
    pub fn read<A: Attribute>(&self, slot: usize) -> A::Value {
        A::column(self)[slot]
    }

    #[inline]
    pub fn write<A: Attribute>(&mut self, slot: usize, value: A::Value) {
        A::column_mut(self)[slot] = value;
    }

    #[inline]
    pub fn column<A: Attribute>(&self) -> &[A::Value] {
        A::column(self)
    }

    #[inline]
    pub fn column_mut<A: Attribute>(&mut self) -> &mut [A::Value] {
        A::column_mut(self)
    }

    /// Appends a copy of `particle` and returns its slot.
    pub fn push(&mut self, particle: &Particle) -> usize {
        let slot = self.len();
        self.id.push(particle.id);
        self.position.push(particle.position);
        self.rebuild_position.push(particle.rebuild_position);
        self.velocity.push(particle.velocity);
        self.force.push(particle.force);
        self.previous_force.push(particle.previous_force);
        self.mass.push(particle.mass);
        self.type_id.push(particle.type_id);
        self.ownership.push(particle.ownership);
        slot
    }

    /// Copies every attribute of `particle` into `slot`.
    pub fn store(&mut self, slot: usize, particle: &Particle) {
        self.id[slot] = particle.id;
        self.position[slot] = particle.position;
        self.rebuild_position[slot] = particle.rebuild_position;
        self.velocity[slot] = particle.velocity;
        self.force[slot] = particle.force;
        self.previous_force[slot] = particle.previous_force;
        self.mass[slot] = particle.mass;
        self.type_id[slot] = particle.type_id;
        self.ownership[slot] = particle.ownership;
    }

    /// Copies `particle` into the first dummy slot, or appends it and pads the storage to the
    /// space's batch width when no dummy slot is free. Returns the slot used.
    pub fn insert(&mut self, particle: &Particle) -> usize {
        match self.ownership.iter().position(|s| s.is_dummy()) {
            Some(slot) => {
                self.store(slot, particle);
                slot
            }
            None => {
                let slot = self.push(particle);
                self.pad_to(M::BATCH_WIDTH);
                slot
            }
        }
    }

    /// Copies slot `slot` out into a standalone record.
    pub fn get(&self, slot: usize) -> Particle {
        Particle {
            id: self.id[slot],
            position: self.position[slot],
            rebuild_position: self.rebuild_position[slot],
            velocity: self.velocity[slot],
            force: self.force[slot],
            previous_force: self.previous_force[slot],
            mass: self.mass[slot],
            type_id: self.type_id[slot],
            ownership: self.ownership[slot],
        }
    }

    /// Copies out every slot, dummies included, in slot order.
    pub fn iter_particles(&self) -> impl Iterator<Item = Particle> + '_ {
        (0..self.len()).map(move |slot| self.get(slot))
    }

    /// Copies out every slot whose ownership state `behavior` contains.
    pub fn particles(&self, behavior: IteratorBehavior) -> Vec<Particle> {
        (0..self.len())
            .filter(|&slot| behavior.contains(self.ownership[slot]))
            .map(|slot| self.get(slot))
            .collect()
    }

    /// Appends dummy slots until the slot count is a multiple of `width`.
    pub fn pad_to(&mut self, width: usize) {
        if width == 0 {
            return;
        }
        let dummy = Particle::default();
        while self.len() % width != 0 {
            self.push(&dummy);
        }
    }

    /// Tombstones `slot`: it becomes a dummy and stops taking part in interactions.
    pub fn mark_as_deleted(&mut self, slot: usize) {
        self.ownership[slot] = OwnershipState::Dummy;
    }

    /// Removes every dummy slot, keeping the order of the others. Returns the number removed.
    pub fn compact(&mut self) -> usize {
        let keep: Vec<bool> = self.ownership.iter().map(|s| !s.is_dummy()).collect();
        let removed = keep.iter().filter(|k| !**k).count();
        if removed == 0 {
            return 0;
        }
        retain_by(&mut self.id, &keep);
        retain_by(&mut self.position, &keep);
        retain_by(&mut self.rebuild_position, &keep);
        retain_by(&mut self.velocity, &keep);
        retain_by(&mut self.force, &keep);
        retain_by(&mut self.previous_force, &keep);
        retain_by(&mut self.mass, &keep);
        retain_by(&mut self.type_id, &keep);
        retain_by(&mut self.ownership, &keep);
        removed
    }

    pub fn clear(&mut self) {
        self.id.clear();
        self.position.clear();
        self.rebuild_position.clear();
        self.velocity.clear();
        self.force.clear();
        self.previous_force.clear();
        self.mass.clear();
        self.type_id.clear();
        self.ownership.clear();
    }

    /// Takes a new rebuild snapshot of every slot.
    pub fn reset_rebuild_positions(&mut self) {
        self.rebuild_position.copy_from_slice(&self.position);
    }

    /// Largest distance any non-dummy particle has moved since its rebuild snapshot.
    pub fn max_displacement_since_rebuild(&self) -> f64 {
        let view = self.view();
        M::Exec::install(|| {
            view.par_slots(IteratorBehavior::OWNED_OR_HALO)
                .map(|slot| slot.displacement_since_rebuild().length())
                .reduce(|| 0.0, f64::max)
        })
    }

    pub fn view(&self) -> SoAView<'_, M> {
        SoAView {
            id: &self.id,
            position: &self.position,
            rebuild_position: &self.rebuild_position,
            velocity: &self.velocity,
            force: &self.force,
            previous_force: &self.previous_force,
            mass: &self.mass,
            type_id: &self.type_id,
            ownership: &self.ownership,
            space: PhantomData,
        }
    }

    pub fn view_mut(&mut self) -> SoAViewMut<'_, M> {
        SoAViewMut {
            id: &mut self.id,
            position: &mut self.position,
            rebuild_position: &mut self.rebuild_position,
            velocity: &mut self.velocity,
            force: &mut self.force,
            previous_force: &mut self.previous_force,
            mass: &mut self.mass,
            type_id: &mut self.type_id,
            ownership: &mut self.ownership,
            space: PhantomData,
        }
    }

    /// Deep-copies every column into a new storage in memory space `N`.
    pub fn to_space<N: MemorySpace>(&self) -> SoA<N> {
        let mut copy = SoA::<N>::with_capacity(self.len());
        copy.deep_copy_from(self);
        copy
    }

    /// Replaces the contents of `self` with a deep copy of `src`, which may live in another
    /// memory space.
    pub fn deep_copy_from<S: MemorySpace>(&mut self, src: &SoA<S>) {
        self.id.clone_from(&src.id);
        self.position.clone_from(&src.position);
        self.rebuild_position.clone_from(&src.rebuild_position);
        self.velocity.clone_from(&src.velocity);
        self.force.clone_from(&src.force);
        self.previous_force.clone_from(&src.previous_force);
        self.mass.clone_from(&src.mass);
        self.type_id.clone_from(&src.type_id);
        self.ownership.clone_from(&src.ownership);
    }
}

fn retain_by<T>(column: &mut Vec<T>, keep: &[bool]) {
    let mut keep = keep.iter();
    column.retain(|_| keep.next().copied().unwrap_or(false));
}


// End of File
