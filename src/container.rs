// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use common::BoundingBox;
use dynamics::{for_each_slot, PairwiseFunctor, ParticleContainer};
use particles::{
    DefaultSpace, ExecutionSpace, IteratorBehavior, MemorySpace, OwnershipState, Particle, SlotMut,
    SlotRef, SoA,
};
use rayon::prelude::*;

/// The reference container: every owned particle interacts with every other owned particle and
/// with every halo particle.
///
/// Owned and halo particles live in two storages, each padded with dummy slots to the memory
/// space's batch width.  An interaction pass is one single-batch call over the owned storage and
/// one pair call (owned, halo), both without Newton-3, so halo forces are never written.
#[derive(Debug)]
pub struct DirectSum<M: MemorySpace = DefaultSpace> {
    domain: BoundingBox,
    cutoff: f64,
    skin: f64,
    owned: SoA<M>,
    halo: SoA<M>,
}

impl<M: MemorySpace> DirectSum<M> {
    pub fn new(domain: BoundingBox, cutoff: f64, skin: f64) -> Self {
        Self {
            domain,
            cutoff,
            skin,
            owned: SoA::new(),
            halo: SoA::new(),
        }
    }

    pub fn domain(&self) -> BoundingBox {
        self.domain
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    pub fn skin(&self) -> f64 {
        self.skin
    }

    /// The region halo particles may occupy: the domain grown by the cutoff on every side.
    pub fn halo_region(&self) -> BoundingBox {
        self.domain.expanded(self.cutoff)
    }

    /// Storage of the owned particles, padding included.
    pub fn owned(&self) -> &SoA<M> {
        &self.owned
    }

    /// Storage of the halo particles, padding included.
    pub fn halo(&self) -> &SoA<M> {
        &self.halo
    }

    /// Drops every halo particle.
    pub fn delete_halo_particles(&mut self) {
        self.halo.clear();
    }

    /// Removes owned particles that have left the domain box and returns them.  Halo particles
    /// are dropped and the storages rebuilt, so halos must be re-added afterwards.
    pub fn update_container(&mut self) -> Vec<Particle> {
        self.delete_halo_particles();

        let mut leaving = Vec::new();
        for slot in 0..self.owned.len() {
            let particle = self.owned.get(slot);
            if particle.is_owned() && !self.domain.contains(particle.position()) {
                self.owned.mark_as_deleted(slot);
                leaving.push(particle);
            }
        }

        self.rebuild();
        log::debug!("{} particles left the domain", leaving.len());
        leaving
    }

    /// Drops tombstoned slots, re-pads both storages and takes a new rebuild snapshot.
    pub fn rebuild(&mut self) {
        for soa in [&mut self.owned, &mut self.halo] {
            soa.compact();
            soa.pad_to(M::BATCH_WIDTH);
            soa.reset_rebuild_positions();
        }
    }

    /// Largest distance any particle has moved since the last rebuild.
    pub fn max_displacement_since_rebuild(&self) -> f64 {
        self.owned
            .max_displacement_since_rebuild()
            .max(self.halo.max_displacement_since_rebuild())
    }

    /// True once a particle may have crossed half of the skin, after which two particles could
    /// have closed the whole skin between them.
    pub fn needs_rebuild(&self) -> bool {
        self.max_displacement_since_rebuild() > 0.5 * self.skin
    }
}

impl<M: MemorySpace> ParticleContainer<M> for DirectSum<M> {
    fn add_particle(&mut self, particle: &Particle) {
        let mut particle = particle.clone();
        particle.set_ownership(OwnershipState::Owned);
        self.owned.insert(&particle);
    }

    fn add_halo_particle(&mut self, particle: &Particle) {
        let mut particle = particle.clone();
        particle.set_ownership(OwnershipState::Halo);
        self.halo.insert(&particle);
    }

    fn for_each<F>(&mut self, behavior: IteratorBehavior, visitor: F)
    where
        F: Fn(SlotMut<'_>) + Send + Sync,
    {
        for_each_slot(self.owned.view_mut(), behavior, &visitor);
        for_each_slot(self.halo.view_mut(), behavior, &visitor);
    }

    fn reduce<T, Map, Op>(&self, behavior: IteratorBehavior, identity: T, map: Map, op: Op) -> T
    where
        T: Clone + Send + Sync,
        Map: Fn(SlotRef<'_>) -> T + Send + Sync,
        Op: Fn(T, T) -> T + Send + Sync,
    {
        let owned = self.owned.view();
        let halo = self.halo.view();
        M::Exec::install(|| {
            owned
                .par_slots(behavior)
                .chain(halo.par_slots(behavior))
                .map(&map)
                .reduce(|| identity.clone(), &op)
        })
    }

    fn compute_interactions<F>(&mut self, functor: &F) -> bool
    where
        F: PairwiseFunctor<M>,
    {
        if !functor.allows_non_newton3() {
            log::error!("{} cannot run without Newton-3, which direct sum requires", functor.name());
            return false;
        }

        functor.soa_functor_single(self.owned.view_mut(), false);
        if self.halo.num_real() > 0 {
            functor.soa_functor_pair(self.owned.view_mut(), self.halo.view_mut(), false);
        }
        true
    }

    fn num_particles(&self, behavior: IteratorBehavior) -> usize {
        self.owned.count(behavior) + self.halo.count(behavior)
    }
}


// End of File
