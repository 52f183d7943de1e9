// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use particles::{ExecutionSpace, IteratorBehavior, MemorySpace, Particle, SlotMut, SlotRef, SoAViewMut};
use rayon::prelude::*;

use crate::PairwiseFunctor;

/// The owner of a particle system's storage, as seen by the kernels in this crate.
///
/// A container decides which particles are interaction candidates and how storage is split into
/// batches.  The integrator only needs [`ParticleContainer::for_each`]; the evaluator is driven
/// through [`ParticleContainer::compute_interactions`].
pub trait ParticleContainer<M: MemorySpace> {
    /// Copies `particle` into owned storage.
    fn add_particle(&mut self, particle: &Particle);

    /// Copies `particle` into halo storage.
    fn add_halo_particle(&mut self, particle: &Particle);

    /// Runs `visitor` once on every slot whose state `behavior` contains.  Slots may be visited
    /// concurrently and in any order.
    fn for_each<F>(&mut self, behavior: IteratorBehavior, visitor: F)
    where
        F: Fn(SlotMut<'_>) + Send + Sync;

    /// Maps every slot whose state `behavior` contains and folds the results with `op`.
    fn reduce<T, Map, Op>(&self, behavior: IteratorBehavior, identity: T, map: Map, op: Op) -> T
    where
        T: Clone + Send + Sync,
        Map: Fn(SlotRef<'_>) -> T + Send + Sync,
        Op: Fn(T, T) -> T + Send + Sync;

    /// Invokes `functor` on every batch and batch pair that may hold interacting particles.
    /// Returns false if the container could not evaluate the interactions.
    fn compute_interactions<F>(&mut self, functor: &F) -> bool
    where
        F: PairwiseFunctor<M>;

    /// Number of slots whose state `behavior` contains.
    fn num_particles(&self, behavior: IteratorBehavior) -> usize;
}

/// Runs `visitor` on the slots of `soa` selected by `behavior`, dispatched by the space's
/// execution backend.
pub fn for_each_slot<M, F>(soa: SoAViewMut<'_, M>, behavior: IteratorBehavior, visitor: F)
where
    M: MemorySpace,
    F: Fn(SlotMut<'_>) + Send + Sync,
{
    M::Exec::install(|| soa.into_par_slots(behavior).for_each(visitor))
}

// End of File
