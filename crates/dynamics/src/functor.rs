// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use particles::{MemorySpace, Particle, SoAViewMut};

/// A pairwise interaction that a container can evaluate over its batches.
///
/// Every kernel accumulates into `force` and never resets it; resetting is the integrator's job.
/// Slots tagged dummy neither exert nor receive force.
pub trait PairwiseFunctor<M: MemorySpace>: Send + Sync {
    /// Stable display name.
    fn name(&self) -> &'static str;

    /// Whether a tuner should consider this functor when choosing a traversal.
    fn is_relevant_for_tuning(&self) -> bool;

    /// Whether the functor can run with the Newton-3 optimisation.
    fn allows_newton3(&self) -> bool;

    /// Whether the functor can run without the Newton-3 optimisation.
    fn allows_non_newton3(&self) -> bool;

    /// Interaction range. Pairs further apart than this contribute nothing.
    fn cutoff(&self) -> f64;

    /// Record form: adds the force exerted by `j` on `i` to `i`.  With `newton3` the opposite
    /// force is also added to `j`.
    fn aos_functor(&self, i: &mut Particle, j: &mut Particle, newton3: bool);

    /// Single-batch form: every slot of `soa` receives the force from every other slot of `soa`.
    fn soa_functor_single(&self, soa: SoAViewMut<'_, M>, newton3: bool);

    /// Pair form: every slot of `soa1` receives the force from every slot of `soa2`.  With
    /// `newton3` the slots of `soa2` also receive the reaction forces.
    fn soa_functor_pair(&self, soa1: SoAViewMut<'_, M>, soa2: SoAViewMut<'_, M>, newton3: bool);
}

// End of File
