// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::{fmt, marker::PhantomData};

use glam::DVec3;
use particles::{DefaultSpace, ExecutionSpace, MemorySpace, OwnershipState, Particle, SoAViewMut};
use rayon::prelude::*;

use crate::PairwiseFunctor;

/// The 12-6 Lennard-Jones force with a hard cutoff and uniform parameters.
///
/// For two particles separated by `dr = r_i - r_j` with `|dr| <= cutoff`, the force on `i` is
///
/// ```text
/// epsilon24 * (2 (sigma²/dr²)^6 - (sigma²/dr²)^3) / dr² * dr
/// ```
///
/// where `epsilon24` is 24ε.  The `type_id` column is not consulted.
pub struct LJFunctor<M: MemorySpace = DefaultSpace> {
    cutoff: f64,
    cutoff_squared: f64,
    epsilon24: f64,
    sigma_squared: f64,
    space: PhantomData<M>,
}

impl<M: MemorySpace> Clone for LJFunctor<M> {
    fn clone(&self) -> Self {
        Self { space: PhantomData, ..*self }
    }
}

impl<M: MemorySpace> Copy for LJFunctor<M> {}

impl<M: MemorySpace> fmt::Debug for LJFunctor<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LJFunctor")
            .field("space", &M::NAME)
            .field("cutoff", &self.cutoff)
            .field("epsilon24", &self.epsilon24)
            .field("sigma", &self.sigma())
            .finish()
    }
}

impl<M: MemorySpace> LJFunctor<M> {
    pub const DEFAULT_EPSILON24: f64 = 24.0;
    pub const DEFAULT_SIGMA: f64 = 1.0;

    /// A functor with ε = 1 and σ = 1.
    pub fn new(cutoff: f64) -> Self {
        Self::with_parameters(cutoff, Self::DEFAULT_EPSILON24, Self::DEFAULT_SIGMA)
    }

    pub fn with_parameters(cutoff: f64, epsilon24: f64, sigma: f64) -> Self {
        Self {
            cutoff,
            cutoff_squared: cutoff * cutoff,
            epsilon24,
            sigma_squared: sigma * sigma,
            space: PhantomData,
        }
    }

    pub fn epsilon24(&self) -> f64 {
        self.epsilon24
    }

    pub fn sigma(&self) -> f64 {
        self.sigma_squared.sqrt()
    }

    /// Force on a particle displaced by `dr` from its partner, or zero beyond the cutoff.
    #[inline]
    pub fn pair_force(&self, dr: DVec3) -> DVec3 {
        let dr2 = dr.length_squared();
        if dr2 > self.cutoff_squared {
            return DVec3::ZERO;
        }
        debug_assert!(dr2 > 0.0, "coincident particles");

        let inv_dr2 = 1.0 / dr2;
        let lj2 = self.sigma_squared * inv_dr2;
        let lj6 = lj2 * lj2 * lj2;
        let lj12 = lj6 * lj6;
        let factor = self.epsilon24 * (lj12 + (lj12 - lj6)) * inv_dr2;
        dr * factor
    }

    /// Adds to each non-dummy target slot the force exerted by every non-dummy partner slot.
    ///
    /// One task per target slot, with the partner loop sequential inside it, so each `force`
    /// element has exactly one writer.  When both sides are the same batch, `same_batch` skips
    /// the slot's own index.
    fn accumulate(
        &self,
        force: &mut [DVec3],
        position: &[DVec3],
        ownership: &[OwnershipState],
        partner_position: &[DVec3],
        partner_ownership: &[OwnershipState],
        same_batch: bool,
    ) {
        M::Exec::install(|| {
            force
                .par_iter_mut()
                .enumerate()
                .filter(|(i, _)| !ownership[*i].is_dummy())
                .for_each(|(i, force_i)| {
                    let position_i = position[i];
                    let mut acc = DVec3::ZERO;
                    for (j, (position_j, ownership_j)) in
                        partner_position.iter().zip(partner_ownership).enumerate()
                    {
                        if ownership_j.is_dummy() || (same_batch && i == j) {
                            continue;
                        }
                        acc += self.pair_force(position_i - *position_j);
                    }
                    *force_i += acc;
                })
        })
    }
}

impl<M: MemorySpace> PairwiseFunctor<M> for LJFunctor<M> {
    fn name(&self) -> &'static str {
        "LJFunctor"
    }

    fn is_relevant_for_tuning(&self) -> bool {
        true
    }

    fn allows_newton3(&self) -> bool {
        true
    }

    fn allows_non_newton3(&self) -> bool {
        true
    }

    fn cutoff(&self) -> f64 {
        self.cutoff
    }

    fn aos_functor(&self, i: &mut Particle, j: &mut Particle, newton3: bool) {
        if i.is_dummy() || j.is_dummy() {
            return;
        }
        let f = self.pair_force(i.position() - j.position());
        i.add_force(f);
        if newton3 {
            j.sub_force(f);
        }
    }

    // Every ordered pair of the batch is visited either way, so `newton3` changes nothing.
    fn soa_functor_single(&self, soa: SoAViewMut<'_, M>, _newton3: bool) {
        self.accumulate(soa.force, soa.position, soa.ownership, soa.position, soa.ownership, true);
    }

    fn soa_functor_pair(&self, soa1: SoAViewMut<'_, M>, soa2: SoAViewMut<'_, M>, newton3: bool) {
        self.accumulate(soa1.force, soa1.position, soa1.ownership, soa2.position, soa2.ownership, false);
        if newton3 {
            self.accumulate(soa2.force, soa2.position, soa2.ownership, soa1.position, soa1.ownership, false);
        }
    }
}


// End of File
