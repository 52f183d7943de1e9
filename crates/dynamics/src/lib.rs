// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # Pairwise forces and time integration
//!
//! This crate holds the two kernels that advance a particle system by one step:
//!
//! - [`LJFunctor`], a cutoff-limited Lennard-Jones evaluator implementing [`PairwiseFunctor`],
//!   which accumulates forces into the `force` column of the batches a container hands it.
//! - [`VelocityVerlet`], the two-phase integrator that moves owned particles before and after
//!   the force evaluation.
//!
//! Neither kernel decides which particles are candidates for interaction.  That is the job of a
//! [`ParticleContainer`], which owns the storage, supplies batches to the evaluator and runs the
//! integrator's per-slot visitors.
//!
//! One step is always Phase A, then the evaluator, then Phase B:
//!
//! ```
//! # use ljmd_dynamics::{LJFunctor, ParticleContainer, VelocityVerlet};
//! # use particles::MemorySpace;
//! fn step<M: MemorySpace, C: ParticleContainer<M>>(container: &mut C, functor: &LJFunctor<M>, dt: f64) -> bool {
//!     let integrator = VelocityVerlet::default();
//!     integrator.update_positions(container, dt);
//!     let ok = container.compute_interactions(functor);
//!     integrator.update_velocities(container, dt);
//!     ok
//! }
//! ```

mod container;
mod functor;
mod integrator;
mod lennard_jones;

pub use container::{for_each_slot, ParticleContainer};
pub use functor::PairwiseFunctor;
pub use integrator::VelocityVerlet;
pub use lennard_jones::LJFunctor;

// End of File
