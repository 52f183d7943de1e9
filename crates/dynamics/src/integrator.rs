// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use glam::DVec3;
use particles::{IteratorBehavior, MemorySpace, SlotMut};

use crate::ParticleContainer;

/// Velocity-Verlet integration split around the force evaluation.
///
/// Phase A ([`VelocityVerlet::update_positions`]) runs before the evaluator: it saves the force
/// of time `t`, resets `force` to the global force and moves every owned particle.  Phase B
/// ([`VelocityVerlet::update_velocities`]) runs after it and advances velocities by the mean of
/// the saved force and the force just accumulated.  Halo and dummy slots are never touched.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct VelocityVerlet {
    /// Constant force every evaluation starts accumulating from.
    pub global_force: DVec3,
}

impl VelocityVerlet {
    pub fn new(global_force: DVec3) -> Self {
        Self { global_force }
    }

    /// Phase A over the owned particles of `container`.
    pub fn update_positions<M, C>(&self, container: &mut C, delta_t: f64)
    where
        M: MemorySpace,
        C: ParticleContainer<M>,
    {
        container.for_each(IteratorBehavior::OWNED, |mut slot| {
            self.position_step(&mut slot, delta_t)
        });
    }

    /// Phase B over the owned particles of `container`.
    pub fn update_velocities<M, C>(&self, container: &mut C, delta_t: f64)
    where
        M: MemorySpace,
        C: ParticleContainer<M>,
    {
        container.for_each(IteratorBehavior::OWNED, |mut slot| {
            self.velocity_step(&mut slot, delta_t)
        });
    }

    /// Phase A for one slot.
    #[inline]
    pub fn position_step(&self, slot: &mut SlotMut<'_>, delta_t: f64) {
        let force = *slot.force;
        *slot.previous_force = force;
        *slot.force = self.global_force;
        *slot.position += *slot.velocity * delta_t + force * (delta_t * delta_t / (2.0 * *slot.mass));
    }

    /// Phase B for one slot.
    #[inline]
    pub fn velocity_step(&self, slot: &mut SlotMut<'_>, delta_t: f64) {
        *slot.velocity += (*slot.force + *slot.previous_force) * (delta_t / (2.0 * *slot.mass));
    }
}


// End of File
