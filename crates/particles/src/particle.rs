// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::fmt;

use common::{ParticleId, ParticleTypeId};
use glam::DVec3;

use crate::{Attribute, OwnershipState};

/// A single particle materialised outside of columnar storage.
///
/// A `Particle` is an independent copy: it holds no reference into a [`crate::SoA`], so
/// mutating one never changes the other except through [`crate::SoA::push`] (copy-in) and
/// [`crate::SoA::get`] (copy-out).
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub(crate) id: ParticleId,
    pub(crate) position: DVec3,
    pub(crate) rebuild_position: DVec3,
    pub(crate) velocity: DVec3,
    pub(crate) force: DVec3,
    pub(crate) previous_force: DVec3,
    pub(crate) mass: f64,
    pub(crate) type_id: ParticleTypeId,
    pub(crate) ownership: OwnershipState,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            id: 0,
            position: DVec3::ZERO,
            rebuild_position: DVec3::ZERO,
            velocity: DVec3::ZERO,
            force: DVec3::ZERO,
            previous_force: DVec3::ZERO,
            mass: 1.0,
            type_id: 0,
            ownership: OwnershipState::Dummy,
        }
    }
}

impl Particle {
    /// An owned particle at rest at `position`. The rebuild snapshot starts at `position`.
    pub fn owned(id: ParticleId, position: DVec3) -> Self {
        Self {
            id,
            position,
            rebuild_position: position,
            ownership: OwnershipState::Owned,
            ..Self::default()
        }
    }

    /// A halo particle mirroring particle `id` of a neighbouring domain.
    pub fn halo(id: ParticleId, position: DVec3) -> Self {
        Self {
            ownership: OwnershipState::Halo,
            ..Self::owned(id, position)
        }
    }

    /// Reads an attribute by tag.
    #[inline]
    pub fn get<A: Attribute>(&self) -> A::Value {
        A::get(self)
    }

    /// Writes an attribute by tag.
    #[inline]
    pub fn set<A: Attribute>(&mut self, value: A::Value) {
        A::set(self, value)
    }

    pub fn with_velocity(mut self, velocity: DVec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_force(mut self, force: DVec3) -> Self {
        self.force = force;
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_type_id(mut self, type_id: ParticleTypeId) -> Self {
        self.type_id = type_id;
        self
    }

    pub fn id(&self) -> ParticleId {
        self.id
    }

    pub fn set_id(&mut self, id: ParticleId) {
        self.id = id;
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn set_position(&mut self, position: DVec3) {
        self.position = position;
    }

    pub fn rebuild_position(&self) -> DVec3 {
        self.rebuild_position
    }

    pub fn velocity(&self) -> DVec3 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: DVec3) {
        self.velocity = velocity;
    }

    pub fn force(&self) -> DVec3 {
        self.force
    }

    pub fn set_force(&mut self, force: DVec3) {
        self.force = force;
    }

    pub fn add_force(&mut self, force: DVec3) {
        self.force += force;
    }

    pub fn sub_force(&mut self, force: DVec3) {
        self.force -= force;
    }

    pub fn previous_force(&self) -> DVec3 {
        self.previous_force
    }

    pub fn set_previous_force(&mut self, force: DVec3) {
        self.previous_force = force;
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn set_mass(&mut self, mass: f64) {
        self.mass = mass;
    }

    pub fn type_id(&self) -> ParticleTypeId {
        self.type_id
    }

    pub fn ownership(&self) -> OwnershipState {
        self.ownership
    }

    pub fn set_ownership(&mut self, ownership: OwnershipState) {
        self.ownership = ownership;
    }

    /// Rebuild snapshot minus current position.
    pub fn displacement_since_rebuild(&self) -> DVec3 {
        self.rebuild_position - self.position
    }

    /// Takes a new rebuild snapshot at the current position.
    pub fn reset_rebuild_position(&mut self) {
        self.rebuild_position = self.position;
    }

    pub fn is_owned(&self) -> bool {
        self.ownership.is_owned()
    }

    pub fn is_halo(&self) -> bool {
        self.ownership.is_halo()
    }

    pub fn is_dummy(&self) -> bool {
        self.ownership.is_dummy()
    }

    /// Turns the particle into a dummy. Its remaining attributes are left as they were.
    pub fn mark_as_deleted(&mut self) {
        self.ownership = OwnershipState::Dummy;
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Particle {{ id: {}, {}, type: {}, mass: {}, r: [{}, {}, {}], v: [{}, {}, {}], f: [{}, {}, {}], old f: [{}, {}, {}] }}",
            self.id,
            self.ownership,
            self.type_id,
            self.mass,
            self.position.x,
            self.position.y,
            self.position.z,
            self.velocity.x,
            self.velocity.y,
            self.velocity.z,
            self.force.x,
            self.force.y,
            self.force.z,
            self.previous_force.x,
            self.previous_force.y,
            self.previous_force.z,
        )
    }
}

// End of File
