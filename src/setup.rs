// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::ops::Range;

use app_config::{ConfigError, Configuration};
use common::{IdAllocator, ParticleId};
use dynamics::ParticleContainer;
use glam::DVec3;
use particles::{MemorySpace, Particle};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Gap between the upper face of the domain box and the nearest halo particle.
pub const HALO_OFFSET: f64 = 0.1;

/// Ids handed out by [`fill_particles`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Population {
    pub owned: Range<ParticleId>,
    pub halo: Range<ParticleId>,
}

/// Seeds `container` with `num_particles` owned particles placed uniformly in the domain box and
/// `num_halos` halo particles placed in the slab just beyond its upper x face.
///
/// Owned particles take the ids `0..num_particles` and halos the ids that follow.  Every particle
/// starts at rest with the configured mass.  Placement depends only on the configured seed.
/// `config` is validated first and nothing is placed if it is rejected.
pub fn fill_particles<M, C>(container: &mut C, config: &Configuration) -> Result<Population, ConfigError>
where
    M: MemorySpace,
    C: ParticleContainer<M>,
{
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut ids = IdAllocator::new();
    let domain = config.domain();

    let owned = ids.reserve(config.num_particles);
    for id in owned.clone() {
        let position = DVec3::new(
            rng.gen_range(domain.min.x..domain.max.x),
            rng.gen_range(domain.min.y..domain.max.y),
            rng.gen_range(domain.min.z..domain.max.z),
        );
        container.add_particle(&Particle::owned(id, position).with_mass(config.mass));
    }

    let low = domain.max.x + HALO_OFFSET;
    let high = (domain.max.x + config.cutoff).max(low);
    let halo = ids.reserve(config.num_halos);
    for id in halo.clone() {
        let position = DVec3::new(
            rng.gen_range(low..=high),
            rng.gen_range(domain.min.y..domain.max.y),
            rng.gen_range(domain.min.z..domain.max.z),
        );
        container.add_halo_particle(&Particle::halo(id, position).with_mass(config.mass));
    }

    log::debug!(
        "Placed {} owned particles in {:?} and {} halo particles at x in [{low}, {high}]",
        config.num_particles,
        domain,
        config.num_halos,
    );
    Ok(Population { owned, halo })
}

// End of File
