use glam::DVec3;
use particles::{MemorySpace, Particle, SoA};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// `n` owned particles on a jittered cubic lattice with spacing 1.1, ids starting at `first_id`.
/// Neighbours stay at least 0.9 apart.
pub fn jittered_lattice<M: MemorySpace>(n: usize, first_id: u64, origin: DVec3, seed: u64) -> SoA<M> {
    let mut rng = StdRng::seed_from_u64(seed);
    let side = (n as f64).cbrt().ceil() as usize;
    let mut soa = SoA::new();
    for k in 0..n {
        let cell = DVec3::new((k % side) as f64, ((k / side) % side) as f64, (k / (side * side)) as f64);
        let jitter = DVec3::new(
            rng.gen_range(-0.1..0.1),
            rng.gen_range(-0.1..0.1),
            rng.gen_range(-0.1..0.1),
        );
        soa.push(&Particle::owned(first_id + k as u64, origin + cell * 1.1 + jitter));
    }
    soa
}

pub fn forces<M: MemorySpace>(soa: &SoA<M>) -> Vec<DVec3> {
    soa.column::<particles::attribute::Force>().to_vec()
}
