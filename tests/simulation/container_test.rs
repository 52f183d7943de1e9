use common::BoundingBox;
use dynamics::{LJFunctor, PairwiseFunctor, ParticleContainer, VelocityVerlet};
use glam::DVec3;
use ljmd::{DirectSum, Simulation, SimulationError};
use particles::{HostSpace, IteratorBehavior, Particle, Serial, SoAViewMut};

type Host = HostSpace<Serial>;

fn container() -> DirectSum<Host> {
    DirectSum::new(BoundingBox::cube(0.0, 10.0), 3.0, 0.4)
}

// ============================================================================
// Storage management
// ============================================================================

#[test]
fn particles_are_padded_to_batch_width() {
    let mut container = container();
    for id in 0..9 {
        container.add_particle(&Particle::owned(id, DVec3::new(id as f64, 1.0, 1.0)));
    }
    assert_eq!(container.owned().len(), 16);
    assert_eq!(container.num_particles(IteratorBehavior::OWNED), 9);
    assert_eq!(container.num_particles(IteratorBehavior::HALO), 0);
}

#[test]
fn add_sets_ownership() {
    let mut container = container();
    container.add_particle(&Particle::halo(0, DVec3::ONE));
    container.add_halo_particle(&Particle::owned(1, DVec3::new(10.5, 1.0, 1.0)));
    assert!(container.owned().get(0).is_owned());
    assert!(container.halo().get(0).is_halo());
}

#[test]
fn halo_particles_can_be_dropped() {
    let mut container = container();
    container.add_particle(&Particle::owned(0, DVec3::ONE));
    container.add_halo_particle(&Particle::halo(1, DVec3::new(10.5, 1.0, 1.0)));
    container.delete_halo_particles();
    assert_eq!(container.num_particles(IteratorBehavior::HALO), 0);
    assert_eq!(container.num_particles(IteratorBehavior::OWNED), 1);
}

#[test]
fn update_container_returns_leavers() {
    let mut container = container();
    container.add_particle(&Particle::owned(0, DVec3::splat(5.0)));
    container.add_particle(&Particle::owned(1, DVec3::splat(9.0)));
    container.add_particle(&Particle::owned(2, DVec3::splat(1.0)));
    container.add_halo_particle(&Particle::halo(3, DVec3::new(10.5, 1.0, 1.0)));

    // Push particle 1 across the upper face.
    container.for_each(IteratorBehavior::OWNED, |slot| {
        if *slot.id == 1 {
            *slot.position = DVec3::new(10.2, 9.0, 9.0);
        }
    });

    let leaving = container.update_container();
    assert_eq!(leaving.len(), 1);
    assert_eq!(leaving[0].id(), 1);
    assert_eq!(leaving[0].position(), DVec3::new(10.2, 9.0, 9.0));

    let ids: Vec<u64> = container
        .owned()
        .particles(IteratorBehavior::OWNED)
        .iter()
        .map(|p| p.id())
        .collect();
    assert_eq!(ids, vec![0, 2]);
    assert_eq!(container.owned().len(), 8);
    assert_eq!(container.num_particles(IteratorBehavior::HALO), 0);
}

#[test]
fn rebuild_resets_displacement() {
    let mut container = container();
    container.add_particle(&Particle::owned(0, DVec3::splat(5.0)));
    container.add_particle(&Particle::owned(1, DVec3::splat(2.0)));
    assert!(!container.needs_rebuild());

    container.for_each(IteratorBehavior::OWNED, |slot| {
        if *slot.id == 0 {
            *slot.position += DVec3::new(0.0, 0.25, 0.0);
        }
    });
    assert!((container.max_displacement_since_rebuild() - 0.25).abs() < 1e-12);
    // Half of the 0.4 skin.
    assert!(container.needs_rebuild());

    container.rebuild();
    assert_eq!(container.max_displacement_since_rebuild(), 0.0);
    assert!(!container.needs_rebuild());
    assert_eq!(container.num_particles(IteratorBehavior::OWNED), 2);
}

// ============================================================================
// Interactions
// ============================================================================

#[test]
fn halo_forces_reach_owned_particles_only() {
    let mut container = container();
    container.add_particle(&Particle::owned(0, DVec3::new(9.5, 5.0, 5.0)));
    container.add_halo_particle(&Particle::halo(1, DVec3::new(10.5, 5.0, 5.0)));

    assert!(container.compute_interactions(&LJFunctor::<Host>::new(3.0)));
    assert_eq!(container.owned().get(0).force(), DVec3::new(-24.0, 0.0, 0.0));
    assert_eq!(container.halo().get(0).force(), DVec3::ZERO);
}

#[test]
fn owned_pairs_interact_both_ways() {
    let mut container = container();
    container.add_particle(&Particle::owned(0, DVec3::new(1.0, 1.0, 1.0)));
    container.add_particle(&Particle::owned(1, DVec3::new(2.0, 1.0, 1.0)));

    assert!(container.compute_interactions(&LJFunctor::<Host>::new(3.0)));
    assert_eq!(container.owned().get(0).force(), DVec3::new(-24.0, 0.0, 0.0));
    assert_eq!(container.owned().get(1).force(), DVec3::new(24.0, 0.0, 0.0));
}

/// An evaluator that only runs with Newton-3, which direct sum cannot offer.
struct Newton3Only(LJFunctor<Host>);

impl PairwiseFunctor<Host> for Newton3Only {
    fn name(&self) -> &'static str {
        "Newton3Only"
    }

    fn is_relevant_for_tuning(&self) -> bool {
        false
    }

    fn allows_newton3(&self) -> bool {
        true
    }

    fn allows_non_newton3(&self) -> bool {
        false
    }

    fn cutoff(&self) -> f64 {
        PairwiseFunctor::<Host>::cutoff(&self.0)
    }

    fn aos_functor(&self, i: &mut Particle, j: &mut Particle, newton3: bool) {
        self.0.aos_functor(i, j, newton3)
    }

    fn soa_functor_single(&self, soa: SoAViewMut<'_, Host>, newton3: bool) {
        self.0.soa_functor_single(soa, newton3)
    }

    fn soa_functor_pair(&self, soa1: SoAViewMut<'_, Host>, soa2: SoAViewMut<'_, Host>, newton3: bool) {
        self.0.soa_functor_pair(soa1, soa2, newton3)
    }
}

#[test]
fn unsupported_functor_is_rejected() {
    let mut container = container();
    container.add_particle(&Particle::owned(0, DVec3::ONE));
    container.add_particle(&Particle::owned(1, DVec3::new(2.0, 1.0, 1.0)));

    assert!(!container.compute_interactions(&Newton3Only(LJFunctor::new(3.0))));
    assert_eq!(container.owned().get(0).force(), DVec3::ZERO);
}

#[test]
fn simulation_reports_failed_interactions() {
    let mut container = container();
    container.add_particle(&Particle::owned(0, DVec3::ONE));
    let mut simulation = Simulation::from_parts(
        container,
        Newton3Only(LJFunctor::new(3.0)),
        VelocityVerlet::default(),
        0.01,
    );

    let err = simulation.run(4).unwrap_err();
    assert!(
        matches!(err, SimulationError::Interactions { functor: "Newton3Only", iteration: 0 }),
        "{err}"
    );
    assert_eq!(err.to_string(), "Failed to compute interactions with Newton3Only in iteration 0");
}
