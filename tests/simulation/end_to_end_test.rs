// One full iteration on two particles one unit apart, checked against hand-computed values.
//
// At dr² = 1 the Lennard-Jones factor is 24 * (1 + (1 - 1)) = 24, so the force on the particle
// at the origin is (-24, 0, 0).

use app_config::Configuration;
use dynamics::{for_each_slot, LJFunctor, PairwiseFunctor, ParticleContainer, VelocityVerlet};
use glam::DVec3;
use ljmd::Simulation;
use particles::attribute::{Force, Position, PreviousForce, Velocity};
use particles::{HostSpace, IteratorBehavior, Particle, Serial, SoA, Threads};

const DT: f64 = 0.01;

fn scenario() -> Configuration {
    Configuration {
        cutoff: 3.0,
        delta_t: DT,
        box_min: -5.0,
        box_max: 5.0,
        iterations: 1,
        num_particles: 0,
        ..Configuration::default()
    }
}

#[test]
fn one_sided_pair_pass() {
    type Host = HostSpace<Serial>;
    let mut first = SoA::<Host>::new();
    first.push(&Particle::owned(0, DVec3::ZERO));
    let mut second = SoA::<Host>::new();
    second.push(&Particle::owned(1, DVec3::X));

    let verlet = VelocityVerlet::default();
    let lj = LJFunctor::<Host>::new(3.0);

    for soa in [&mut first, &mut second] {
        for_each_slot(soa.view_mut(), IteratorBehavior::OWNED, |mut s| verlet.position_step(&mut s, DT));
    }
    lj.soa_functor_pair(first.view_mut(), second.view_mut(), false);
    for soa in [&mut first, &mut second] {
        for_each_slot(soa.view_mut(), IteratorBehavior::OWNED, |mut s| verlet.velocity_step(&mut s, DT));
    }

    assert_eq!(first.read::<Force>(0), DVec3::new(-24.0, 0.0, 0.0));
    assert_eq!(second.read::<Force>(0), DVec3::ZERO);
    assert_eq!(first.read::<PreviousForce>(0), DVec3::ZERO);
    assert!((first.read::<Velocity>(0).x + 0.12).abs() < 1e-15);
    assert_eq!(second.read::<Velocity>(0), DVec3::ZERO);
    // Both started at rest with no force, so Phase A left them in place.
    assert_eq!(first.read::<Position>(0), DVec3::ZERO);
    assert_eq!(second.read::<Position>(0), DVec3::X);
}

#[test]
fn one_iteration_through_the_driver() {
    let config = scenario();
    let mut simulation = Simulation::<HostSpace<Threads>>::new(&config);
    simulation.container_mut().add_particle(&Particle::owned(0, DVec3::ZERO));
    simulation.container_mut().add_particle(&Particle::owned(1, DVec3::X));

    let timings = simulation.run(config.iterations).expect("run");
    assert!(timings.to_string().starts_with("1. Update: "));

    let owned = simulation.container().owned();
    assert_eq!(owned.read::<Force>(0), DVec3::new(-24.0, 0.0, 0.0));
    assert_eq!(owned.read::<Force>(1), DVec3::new(24.0, 0.0, 0.0));
    assert!((owned.read::<Velocity>(0).x + 0.12).abs() < 1e-15);
    assert!((owned.read::<Velocity>(1).x - 0.12).abs() < 1e-15);

    // m v² / 2 for each particle.
    let kinetic = simulation.kinetic_energy();
    assert!((kinetic - 0.0144).abs() < 1e-15, "kinetic energy: {kinetic}");
    assert_eq!(simulation.functor().name(), "LJFunctor");
}

#[test]
fn global_force_enters_every_step() {
    let config = Configuration {
        global_force: [0.0, 0.0, -2.0],
        ..scenario()
    };
    let mut simulation = Simulation::<HostSpace<Serial>>::new(&config);
    simulation.container_mut().add_particle(&Particle::owned(0, DVec3::ZERO));

    simulation.run(3).expect("run");
    let p = simulation.container().owned().get(0);
    // The first displacement uses the zero initial force: z = g dt² (0 + 1 + 2).
    let expected_z = -2.0 * DT * DT * 3.0;
    assert!((p.position().z - expected_z).abs() < 1e-15, "z: {}", p.position().z);
    assert!((p.velocity().z + 2.0 * DT * 2.5).abs() < 1e-15, "vz: {}", p.velocity().z);
}

#[test]
fn zero_iterations_change_nothing() {
    let config = Configuration {
        num_particles: 20,
        num_halos: 5,
        ..scenario()
    };
    let mut simulation = Simulation::<HostSpace>::new(&config);
    simulation.populate(&config).expect("populate");
    let before: Vec<Particle> = simulation.container().owned().iter_particles().collect();

    simulation.run(0).expect("run");
    let after: Vec<Particle> = simulation.container().owned().iter_particles().collect();
    assert_eq!(before, after);
}

#[test]
fn spaces_agree_over_several_steps() {
    let config = Configuration {
        box_min: 0.0,
        box_max: 6.0,
        num_particles: 60,
        num_halos: 10,
        delta_t: 1e-5,
        ..scenario()
    };

    let mut serial = Simulation::<HostSpace<Serial>>::new(&config);
    let mut threads = Simulation::<HostSpace<Threads>>::new(&config);
    serial.populate(&config).expect("populate");
    threads.populate(&config).expect("populate");
    serial.run(3).expect("serial run");
    threads.run(3).expect("threads run");

    let a: Vec<Particle> = serial.container().owned().iter_particles().collect();
    let b: Vec<Particle> = threads.container().owned().iter_particles().collect();
    assert_eq!(a, b);
}
