use glam::DVec3;
use particles::attribute::{Force, Mass, Position, Velocity};
use particles::{OwnershipState, Particle};

#[test]
fn default_record_is_an_inert_dummy() {
    let p = Particle::default();
    assert_eq!(p.id(), 0);
    assert_eq!(p.position(), DVec3::ZERO);
    assert_eq!(p.velocity(), DVec3::ZERO);
    assert_eq!(p.force(), DVec3::ZERO);
    assert_eq!(p.previous_force(), DVec3::ZERO);
    assert_eq!(p.mass(), 1.0);
    assert_eq!(p.type_id(), 0);
    assert!(p.is_dummy());
}

#[test]
fn constructors_set_ownership_and_snapshot() {
    let owned = Particle::owned(3, DVec3::new(1.0, 2.0, 3.0));
    assert!(owned.is_owned());
    assert_eq!(owned.rebuild_position(), owned.position());

    let halo = Particle::halo(4, DVec3::X);
    assert!(halo.is_halo());
    assert_eq!(halo.ownership(), OwnershipState::Halo);
    assert_eq!(halo.id(), 4);
}

#[test]
fn typed_access_matches_accessors() {
    let mut p = Particle::owned(1, DVec3::ZERO).with_mass(2.5);
    p.set::<Velocity>(DVec3::Y);
    p.set::<Force>(DVec3::Z);
    assert_eq!(p.velocity(), DVec3::Y);
    assert_eq!(p.get::<Force>(), DVec3::Z);
    assert_eq!(p.get::<Mass>(), 2.5);

    p.add_force(DVec3::Z);
    p.sub_force(DVec3::X);
    assert_eq!(p.force(), DVec3::new(-1.0, 0.0, 2.0));
}

#[test]
fn displacement_since_rebuild() {
    let mut p = Particle::owned(1, DVec3::new(1.0, 1.0, 1.0));
    p.set::<Position>(DVec3::new(1.5, 1.0, 0.0));
    // Snapshot minus current position.
    assert_eq!(p.displacement_since_rebuild(), DVec3::new(-0.5, 0.0, 1.0));

    p.reset_rebuild_position();
    assert_eq!(p.displacement_since_rebuild(), DVec3::ZERO);
}

#[test]
fn deletion_keeps_attributes() {
    let mut p = Particle::owned(9, DVec3::X).with_velocity(DVec3::Y);
    p.mark_as_deleted();
    assert!(p.is_dummy());
    assert_eq!(p.id(), 9);
    assert_eq!(p.velocity(), DVec3::Y);
}

#[test]
fn display_names_the_particle() {
    let text = Particle::halo(12, DVec3::new(0.5, 0.0, 0.0)).to_string();
    assert!(text.contains("id: 12"), "{text}");
    assert!(text.contains("halo"), "{text}");
    assert!(text.contains("r: [0.5, 0, 0]"), "{text}");
}
