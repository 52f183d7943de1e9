use glam::DVec3;
use particles::attribute::{Force, Id, Ownership, Position, Velocity};
use particles::{
    DeviceSpace, HostSpace, IteratorBehavior, MemorySpace, OwnershipState, Particle, Serial, SoA,
};
use rayon::prelude::*;

type Host = HostSpace<Serial>;

fn line(n: u64) -> SoA<Host> {
    let mut soa = SoA::new();
    for id in 0..n {
        soa.push(&Particle::owned(id, DVec3::new(id as f64, 0.0, 0.0)));
    }
    soa
}

// ============================================================================
// Typed column access
// ============================================================================

#[test]
fn read_write_by_attribute() {
    let mut soa = line(3);
    assert_eq!(soa.len(), 3);
    assert_eq!(soa.read::<Id>(2), 2);
    assert_eq!(soa.read::<Position>(1), DVec3::X);

    soa.write::<Velocity>(1, DVec3::new(0.0, 4.0, 0.0));
    assert_eq!(soa.column::<Velocity>()[1].y, 4.0);

    soa.column_mut::<Force>().fill(DVec3::ONE);
    assert!(soa.column::<Force>().iter().all(|f| *f == DVec3::ONE));
}

#[test]
fn records_are_independent_copies() {
    let mut soa = line(2);
    let mut record = soa.get(1);
    record.set_velocity(DVec3::Z);
    assert_eq!(soa.read::<Velocity>(1), DVec3::ZERO);

    let mut source = Particle::owned(7, DVec3::Y);
    let slot = soa.push(&source);
    source.set_position(DVec3::ZERO);
    assert_eq!(soa.read::<Position>(slot), DVec3::Y);
    assert_eq!(soa.get(slot), Particle::owned(7, DVec3::Y));
}

// ============================================================================
// Slot management
// ============================================================================

#[test]
fn pad_appends_dummies_only() {
    let mut soa = line(5);
    soa.pad_to(8);
    assert_eq!(soa.len(), 8);
    assert_eq!(soa.num_real(), 5);
    assert_eq!(soa.count(IteratorBehavior::DUMMY), 3);

    soa.pad_to(8);
    assert_eq!(soa.len(), 8);
}

#[test]
fn insert_reuses_tombstones() {
    let mut soa = line(4);
    soa.mark_as_deleted(1);
    assert_eq!(soa.num_real(), 3);

    let slot = soa.insert(&Particle::owned(10, DVec3::Z));
    assert_eq!(slot, 1);
    assert_eq!(soa.read::<Id>(1), 10);
    assert_eq!(soa.len(), 4);

    // No tombstone left: append and pad to the batch width.
    let slot = soa.insert(&Particle::owned(11, DVec3::Z));
    assert_eq!(slot, 4);
    assert_eq!(soa.len(), Host::BATCH_WIDTH);
}

#[test]
fn compact_preserves_order() {
    let mut soa = line(6);
    soa.mark_as_deleted(0);
    soa.mark_as_deleted(3);
    soa.pad_to(8);

    assert_eq!(soa.compact(), 4);
    assert_eq!(soa.column::<Id>(), &[1, 2, 4, 5]);
    assert!(soa.column::<Ownership>().iter().all(|s| s.is_owned()));
    assert_eq!(soa.compact(), 0);

    soa.clear();
    assert!(soa.is_empty());
}

#[test]
fn iteration_filters_by_ownership() {
    let mut soa = line(3);
    soa.push(&Particle::halo(3, DVec3::ZERO));
    soa.pad_to(8);

    assert_eq!(soa.iter_particles().count(), 8);
    let halos = soa.particles(IteratorBehavior::HALO);
    assert_eq!(halos.len(), 1);
    assert_eq!(halos[0].id(), 3);
    assert_eq!(soa.count(IteratorBehavior::OWNED_OR_HALO), 4);
    assert_eq!(soa.count(IteratorBehavior::OWNED_OR_HALO_OR_DUMMY), 8);

    let visited = soa.view().par_slots(IteratorBehavior::OWNED).count();
    assert_eq!(visited, 3);
}

#[test]
fn slot_visitors_write_their_own_slot() {
    let mut soa = line(5);
    soa.push(&Particle::halo(5, DVec3::ZERO));
    soa.pad_to(8);

    soa.view_mut()
        .into_par_slots(IteratorBehavior::OWNED)
        .for_each(|slot| *slot.velocity = DVec3::splat(*slot.id as f64));

    for p in soa.iter_particles() {
        let expected = if p.is_owned() {
            DVec3::splat(p.id() as f64)
        } else {
            DVec3::ZERO
        };
        assert_eq!(p.velocity(), expected, "{p}");
    }
}

#[test]
fn views_split_into_batches() {
    let mut soa = line(6);
    let (left, right) = soa.view_mut().split_at(2);
    assert_eq!(left.len(), 2);
    assert_eq!(right.len(), 4);
    assert_eq!(right.read::<Id>(0), 2);

    let (mut left, _) = soa.view_mut().split_at(2);
    left.write::<Force>(1, DVec3::X);
    assert_eq!(soa.read::<Force>(1), DVec3::X);

    let view = soa.view();
    let (_, tail) = view.split_at(5);
    assert_eq!(tail.slot(0).to_particle(), soa.get(5));
}

#[test]
fn rebuild_snapshot_tracks_displacement() {
    let mut soa = line(2);
    soa.write::<Position>(1, DVec3::new(1.0, 0.3, 0.0));
    let displacement = soa.view().slot(1).displacement_since_rebuild();
    assert!((displacement.y + 0.3).abs() < 1e-12, "displacement: {displacement}");
    assert!((soa.max_displacement_since_rebuild() - 0.3).abs() < 1e-12);

    soa.reset_rebuild_positions();
    assert_eq!(soa.max_displacement_since_rebuild(), 0.0);
}

// ============================================================================
// Memory spaces
// ============================================================================

#[test]
fn deep_copy_between_spaces() {
    let mut host = line(3);
    host.write::<Velocity>(2, DVec3::Y);
    host.mark_as_deleted(0);

    let mut device: SoA<DeviceSpace> = host.to_space();
    assert_eq!(device.len(), 3);
    assert_eq!(device.get(2), host.get(2));
    assert_eq!(device.read::<Ownership>(0), OwnershipState::Dummy);

    device.write::<Velocity>(2, DVec3::Z);
    assert_eq!(host.read::<Velocity>(2), DVec3::Y);

    host.deep_copy_from(&device);
    assert_eq!(host.read::<Velocity>(2), DVec3::Z);
}

#[test]
fn device_batches_are_warp_wide() {
    let mut device = SoA::<DeviceSpace>::new();
    device.insert(&Particle::owned(0, DVec3::ZERO));
    assert_eq!(device.len(), 32);
    assert_eq!(device.num_real(), 1);
}
