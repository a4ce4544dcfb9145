/// Behavior of the copy, merge, equality and interpolation engine on real schema types

use replica_shared::{
    clone_element, copy_to, equal_to, interpolate_into, merge_to,
    schema::{
        ByteStatusComponent, CameraComponent, HealthProperty, MoveComponent,
        PlayerContainerArrayElement, SessionElements, StatusDurations,
    },
    CyclicArray, ElementExt, Property, Vec3,
};
use replica_test::{assert_elements_eq, assert_near, populated_session, position, Position};

/// Merge only overwrites what the source actually carries
#[test]
fn merge_is_selective() {
    let mut source = Position::default();
    source.x.set(5.0);
    let mut destination = position(1.0, 2.0);

    merge_to(&source, &mut destination);

    assert_eq!(destination.x.get(), Some(&5.0));
    assert_eq!(destination.y.get(), Some(&2.0));
}

/// Copy carries absence too
#[test]
fn copy_clears_absent_fields() {
    let mut source = Position::default();
    source.x.set(5.0);
    let mut destination = position(1.0, 2.0);

    copy_to(&source, &mut destination);

    assert_elements_eq!(&source, &destination);
    assert!(!destination.y.has_value());
}

/// Clones are equal but share nothing with the original
#[test]
fn clone_independence() {
    let elements = SessionElements::standard();
    let session = populated_session(&elements, 3);
    let mut copy = clone_element(&session);

    assert_elements_eq!(copy.as_ref(), &session);

    let copy = copy
        .downcast_mut::<replica_shared::schema::ServerSessionContainer>()
        .unwrap();
    copy.require_mut::<PlayerContainerArrayElement>()[0]
        .require_mut::<HealthProperty>()
        .set(1);

    assert!(!equal_to(&*copy, &session));
    let original = &session.require::<PlayerContainerArrayElement>()[0];
    assert_eq!(original.require::<HealthProperty>().get(), Some(&100));
}

#[test]
fn scalar_and_vector_midpoint() {
    let mut from = MoveComponent::default();
    from.normalized_crouch.set(1.0);
    from.position.set(Vec3::ONE);
    let mut to = MoveComponent::default();
    to.normalized_crouch.set(2.0);
    to.position.set(Vec3::ZERO);
    let mut out = MoveComponent::default();

    interpolate_into(&from, &to, &mut out, 0.5);

    assert_near!(*out.normalized_crouch.value(), 1.5, 1e-6);
    assert!(out.position.value().abs_diff_eq(Vec3::splat(0.5), 1e-6));
}

#[test]
fn cyclic_takes_shorter_arc() {
    let mut from = MoveComponent::default();
    from.normalized_move.set(0.9);
    let mut to = MoveComponent::default();
    to.normalized_move.set(0.3);

    let mut out = MoveComponent::default();
    out.interpolate_between(&from, &to, 0.5);

    assert_near!(*out.normalized_move.value(), 0.1, 1e-5);
}

/// Status 0 lasts 2s; between the snapshots the item moved into status 1
#[test]
fn status_crosses_transition() {
    let durations = StatusDurations::new(vec![Some(2.0), None]);
    let status = |id: u8, elapsed: f32| {
        let mut status = ByteStatusComponent::default();
        status.id.set(id);
        status.elapsed.set(elapsed);
        status
    };
    let mut out = ByteStatusComponent::default();

    out.interpolate_status(&status(0, 1.870), &status(1, 0.038), 0.9, &durations);

    assert_eq!(out.id.get(), Some(&1));
    assert_near!(*out.elapsed.value(), 0.021, 1e-3);
}

/// A property absent on one side takes the side that has a value
#[test]
fn absent_side_copies_other() {
    let mut from = CameraComponent::default();
    from.yaw.set(90.0);
    let to = CameraComponent::default();
    let mut out = CameraComponent::default();

    interpolate_into(&from, &to, &mut out, 0.5);

    assert_eq!(out.yaw.get(), Some(&90.0));
    assert!(!out.pitch.has_value());
}

/// Five slots, eight writes: the newest is at offset 0 and the oldest kept at -4
#[test]
fn ring_buffer_wrap() {
    let mut ring = CyclicArray::new(5, Property::<u32>::default);
    for item in 1..=8 {
        ring.add(Property::with(item));
    }

    assert_eq!(ring.get(0).get(), Some(&8));
    assert_eq!(ring.get(-4).get(), Some(&4));
    assert_eq!(ring.get_in_history_chunk(5, 0).get(), Some(&4));
}
