/// Generated inputs: session round trips hold for arbitrary values

use proptest::prelude::*;

use replica_shared::{
    equal_to,
    schema::{
        HealthProperty, MoveComponent, PlayerContainerArrayElement, ServerSessionContainer,
        SessionElements, UsernameProperty,
    },
    ByteWriter, Vec3,
};
use replica_test::protocol;

fn optional_vec3() -> impl Strategy<Value = Option<(f32, f32, f32)>> {
    proptest::option::of((-1.0e4f32..1.0e4, -1.0e4f32..1.0e4, -1.0e4f32..1.0e4))
}

proptest! {
    /// Any mix of present and absent values survives encode then decode
    #[test]
    fn session_round_trip(
        slot in 0..10usize,
        health in proptest::option::of(any::<u8>()),
        name in proptest::option::of("[a-z]{0,32}"),
        position in optional_vec3(),
        normalized_move in proptest::option::of(0.0f32..1.0),
    ) {
        let elements = SessionElements::standard();
        let protocol = protocol();
        let mut session = elements.new_session();
        {
            let player = &mut session.require_mut::<PlayerContainerArrayElement>()[slot];
            if let Some(health) = health {
                player.require_mut::<HealthProperty>().set(health);
            }
            if let Some(name) = &name {
                player.require_mut::<UsernameProperty>().set(name);
            }
            let movement = player.require_mut::<MoveComponent>();
            if let Some((x, y, z)) = position {
                movement.position.set(Vec3::new(x, y, z));
            }
            if let Some(value) = normalized_move {
                movement.normalized_move.set(value);
            }
        }

        let mut writer = ByteWriter::new();
        protocol.write_message(&session, &mut writer).unwrap();
        let decoded = protocol.read_message(writer.as_slice()).unwrap();

        prop_assert!(decoded.is::<ServerSessionContainer>());
        prop_assert!(equal_to(decoded.as_ref(), &session));
    }
}
