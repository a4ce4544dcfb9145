/// End-to-end tests: whole containers sent through real sockets and decoded on the far side

use std::time::Duration;

use replica_shared::{
    equal_to,
    schema::{ClientCommandsContainer, HealthProperty, PlayerContainerArrayElement, ServerSessionContainer, SessionElements},
    ConnectionId, DeliveryMode,
};
use replica_test::{
    assert_elements_eq, init_logger, poll_client_until, poll_server_until, populated_commands,
    populated_session, protocol, udp_pair, LocalSocketPair,
};

const MESSAGE_COUNT: usize = 120;
const SETTLE: Duration = Duration::from_secs(5);

/// The client sends the same populated container 120 times over loopback UDP; the server must
/// see every one, each equal to the original
#[test]
fn udp_client_to_server_120_messages() {
    init_logger();
    let elements = SessionElements::standard();
    let (mut server, mut client) = udp_pair(protocol);
    let commands = populated_commands(&elements, 7);

    for _ in 0..MESSAGE_COUNT {
        assert!(client.send(&commands, DeliveryMode::ReliableOrdered));
    }

    let mut matching = 0;
    let received = poll_server_until(&mut server, MESSAGE_COUNT, SETTLE, |connection, message| {
        assert_eq!(connection, ConnectionId(0));
        let decoded = message
            .downcast_ref::<ClientCommandsContainer>()
            .expect("server decoded the wrong type");
        if equal_to(decoded, &commands) {
            matching += 1;
        }
    });

    assert_eq!(received, MESSAGE_COUNT, "server did not receive every message");
    assert_eq!(matching, MESSAGE_COUNT, "a decoded message differs from the original");
}

/// Server to client direction with the full session container, the largest message
#[test]
fn udp_server_session_reaches_client() {
    init_logger();
    let elements = SessionElements::standard();
    let (mut server, mut client) = udp_pair(protocol);

    // the server learns the client's address from its first packet
    client.send(&populated_commands(&elements, 0), DeliveryMode::Unreliable);
    assert_eq!(poll_server_until(&mut server, 1, SETTLE, |_, _| {}), 1);

    let session = populated_session(&elements, 42);
    assert!(server.send_to(ConnectionId(0), &session, DeliveryMode::Unreliable));

    let mut decoded = None;
    let received = poll_client_until(&mut client, 1, SETTLE, |message| {
        decoded = message.downcast_ref::<ServerSessionContainer>().cloned();
    });

    assert_eq!(received, 1);
    let decoded = decoded.expect("client decoded the wrong type");
    assert_elements_eq!(&decoded, &session);
    let player = &decoded.require::<PlayerContainerArrayElement>()[4];
    assert_eq!(player.require::<HealthProperty>().get(), Some(&100));
}

/// Same exchange over the in-memory transport: no timing involved
#[test]
fn channel_client_to_server_120_messages() {
    let elements = SessionElements::standard();
    let mut pair = LocalSocketPair::new(protocol);

    for tick in 0..MESSAGE_COUNT as u32 {
        assert!(pair
            .client
            .send(&populated_commands(&elements, tick), DeliveryMode::Unreliable));
    }

    let mut ticks = Vec::new();
    let received = pair.server.poll_received(|_, message| {
        let commands = message.downcast_ref::<ClientCommandsContainer>().unwrap();
        let expected = populated_commands(&elements, ticks.len() as u32);
        assert_elements_eq!(commands, &expected);
        ticks.push(ticks.len());
    });

    assert_eq!(received, MESSAGE_COUNT);
    assert_eq!(pair.server.connections(), vec![ConnectionId(0)]);
}

/// Received instances come from a pool; holding a clone across polls must not be affected by
/// later messages decoded into the same pooled instance
#[test]
fn received_clones_are_independent_of_the_pool() {
    let elements = SessionElements::standard();
    let mut pair = LocalSocketPair::new(protocol);

    pair.client
        .send(&populated_commands(&elements, 1), DeliveryMode::Unreliable);
    let mut first = None;
    pair.server.poll_received(|_, message| {
        first = message.downcast_ref::<ClientCommandsContainer>().cloned();
    });

    pair.client
        .send(&populated_commands(&elements, 2), DeliveryMode::Unreliable);
    pair.server.poll_received(|_, _| {});

    let first = first.unwrap();
    assert_elements_eq!(&first, &populated_commands(&elements, 1));
}
