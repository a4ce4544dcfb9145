use replica_shared::{
    schema::{
        ChatEntryProperty, ChatListElement, ClientCommandsContainer, ClientStampComponent,
        HealthProperty, InputFlagProperty, ModeIdProperty, MoveComponent,
        PlayerContainerArrayElement, ServerSessionContainer, ServerStampComponent,
        SessionElements, StatsComponent, TickRateProperty, UsernameProperty, player_input,
    },
    Vec3,
};

use crate::Position;

/// Installs `env_logger` for test output. Safe to call from every test.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn position(x: f32, y: f32) -> Position {
    let mut position = Position::default();
    position.x.set(x);
    position.y.set(y);
    position
}

/// A session at `tick` with a couple of live players and one chat line
pub fn populated_session(elements: &SessionElements, tick: u32) -> ServerSessionContainer {
    let mut session = elements.new_session();
    session.require_mut::<TickRateProperty>().set(60);
    session.require_mut::<ModeIdProperty>().set(ModeIdProperty::DEATHMATCH);
    {
        let stamp = session.require_mut::<ServerStampComponent>();
        stamp.tick.set(tick);
        stamp.time_us.set(tick * 16_666);
        stamp.duration_us.set(16_666);
    }
    let mut line = ChatEntryProperty::default();
    line.set("glhf");
    session.require_mut::<ChatListElement>().push(line);

    let players = session.require_mut::<PlayerContainerArrayElement>();
    for (index, name) in [(0, "ana"), (4, "bo")] {
        let player = &mut players[index];
        player.require_mut::<HealthProperty>().set(100);
        player.require_mut::<UsernameProperty>().set(name);
        let movement = player.require_mut::<MoveComponent>();
        movement.position.set(Vec3::new(index as f32, 1.0, tick as f32 * 0.1));
        movement.velocity.set(Vec3::ZERO);
        movement.normalized_move.set(0.25);
        player.require_mut::<StatsComponent>().kills.set(index as u8);
    }
    session
}

pub fn populated_commands(elements: &SessionElements, tick: u32) -> ClientCommandsContainer {
    let mut commands = elements.new_commands();
    let input = commands.require_mut::<InputFlagProperty>();
    input.set_input(player_input::FORWARD, true);
    input.set_input(player_input::JUMP, tick % 2 == 0);
    commands.require_mut::<ClientStampComponent>().tick.set(tick);
    commands
}
