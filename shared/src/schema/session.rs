use crate::{
    array_element, component, container, element_types, property, Container, ElementType,
    ListProperty, Property, StringProperty,
};

use super::{
    CameraComponent, FrozenProperty, HealthProperty, InputFlagProperty, InventoryComponent,
    MouseComponent, MoveComponent, RespawnTimerProperty, StatsComponent, TeamProperty,
    WantedItemIndexProperty, WantedTeamProperty,
};

pub const MAX_PLAYERS: usize = 10;

// Stamps: when a state was produced, and on whose clock

component! {
    pub struct StampComponent {
        pub tick: Property<u32>,
        pub time_us: Property<u32> = Property::new().elapsed(),
        pub duration_us: Property<u32> = Property::new().elapsed(),
    }
}

component! {
    pub struct ServerStampComponent {
        pub tick: Property<u32>,
        pub time_us: Property<u32> = Property::new().elapsed(),
        pub duration_us: Property<u32> = Property::new().elapsed(),
    }
}

component! {
    pub struct ClientStampComponent {
        pub tick: Property<u32>,
        pub time_us: Property<u32> = Property::new().elapsed(),
        pub duration_us: Property<u32> = Property::new().elapsed(),
    }
}

component! {
    /// A client stamp translated to the server's clock
    pub struct LocalizedClientStampComponent {
        pub tick: Property<u32>,
        pub time_us: Property<u32> = Property::new().elapsed(),
        pub duration_us: Property<u32> = Property::new().elapsed(),
    }
}

property! {
    /// Latest server tick the client has applied
    pub struct AcknowledgedServerTickProperty(Property<u32>);
}

property! {
    /// Simulation ticks per second
    pub struct TickRateProperty(Property<u8>);
}

impl TickRateProperty {
    /// Seconds per tick, or `None` while the rate is unknown or zero
    pub fn tick_interval(&self) -> Option<f32> {
        match self.get() {
            Some(&rate) if rate > 0 => Some(1.0 / f32::from(rate)),
            _ => None,
        }
    }

    pub fn tick_interval_us(&self) -> Option<u32> {
        match self.get() {
            Some(&rate) if rate > 0 => Some(1_000_000 / u32::from(rate)),
            _ => None,
        }
    }

    /// How far behind the latest snapshot remote players are rendered
    pub fn player_render_interval_us(&self) -> Option<u32> {
        self.tick_interval_us().map(|interval| interval * 3)
    }
}

property! {
    pub struct ModeIdProperty(Property<u8>);
}

impl ModeIdProperty {
    pub const DEATHMATCH: u8 = 0;
    pub const SHOWDOWN: u8 = 1;
    pub const CAPTURE_THE_FLAG: u8 = 2;
    pub const SECURE_AREA: u8 = 3;
    pub const DESIGNER: u8 = 4;
}

property! {
    pub struct AllowCheatsProperty(Property<bool>);
}

property! {
    pub struct LocalPlayerId(Property<u8>);
}

property! {
    pub struct SpectatingPlayerId(Property<u8>);
}

component! {
    pub struct HitMarkerComponent {
        pub elapsed_us: Property<u32> = Property::new().elapsed(),
        pub is_kill: Property<bool>,
    }
}

component! {
    pub struct DamageNotifierComponent {
        pub elapsed_us: Property<u32> = Property::new().elapsed(),
        pub damage: Property<u8>,
        pub inflicting_player_id: Property<u8>,
    }
}

component! {
    pub struct KillFeedComponent {
        pub elapsed_us: Property<u32> = Property::new().elapsed(),
        pub killing_player_id: Property<u8>,
        pub killed_player_id: Property<u8>,
        pub is_head_shot: Property<bool>,
        pub weapon_name: StringProperty = StringProperty::new(32),
    }
}

array_element! {
    pub struct KillFeedElement([KillFeedComponent; 5]);
}

property! {
    pub struct ChatEntryProperty(StringProperty) = StringProperty::new(64);
}

property! {
    /// Most recent chat lines, oldest first
    pub struct ChatListElement(ListProperty<ChatEntryProperty>) = ListProperty::new(5);
}

property! {
    pub struct UsernameProperty(StringProperty) = StringProperty::new(32);
}

property! {
    /// A console command typed by the player
    pub struct StringCommandProperty(StringProperty) = StringProperty::new(128);
}

array_element! {
    /// One slot per player id; an empty container is an unused slot
    pub struct PlayerContainerArrayElement([Container; MAX_PLAYERS]);
}

container! {
    /// Everything the server sends each tick
    pub struct ServerSessionContainer;
}

container! {
    /// Everything a client sends each tick
    pub struct ClientCommandsContainer;
}

/// Element types making up the session, each player slot, and the client commands.
///
/// Server and client must build their messages from the same lists, the wire layout follows
/// the list order.
#[derive(Clone, Debug)]
pub struct SessionElements {
    pub session: Vec<ElementType>,
    pub player: Vec<ElementType>,
    pub commands: Vec<ElementType>,
}

impl SessionElements {
    pub fn standard() -> Self {
        Self {
            session: element_types![
                TickRateProperty,
                ModeIdProperty,
                AllowCheatsProperty,
                PlayerContainerArrayElement,
                LocalPlayerId,
                ServerStampComponent,
                KillFeedElement,
                ChatListElement,
            ],
            player: element_types![
                HealthProperty,
                MoveComponent,
                FrozenProperty,
                InventoryComponent,
                CameraComponent,
                RespawnTimerProperty,
                TeamProperty,
                StatsComponent,
                HitMarkerComponent,
                DamageNotifierComponent,
                UsernameProperty,
                ClientStampComponent,
                ServerStampComponent,
            ],
            commands: element_types![
                InputFlagProperty,
                MouseComponent,
                WantedTeamProperty,
                WantedItemIndexProperty,
                ChatEntryProperty,
                StringCommandProperty,
                ClientStampComponent,
                CameraComponent,
                AcknowledgedServerTickProperty,
            ],
        }
    }

    /// A session with every player slot holding an empty player
    pub fn new_session(&self) -> ServerSessionContainer {
        let mut session = ServerSessionContainer::new(&self.session);
        if let Some(players) = session.try_get_mut::<PlayerContainerArrayElement>() {
            players.set_all(|_| Container::new(&self.player));
        }
        session
    }

    pub fn new_commands(&self) -> ClientCommandsContainer {
        ClientCommandsContainer::new(&self.commands)
    }
}
