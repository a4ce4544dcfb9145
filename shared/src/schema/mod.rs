//! The element types of a match session: the session state the server broadcasts, the
//! per-player state inside it, and the commands clients send back.

mod item;
mod player;
mod session;

pub use item::{
    ByteStatusComponent, InventoryComponent, ItemCatalog, ItemComponent, ItemStatuses,
    ItemsArray, StatusDurations, ITEMS_COUNT,
};
pub use player::{
    move_type, player_input, CameraComponent, FrozenProperty, HealthProperty, InputFlagProperty,
    MouseComponent, MoveComponent, RespawnTimerProperty, StatsComponent, TeamProperty,
    WantedItemIndexProperty, WantedTeamProperty,
};
pub use session::{
    AcknowledgedServerTickProperty, AllowCheatsProperty, ChatEntryProperty, ChatListElement,
    ClientCommandsContainer, ClientStampComponent, DamageNotifierComponent, HitMarkerComponent,
    KillFeedComponent, KillFeedElement, LocalPlayerId, LocalizedClientStampComponent,
    ModeIdProperty, PlayerContainerArrayElement, ServerSessionContainer, ServerStampComponent,
    SessionElements, SpectatingPlayerId, StampComponent, StringCommandProperty, TickRateProperty,
    UsernameProperty, MAX_PLAYERS,
};
