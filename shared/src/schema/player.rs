use glam::Vec3;

use crate::{component, property, Property};

property! {
    pub struct HealthProperty(Property<u8>);
}

impl HealthProperty {
    pub fn is_dead(&self) -> bool {
        self.get() == Some(&0)
    }

    pub fn is_alive(&self) -> bool {
        self.get().is_some_and(|&health| health > 0)
    }

    pub fn is_inactive_or_dead(&self) -> bool {
        !self.is_alive()
    }

    pub fn is_active_and_alive(&self) -> bool {
        self.is_alive()
    }
}

property! {
    pub struct TeamProperty(Property<u8>);
}

property! {
    /// Team requested by the player, applied by the mode on the next tick
    pub struct WantedTeamProperty(Property<u8>);
}

property! {
    pub struct RespawnTimerProperty(Property<u32>);
}

property! {
    pub struct FrozenProperty(Property<bool>);
}

property! {
    pub struct WantedItemIndexProperty(Property<u8>);
}

component! {
    /// View direction in degrees
    pub struct CameraComponent {
        pub yaw: Property<f32> = Property::new().angle(),
        pub pitch: Property<f32>,
    }
}

impl CameraComponent {
    /// Unit view vector, +Z forward at zero yaw and pitch
    pub fn forward(&self) -> Vec3 {
        let yaw = self.yaw.or(0.0).to_radians();
        let pitch = self.pitch.or(0.0).to_radians();
        Vec3::new(pitch.cos() * yaw.sin(), -pitch.sin(), pitch.cos() * yaw.cos()).normalize()
    }
}

pub mod move_type {
    pub const GROUNDED: u8 = 0;
    pub const FLYING: u8 = 1;
}

component! {
    pub struct MoveComponent {
        pub move_type: Property<u8>,
        pub position: Property<Vec3> = Property::new()
            .prediction_tolerance(0.02)
            .interpolate_range(2.0),
        pub velocity: Property<Vec3> = Property::new()
            .prediction_tolerance(0.02)
            .interpolate_range(2.0),
        pub ground_tick: Property<u8>,
        pub normalized_crouch: Property<f32> = Property::new().prediction_tolerance(0.02),
        pub normalized_move: Property<f32> = Property::new().cyclic(0.0, 1.0),
    }
}

component! {
    pub struct StatsComponent {
        pub kills: Property<u8>,
        pub deaths: Property<u8>,
        pub damage: Property<u8>,
        pub ping: Property<u16>,
    }
}

component! {
    /// Raw mouse input of the current frame; never leaves the client
    pub struct MouseComponent {
        pub delta_x: Property<f32> = Property::new().no_serialization(),
        pub delta_y: Property<f32> = Property::new().no_serialization(),
    }
}

/// Bit positions of [`InputFlagProperty`]
pub mod player_input {
    pub const FORWARD: u8 = 0;
    pub const BACKWARD: u8 = 1;
    pub const RIGHT: u8 = 2;
    pub const LEFT: u8 = 3;
    pub const JUMP: u8 = 4;
    pub const CROUCH: u8 = 5;
    pub const SPRINT: u8 = 6;
    pub const WALK: u8 = 7;
    pub const INTERACT: u8 = 8;
    pub const SUICIDE: u8 = 9;
    pub const USE_ONE: u8 = 10;
    pub const USE_TWO: u8 = 11;
    pub const USE_THREE: u8 = 12;
    pub const USE_FOUR: u8 = 13;
    pub const ADS: u8 = 14;
    pub const RELOAD: u8 = 15;
    pub const FLY: u8 = 16;
    pub const THROW: u8 = 17;
    pub const DROP_ITEM: u8 = 18;
    pub const RESPAWN: u8 = 19;
    pub const ITEM_ONE: u8 = 20;
    pub const ITEM_LAST: u8 = 30;
}

property! {
    /// Held inputs as a bit set, one bit per [`player_input`] constant
    pub struct InputFlagProperty(Property<u32>) = Property::new().take_second();
}

impl InputFlagProperty {
    pub fn get_input(&self, input: u8) -> bool {
        self.or(0) & (1 << input) != 0
    }

    pub fn set_input(&mut self, input: u8, enabled: bool) {
        self.set_if_without(0);
        if let Some(flags) = self.get_mut() {
            if enabled {
                *flags |= 1 << input;
            } else {
                *flags &= !(1 << input);
            }
        }
    }

    /// `1` for positive, `-1` for negative, `0` for both or neither
    pub fn axis(&self, positive: u8, negative: u8) -> f32 {
        let positive = if self.get_input(positive) { 1.0 } else { 0.0 };
        let negative = if self.get_input(negative) { 1.0 } else { 0.0 };
        positive - negative
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{interpolate_into, predicted_equal_to, serialize, ByteWriter, ElementExt};

    #[test]
    fn health_states() {
        let mut health = HealthProperty::default();
        assert!(health.is_inactive_or_dead());
        assert!(!health.is_dead());

        health.set(0);
        assert!(health.is_dead());

        health.set(100);
        assert!(health.is_active_and_alive());
    }

    #[test]
    fn input_flags() {
        let mut input = InputFlagProperty::default();
        input.set_input(player_input::FORWARD, true);
        input.set_input(player_input::JUMP, true);
        input.set_input(player_input::JUMP, false);

        assert!(input.get_input(player_input::FORWARD));
        assert!(!input.get_input(player_input::JUMP));
        assert_eq!(input.axis(player_input::FORWARD, player_input::BACKWARD), 1.0);
        assert_eq!(input.get(), Some(&1));
    }

    #[test]
    fn camera_yaw_takes_short_way() {
        let mut from = CameraComponent::default();
        from.yaw.set(350.0);
        from.pitch.set(0.0);
        let mut to = from.clone();
        to.yaw.set(10.0);
        let mut out = CameraComponent::default();

        interpolate_into(&from, &to, &mut out, 0.5);

        assert!((out.yaw.value() - 360.0).abs() < 1e-4);
    }

    #[test]
    fn forward_at_rest_is_z() {
        let mut camera = CameraComponent::default();
        camera.yaw.set(0.0);
        camera.pitch.set(0.0);

        assert!(camera.forward().abs_diff_eq(Vec3::Z, 1e-6));
    }

    #[test]
    fn teleports_are_not_blended() {
        let mut from = MoveComponent::default();
        from.position.set(Vec3::ZERO);
        let mut to = from.clone();
        to.position.set(Vec3::new(10.0, 0.0, 0.0));
        let mut out = MoveComponent::default();

        out.interpolate_between(&from, &to, 0.5);

        assert_eq!(out.position.get(), Some(&Vec3::new(10.0, 0.0, 0.0)));
    }

    #[test]
    fn prediction_tolerates_small_drift() {
        let mut predicted = MoveComponent::default();
        predicted.position.set(Vec3::new(1.0, 2.0, 3.0));
        let mut verified = predicted.clone();
        verified.position.set(Vec3::new(1.01, 2.0, 3.0));

        assert!(predicted_equal_to(&predicted, &verified));
        assert!(predicted != verified);
    }

    #[test]
    fn mouse_never_serialized() {
        let mut mouse = MouseComponent::default();
        mouse.delta_x.set(4.0);
        let mut writer = ByteWriter::new();

        serialize(&mouse, &mut writer);

        assert_eq!(writer.bytes_written(), 0);
        assert_eq!(mouse.byte_length(), 0);
    }
}
