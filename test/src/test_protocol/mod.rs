//! Protocol shared by the end-to-end tests: the standard session schema plus a couple of small
//! standalone messages

use replica_shared::{
    component,
    schema::{ChatEntryProperty, ClientStampComponent, ServerStampComponent, SessionElements},
    Property, Protocol,
};

component! {
    pub struct Position {
        pub x: Property<f32>,
        pub y: Property<f32>,
    }
}

pub fn protocol() -> Protocol {
    protocol_with(&SessionElements::standard())
}

pub fn protocol_with(elements: &SessionElements) -> Protocol {
    Protocol::builder()
        .add_message_with(elements.new_session())
        .add_message_with(elements.new_commands())
        .add_message::<Position>()
        .add_message::<ChatEntryProperty>()
        .add_message::<ServerStampComponent>()
        .add_message::<ClientStampComponent>()
        .build()
}
