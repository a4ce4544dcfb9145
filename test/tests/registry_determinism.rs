/// Wire codes follow registration order; peers that disagree on it decode the wrong types

use replica_shared::{
    component, property, ByteWriter, CodecError, Element, Property, Protocol,
};

property! {
    struct Alpha(Property<u32>);
}

property! {
    struct Beta(Property<u32>);
}

component! {
    struct Gamma {
        a: Property<u16>,
        b: Property<u16>,
    }
}

fn abc() -> Protocol {
    Protocol::builder()
        .add_message::<Alpha>()
        .add_message::<Beta>()
        .add_message::<Gamma>()
        .build()
}

fn bac() -> Protocol {
    Protocol::builder()
        .add_message::<Beta>()
        .add_message::<Alpha>()
        .add_message::<Gamma>()
        .build()
}

fn frame(protocol: &Protocol, message: &dyn Element) -> Vec<u8> {
    let mut writer = ByteWriter::new();
    protocol.write_message(message, &mut writer).unwrap();
    writer.as_slice().to_vec()
}

/// Two registries built in the same order agree on every code in both directions
#[test]
fn same_order_same_codes() {
    let (left, right) = (abc(), abc());

    assert_eq!(left.code_of::<Alpha>(), Some(0));
    assert_eq!(left.code_of::<Beta>(), Some(1));
    assert_eq!(left.code_of::<Gamma>(), Some(2));
    for (l, r) in left.message_kinds.iter().zip(right.message_kinds.iter()) {
        assert_eq!(l.code(), r.code());
        assert_eq!(l.type_id(), r.type_id());
    }
}

/// A frame written under one order decodes as a different type under the other
#[test]
fn different_order_decodes_wrong_type() {
    let mut alpha = Alpha::default();
    alpha.set(77);
    let bytes = frame(&abc(), &alpha);

    let decoded = bac().read_message(&bytes).unwrap();

    assert!(!decoded.is::<Alpha>());
    let beta = decoded.downcast_ref::<Beta>().expect("expected a Beta");
    assert_eq!(beta.get(), Some(&77));
}

/// Round trip across matching registries is lossless
#[test]
fn same_order_round_trip() {
    let mut gamma = Gamma::default();
    gamma.a.set(3);

    let decoded = abc().read_message(&frame(&abc(), &gamma)).unwrap();

    assert_eq!(decoded.downcast_ref::<Gamma>(), Some(&gamma));
}

/// A code past the end of the shorter registry is rejected, not misread
#[test]
fn code_missing_on_receiver() {
    let receiver = Protocol::builder().add_message::<Alpha>().build();
    let bytes = frame(&abc(), &Gamma::default());

    assert_eq!(
        receiver.read_message(&bytes).err(),
        Some(CodecError::UnknownType { code: 2 })
    );
}
