use std::{
    any::{Any, TypeId},
    collections::HashMap,
};

use log::debug;

use crate::{Element, WireCode};

use super::RegistryError;

/// A registered message type and the prototype new instances are cloned from
pub struct MessageKind {
    code: WireCode,
    type_id: TypeId,
    name: &'static str,
    prototype: Box<dyn Element>,
}

impl MessageKind {
    pub fn code(&self) -> WireCode {
        self.code
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn prototype(&self) -> &dyn Element {
        self.prototype.as_ref()
    }

    /// A fresh instance with the prototype's schema and values
    pub fn instantiate(&self) -> Box<dyn Element> {
        self.prototype.box_clone()
    }
}

/// Wire code registry. Codes are assigned in registration order, so both peers must
/// register the same types in the same order.
#[derive(Default)]
pub struct MessageKinds {
    code_by_type: HashMap<TypeId, WireCode>,
    // indexed by wire code
    kinds: Vec<MessageKind>,
}

impl MessageKinds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_message<T: Element + Default>(&mut self) -> Result<WireCode, RegistryError> {
        self.add_prototype(Box::new(T::default()))
    }

    /// Registers the prototype's concrete type. Containers need this form, since their
    /// children are only known from an instance.
    pub fn add_prototype(&mut self, prototype: Box<dyn Element>) -> Result<WireCode, RegistryError> {
        let type_id = Any::type_id(prototype.as_any());
        let name = prototype.type_name();
        if self.code_by_type.contains_key(&type_id) {
            return Err(RegistryError::AlreadyRegistered { type_name: name });
        }
        let code =
            WireCode::try_from(self.kinds.len()).map_err(|_| RegistryError::CodeSpaceExhausted)?;

        debug!("registered message {} as wire code {}", name, code);
        self.code_by_type.insert(type_id, code);
        self.kinds.push(MessageKind {
            code,
            type_id,
            name,
            prototype,
        });
        Ok(code)
    }

    pub fn try_code_of(&self, message: &dyn Element) -> Result<WireCode, RegistryError> {
        self.code_by_type
            .get(&Any::type_id(message.as_any()))
            .copied()
            .ok_or(RegistryError::NotRegistered {
                type_name: message.type_name(),
            })
    }

    pub fn try_code_of_type<T: Element>(&self) -> Result<WireCode, RegistryError> {
        self.code_by_type
            .get(&TypeId::of::<T>())
            .copied()
            .ok_or(RegistryError::NotRegistered {
                type_name: std::any::type_name::<T>(),
            })
    }

    pub fn try_kind(&self, code: WireCode) -> Result<&MessageKind, RegistryError> {
        self.kinds
            .get(usize::from(code))
            .ok_or(RegistryError::UnknownType { code })
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// In wire code order
    pub fn iter(&self) -> impl Iterator<Item = &MessageKind> {
        self.kinds.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{component, property, Property};

    property! {
        struct Alpha(Property<u8>);
    }
    property! {
        struct Beta(Property<u32>);
    }
    component! {
        struct Gamma {
            value: Property<f32>,
        }
    }

    fn registered(order: &[fn(&mut MessageKinds) -> Result<WireCode, RegistryError>]) -> MessageKinds {
        let mut kinds = MessageKinds::new();
        for add in order {
            add(&mut kinds).unwrap();
        }
        kinds
    }

    #[test]
    fn codes_follow_registration_order() {
        let kinds = registered(&[
            MessageKinds::add_message::<Alpha>,
            MessageKinds::add_message::<Beta>,
            MessageKinds::add_message::<Gamma>,
        ]);

        assert_eq!(kinds.try_code_of_type::<Alpha>(), Ok(0));
        assert_eq!(kinds.try_code_of_type::<Beta>(), Ok(1));
        assert_eq!(kinds.try_code_of_type::<Gamma>(), Ok(2));
        assert_eq!(kinds.try_kind(1).unwrap().type_id(), TypeId::of::<Beta>());
    }

    #[test]
    fn same_order_same_codes() {
        let order = [
            MessageKinds::add_message::<Gamma>,
            MessageKinds::add_message::<Alpha>,
            MessageKinds::add_message::<Beta>,
        ];
        let a = registered(&order);
        let b = registered(&order);

        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.code(), y.code());
            assert_eq!(x.type_id(), y.type_id());
        }
    }

    #[test]
    fn instances_come_from_prototype() {
        let mut kinds = MessageKinds::new();
        let mut prototype = Gamma::default();
        prototype.value.set(2.5);
        let code = kinds.add_prototype(Box::new(prototype)).unwrap();

        let instance = kinds.try_kind(code).unwrap().instantiate();

        assert_eq!(
            instance.downcast_ref::<Gamma>().unwrap().value.get(),
            Some(&2.5)
        );
    }

    #[test]
    fn code_of_instance() {
        let kinds = registered(&[MessageKinds::add_message::<Alpha>, MessageKinds::add_message::<Beta>]);

        assert_eq!(kinds.try_code_of(&Beta::default()), Ok(1));
    }
}
