use std::any::{Any, TypeId};

use super::{ArrayBase, Component, PropertyBase};

/// Borrowed view of an element by shape
#[derive(Clone, Copy)]
pub enum ElementRef<'a> {
    Property(&'a dyn PropertyBase),
    Component(&'a dyn Component),
    Array(&'a dyn ArrayBase),
}

/// Mutably borrowed view of an element by shape
pub enum ElementMut<'a> {
    Property(&'a mut dyn PropertyBase),
    Component(&'a mut dyn Component),
    Array(&'a mut dyn ArrayBase),
}

/// A node of the replicated state tree: a property, a component/container, or an array.
///
/// Every operation of the engine (serialization, copy, merge, equality, interpolation) is
/// written once against this trait and walks children through [`Element::kind`].
pub trait Element: Any + Send {
    fn kind(&self) -> ElementRef<'_>;
    fn kind_mut(&mut self) -> ElementMut<'_>;
    fn box_clone(&self) -> Box<dyn Element>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl dyn Element + '_ {
    pub fn element_type_id(&self) -> TypeId {
        Any::type_id(self.as_any())
    }

    pub fn is<T: Element>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Element>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Element>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

impl Clone for Box<dyn Element> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

fn construct<T: Element + Default>() -> Box<dyn Element> {
    Box::new(T::default())
}

/// Schema entry: the identity of an element type plus a way to build a fresh instance of it
#[derive(Clone, Copy)]
pub struct ElementType {
    type_id: TypeId,
    name: &'static str,
    constructor: fn() -> Box<dyn Element>,
}

impl ElementType {
    pub fn of<T: Element + Default>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            constructor: construct::<T>,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn instantiate(&self) -> Box<dyn Element> {
        (self.constructor)()
    }
}

impl PartialEq for ElementType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ElementType {}

impl std::fmt::Debug for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Builds a `Vec<ElementType>` from a list of element types, in declaration order
#[macro_export]
macro_rules! element_types {
    ($($element:ty),* $(,)?) => {
        vec![$($crate::ElementType::of::<$element>()),*]
    };
}
