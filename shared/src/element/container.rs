use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt,
};

use super::{Component, Element, ElementError, ElementMut, ElementRef, ElementType};

/// An ordered aggregate of children, one per element type, declared at construction.
///
/// Containers carry their schema at runtime, so the same container type can hold a different
/// set of children for server and client roles.
#[derive(Default)]
pub struct Container {
    children: Vec<Box<dyn Element>>,
    index_of: HashMap<TypeId, usize>,
}

impl Container {
    /// # Panics
    ///
    /// Panics if `types` names the same element type twice.
    pub fn new(types: &[ElementType]) -> Self {
        match Self::try_new(types) {
            Ok(container) => container,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_new(types: &[ElementType]) -> Result<Self, ElementError> {
        let mut container = Self::default();
        for element_type in types {
            container.try_append(element_type.instantiate())?;
        }
        Ok(container)
    }

    /// Adds a child after construction. Children are kept in append order.
    pub fn try_append(&mut self, element: Box<dyn Element>) -> Result<(), ElementError> {
        let type_id = element.element_type_id();
        if self.index_of.contains_key(&type_id) {
            return Err(ElementError::DuplicateChild {
                type_name: element.type_name(),
            });
        }
        self.index_of.insert(type_id, self.children.len());
        self.children.push(element);
        Ok(())
    }

    /// Appends every type of `types` not already present
    pub fn append_missing(&mut self, types: &[ElementType]) {
        for element_type in types {
            if !self.index_of.contains_key(&element_type.type_id()) {
                self.index_of
                    .insert(element_type.type_id(), self.children.len());
                self.children.push(element_type.instantiate());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn with<T: Element>(&self) -> bool {
        self.index_of.contains_key(&TypeId::of::<T>())
    }

    pub fn try_get<T: Element>(&self) -> Option<&T> {
        let index = *self.index_of.get(&TypeId::of::<T>())?;
        self.children[index].downcast_ref::<T>()
    }

    pub fn try_get_mut<T: Element>(&mut self) -> Option<&mut T> {
        let index = *self.index_of.get(&TypeId::of::<T>())?;
        self.children[index].downcast_mut::<T>()
    }

    pub fn try_require<T: Element>(&self) -> Result<&T, ElementError> {
        self.try_get::<T>().ok_or(ElementError::RequiredChildAbsent {
            type_name: std::any::type_name::<T>(),
        })
    }

    pub fn try_require_mut<T: Element>(&mut self) -> Result<&mut T, ElementError> {
        self.try_get_mut::<T>()
            .ok_or(ElementError::RequiredChildAbsent {
                type_name: std::any::type_name::<T>(),
            })
    }

    /// # Panics
    ///
    /// Panics if `T` is not part of this container's schema.
    pub fn require<T: Element>(&self) -> &T {
        match self.try_require::<T>() {
            Ok(child) => child,
            Err(err) => panic!("{}", err),
        }
    }

    /// # Panics
    ///
    /// Panics if `T` is not part of this container's schema.
    pub fn require_mut<T: Element>(&mut self) -> &mut T {
        match self.try_require_mut::<T>() {
            Ok(child) => child,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Element> {
        self.children.iter().map(|child| child.as_ref())
    }

    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.children.iter().map(|child| child.type_name())
    }
}

impl Clone for Container {
    fn clone(&self) -> Self {
        Self {
            children: self.children.iter().map(|child| child.box_clone()).collect(),
            index_of: self.index_of.clone(),
        }
    }
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        crate::engine::equal_to(self, other)
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.type_names()).finish()
    }
}

impl Element for Container {
    fn kind(&self) -> ElementRef<'_> {
        ElementRef::Component(self)
    }

    fn kind_mut(&mut self) -> ElementMut<'_> {
        ElementMut::Component(self)
    }

    fn box_clone(&self) -> Box<dyn Element> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Component for Container {
    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child(&self, index: usize) -> Option<&dyn Element> {
        self.children.get(index).map(|child| child.as_ref())
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut dyn Element> {
        self.children.get_mut(index).map(|child| child.as_mut())
    }
}
