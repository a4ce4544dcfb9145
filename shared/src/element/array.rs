use std::{
    any::Any,
    ops::{Index, IndexMut},
};

use super::{ArrayBase, Element, ElementError, ElementMut, ElementRef};

/// A fixed-length sequence of elements. The length never changes after construction.
#[derive(Clone, Debug)]
pub struct ArrayElement<T: Element + Clone> {
    values: Vec<T>,
}

impl<T: Element + Clone> ArrayElement<T> {
    pub fn new(length: usize) -> Self
    where
        T: Default,
    {
        Self::from_fn(length, |_| T::default())
    }

    pub fn from_fn(length: usize, build: impl FnMut(usize) -> T) -> Self {
        Self {
            values: (0..length).map(build).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.values.get_mut(index)
    }

    pub fn try_get(&self, index: usize) -> Result<&T, ElementError> {
        let length = self.values.len();
        self.values
            .get(index)
            .ok_or(ElementError::IndexOutOfRange { index, length })
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, ElementError> {
        let length = self.values.len();
        self.values
            .get_mut(index)
            .ok_or(ElementError::IndexOutOfRange { index, length })
    }

    /// Replaces every slot with a freshly built value
    pub fn set_all(&mut self, mut build: impl FnMut(usize) -> T) {
        for (index, value) in self.values.iter_mut().enumerate() {
            *value = build(index);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.values.iter_mut()
    }
}

impl<T: Element + Clone> Index<usize> for ArrayElement<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics with `IndexOutOfRange` outside `[0, len)`.
    fn index(&self, index: usize) -> &T {
        match self.try_get(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: Element + Clone> IndexMut<usize> for ArrayElement<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.try_get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<'a, T: Element + Clone> IntoIterator for &'a ArrayElement<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T: Element + Clone> Element for ArrayElement<T> {
    fn kind(&self) -> ElementRef<'_> {
        ElementRef::Array(self)
    }

    fn kind_mut(&mut self) -> ElementMut<'_> {
        ElementMut::Array(self)
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

impl<T: Element + Clone> ArrayBase for ArrayElement<T> {
    fn length(&self) -> usize {
        self.values.len()
    }

    fn slot(&self, index: usize) -> Option<&dyn Element> {
        self.values.get(index).map(|value| value as &dyn Element)
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut dyn Element> {
        self.values
            .get_mut(index)
            .map(|value| value as &mut dyn Element)
    }
}
