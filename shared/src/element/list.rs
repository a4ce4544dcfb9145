use std::{any::Any, fmt};

use log::debug;

use replica_serde::{ByteReader, ByteWrite, Serde, SerdeErr};

use crate::engine;

use super::{
    property::{read_presence, warn_mismatch, write_presence},
    Element, ElementMut, ElementRef, PropertyBase, PropertyMeta,
};

/// An optional, bounded list of elements.
///
/// Encoded as presence flag, `u16` count, then each item in order. Pushing past capacity
/// drops the oldest item.
#[derive(Clone)]
pub struct ListProperty<T: Element + Clone + Default> {
    items: Vec<T>,
    with_value: bool,
    capacity: usize,
    meta: PropertyMeta,
}

impl<T: Element + Clone + Default> ListProperty<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            with_value: false,
            capacity,
            meta: PropertyMeta::default(),
        }
    }

    pub fn no_serialization(mut self) -> Self {
        self.meta.serialized = false;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn has_value(&self) -> bool {
        self.with_value
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.with_value = true;
        while self.items.len() > self.capacity {
            self.items.remove(0);
            debug!("list over capacity {}, dropped oldest item", self.capacity);
        }
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.with_value = false;
    }

    pub fn set_to(&mut self, other: &Self) {
        self.clear();
        if other.with_value {
            for item in &other.items {
                self.push(item.clone());
            }
            self.with_value = true;
        }
    }

    pub fn set_from_if_with(&mut self, other: &Self) {
        if other.with_value {
            self.set_to(other);
        }
    }
}

impl<T: Element + Clone + Default> PartialEq for ListProperty<T> {
    fn eq(&self, other: &Self) -> bool {
        self.with_value == other.with_value
            && self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .zip(&other.items)
                .all(|(a, b)| engine::equal_to(a, b))
    }
}

impl<T: Element + Clone + Default> fmt::Debug for ListProperty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.fmt_value(&mut out)?;
        f.write_str(&out)
    }
}

impl<T: Element + Clone + Default> Element for ListProperty<T> {
    fn kind(&self) -> ElementRef<'_> {
        ElementRef::Property(self)
    }

    fn kind_mut(&mut self) -> ElementMut<'_> {
        ElementMut::Property(self)
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

impl<T: Element + Clone + Default> PropertyBase for ListProperty<T> {
    fn has_value(&self) -> bool {
        self.with_value
    }

    fn clear(&mut self) {
        ListProperty::clear(self);
    }

    fn zero(&mut self) {
        self.items.clear();
        self.with_value = true;
    }

    fn meta(&self) -> &PropertyMeta {
        &self.meta
    }

    fn write(&self, writer: &mut dyn ByteWrite) {
        write_presence(writer, self.with_value);
        if !self.with_value {
            return;
        }
        (self.items.len() as u16).ser(writer);
        for item in &self.items {
            engine::serialize(item, writer);
        }
    }

    fn read(&mut self, reader: &mut ByteReader) -> Result<(), SerdeErr> {
        ListProperty::clear(self);
        if !read_presence(reader)? {
            return Ok(());
        }
        let count = u16::de(reader)? as usize;
        if count > self.capacity {
            return Err(SerdeErr::malformed(format!(
                "list of {} items exceeds capacity {}",
                count, self.capacity
            )));
        }
        for _ in 0..count {
            let mut item = T::default();
            engine::deserialize(&mut item, reader)?;
            self.items.push(item);
        }
        self.with_value = true;
        Ok(())
    }

    fn value_equals(&self, other: &dyn PropertyBase) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    fn value_predicted(&self, other: &dyn PropertyBase) -> bool {
        self.value_equals(other)
    }

    fn copy_value_from(&mut self, other: &dyn PropertyBase) {
        match other.as_any().downcast_ref::<Self>() {
            Some(other) => self.set_to(other),
            None => warn_mismatch(self.type_name(), other),
        }
    }

    fn merge_value_from(&mut self, other: &dyn PropertyBase) {
        match other.as_any().downcast_ref::<Self>() {
            Some(other) => self.set_from_if_with(other),
            None => warn_mismatch(self.type_name(), other),
        }
    }

    fn interpolate_value(&mut self, from: &dyn PropertyBase, to: &dyn PropertyBase, _t: f32) {
        if to.has_value() || !from.has_value() {
            self.copy_value_from(to);
        } else {
            self.copy_value_from(from);
        }
    }

    fn fmt_value(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        if !self.with_value {
            return out.write_str("None");
        }
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                out.write_str("; ")?;
            }
            out.write_str(&engine::stringify(item))?;
        }
        Ok(())
    }
}
