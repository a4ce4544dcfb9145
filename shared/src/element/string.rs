use std::{any::Any, fmt};

use replica_serde::{ByteReader, ByteWrite, Serde, SerdeErr};

use super::{
    property::{read_presence, warn_mismatch, write_presence},
    Element, ElementError, ElementMut, ElementRef, PropertyBase, PropertyMeta,
};

pub const DEFAULT_STRING_CAPACITY: usize = u8::MAX as usize;
/// Longest string the `u16` length prefix can carry
pub const MAX_STRING_CAPACITY: usize = u16::MAX as usize;

/// An optional UTF-8 string bounded to `max_length` bytes
#[derive(Clone)]
pub struct StringProperty {
    value: String,
    with_value: bool,
    max_length: usize,
    meta: PropertyMeta,
}

impl StringProperty {
    /// # Panics
    ///
    /// Panics if `max_length` is above [`MAX_STRING_CAPACITY`].
    pub fn new(max_length: usize) -> Self {
        match Self::try_new(max_length) {
            Ok(property) => property,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_new(max_length: usize) -> Result<Self, ElementError> {
        if max_length > MAX_STRING_CAPACITY {
            return Err(ElementError::CapacityExceeded {
                capacity: MAX_STRING_CAPACITY,
                requested: max_length,
            });
        }
        Ok(Self {
            value: String::with_capacity(max_length),
            with_value: false,
            max_length,
            meta: PropertyMeta::default(),
        })
    }

    pub fn no_serialization(mut self) -> Self {
        self.meta.serialized = false;
        self
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn has_value(&self) -> bool {
        self.with_value
    }

    pub fn as_str(&self) -> Option<&str> {
        self.with_value.then_some(self.value.as_str())
    }

    /// # Panics
    ///
    /// Panics if `value` is longer than `max_length` bytes.
    pub fn set(&mut self, value: &str) {
        if let Err(err) = self.try_set(value) {
            panic!("{}", err);
        }
    }

    pub fn try_set(&mut self, value: &str) -> Result<(), ElementError> {
        self.check_length(value.len())?;
        self.value.clear();
        self.value.push_str(value);
        self.with_value = true;
        Ok(())
    }

    /// Sets as much of `value` as fits, cutting at a character boundary
    pub fn set_truncated(&mut self, value: &str) {
        let mut end = value.len().min(self.max_length);
        while !value.is_char_boundary(end) {
            end -= 1;
        }
        self.value.clear();
        self.value.push_str(&value[..end]);
        self.with_value = true;
    }

    pub fn try_push_str(&mut self, value: &str) -> Result<(), ElementError> {
        let length = if self.with_value { self.value.len() } else { 0 };
        self.check_length(length + value.len())?;
        if !self.with_value {
            self.value.clear();
        }
        self.value.push_str(value);
        self.with_value = true;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.with_value = false;
    }

    pub fn set_to(&mut self, other: &Self) {
        if other.with_value {
            self.set_truncated(&other.value);
        } else {
            self.clear();
        }
    }

    pub fn set_from_if_with(&mut self, other: &Self) {
        if other.with_value {
            self.set_truncated(&other.value);
        }
    }

    fn check_length(&self, requested: usize) -> Result<(), ElementError> {
        if requested > self.max_length {
            return Err(ElementError::CapacityExceeded {
                capacity: self.max_length,
                requested,
            });
        }
        Ok(())
    }
}

impl Default for StringProperty {
    fn default() -> Self {
        Self::new(DEFAULT_STRING_CAPACITY)
    }
}

impl PartialEq for StringProperty {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl PartialEq<str> for StringProperty {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl fmt::Debug for StringProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(value) => write!(f, "{:?}", value),
            None => f.write_str("None"),
        }
    }
}

impl Element for StringProperty {
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

impl PropertyBase for StringProperty {
    fn has_value(&self) -> bool {
        self.with_value
    }

    fn clear(&mut self) {
        StringProperty::clear(self);
    }

    fn zero(&mut self) {
        self.value.clear();
        self.with_value = true;
    }

    fn meta(&self) -> &PropertyMeta {
        &self.meta
    }

    fn write(&self, writer: &mut dyn ByteWrite) {
        write_presence(writer, self.with_value);
        if self.with_value {
            self.value.ser(writer);
        }
    }

    fn read(&mut self, reader: &mut ByteReader) -> Result<(), SerdeErr> {
        if !read_presence(reader)? {
            StringProperty::clear(self);
            return Ok(());
        }
        let value = String::de(reader)?;
        if value.len() > self.max_length {
            return Err(SerdeErr::malformed(format!(
                "string of {} bytes exceeds max length {}",
                value.len(),
                self.max_length
            )));
        }
        self.value = value;
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
        out.write_str(self.as_str().unwrap_or("None"))
    }
}
