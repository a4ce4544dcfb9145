use std::{any::Any, fmt};

use log::warn;

use replica_serde::{ByteReader, ByteWrite, Serde, SerdeErr};

use super::{
    Element, ElementError, ElementMut, ElementRef, Interpolation, PropertyMeta, PropertyValue,
};

/// Object-safe face of every leaf of the state tree.
///
/// The `other`/`from`/`to` arguments must be the same concrete type as `self`; zipped
/// navigation guarantees this, direct callers passing a different type get a logged no-op.
pub trait PropertyBase: Element {
    fn has_value(&self) -> bool;
    fn clear(&mut self);
    fn zero(&mut self);
    fn meta(&self) -> &PropertyMeta;
    /// Writes the presence flag, then the payload when present
    fn write(&self, writer: &mut dyn ByteWrite);
    fn read(&mut self, reader: &mut ByteReader) -> Result<(), SerdeErr>;
    fn value_equals(&self, other: &dyn PropertyBase) -> bool;
    /// Like `value_equals`, but under the prediction tolerance
    fn value_predicted(&self, other: &dyn PropertyBase) -> bool;
    fn copy_value_from(&mut self, other: &dyn PropertyBase);
    fn merge_value_from(&mut self, other: &dyn PropertyBase);
    fn interpolate_value(&mut self, from: &dyn PropertyBase, to: &dyn PropertyBase, t: f32);
    fn fmt_value(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

pub(crate) fn write_presence(writer: &mut dyn ByteWrite, has_value: bool) {
    has_value.ser(writer);
}

pub(crate) fn read_presence(reader: &mut ByteReader) -> Result<bool, SerdeErr> {
    bool::de(reader).map_err(|_| SerdeErr::malformed("property presence flag must be 0 or 1"))
}

#[doc(hidden)]
pub fn warn_mismatch(expected: &'static str, found: &dyn PropertyBase) {
    warn!(
        "property type mismatch: expected {}, found {}",
        expected,
        found.type_name()
    );
}

/// A single optional value: the leaf of every state tree.
///
/// Absence is a real state, distinct from holding `T::default()`.
#[derive(Clone)]
pub struct Property<T: PropertyValue> {
    value: T,
    with_value: bool,
    meta: PropertyMeta,
}

impl<T: PropertyValue> Property<T> {
    /// A property without a value
    pub fn new() -> Self {
        Self {
            value: T::default(),
            with_value: false,
            meta: PropertyMeta::default(),
        }
    }

    pub fn with(value: T) -> Self {
        Self {
            value,
            with_value: true,
            meta: PropertyMeta::default(),
        }
    }

    // Declaration builders

    pub fn interpolation(mut self, interpolation: Interpolation) -> Self {
        self.meta.interpolation = interpolation;
        self
    }

    /// # Panics
    ///
    /// Panics if `min >= max`.
    pub fn cyclic(self, min: f32, max: f32) -> Self {
        self.interpolation(Interpolation::cyclic(min, max))
    }

    pub fn angle(self) -> Self {
        self.interpolation(Interpolation::Angle)
    }

    pub fn take_second(self) -> Self {
        self.interpolation(Interpolation::TakeSecond)
    }

    pub fn elapsed(self) -> Self {
        self.interpolation(Interpolation::Elapsed)
    }

    pub fn interpolate_range(self, max_distance: f32) -> Self {
        self.interpolation(Interpolation::Range(max_distance))
    }

    pub fn tolerance(mut self, tolerance: f32) -> Self {
        self.meta.tolerance = Some(tolerance);
        self
    }

    pub fn prediction_tolerance(mut self, tolerance: f32) -> Self {
        self.meta.prediction_tolerance = Some(tolerance);
        self
    }

    pub fn no_serialization(mut self) -> Self {
        self.meta.serialized = false;
        self
    }

    // Value access

    pub fn has_value(&self) -> bool {
        self.with_value
    }

    /// # Panics
    ///
    /// Panics if the property has no value. Use `try_value` or `get` to handle absence.
    pub fn value(&self) -> &T {
        match self.try_value() {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_value(&self) -> Result<&T, ElementError> {
        if self.with_value {
            Ok(&self.value)
        } else {
            Err(ElementError::InvalidState {
                type_name: std::any::type_name::<Self>(),
            })
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.with_value.then_some(&self.value)
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.with_value {
            Some(&mut self.value)
        } else {
            None
        }
    }

    /// The value, or `default` when absent
    pub fn or(&self, default: T) -> T {
        self.get().cloned().unwrap_or(default)
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
        self.with_value = true;
    }

    pub fn set_if_without(&mut self, value: T) {
        if !self.with_value {
            self.set(value);
        }
    }

    pub fn clear(&mut self) {
        self.value = T::default();
        self.with_value = false;
    }

    /// Sets the type's zero value, making the property present
    pub fn zero(&mut self) {
        self.set(T::zero());
    }

    pub fn meta(&self) -> &PropertyMeta {
        &self.meta
    }

    // Structural operations on the same type

    pub fn set_to(&mut self, other: &Self) {
        if other.with_value {
            self.set(other.value.clone());
        } else {
            self.clear();
        }
    }

    pub fn set_from_if_with(&mut self, other: &Self) {
        if other.with_value {
            self.set(other.value.clone());
        }
    }

    pub fn interpolate_from(&mut self, from: &Self, to: &Self, t: f32) {
        match (from.get(), to.get()) {
            (Some(a), Some(b)) if self.meta.interpolation != Interpolation::TakeSecond => {
                self.set(T::interpolate(a, b, t, self.meta.interpolation));
            }
            (Some(_), None) => self.set_to(from),
            _ => self.set_to(to),
        }
    }

    pub fn predicted_matches(&self, other: &Self) -> bool {
        let tolerance = self
            .meta
            .prediction_tolerance
            .or(other.meta.prediction_tolerance)
            .or(self.meta.tolerance)
            .or(other.meta.tolerance);
        self.matches(other, tolerance)
    }

    fn matches(&self, other: &Self, tolerance: Option<f32>) -> bool {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a.within_tolerance(b, tolerance),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: PropertyValue> Default for Property<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PropertyValue> From<T> for Property<T> {
    fn from(value: T) -> Self {
        Self::with(value)
    }
}

impl<T: PropertyValue> PartialEq for Property<T> {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other, self.meta.tolerance.or(other.meta.tolerance))
    }
}

impl<T: PropertyValue> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => write!(f, "{:?}", value),
            None => f.write_str("None"),
        }
    }
}

impl<T: PropertyValue> Element for Property<T> {
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

impl<T: PropertyValue> PropertyBase for Property<T> {
    fn has_value(&self) -> bool {
        self.with_value
    }

    fn clear(&mut self) {
        Property::clear(self);
    }

    fn zero(&mut self) {
        Property::zero(self);
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
        if read_presence(reader)? {
            self.set(T::de(reader)?);
        } else {
            Property::clear(self);
        }
        Ok(())
    }

    fn value_equals(&self, other: &dyn PropertyBase) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    fn value_predicted(&self, other: &dyn PropertyBase) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| self.predicted_matches(other))
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

    fn interpolate_value(&mut self, from: &dyn PropertyBase, to: &dyn PropertyBase, t: f32) {
        let (Some(from), Some(to)) = (
            from.as_any().downcast_ref::<Self>(),
            to.as_any().downcast_ref::<Self>(),
        ) else {
            warn_mismatch(self.type_name(), to);
            return;
        };
        self.interpolate_from(from, to, t);
    }

    fn fmt_value(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        match self.get() {
            Some(value) => write!(out, "{:?}", value),
            None => out.write_str("None"),
        }
    }
}
