mod array;
mod component;
mod container;
#[allow(clippy::module_inception)]
mod element;
mod error;
mod interpolation;
mod list;
mod macros;
mod property;
mod property_value;
mod string;

pub use array::ArrayElement;
pub use component::{ArrayBase, Component};
pub use container::Container;
pub use element::{Element, ElementMut, ElementRef, ElementType};
pub use error::ElementError;
pub use interpolation::{Interpolation, PropertyMeta};
pub use list::ListProperty;
pub use property::{Property, PropertyBase};
#[doc(hidden)]
pub use property::warn_mismatch;
pub use property_value::PropertyValue;
pub use string::{StringProperty, DEFAULT_STRING_CAPACITY, MAX_STRING_CAPACITY};

pub(crate) use interpolation::lerp;
