use thiserror::Error;

/// Errors that can occur while accessing elements of a state tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementError {
    /// A property value was read while the property holds no value
    #[error("Property of type '{type_name}' has no value. Check `has_value()` or use `get()` before reading")]
    InvalidState { type_name: &'static str },

    /// A container was asked for a child type that is not part of its schema
    #[error("Container does not have required child '{type_name}'. It must be declared in the element types the container was built from")]
    RequiredChildAbsent { type_name: &'static str },

    /// A container schema declared the same child type twice
    #[error("Container already has a child of type '{type_name}'. Each element type may appear only once in a container")]
    DuplicateChild { type_name: &'static str },

    /// An array index was outside of `[0, length)`
    #[error("Index {index} is out of range for array element of length {length}")]
    IndexOutOfRange { index: usize, length: usize },

    /// A bounded value was given more than it can hold
    #[error("Value of size {requested} exceeds capacity {capacity}")]
    CapacityExceeded { capacity: usize, requested: usize },
}
