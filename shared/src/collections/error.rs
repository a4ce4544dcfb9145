use thiserror::Error;

/// Errors that can occur in the keyed collections
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The key is already mapped to a value
    #[error("Key is already present in the map. Each key may be mapped once")]
    KeyAlreadyMapped,

    /// The value is already mapped from another key
    #[error("Value is already present in the map. Each value may be mapped once")]
    ValueAlreadyMapped,
}
