use thiserror::Error;

/// Errors that can occur while decoding bytes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerdeErr {
    /// The reader ran out of bytes before the value was complete
    #[error("Truncated input: needed {needed} more byte(s) but only {remaining} remain")]
    Truncated { needed: usize, remaining: usize },

    /// The bytes were present but do not describe a valid value
    #[error("Malformed input: {reason}")]
    Malformed { reason: String },
}

impl SerdeErr {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}
