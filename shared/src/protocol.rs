use crate::{Element, WireCode};

mod codec;
pub mod error;
mod message_kinds;

pub use error::{CodecError, ProtocolError, RegistryError};
pub use message_kinds::{MessageKind, MessageKinds};

/// The set of message types two peers agree on.
///
/// Built once at startup, then locked before any socket uses it. Registration order decides
/// the wire codes.
#[derive(Default)]
pub struct Protocol {
    pub message_kinds: MessageKinds,
    locked: bool,
}

impl Protocol {
    pub fn builder() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if the protocol is locked or `T` is already registered.
    pub fn add_message<T: Element + Default>(&mut self) -> &mut Self {
        match self.try_add_message::<T>() {
            Ok(protocol) => protocol,
            Err(err) => panic!("{}", err),
        }
    }

    /// Registers `T` with `prototype` as the template for received instances
    ///
    /// # Panics
    ///
    /// Panics if the protocol is locked or `T` is already registered.
    pub fn add_message_with<T: Element>(&mut self, prototype: T) -> &mut Self {
        match self.try_add_message_with(prototype) {
            Ok(protocol) => protocol,
            Err(err) => panic!("{}", err),
        }
    }

    // Non-panicking builder methods

    pub fn try_add_message<T: Element + Default>(&mut self) -> Result<&mut Self, ProtocolError> {
        self.try_check_lock()?;
        self.message_kinds.add_message::<T>()?;
        Ok(self)
    }

    pub fn try_add_message_with<T: Element>(
        &mut self,
        prototype: T,
    ) -> Result<&mut Self, ProtocolError> {
        self.try_check_lock()?;
        self.message_kinds.add_prototype(Box::new(prototype))?;
        Ok(self)
    }

    pub fn try_lock(&mut self) -> Result<(), ProtocolError> {
        self.try_check_lock()?;
        self.locked = true;
        Ok(())
    }

    pub fn lock(&mut self) {
        self.check_lock();
        self.locked = true;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Checks if protocol is locked without panicking
    /// Returns Err if protocol is locked
    pub fn try_check_lock(&self) -> Result<(), ProtocolError> {
        if self.locked {
            Err(ProtocolError::AlreadyLocked)
        } else {
            Ok(())
        }
    }

    /// Checks if protocol is locked, panics if it is
    pub fn check_lock(&self) {
        if self.locked {
            panic!("Protocol already locked!");
        }
    }

    pub fn code_of<T: Element>(&self) -> Option<WireCode> {
        self.message_kinds.try_code_of_type::<T>().ok()
    }

    pub fn build(&mut self) -> Self {
        std::mem::take(self)
    }
}
