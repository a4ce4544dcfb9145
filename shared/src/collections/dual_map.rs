use std::{collections::HashMap, hash::Hash};

use super::CollectionError;

/// A one-to-one map that can be looked up from either side
pub struct DualMap<K, V> {
    forward: HashMap<K, V>,
    reverse: HashMap<V, K>,
}

impl<K: Eq + Hash + Clone, V: Eq + Hash + Clone> DualMap<K, V> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            forward: HashMap::with_capacity(capacity),
            reverse: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// # Panics
    ///
    /// Panics if either side is already mapped.
    pub fn insert(&mut self, key: K, value: V) {
        if let Err(err) = self.try_insert(key, value) {
            panic!("{}", err);
        }
    }

    pub fn try_insert(&mut self, key: K, value: V) -> Result<(), CollectionError> {
        if self.forward.contains_key(&key) {
            return Err(CollectionError::KeyAlreadyMapped);
        }
        if self.reverse.contains_key(&value) {
            return Err(CollectionError::ValueAlreadyMapped);
        }
        self.forward.insert(key.clone(), value.clone());
        self.reverse.insert(value, key);
        Ok(())
    }

    pub fn contains_forward(&self, key: &K) -> bool {
        self.forward.contains_key(key)
    }

    pub fn contains_reverse(&self, value: &V) -> bool {
        self.reverse.contains_key(value)
    }

    pub fn get_forward(&self, key: &K) -> Option<&V> {
        self.forward.get(key)
    }

    pub fn get_reverse(&self, value: &V) -> Option<&K> {
        self.reverse.get(value)
    }

    pub fn remove_by_key(&mut self, key: &K) -> Option<V> {
        let value = self.forward.remove(key)?;
        self.reverse.remove(&value);
        Some(value)
    }

    pub fn remove_by_value(&mut self, value: &V) -> Option<K> {
        let key = self.reverse.remove(value)?;
        self.forward.remove(&key);
        Some(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.forward.iter()
    }
}

impl<K: Eq + Hash + Clone, V: Eq + Hash + Clone> Default for DualMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
