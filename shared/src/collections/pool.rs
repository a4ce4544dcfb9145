use std::collections::VecDeque;

use log::{debug, trace};

/// Handle to an instance owned by a [`Pool`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PoolKey(usize);

type Constructor<T> = Box<dyn FnMut() -> T>;
type UsageChanged<T> = Box<dyn FnMut(PoolKey, &mut T, bool)>;
type ForcePopped<T> = Box<dyn FnMut(PoolKey, &mut T)>;

/// Reusable instances, each either free or in use.
///
/// A plain pool constructs a new instance when none is free. A strict pool instead takes
/// back the instance that has been in use the longest, reporting it through the force-popped
/// callback.
pub struct Pool<T> {
    items: Vec<T>,
    free: Vec<PoolKey>,
    in_use: VecDeque<PoolKey>,
    constructor: Constructor<T>,
    usage_changed: Option<UsageChanged<T>>,
    force_popped: Option<ForcePopped<T>>,
    strict: bool,
}

impl<T> Pool<T> {
    /// A growing pool, eagerly filled with `capacity` instances
    pub fn new(capacity: usize, constructor: impl FnMut() -> T + 'static) -> Self {
        Self::build(capacity, constructor, false)
    }

    /// A pool that never grows past `capacity` once it has at least one instance
    pub fn strict(capacity: usize, constructor: impl FnMut() -> T + 'static) -> Self {
        Self::build(capacity, constructor, true)
    }

    fn build(capacity: usize, constructor: impl FnMut() -> T + 'static, strict: bool) -> Self {
        let mut constructor: Constructor<T> = Box::new(constructor);
        let items: Vec<T> = (0..capacity).map(|_| constructor()).collect();
        Self {
            free: (0..capacity).rev().map(PoolKey).collect(),
            in_use: VecDeque::with_capacity(capacity),
            items,
            constructor,
            usage_changed: None,
            force_popped: None,
            strict,
        }
    }

    /// Called on every obtain (`true`) and return (`false`)
    pub fn on_usage_changed(mut self, callback: impl FnMut(PoolKey, &mut T, bool) + 'static) -> Self {
        self.usage_changed = Some(Box::new(callback));
        self
    }

    /// Called when a strict pool takes back an in-use instance
    pub fn on_force_popped(mut self, callback: impl FnMut(PoolKey, &mut T) + 'static) -> Self {
        self.force_popped = Some(Box::new(callback));
        self
    }

    pub fn obtain(&mut self) -> PoolKey {
        let key = match self.free.pop() {
            Some(key) => key,
            None => self.key_when_empty(),
        };
        self.in_use.push_back(key);
        if let Some(usage_changed) = &mut self.usage_changed {
            usage_changed(key, &mut self.items[key.0], true);
        }
        trace!("pool obtained {:?}", key);
        key
    }

    fn key_when_empty(&mut self) -> PoolKey {
        if self.strict {
            if let Some(key) = self.in_use.pop_front() {
                debug!("strict pool exhausted, force popping {:?}", key);
                if let Some(force_popped) = &mut self.force_popped {
                    force_popped(key, &mut self.items[key.0]);
                }
                return key;
            }
        }
        let key = PoolKey(self.items.len());
        self.items.push((self.constructor)());
        key
    }

    /// Puts an in-use instance back. Returns false, doing nothing, if `key` was not in use.
    pub fn release(&mut self, key: PoolKey) -> bool {
        let Some(position) = self.in_use.iter().position(|in_use| *in_use == key) else {
            return false;
        };
        self.in_use.remove(position);
        if let Some(usage_changed) = &mut self.usage_changed {
            usage_changed(key, &mut self.items[key.0], false);
        }
        self.free.push(key);
        true
    }

    pub fn release_all(&mut self) {
        while let Some(key) = self.in_use.pop_front() {
            if let Some(usage_changed) = &mut self.usage_changed {
                usage_changed(key, &mut self.items[key.0], false);
            }
            self.free.push(key);
        }
    }

    pub fn get(&self, key: PoolKey) -> Option<&T> {
        self.items.get(key.0)
    }

    pub fn get_mut(&mut self, key: PoolKey) -> Option<&mut T> {
        self.items.get_mut(key.0)
    }

    pub fn is_in_use(&self, key: PoolKey) -> bool {
        self.in_use.contains(&key)
    }

    /// In-use keys, oldest first
    pub fn in_use(&self) -> impl Iterator<Item = PoolKey> + '_ {
        self.in_use.iter().copied()
    }

    pub fn in_use_count(&self) -> usize {
        self.in_use.len()
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Total instances ever constructed
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
