/// Fixed-capacity ring indexed relative to the most recently written slot.
///
/// Offsets wrap with floor modulo, so `get(-1)` is the slot before the current one. Offsets
/// of magnitude `size` or more alias other slots; enable `history_bounds_check` to assert
/// against that.
#[derive(Clone, Debug)]
pub struct CyclicArray<T> {
    items: Vec<T>,
    pointer: usize,
}

impl<T> CyclicArray<T> {
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn new(size: usize, mut constructor: impl FnMut() -> T) -> Self {
        assert!(size > 0, "cyclic array needs a size of at least 1");
        Self {
            items: (0..size).map(|_| constructor()).collect(),
            // the first add lands on index 0
            pointer: size - 1,
        }
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    fn wrap(&self, offset: isize) -> usize {
        let size = self.items.len();
        #[cfg(feature = "history_bounds_check")]
        assert!(
            offset.unsigned_abs() < size,
            "cyclic array offset {} aliases in a buffer of size {}",
            offset,
            size
        );
        (self.pointer as isize + offset).rem_euclid(size as isize) as usize
    }

    pub fn advance(&mut self) {
        self.pointer = (self.pointer + 1) % self.items.len();
    }

    pub fn add(&mut self, item: T) {
        self.advance();
        self.items[self.pointer] = item;
    }

    /// Advances and hands out the new current slot for in-place writing
    pub fn claim_next(&mut self) -> &mut T {
        self.advance();
        &mut self.items[self.pointer]
    }

    pub fn peek(&self) -> &T {
        &self.items[self.pointer]
    }

    pub fn peek_mut(&mut self) -> &mut T {
        &mut self.items[self.pointer]
    }

    pub fn get(&self, offset: isize) -> &T {
        &self.items[self.wrap(offset)]
    }

    pub fn get_mut(&mut self, offset: isize) -> &mut T {
        let index = self.wrap(offset);
        &mut self.items[index]
    }

    pub fn set(&mut self, offset: isize, item: T) {
        let index = self.wrap(offset);
        self.items[index] = item;
    }

    /// Treats the latest `size` slots as a window; index 0 is the oldest in it
    pub fn get_in_history_chunk(&self, size: usize, index: usize) -> &T {
        self.get(index as isize - size as isize + 1)
    }

    /// Scans back from the current slot across the whole buffer, falling back to the current
    /// slot when nothing matches
    pub fn get_with_predicate(&self, mut predicate: impl FnMut(&T) -> bool) -> &T {
        (0..self.items.len())
            .map(|back| self.get(-(back as isize)))
            .find(|item| predicate(item))
            .unwrap_or_else(|| self.peek())
    }

    /// Offset of the first slot, scanning back from current, that matches
    pub fn find_offset(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<isize> {
        (0..self.items.len() as isize)
            .map(|back| -back)
            .find(|offset| predicate(self.get(*offset)))
    }

    /// All slots, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let size = self.items.len() as isize;
        (0..size).map(move |index| self.get(index - size + 1))
    }
}
