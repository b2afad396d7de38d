use unwrap::unwrap;

/// Fixed length array of slots, each one either empty or holding a `T`.
///
/// Empty slots are [None], so a `T` that is itself an [Option] can store [None] as a real value.
///
/// # Example
/// ```
/// # use stackqueue::data_structures::SharedBuffer;
/// let mut b = SharedBuffer::new(4);
///
/// b.put(3, None::<u8>);
/// assert_eq!(b.get(3), Some(&None));
/// assert_eq!(b.get(2), None);
///
/// assert_eq!(b.take(3), Some(None));
/// assert_eq!(b.occupied(), 0);
/// ```
///
/// # Panics
///
/// Panics if you try to access an index >= [SharedBuffer::len()]
///
/// ```should_panic
/// # use stackqueue::data_structures::SharedBuffer;
/// let b = SharedBuffer::<u8>::new(2);
///
/// b.get(2);
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct SharedBuffer<T> {
    slots: Box<[Option<T>]>,
}

impl<T> SharedBuffer<T> {
    /// Returns a [SharedBuffer] with `len` empty slots.
    pub fn new(len: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(len).collect(),
        }
    }

    /// Returns the number of slots, empty or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the buffer has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of slots currently holding a value.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns a reference to the value at `index`, [None] if the slot is empty.
    ///
    /// # Panics
    ///
    /// Panics if `index` >= [SharedBuffer::len()]
    pub fn get(&self, index: usize) -> Option<&T> {
        unwrap!(
            self.slots.get(index),
            "Tried to read index:{} >= SharedBuffer::len():{}",
            index,
            self.slots.len()
        )
        .as_ref()
    }

    /// Stores `value` in the empty slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` >= [SharedBuffer::len()].
    /// Panics in debug mode if the slot is already occupied.
    pub fn put(&mut self, index: usize, value: T) {
        let len = self.slots.len();
        let slot = unwrap!(
            self.slots.get_mut(index),
            "Tried to write index:{} >= SharedBuffer::len():{}",
            index,
            len
        );
        debug_assert!(slot.is_none(), "Tried to overwrite occupied index:{}", index);
        *slot = Some(value);
    }

    /// Moves the value out of the slot at `index` and leaves the slot empty.
    ///
    /// # Panics
    ///
    /// Panics if `index` >= [SharedBuffer::len()]
    pub fn take(&mut self, index: usize) -> Option<T> {
        let len = self.slots.len();
        unwrap!(
            self.slots.get_mut(index),
            "Tried to take index:{} >= SharedBuffer::len():{}",
            index,
            len
        )
        .take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_empty() {
        let b = SharedBuffer::<u8>::new(6);
        assert_eq!(b.len(), 6);
        assert_eq!(b.is_empty(), false);
        assert_eq!(b.occupied(), 0);
        for i in 0..6 {
            assert_eq!(b.get(i), None, "index: {}", i);
        }

        assert_eq!(SharedBuffer::<u8>::new(0).is_empty(), true);
    }

    #[test]
    fn test_put_take() {
        let mut b = SharedBuffer::new(3);

        b.put(0, 'a');
        b.put(2, 'c');
        assert_eq!(b.occupied(), 2);
        assert_eq!(b.get(0), Some(&'a'));
        assert_eq!(b.get(1), None);

        assert_eq!(b.take(2), Some('c'));
        assert_eq!(b.take(2), None);
        assert_eq!(b.occupied(), 1);
    }

    #[test]
    fn test_none_is_a_value() {
        let mut b = SharedBuffer::new(1);

        b.put(0, None::<&str>);
        assert_eq!(b.occupied(), 1);
        assert_eq!(b.take(0), Some(None));
        assert_eq!(b.occupied(), 0);
    }

    #[test]
    #[should_panic(expected = "Tried to write index:3 >= SharedBuffer::len():3")]
    fn test_put_panics_out_of_bounds() {
        let mut b = SharedBuffer::new(3);
        b.put(3, 1);
    }

    #[test]
    #[should_panic(expected = "Tried to take index:0 >= SharedBuffer::len():0")]
    fn test_take_panics_out_of_bounds() {
        let mut b = SharedBuffer::<u8>::new(0);
        b.take(0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Tried to overwrite occupied index:1")]
    fn test_put_panics_occupied() {
        let mut b = SharedBuffer::new(2);
        b.put(1, 1);
        b.put(1, 2);
    }
}
