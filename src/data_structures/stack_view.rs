use super::SharedBuffer;
use crate::error::StackError;
use unwrap::unwrap;

/// Which way a [StackView] grows from its anchor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Grows towards higher indexes.
    Forward,
    /// Grows towards lower indexes.
    Backward,
}

/// Bounded LIFO stack over a region of a [SharedBuffer].
///
/// A [StackView] holds no reference to the buffer, only where its bottom is ([StackView::anchor]),
/// which way it grows and how many items it holds. Every operation that touches data takes the
/// buffer as an argument, so two views can share one buffer as long as their regions don't overlap.
///
/// # Example
/// ```
/// # use stackqueue::data_structures::{Direction, SharedBuffer, StackView};
/// let mut buffer = SharedBuffer::new(4);
/// let mut up = StackView::new(0, Direction::Forward, 2);
/// let mut down = StackView::new(3, Direction::Backward, 2);
///
/// up.push(&mut buffer, 'a').unwrap();
/// down.push(&mut buffer, 'z').unwrap();
///
/// assert_eq!(buffer.get(0), Some(&'a'));
/// assert_eq!(buffer.get(3), Some(&'z'));
///
/// assert_eq!(up.pop(&mut buffer), Ok('a'));
/// assert_eq!(down.top(&buffer), Ok(&'z'));
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct StackView {
    anchor: usize,
    direction: Direction,
    len: usize,
    capacity: usize,
}

impl StackView {
    /// Returns an empty [StackView] whose bottom item will live at `anchor`.
    pub fn new(anchor: usize, direction: Direction, capacity: usize) -> Self {
        Self {
            anchor,
            direction,
            len: 0,
            capacity,
        }
    }

    /// Returns the index of the `n`th item counting from the bottom.
    #[inline(always)]
    fn index(&self, n: usize) -> usize {
        match self.direction {
            Direction::Forward => self.anchor + n,
            Direction::Backward => self.anchor - n,
        }
    }

    /// Returns true if a full view stays inside a buffer with `buffer_len` slots.
    pub fn fits(&self, buffer_len: usize) -> bool {
        if self.capacity == 0 {
            return true;
        }
        match self.direction {
            Direction::Forward => self.anchor + self.capacity <= buffer_len,
            Direction::Backward => self.anchor < buffer_len && self.capacity <= self.anchor + 1,
        }
    }

    /// Pushes `item` on top of the stack.
    ///
    /// Returns [StackError::Overflow] if the view already holds [StackView::capacity] items.
    #[inline(always)]
    pub fn push<T>(&mut self, buffer: &mut SharedBuffer<T>, item: T) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::Overflow {
                capacity: self.capacity,
            });
        }
        buffer.put(self.index(self.len), item);
        self.len += 1;
        Ok(())
    }

    /// Removes the top item and returns it, the slot it occupied is left empty.
    ///
    /// Returns [StackError::Underflow] if the view is empty.
    #[inline(always)]
    pub fn pop<T>(&mut self, buffer: &mut SharedBuffer<T>) -> Result<T, StackError> {
        if self.is_empty() {
            return Err(StackError::Underflow);
        }
        self.len -= 1;
        let index = self.index(self.len);
        Ok(unwrap!(
            buffer.take(index),
            "Tried to pop empty slot index:{}, len:{}",
            index,
            self.len + 1
        ))
    }

    /// Returns a reference to the top item.
    ///
    /// Returns [StackError::Underflow] if the view is empty.
    pub fn top<'a, T>(&self, buffer: &'a SharedBuffer<T>) -> Result<&'a T, StackError> {
        if self.is_empty() {
            return Err(StackError::Underflow);
        }
        let index = self.index(self.len - 1);
        Ok(unwrap!(
            buffer.get(index),
            "Tried to read empty slot index:{}, len:{}",
            index,
            self.len
        ))
    }

    /// Empties every slot the view occupies and sets its length to 0.
    pub fn clear<T>(&mut self, buffer: &mut SharedBuffer<T>) {
        for n in 0..self.len {
            buffer.take(self.index(n));
        }
        self.len = 0;
    }

    /// Returns the number of items in the view.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the view holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the view holds [StackView::capacity] items.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Returns the maximum number of items the view can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the index of the bottom slot.
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// Returns which way the view grows from its anchor.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_forward() {
        let mut b = SharedBuffer::new(5);
        let mut s = StackView::new(1, Direction::Forward, 3);

        assert_eq!(s.pop(&mut b), Err(StackError::Underflow));

        for i in 0..3 {
            s.push(&mut b, i).unwrap();
            assert_eq!(b.get(1 + i as usize), Some(&i));
        }
        assert_eq!(s.push(&mut b, 3), Err(StackError::Overflow { capacity: 3 }));
        assert_eq!(s.len(), 3);

        for i in (0..3).rev() {
            assert_eq!(s.pop(&mut b), Ok(i));
        }
        assert_eq!(s.pop(&mut b), Err(StackError::Underflow));
        assert_eq!(b.occupied(), 0);
    }

    #[test]
    fn test_push_pop_backward() {
        let mut b = SharedBuffer::new(4);
        let mut s = StackView::new(3, Direction::Backward, 4);

        for i in 0..4 {
            s.push(&mut b, i).unwrap();
            assert_eq!(b.get(3 - i as usize), Some(&i));
        }
        assert_eq!(s.is_full(), true);
        assert_eq!(s.push(&mut b, 4), Err(StackError::Overflow { capacity: 4 }));

        for i in (0..4).rev() {
            assert_eq!(s.top(&b), Ok(&i));
            assert_eq!(s.pop(&mut b), Ok(i));
        }
        assert_eq!(s.is_empty(), true);
        assert_eq!(b.occupied(), 0);
    }

    #[test]
    fn test_top_does_not_mutate() {
        let mut b = SharedBuffer::new(2);
        let mut s = StackView::new(0, Direction::Forward, 2);

        assert_eq!(s.top(&b), Err(StackError::Underflow));

        s.push(&mut b, "a").unwrap();
        s.push(&mut b, "b").unwrap();
        assert_eq!(s.top(&b), Ok(&"b"));
        assert_eq!(s.top(&b), Ok(&"b"));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut b = SharedBuffer::new(6);
        let mut up = StackView::new(0, Direction::Forward, 3);
        let mut down = StackView::new(5, Direction::Backward, 3);

        for i in 0..3 {
            up.push(&mut b, i).unwrap();
        }
        down.push(&mut b, 10).unwrap();

        up.clear(&mut b);
        assert_eq!(up.len(), 0);
        assert_eq!(b.occupied(), 1);
        assert_eq!(down.top(&b), Ok(&10));

        up.clear(&mut b);
        assert_eq!(up.is_empty(), true);

        up.push(&mut b, 7).unwrap();
        assert_eq!(b.get(0), Some(&7));
    }

    #[test]
    fn test_zero_capacity() {
        let mut b = SharedBuffer::new(0);
        let mut s = StackView::new(0, Direction::Backward, 0);

        assert_eq!(s.is_full(), true);
        assert_eq!(s.push(&mut b, 1), Err(StackError::Overflow { capacity: 0 }));
        assert_eq!(s.pop(&mut b), Err(StackError::Underflow));
    }

    #[test]
    fn test_fits() {
        assert_eq!(StackView::new(0, Direction::Forward, 4).fits(4), true);
        assert_eq!(StackView::new(1, Direction::Forward, 4).fits(4), false);
        assert_eq!(StackView::new(3, Direction::Backward, 4).fits(4), true);
        assert_eq!(StackView::new(2, Direction::Backward, 4).fits(4), false);
        assert_eq!(StackView::new(4, Direction::Backward, 1).fits(4), false);
        assert_eq!(StackView::new(9, Direction::Backward, 0).fits(0), true);
    }
}
