use super::{Direction, SharedBuffer, StackView};
use crate::error::StackError;
use unwrap::unwrap;

/// Data structure consisting of two stacks that share one [SharedBuffer],
/// the first stack grows up from index 0 and the second grows down from the last index.
///
/// # Example
/// ```
/// # use stackqueue::data_structures::DoubleStack;
/// let mut stacks = DoubleStack::new(3);
///
/// stacks.first_mut().push(1).unwrap();
/// stacks.first_mut().push(2).unwrap();
/// stacks.second_mut().push(3).unwrap();
///
/// assert_eq!(stacks.buffer().len(), 6);
/// assert_eq!(stacks.len(), 3);
///
/// assert_eq!(stacks.first_mut().pop(), Ok(2));
/// assert_eq!(stacks.second_mut().pop(), Ok(3));
/// assert_eq!(stacks.first_mut().pop(), Ok(1));
///
/// assert!(stacks.second_mut().pop().is_err());
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct DoubleStack<T> {
    buffer: SharedBuffer<T>,
    first: StackView,
    second: StackView,
}

impl<T> DoubleStack<T> {
    /// Returns an empty [DoubleStack] where each stack can hold `capacity_per_side` items,
    /// the shared buffer has `2 * capacity_per_side` slots so the stacks never meet.
    ///
    /// # Panics
    ///
    /// Panics if `2 * capacity_per_side` overflows [usize].
    pub fn new(capacity_per_side: usize) -> Self {
        let buffer_len = unwrap!(
            capacity_per_side.checked_mul(2),
            "Tried to create a DoubleStack with capacity_per_side:{}, buffer len overflows usize",
            capacity_per_side
        );
        Self::with_layout(buffer_len, capacity_per_side)
    }

    /// Returns an empty [DoubleStack] over a buffer of exactly `buffer_len` slots,
    /// each stack can hold `buffer_len / 2` items.
    ///
    /// If `buffer_len` is odd the middle slot is never used.
    pub fn split(buffer_len: usize) -> Self {
        Self::with_layout(buffer_len, buffer_len / 2)
    }

    fn with_layout(buffer_len: usize, capacity_per_side: usize) -> Self {
        let first = StackView::new(0, Direction::Forward, capacity_per_side);
        let second = StackView::new(
            buffer_len.saturating_sub(1),
            Direction::Backward,
            capacity_per_side,
        );
        debug_assert!(
            first.fits(buffer_len) && second.fits(buffer_len),
            "Tried to lay out stacks of capacity:{} over a buffer of len:{}",
            capacity_per_side,
            buffer_len
        );

        Self {
            buffer: SharedBuffer::new(buffer_len),
            first,
            second,
        }
    }

    /// Returns the stack anchored at index 0.
    pub fn first(&self) -> &StackView {
        &self.first
    }

    /// Returns the stack anchored at the last index.
    pub fn second(&self) -> &StackView {
        &self.second
    }

    /// Returns a handle to operate on the stack anchored at index 0.
    pub fn first_mut(&mut self) -> StackMut<'_, T> {
        StackMut {
            buffer: &mut self.buffer,
            view: &mut self.first,
        }
    }

    /// Returns a handle to operate on the stack anchored at the last index.
    pub fn second_mut(&mut self) -> StackMut<'_, T> {
        StackMut {
            buffer: &mut self.buffer,
            view: &mut self.second,
        }
    }

    /// Returns the buffer and both stacks at once, for operations that move items between stacks.
    pub fn parts_mut(&mut self) -> (&mut SharedBuffer<T>, &mut StackView, &mut StackView) {
        (&mut self.buffer, &mut self.first, &mut self.second)
    }

    /// Returns the buffer both stacks live in.
    pub fn buffer(&self) -> &SharedBuffer<T> {
        &self.buffer
    }

    /// Returns the sum of the items in both stacks.
    pub fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }

    /// Returns true if both stacks are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Empties both stacks, the buffer is kept.
    pub fn clear(&mut self) {
        self.first.clear(&mut self.buffer);
        self.second.clear(&mut self.buffer);
    }
}

/// One stack of a [DoubleStack] together with the buffer it lives in.
///
/// Returned by [DoubleStack::first_mut] and [DoubleStack::second_mut].
#[derive(Debug)]
pub struct StackMut<'a, T> {
    buffer: &'a mut SharedBuffer<T>,
    view: &'a mut StackView,
}

impl<'a, T> StackMut<'a, T> {
    /// See [StackView::push].
    pub fn push(&mut self, item: T) -> Result<(), StackError> {
        self.view.push(self.buffer, item)
    }

    /// See [StackView::pop].
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.view.pop(self.buffer)
    }

    /// See [StackView::top].
    pub fn top(&self) -> Result<&T, StackError> {
        self.view.top(&*self.buffer)
    }

    /// See [StackView::clear].
    pub fn clear(&mut self) {
        self.view.clear(self.buffer)
    }

    /// Returns the number of items in the stack.
    pub fn len(&self) -> usize {
        self.view.len()
    }

    /// Returns true if the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }
}
