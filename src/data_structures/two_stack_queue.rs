use super::{DoubleStack, SharedBuffer, StackView};
use crate::error::QueueError;
use std::fmt::{self, Debug, Formatter};
use tracing::{debug, trace};
use unwrap::unwrap;

/// Fixed capacity FIFO queue made of the two stacks of a [DoubleStack].
///
/// Items are pushed onto the input stack and popped from the output stack. When the output
/// stack runs dry the whole input stack is moved onto it, which reverses the items back into
/// arrival order. Every item is moved at most once so [enqueue](TwoStackQueue::enqueue) and
/// [dequeue](TwoStackQueue::dequeue) are amortized O(1).
///
/// # Example
/// ```
/// # use stackqueue::data_structures::TwoStackQueue;
/// # use stackqueue::QueueError;
/// let mut q = TwoStackQueue::new(3);
///
/// q.enqueue(1).unwrap();
/// q.enqueue(2).unwrap();
/// q.enqueue(3).unwrap();
///
/// assert_eq!(q.enqueue(4), Err(QueueError::Full { capacity: 3 }));
///
/// assert_eq!(q.dequeue(), Ok(1));
/// assert_eq!(q.dequeue(), Ok(2));
/// assert_eq!(q.dequeue(), Ok(3));
///
/// assert_eq!(q.dequeue(), Err(QueueError::Empty));
/// ```
#[derive(Clone)]
pub struct TwoStackQueue<T> {
    // First stack is the input, second stack is the output.
    stacks: DoubleStack<T>,
    capacity: usize,
}

impl<T> TwoStackQueue<T> {
    /// Returns an empty [TwoStackQueue] that can hold up to `capacity` items.
    ///
    /// Both stacks get `capacity` slots, so the queue can fill up no matter how the items
    /// are split between them.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 or if `2 * capacity` overflows [usize].
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Tried to create a TwoStackQueue with capacity 0");
        Self {
            stacks: DoubleStack::new(capacity),
            capacity,
        }
    }

    /// Moves every item from the input stack onto the output stack.
    ///
    /// Must only be called while the output stack is empty, otherwise items
    /// from different batches would come out interleaved.
    fn transfer(buffer: &mut SharedBuffer<T>, input: &mut StackView, output: &mut StackView) {
        debug_assert!(
            output.is_empty(),
            "Tried to transfer while the output stack holds {} items",
            output.len()
        );
        let moved = input.len();
        while !input.is_empty() {
            let item = unwrap!(
                input.pop(buffer),
                "Input stack failed to pop with len:{}",
                input.len()
            );
            unwrap!(
                output.push(buffer, item),
                "Output stack overflowed during transfer with len:{}",
                output.len()
            );
        }
        trace!(moved, "transferred input stack onto output stack");
    }

    /// Adds `item` to the back of the queue.
    ///
    /// Returns [QueueError::Full] if the queue already holds [TwoStackQueue::capacity] items,
    /// the queue is left unchanged.
    pub fn enqueue(&mut self, item: T) -> Result<(), QueueError> {
        if self.is_full() {
            debug!(capacity = self.capacity, "queue is full");
            return Err(QueueError::Full {
                capacity: self.capacity,
            });
        }

        let (buffer, input, output) = self.stacks.parts_mut();
        if input.is_full() {
            assert!(
                output.is_empty(),
                "Input stack is full with len:{} while output stack holds len:{}, capacity:{}",
                input.len(),
                output.len(),
                self.capacity
            );
            Self::transfer(buffer, input, output);
        }
        unwrap!(
            input.push(buffer, item),
            "Input stack overflowed with len:{}, capacity:{}",
            input.len(),
            self.capacity
        );
        debug_assert!(self.len() <= self.capacity);
        Ok(())
    }

    /// Removes the item at the front of the queue and returns it.
    ///
    /// Returns [QueueError::Empty] if the queue holds no items.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        self.fill_output()?;

        let (buffer, _, output) = self.stacks.parts_mut();
        Ok(unwrap!(
            output.pop(buffer),
            "Output stack failed to pop with len:{}",
            output.len()
        ))
    }

    /// Returns a reference to the item at the front of the queue without removing it.
    ///
    /// Takes `&mut self` because the front item might still be at the bottom of the input stack.
    ///
    /// Returns [QueueError::Empty] if the queue holds no items.
    pub fn front(&mut self) -> Result<&T, QueueError> {
        self.fill_output()?;

        Ok(unwrap!(
            self.stacks.second().top(self.stacks.buffer()),
            "Output stack failed to read top with len:{}",
            self.stacks.second().len()
        ))
    }

    /// Makes sure the output stack holds the front item, transferring if it is empty.
    fn fill_output(&mut self) -> Result<(), QueueError> {
        if self.is_empty() {
            debug!("queue is empty");
            return Err(QueueError::Empty);
        }

        let (buffer, input, output) = self.stacks.parts_mut();
        if output.is_empty() {
            Self::transfer(buffer, input, output);
            if output.is_empty() {
                return Err(QueueError::Empty);
            }
        }
        Ok(())
    }

    /// Enqueues every item of `iter` in order.
    ///
    /// Stops at the first item that doesn't fit and returns [QueueError::Full],
    /// items enqueued before that stay in the queue and the rest of `iter` is not consumed.
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), QueueError> {
        for item in iter {
            self.enqueue(item)?;
        }
        Ok(())
    }

    /// Returns an iterator that dequeues items until the queue is empty.
    ///
    /// Items not yielded before the iterator is dropped stay in the queue.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { queue: self }
    }

    /// Removes every item, the buffer is kept.
    pub fn clear(&mut self) {
        let discarded = self.len();
        self.stacks.clear();
        debug!(discarded, "cleared queue");
    }

    /// Returns the number of items in the queue.
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    /// Returns true if the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Returns true if the queue holds [TwoStackQueue::capacity] items.
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    /// Returns the maximum number of items the queue can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: Debug> Debug for TwoStackQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwoStackQueue")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("input", self.stacks.first())
            .field("output", self.stacks.second())
            .field("buffer", self.stacks.buffer())
            .finish()
    }
}

/// [Iterator] returned by [TwoStackQueue::drain].
pub struct Drain<'a, T> {
    queue: &'a mut TwoStackQueue<T>,
}

impl<'a, T> Iterator for Drain<'a, T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue().ok()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<'a, T> ExactSizeIterator for Drain<'a, T> {}
