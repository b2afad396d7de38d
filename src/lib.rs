//! Fixed capacity FIFO queue built from two LIFO stacks that share one buffer.
//!
//! ```
//! use stackqueue::{QueueError, TwoStackQueue};
//!
//! let mut q = TwoStackQueue::new(2);
//! q.enqueue("a")?;
//! q.enqueue("b")?;
//! assert_eq!(q.dequeue()?, "a");
//! # Ok::<(), QueueError>(())
//! ```
pub mod data_structures;
mod error;
pub use data_structures::{DoubleStack, TwoStackQueue};
pub use error::*;
