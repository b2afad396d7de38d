mod double_stack;
mod shared_buffer;
mod stack_view;
mod two_stack_queue;
pub use double_stack::*;
pub use shared_buffer::*;
pub use stack_view::*;
pub use two_stack_queue::*;
