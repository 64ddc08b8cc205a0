//! Generic containers: a LIFO `Stack`, a FIFO `Queue` and a key-value
//! `Dict`.
//!
//! Each abstract data type is a trait. The sequential implementations
//! (`ArrayStack`, `ArrayQueue`, `HtDict`) delegate to `Vec`, `VecDeque`
//! and `HashMap`. The coarse-lock implementations wrap a sequential one in
//! a mutex so that clones can be shared between threads.
//!
//! Operations that need an element return `Option`. The `try_*` methods
//! turn an empty container into an `EmptyError`, and the `*_or_default`
//! methods return the element type's default value instead.
//!
//! ```
//! use containers::{ArrayStack, Stack};
//!
//! let mut stack = ArrayStack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.pop(), Some(2));
//! assert_eq!(stack.peek(), Some(1));
//! ```

pub mod error;
pub mod print;
pub mod stack;
pub mod queue;
pub mod dict;

#[cfg(test)]
mod testing;

pub use crate::error::EmptyError;
pub use crate::print::Print;
pub use crate::stack::{Stack, ConcurrentStack, ArrayStack, CoarseLockStack};
pub use crate::queue::{Queue, ConcurrentQueue, ArrayQueue, CoarseLockQueue};
pub use crate::dict::{Dict, ConcurrentDict, HtDict, CoarseLockHtDict};
