//! Stack implementations
//!
//! This module provides the array-based `ArrayStack`, which keeps its
//! elements in a `Vec<T>` with the top of the stack at the end of the
//! vector.
//!
//! For callers that need to share a stack between threads, the
//! `CoarseLockStack` wraps an `ArrayStack` in a single mutex. Clones of a
//! `CoarseLockStack` all refer to the same stack.

mod array;
mod coarse_lock;

pub use self::array::ArrayStack;
pub use self::coarse_lock::CoarseLockStack;

use crate::error::EmptyError;

/// The `Stack<T>` abstract data type.
pub trait Stack<T> {
  /// Creates a new, empty `Stack<T>`.
  fn new() -> Self;

  /// Pushes an element onto the stack.
  fn push(&mut self, elem: T);

  /// Pops an element from the stack, if there is one.
  fn pop(&mut self) -> Option<T>;

  /// Returns a copy of the top element without removing it, if there is
  /// one.
  fn peek(&self) -> Option<T>
  where T: Clone;

  /// Predicate that tests if the stack is empty.
  fn is_empty(&self) -> bool;

  /// Returns the number of elements in the stack.
  fn size(&self) -> usize;

  /// Removes every element from the stack.
  fn clear(&mut self);

  /// Pops an element from the stack, or fails with `EmptyError::Pop`.
  fn try_pop(&mut self) -> Result<T, EmptyError> {
    self.pop().ok_or(EmptyError::Pop)
  }

  /// Returns the top element, or fails with `EmptyError::Peek`.
  fn try_peek(&self) -> Result<T, EmptyError>
  where T: Clone {
    self.peek().ok_or(EmptyError::Peek)
  }

  /// Pops an element from the stack, returning `T::default()` when the
  /// stack is empty. The result cannot distinguish an empty stack from a
  /// stored default value; prefer `pop` or `try_pop`.
  fn pop_or_default(&mut self) -> T
  where T: Default {
    self.pop().unwrap_or_default()
  }

  /// Like `peek`, but returns `T::default()` when the stack is empty.
  fn peek_or_default(&self) -> T
  where T: Clone + Default {
    self.peek().unwrap_or_default()
  }
}

/// The specification for a thread-safe `Stack`.
pub trait ConcurrentStack<T>: Stack<T> + Clone + Send + Sync {}
