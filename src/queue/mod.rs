//! Queue implementations
//!
//! This module provides one sequential queue: the `ArrayQueue`, which is
//! backed by Rust's growable ring buffer, `VecDeque<T>`. Elements are
//! enqueued at the back and dequeued from the front, both in constant
//! time.
//!
//! The `CoarseLockQueue` uses a single mutex to wrap an `ArrayQueue`, so
//! that one queue can be shared between threads.

mod array;
mod coarse_lock;

pub use self::array::ArrayQueue;
pub use self::coarse_lock::CoarseLockQueue;

use crate::error::EmptyError;

/// The `Queue<T>` abstract data type.
pub trait Queue<T> {
  /// Creates a new, empty `Queue<T>`.
  fn new() -> Self;

  /// Enqueues an element at the tail of the queue.
  fn enqueue(&mut self, elem: T);

  /// Dequeues the element at the head of the queue, if there is one.
  fn dequeue(&mut self) -> Option<T>;

  /// Returns a copy of the head element without removing it, if there is
  /// one.
  fn front(&self) -> Option<T>
  where T: Clone;

  /// Predicate that tests if the queue is empty.
  fn is_empty(&self) -> bool;

  /// Returns the number of elements in the queue.
  fn size(&self) -> usize;

  /// Removes every element from the queue.
  fn clear(&mut self);

  /// Dequeues an element, or fails with `EmptyError::Dequeue`.
  fn try_dequeue(&mut self) -> Result<T, EmptyError> {
    self.dequeue().ok_or(EmptyError::Dequeue)
  }

  /// Returns the head element, or fails with `EmptyError::Front`.
  fn try_front(&self) -> Result<T, EmptyError>
  where T: Clone {
    self.front().ok_or(EmptyError::Front)
  }

  /// Dequeues an element, returning `T::default()` when the queue is
  /// empty.
  fn dequeue_or_default(&mut self) -> T
  where T: Default {
    self.dequeue().unwrap_or_default()
  }

  /// Like `front`, but returns `T::default()` when the queue is empty.
  fn front_or_default(&self) -> T
  where T: Clone + Default {
    self.front().unwrap_or_default()
  }
}

/// The specification for a thread-safe `Queue<T>`.
pub trait ConcurrentQueue<T>: Queue<T> + Clone + Send + Sync {}
