use std::fmt::{self, Display, Formatter};
use std::sync::Arc;
use parking_lot::Mutex;
use crate::print::Print;
use super::*;

/// A `ConcurrentQueue<T>` that uses a single mutex to wrap an
/// `ArrayQueue<T>`.
pub struct CoarseLockQueue<T> {
  arc: Arc<Mutex<ArrayQueue<T>>>,
}

impl<T> Queue<T> for CoarseLockQueue<T> {
  fn new() -> Self {
    Self {
      arc: Arc::new(Mutex::new(ArrayQueue::new())),
    }
  }

  fn enqueue(&mut self, elem: T) {
    self.arc.lock().enqueue(elem);
  }

  fn dequeue(&mut self) -> Option<T> {
    self.arc.lock().dequeue()
  }

  fn front(&self) -> Option<T>
  where T: Clone {
    self.arc.lock().front()
  }

  fn is_empty(&self) -> bool {
    self.arc.lock().is_empty()
  }

  fn size(&self) -> usize {
    self.arc.lock().size()
  }

  fn clear(&mut self) {
    self.arc.lock().clear();
  }
}

impl<T> Clone for CoarseLockQueue<T> {
  fn clone(&self) -> Self {
    Self {
      arc: self.arc.clone()
    }
  }
}

impl<T: Display> Display for CoarseLockQueue<T> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    Display::fmt(&*self.arc.lock(), f)
  }
}

impl<T: Display> Print for CoarseLockQueue<T> {}

impl<T> ConcurrentQueue<T> for CoarseLockQueue<T>
where T: Send {}
