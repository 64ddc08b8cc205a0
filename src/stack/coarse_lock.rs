use std::fmt::{self, Display, Formatter};
use std::sync::Arc;
use parking_lot::Mutex;
use crate::print::Print;
use super::*;

/// A `ConcurrentStack<T>` that uses a single mutex to wrap an
/// `ArrayStack<T>`.
pub struct CoarseLockStack<T> {
  arc: Arc<Mutex<ArrayStack<T>>>,
}

impl<T> Stack<T> for CoarseLockStack<T> {
  fn new() -> Self {
    Self {
      arc: Arc::new(Mutex::new(ArrayStack::new())),
    }
  }

  fn push(&mut self, elem: T) {
    self.arc.lock().push(elem);
  }

  fn pop(&mut self) -> Option<T> {
    self.arc.lock().pop()
  }

  fn peek(&self) -> Option<T>
  where T: Clone {
    self.arc.lock().peek()
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

impl<T> Clone for CoarseLockStack<T> {
  fn clone(&self) -> Self {
    Self {
      arc: self.arc.clone()
    }
  }
}

impl<T: Display> Display for CoarseLockStack<T> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    Display::fmt(&*self.arc.lock(), f)
  }
}

impl<T: Display> Print for CoarseLockStack<T> {}

impl<T> ConcurrentStack<T> for CoarseLockStack<T>
where T: Send {}
