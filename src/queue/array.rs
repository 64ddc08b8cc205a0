use std::collections::VecDeque;
use std::fmt::{self, Display, Formatter};
use crate::print::{self, Print};
use super::*;

/// A sequential `Queue<T>` backed by a `VecDeque<T>`.
#[derive(Debug, Clone)]
pub struct ArrayQueue<T> {
  elems: VecDeque<T>,
}

impl<T> ArrayQueue<T> {
  /// Iterates over the elements from head to tail.
  pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
    self.elems.iter()
  }
}

impl<T> Queue<T> for ArrayQueue<T> {
  fn new() -> Self {
    Self {
      elems: VecDeque::new(),
    }
  }

  fn enqueue(&mut self, elem: T) {
    self.elems.push_back(elem)
  }

  fn dequeue(&mut self) -> Option<T> {
    self.elems.pop_front()
  }

  fn front(&self) -> Option<T>
  where T: Clone {
    self.elems.front().cloned()
  }

  fn is_empty(&self) -> bool {
    self.elems.is_empty()
  }

  fn size(&self) -> usize {
    self.elems.len()
  }

  fn clear(&mut self) {
    self.elems.clear()
  }
}

impl<T> Default for ArrayQueue<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Display> Display for ArrayQueue<T> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    print::fmt_seq(f, &self.elems)
  }
}

impl<T: Display> Print for ArrayQueue<T> {}
