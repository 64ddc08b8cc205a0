use std::fmt::{self, Display, Formatter};
use crate::print::{self, Print};
use super::*;

/// A simple array-based `Stack<T>`. Uses Rust's `Vec<T>`.
///
/// The top of the stack is the last element of the vector. Rendering with
/// `Display` lists the elements bottom to top.
#[derive(Debug, Clone)]
pub struct ArrayStack<T> {
  elems: Vec<T>,
}

impl<T> ArrayStack<T> {
  /// Iterates over the elements from bottom to top.
  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.elems.iter()
  }
}

impl<T> Stack<T> for ArrayStack<T> {
  fn new() -> Self {
    Self {
      elems: Vec::new(),
    }
  }

  fn push(&mut self, elem: T) {
    self.elems.push(elem)
  }

  fn pop(&mut self) -> Option<T> {
    self.elems.pop()
  }

  fn peek(&self) -> Option<T>
  where T: Clone {
    self.elems.last().cloned()
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

impl<T> Default for ArrayStack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Display> Display for ArrayStack<T> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    print::fmt_seq(f, &self.elems)
  }
}

impl<T: Display> Print for ArrayStack<T> {}
