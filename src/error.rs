//! Errors signalled by the containers in this crate.

use thiserror::Error;

/// An operation that needs at least one element was performed on an
/// empty container.
///
/// Only stacks and queues produce this error. Dictionary operations are
/// total over their key domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EmptyError {
  #[error("Nothing to pop")]
  Pop,
  #[error("Nothing to peek at")]
  Peek,
  #[error("Nothing to dequeue")]
  Dequeue,
  #[error("Nothing at the front")]
  Front,
}
