//! Human-readable rendering of containers.

use std::fmt::{self, Display, Formatter};

/// Containers that can write themselves to standard output.
///
/// The text is the container's `Display` rendering followed by a newline.
/// It is meant for a person reading a console, not for parsing.
pub trait Print: Display {
  fn print(&self) {
    println!("{}", self);
  }
}

/// Writes the elements of a sequence separated by single spaces.
pub(crate) fn fmt_seq<'a, T, I>(f: &mut Formatter, elems: I) -> fmt::Result
where T: Display + 'a, I: IntoIterator<Item = &'a T> {
  let mut first = true;
  for elem in elems {
    if !first {
      write!(f, " ")?;
    }
    write!(f, "{}", elem)?;
    first = false;
  }
  Ok(())
}

/// Writes key-value pairs as `{"k1":"v1", "k2":"v2"}`.
pub(crate) fn fmt_assoc<'a, K, V, I>(f: &mut Formatter, pairs: I) -> fmt::Result
where K: Display + 'a, V: Display + 'a, I: IntoIterator<Item = (&'a K, &'a V)> {
  write!(f, "{{")?;
  let mut first = true;
  for (k, v) in pairs {
    if !first {
      write!(f, ", ")?;
    }
    write!(f, "\"{}\":\"{}\"", k, v)?;
    first = false;
  }
  write!(f, "}}")
}
