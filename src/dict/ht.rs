use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::hash::Hash;
use crate::print::{self, Print};
use super::*;

/// A `Dict<K,V>` based on Rust's `HashMap`.
#[derive(Debug, Clone)]
pub struct HtDict<K,V> {
  ht: HashMap<K,V>,
}

impl<K,V> HtDict<K,V> {
  /// Iterates over the key-value pairs in an unspecified order.
  pub fn iter(&self) -> std::collections::hash_map::Iter<'_, K, V> {
    self.ht.iter()
  }
}

impl<K,V> Dict<K,V> for HtDict<K,V>
where K: Eq + Hash {
  fn new() -> Self {
    Self {
      ht: HashMap::new()
    }
  }

  fn get(&self, k: &K) -> Option<V>
  where V: Clone {
    self.ht.get(k).cloned()
  }

  fn add(&mut self, k: K, v: V) -> Option<V> {
    self.ht.insert(k, v)
  }

  fn remove(&mut self, k: &K) -> Option<V> {
    self.ht.remove(k)
  }

  fn contains(&self, k: &K) -> bool {
    self.ht.contains_key(k)
  }

  fn is_empty(&self) -> bool {
    self.ht.is_empty()
  }

  fn size(&self) -> usize {
    self.ht.len()
  }

  fn clear(&mut self) {
    self.ht.clear()
  }
}

impl<K,V> Default for HtDict<K,V>
where K: Eq + Hash {
  fn default() -> Self {
    Self::new()
  }
}

impl<K,V> Display for HtDict<K,V>
where K: Display, V: Display {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    print::fmt_assoc(f, &self.ht)
  }
}

impl<K,V> Print for HtDict<K,V>
where K: Display, V: Display {}
