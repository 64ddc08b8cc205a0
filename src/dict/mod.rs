//! Dictionary implementations
//!
//! This module provides one sequential dictionary, the `HtDict`, which is
//! implemented using Rust's `HashMap` type. Keys are unique: adding a key
//! that is already present replaces its value. No iteration order is
//! promised, including the order in which `Display` lists the entries.
//!
//! The `CoarseLockHtDict` uses a single mutex to wrap a `HtDict`.

mod ht;
mod coarse_lock_ht;

pub use self::ht::HtDict;
pub use self::coarse_lock_ht::CoarseLockHtDict;

/// The `Dict<K,V>` abstract data type.
pub trait Dict<K,V> {
  /// Creates a new, empty `Dict<K,V>`.
  fn new() -> Self;

  /// Returns the value associated with the given key, if present.
  fn get(&self, k: &K) -> Option<V>
  where V: Clone;

  /// Adds a key-value pair to the dictionary, replacing the value of an
  /// existing key. Returns the previous value, if present.
  fn add(&mut self, k: K, v: V) -> Option<V>;

  /// Removes the key from the dictionary. Returns the associated value,
  /// if present. Removing an absent key leaves the dictionary unchanged.
  fn remove(&mut self, k: &K) -> Option<V>;

  /// Predicate that tests if the key is present.
  fn contains(&self, k: &K) -> bool;

  /// Predicate that tests is the dictionary is empty.
  fn is_empty(&self) -> bool;

  /// Returns the number of key-value pairs in the dictionary.
  fn size(&self) -> usize;

  /// Removes every key-value pair.
  fn clear(&mut self);

  /// Returns the value for the key, or `V::default()` when the key is
  /// absent. An absent key and a key holding the default value look the
  /// same here; use `contains` to tell them apart.
  fn get_or_default(&self, k: &K) -> V
  where V: Clone + Default {
    self.get(k).unwrap_or_default()
  }
}

/// The specification for a thread-safe `Dict<K,V>`.
pub trait ConcurrentDict<K,V>: Dict<K,V> + Clone + Send + Sync {}
