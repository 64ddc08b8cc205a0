use std::fmt::{self, Display, Formatter};
use std::hash::Hash;
use std::sync::Arc;
use parking_lot::Mutex;
use crate::print::Print;
use super::*;

/// A `ConcurrentDict<K,V>` that uses a single mutex to wrap a `HtDict<K,V>`.
pub struct CoarseLockHtDict<K,V> {
  arc: Arc<Mutex<HtDict<K,V>>>,
}

impl<K,V> Dict<K,V> for CoarseLockHtDict<K,V>
where K: Eq + Hash {
  fn new() -> Self {
    Self {
      arc: Arc::new(Mutex::new(HtDict::new())),
    }
  }

  fn get(&self, k: &K) -> Option<V>
  where V: Clone {
    self.arc.lock().get(k)
  }

  fn add(&mut self, k: K, v: V) -> Option<V> {
    self.arc.lock().add(k, v)
  }

  fn remove(&mut self, k: &K) -> Option<V> {
    self.arc.lock().remove(k)
  }

  fn contains(&self, k: &K) -> bool {
    self.arc.lock().contains(k)
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

impl<K,V> Clone for CoarseLockHtDict<K,V> {
  fn clone(&self) -> Self {
    Self {
      arc: self.arc.clone(),
    }
  }
}

impl<K,V> Display for CoarseLockHtDict<K,V>
where K: Display, V: Display {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    Display::fmt(&*self.arc.lock(), f)
  }
}

impl<K,V> Print for CoarseLockHtDict<K,V>
where K: Display, V: Display {}

impl<K,V> ConcurrentDict<K,V> for CoarseLockHtDict<K,V>
where K: Eq + Hash + Send, V: Send {}
