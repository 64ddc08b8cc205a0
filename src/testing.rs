//! Test harness shared by the container modules.
//!
//! A `Tester` wraps a container together with a weighted table of
//! operations. The runners below drive a tester with randomly chosen
//! operations, either for a fixed number of steps (checking the container
//! against a model as it goes) or for a fixed amount of time (reporting
//! throughput). `run_concurrent` spawns scoped threads for the thread-safe
//! variants.

use std::time::{Duration, Instant};
use rand::Rng;
use rand::rngs::ThreadRng;

/// An operation a `Tester` can choose to perform.
pub trait TestOp: Copy + Clone {}

/// Chooses an operation from `ops`, where each operation is paired with
/// its probability. The probabilities should sum to one.
pub fn choose_op<O: TestOp>(rng: &mut ThreadRng, ops: &[(O, f64)]) -> O {
  let f: f64 = rng.gen();
  let mut acc = 0.0;

  for &(op, p) in ops {
    acc += p;
    if f < acc {
      return op;
    }
  }

  ops[ops.len() - 1].0
}

/// Generates `n` small random arguments. The range is kept narrow so that
/// dictionary tests hit existing keys often.
pub fn gen_args(rng: &mut ThreadRng, n: usize) -> Vec<i32> {
  (0..n).map(|_| rng.gen_range(0..32)).collect()
}

pub trait Tester {
  /// Performs one randomly chosen operation, asserting on the outcome.
  fn execute_op(&mut self, rng: &mut ThreadRng);
}

/// Drives `tester` through `n_ops` random operations.
pub fn test_model<T: Tester>(mut tester: T, n_ops: usize) {
  let mut rng = rand::thread_rng();
  for _ in 0..n_ops {
    tester.execute_op(&mut rng);
  }
}

/// Drives `tester` for `t_secs` seconds and prints the time per operation.
pub fn test_throughput<T: Tester>(mut tester: T, t_secs: f64) {
  let mut rng = rand::thread_rng();
  let mut n_ops: u64 = 0;
  let duration = Duration::from_secs_f64(t_secs);
  let start_time = Instant::now();

  let elapsed = loop {
    tester.execute_op(&mut rng);
    n_ops += 1;

    let d = start_time.elapsed();
    if d >= duration {
      break d
    }
  };

  let ns_elapsed = elapsed.as_nanos() as f64;
  let ns_per_op = ns_elapsed / (n_ops as f64);

  println!();
  println!("Time elapsed (s): {}", elapsed.as_secs_f64());
  println!("Ops completed:    {}", n_ops);
  println!("Time per op (ns): {}", ns_per_op);
}

/// Runs `f(tid)` on `n_threads` scoped threads and collects the results in
/// thread order.
pub fn run_concurrent<F, R>(n_threads: usize, f: F) -> Vec<R>
where F: Fn(usize) -> R + Sync, R: Send {
  crossbeam::scope(|scope| {
    let handles: Vec<_> = (0..n_threads).map(|tid| {
      let f = &f;
      scope.spawn(move |_| f(tid))
    }).collect();

    handles.into_iter().map(|h| {
      h.join().expect("worker thread panicked")
    }).collect()
  }).expect("scope panicked")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Copy, Clone, Debug, PartialEq)]
  enum Coin {
    Heads,
    Tails,
  }

  impl TestOp for Coin {}

  #[test]
  fn choose_op_respects_certain_weights() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
      assert_eq!(choose_op(&mut rng, &[(Coin::Heads, 1.0), (Coin::Tails, 0.0)]), Coin::Heads);
      assert_eq!(choose_op(&mut rng, &[(Coin::Heads, 0.0), (Coin::Tails, 1.0)]), Coin::Tails);
    }
  }

  #[test]
  fn run_concurrent_keeps_thread_order() {
    let results = run_concurrent(8, |tid| tid * 2);
    assert_eq!(results, vec![0, 2, 4, 6, 8, 10, 12, 14]);
  }
}
