//! # Per-Thread Replicas
//!
//! Hands each worker thread its own clone of a value, so that values with
//! interior scratch state (compiled regexes) are not shared across threads.

use core::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_THREAD_SLOT: AtomicUsize = AtomicUsize::new(0);

std::thread_local! {
    static THREAD_SLOT: usize = NEXT_THREAD_SLOT.fetch_add(1, Ordering::Relaxed);
}

/// A small, stable, per-thread number.
///
/// Threads are numbered in the order they first ask; numbers are never reused.
pub fn current_thread_slot() -> usize {
    THREAD_SLOT.with(|slot| *slot)
}

/// A fixed set of clones of one value, selected by [`current_thread_slot`].
///
/// Two threads may share a replica when there are more threads than replicas.
#[derive(Debug, Clone)]
pub struct ThreadReplicas<T> {
    replicas: Box<[T]>,
}

impl<T: Clone> ThreadReplicas<T> {
    /// Clone `value` once per available hardware thread.
    ///
    /// ## Arguments
    /// * `value` - the value to replicate.
    /// * `limit` - optional cap on the replica count.
    pub fn new(
        value: T,
        limit: Option<NonZeroUsize>,
    ) -> Self {
        let threads = std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN);
        let count = limit.map_or(threads, |limit| limit.min(threads));
        Self {
            replicas: vec![value; count.get()].into_boxed_slice(),
        }
    }
}

impl<T> ThreadReplicas<T> {
    /// The replica assigned to the calling thread.
    pub fn local(&self) -> &T {
        &self.replicas[current_thread_slot() % self.replicas.len()]
    }

    /// The number of replicas; never zero.
    pub fn count(&self) -> usize {
        self.replicas.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_slots() {
        let here = current_thread_slot();
        assert_eq!(current_thread_slot(), here);

        let there = std::thread::spawn(current_thread_slot).join().unwrap();
        assert_ne!(here, there);
    }

    #[test]
    fn test_replica_count() {
        let threads = std::thread::available_parallelism().unwrap().get();

        assert_eq!(ThreadReplicas::new('x', None).count(), threads);
        assert_eq!(ThreadReplicas::new('x', NonZeroUsize::new(1)).count(), 1);
        assert_eq!(
            ThreadReplicas::new('x', NonZeroUsize::new(threads + 1)).count(),
            threads
        );
    }

    #[test]
    fn test_local_is_stable_per_thread() {
        let replicas = ThreadReplicas::new(String::from("x"), None);

        let here: *const String = replicas.local();
        assert!(core::ptr::eq(here, replicas.local()));
        assert_eq!(replicas.local(), "x");

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let local: *const String = replicas.local();
                    assert!(core::ptr::eq(local, replicas.local()));
                    assert_eq!(replicas.local(), "x");
                });
            }
        });
    }
}
