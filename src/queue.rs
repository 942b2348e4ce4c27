//! Termination-aware work queue.
//!
//! A plain blocking queue cannot tell a worker "no more work will ever
//! arrive" apart from "the queue is momentarily empty" when consumers are
//! also producers: a blocked worker must keep waiting as long as any peer
//! still holds a task it might expand into new work. [`WorkQueue`] folds
//! that bookkeeping into the queue itself with an `active` count, so the
//! pool needs no external supervisor to shut down.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard};

/// Thread-safe FIFO of work items with built-in termination detection.
///
/// `active` counts workers not currently blocked in [`pop`](Self::pop).
/// A worker decrements it immediately before waiting and re-increments it
/// after a successful dequeue; the queue is permanently exhausted exactly
/// when `active == 0` and nothing is pending. The worker that drives the
/// count to zero and finds the queue empty is the one that declares
/// exhaustion, and every other waiter is woken to observe the same state.
pub struct WorkQueue<T> {
    state: Mutex<QueueState<T>>,
    available: Condvar,
}

struct QueueState<T> {
    pending: VecDeque<T>,
    active: usize,
}

impl<T> WorkQueue<T> {
    /// Creates a queue for a pool of `workers` consumers. The count seeds
    /// `active`, so every worker must eventually call [`pop`](Self::pop).
    /// A zero count is treated as one.
    pub fn new(workers: usize) -> Self {
        Self {
            state: Mutex::new(QueueState {
                pending: VecDeque::new(),
                active: workers.max(1),
            }),
            available: Condvar::new(),
        }
    }

    /// Appends `item` and wakes all waiters.
    ///
    /// Broadcast rather than single-wake: the new item may satisfy any one
    /// of several blocked workers, and each must re-check the exhaustion
    /// condition for itself.
    pub fn push(&self, item: T) {
        let mut state = self.lock();
        state.pending.push_back(item);
        self.available.notify_all();
    }

    /// Removes and returns the head item, blocking while the queue is empty
    /// but another worker could still produce work. Returns `None` once the
    /// queue is exhausted: empty with no active workers left.
    ///
    /// A `None` is final for the calling worker: its `active` slot is not
    /// restored, and any further `pop` from it returns `None` again
    /// without disturbing the count.
    pub fn pop(&self) -> Option<T> {
        let mut state = self.lock();

        state.active = state.active.saturating_sub(1);
        while state.pending.is_empty() && state.active > 0 {
            state = self
                .available
                .wait(state)
                .unwrap_or_else(|e| e.into_inner());
        }

        let item = state.pending.pop_front();
        if item.is_some() {
            state.active += 1;
        }
        // Wake the remaining waiters either way: after a dequeue they must
        // re-evaluate, and after exhaustion they must all observe it.
        self.available.notify_all();
        item
    }

    /// Number of items currently waiting. Zero on clean termination.
    pub fn len(&self) -> usize {
        self.lock().pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().pending.is_empty()
    }

    // A worker that panics mid-task poisons the mutex; the queue state
    // itself is never left inconsistent by a panic inside these methods,
    // so the surviving workers keep the protocol intact.
    fn lock(&self) -> MutexGuard<'_, QueueState<T>> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn fifo_order_single_worker() {
        let queue = WorkQueue::new(1);
        queue.push("a");
        queue.push("b");
        queue.push("c");
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some("a"));
        assert_eq!(queue.pop(), Some("b"));
        assert_eq!(queue.pop(), Some("c"));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn exhaustion_on_empty_queue() {
        let queue: WorkQueue<u32> = WorkQueue::new(1);
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn pop_after_exhaustion_stays_exhausted() {
        // Exhaustion is final: extra pops return None immediately instead
        // of blocking or corrupting the active count.
        let queue: WorkQueue<u32> = WorkQueue::new(1);
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.pop(), None);

        // Even with an item pushed afterwards, a straggler can drain it
        // and then observe exhaustion again.
        queue.push(7);
        assert_eq!(queue.pop(), Some(7));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn all_workers_released_when_no_producer_remains() {
        // Liveness: with no pushes, every worker's pop must return None
        // rather than block forever (this test hangs on regression).
        for workers in 1..=8 {
            let queue: Arc<WorkQueue<u32>> = Arc::new(WorkQueue::new(workers));
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    let queue = Arc::clone(&queue);
                    thread::spawn(move || queue.pop())
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), None);
            }
        }
    }

    #[test]
    fn dynamic_growth_drains_completely() {
        // Consumers are also producers: each item below a fan-out budget
        // pushes two children. All items must be consumed and every worker
        // must then see exhaustion.
        const WORKERS: usize = 4;
        const DEPTH: u32 = 6;

        let queue: Arc<WorkQueue<u32>> = Arc::new(WorkQueue::new(WORKERS));
        queue.push(0);

        let handles: Vec<_> = (0..WORKERS)
            .map(|_| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || {
                    let mut consumed = 0usize;
                    while let Some(depth) = queue.pop() {
                        consumed += 1;
                        if depth < DEPTH {
                            queue.push(depth + 1);
                            queue.push(depth + 1);
                        }
                        // Widen the race window between pop and push.
                        thread::sleep(Duration::from_micros(50));
                    }
                    consumed
                })
            })
            .collect();

        let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        // A binary tree of DEPTH levels: 2^(DEPTH+1) - 1 items.
        assert_eq!(total, (1 << (DEPTH + 1)) - 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn late_push_wakes_blocked_worker() {
        // One worker blocks on an empty queue while its peer still holds
        // its active slot; the peer's push must release it.
        let queue: Arc<WorkQueue<&str>> = Arc::new(WorkQueue::new(2));

        let waiter = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                let mut seen = Vec::new();
                while let Some(item) = queue.pop() {
                    seen.push(item);
                }
                seen
            })
        };

        let producer = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                // Give the waiter time to block before producing.
                thread::sleep(Duration::from_millis(20));
                queue.push("late");
                let mut seen = Vec::new();
                while let Some(item) = queue.pop() {
                    seen.push(item);
                }
                seen
            })
        };

        let mut all = waiter.join().unwrap();
        all.extend(producer.join().unwrap());
        assert_eq!(all, vec!["late"]);
    }
}
