use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard};

/// Sort direction for an [`OrderedSet`], fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Thread-safe sorted, deduplicated set of path strings.
///
/// Any number of crawl workers insert concurrently; a single mutex keeps
/// insertion atomic, which is plenty here since filesystem I/O (not lock
/// contention) dominates the crawl. Once the workers have joined, the set
/// is frozen and [`snapshot`](Self::snapshot) hands out the final ordering
/// for display.
#[derive(Debug)]
pub struct OrderedSet {
    entries: Mutex<BTreeSet<String>>,
    order: SortOrder,
}

impl OrderedSet {
    pub fn new(order: SortOrder) -> Self {
        Self {
            entries: Mutex::new(BTreeSet::new()),
            order,
        }
    }

    /// Inserts `path` if absent. Returns `true` if it was newly inserted,
    /// `false` if an equal path was already present — concurrent inserts of
    /// the same path leave exactly one survivor.
    pub fn add(&self, path: String) -> bool {
        self.lock().insert(path)
    }

    /// Number of distinct paths held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// The set's contents at call time, in comparator order (lexicographic,
    /// reversed for [`SortOrder::Descending`]).
    pub fn snapshot(&self) -> Vec<String> {
        let entries = self.lock();
        match self.order {
            SortOrder::Ascending => entries.iter().cloned().collect(),
            SortOrder::Descending => entries.iter().rev().cloned().collect(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BTreeSet<String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}
