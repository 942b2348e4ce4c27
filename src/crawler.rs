use std::fs;
use std::path::{PathBuf, MAIN_SEPARATOR};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use log::{error, warn};

use crate::config::CrawlConfig;
use crate::error::CrawlexError;
use crate::matcher::Matcher;
use crate::queue::WorkQueue;
use crate::set::OrderedSet;

// ---------------------------------------------------------------------------
// CrawlTask
// ---------------------------------------------------------------------------

/// One directory to scan, plus its remaining recursion budget.
///
/// `path` always ends with the platform separator so child paths are built
/// by plain concatenation. A task is owned by exactly one worker at a time:
/// created at seeding or on sub-directory discovery, handed off through the
/// [`WorkQueue`], dropped once its directory has been scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTask {
    pub path: String,

    /// `-1` means unlimited; `0` means scan this directory but do not
    /// enqueue its sub-directories; positive values decrement per level.
    pub depth: i32,
}

impl CrawlTask {
    pub fn new(path: String, depth: i32) -> Self {
        Self { path, depth }
    }

    /// The budget a discovered sub-directory inherits. Unlimited stays
    /// unlimited; bounded budgets lose one level and never go below zero
    /// here because callers only descend when `depth != 0`.
    fn child_depth(&self) -> i32 {
        if self.depth < 0 {
            -1
        } else {
            self.depth - 1
        }
    }
}

// ---------------------------------------------------------------------------
// CrawlStats
// ---------------------------------------------------------------------------

/// Counters for a completed crawl. Diagnostic only — not part of the
/// stdout contract.
#[derive(Debug)]
pub struct CrawlStats {
    /// Regular files whose names were tested.
    pub files: usize,

    /// Directories scanned (tasks completed, including unreadable ones).
    pub dirs: usize,

    /// Wall-clock time from pool start to quiescence.
    pub duration: Duration,
}

// ---------------------------------------------------------------------------
// Worker pool
// ---------------------------------------------------------------------------

/// Runs `config.threads` workers against `queue` until it is exhausted,
/// inserting matches into `results`.
///
/// All workers execute the same loop; none is special. The pool returns
/// only after every worker has observed exhaustion and joined, at which
/// point `results` is fully populated and stable.
pub fn run(
    config: &CrawlConfig,
    matcher: &dyn Matcher,
    queue: &WorkQueue<CrawlTask>,
    results: &OrderedSet,
) -> CrawlStats {
    let files = AtomicUsize::new(0);
    let dirs = AtomicUsize::new(0);
    let start = Instant::now();

    thread::scope(|scope| {
        for _ in 0..config.threads.max(1) {
            scope.spawn(|| worker_loop(config, matcher, queue, results, &files, &dirs));
        }
    });

    CrawlStats {
        files: files.load(Ordering::Relaxed),
        dirs: dirs.load(Ordering::Relaxed),
        duration: start.elapsed(),
    }
}

/// A single worker: pop tasks until the queue reports exhaustion. An
/// unreadable directory is logged and skipped — it never takes down the
/// pool.
fn worker_loop(
    config: &CrawlConfig,
    matcher: &dyn Matcher,
    queue: &WorkQueue<CrawlTask>,
    results: &OrderedSet,
    files: &AtomicUsize,
    dirs: &AtomicUsize,
) {
    while let Some(task) = queue.pop() {
        dirs.fetch_add(1, Ordering::Relaxed);
        let reader = match fs::read_dir(&task.path) {
            Ok(reader) => reader,
            Err(e) => {
                // Error level so the line reaches stderr as "ERROR: ...";
                // the task is abandoned but the pool keeps going.
                error!(
                    "{}",
                    CrawlexError::Io {
                        path: PathBuf::from(&task.path),
                        source: e,
                    }
                );
                continue;
            }
        };
        scan_directory(reader, &task, config, matcher, queue, results, files);
    }
}

/// Scans one open directory: sub-directories become new tasks (and, with
/// check-folders, candidate matches); regular files are tested against the
/// matcher; symlinks, devices and other entry types are skipped silently.
fn scan_directory(
    reader: fs::ReadDir,
    task: &CrawlTask,
    config: &CrawlConfig,
    matcher: &dyn Matcher,
    queue: &WorkQueue<CrawlTask>,
    results: &OrderedSet,
    files: &AtomicUsize,
) {
    for entry in reader {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("failed to read an entry under {} - {e}", task.path);
                continue;
            }
        };

        // read_dir never yields the `.`/`..` pseudo-entries, so only the
        // hidden-prefix rule applies here.
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') && !config.show_hidden {
            continue;
        }

        // file_type() on a DirEntry does not follow symlinks, so a link to
        // a directory is classified (and skipped) as a symlink.
        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(e) => {
                warn!("failed to stat {}{name} - {e}", task.path);
                continue;
            }
        };

        if file_type.is_dir() {
            if task.depth != 0 {
                queue.push(CrawlTask::new(
                    format!("{}{}{}", task.path, name, MAIN_SEPARATOR),
                    task.child_depth(),
                ));
            }
            if config.check_folders && matcher.is_match(&name) != config.invert_match {
                results.add(format!("{}{}{}", task.path, name, MAIN_SEPARATOR));
            }
        } else if file_type.is_file() {
            files.fetch_add(1, Ordering::Relaxed);
            if matcher.is_match(&name) != config.invert_match {
                results.add(format!("{}{}", task.path, name));
            }
        }
    }
}
