//! # crawlex
//!
//! Multithreaded filesystem search — glob patterns, bounded depth, sorted
//! deduplicated results.
//!
//! crawlex owns the concurrent crawl engine: a termination-aware
//! [`WorkQueue`] of directory tasks, a pool of identical workers that both
//! consume and produce work, and a concurrent [`OrderedSet`] collecting
//! matches. Pattern syntax lives behind the [`Matcher`] trait, so the
//! engine itself only ever asks "does this name match?".
//!
//! Termination needs no coordinator: the queue counts workers that are not
//! blocked waiting, and reports exhaustion exactly when that count hits
//! zero with nothing pending — the last active worker that finds nothing to
//! do is the one that declares the crawl over.
//!
//! # Quick Start
//!
//! ```no_run
//! use crawlex::{crawl, CrawlConfig, glob_to_regex};
//!
//! let config = CrawlConfig {
//!     pattern: glob_to_regex("*.txt"),
//!     roots: vec!["./".to_string()],
//!     threads: 4,
//!     ..CrawlConfig::default()
//! };
//!
//! let results = crawl(&config).unwrap();
//! for path in results.snapshot() {
//!     println!("{path}");
//! }
//! println!("Found {} match(es)", results.len());
//! ```
//!
//! # Custom Matchers
//!
//! Implement [`Matcher`] and run the pool directly for matching logic the
//! glob translation cannot express:
//!
//! ```
//! use crawlex::Matcher;
//!
//! struct ExtensionMatcher(String);
//!
//! impl Matcher for ExtensionMatcher {
//!     fn is_match(&self, name: &str) -> bool {
//!         name.rsplit('.').next().is_some_and(|e| e.eq_ignore_ascii_case(&self.0))
//!     }
//! }
//! ```

#![forbid(unsafe_code)]

pub mod cli;
pub mod crawler;
pub mod matcher;
pub mod path;
pub mod queue;
pub mod report;
pub mod set;

mod config;
mod error;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use config::{CrawlConfig, DEPTH_UNLIMITED};
pub use crawler::{CrawlStats, CrawlTask};
pub use error::CrawlexError;
pub use matcher::{glob_to_regex, Matcher, PatternMatcher};
pub use queue::WorkQueue;
pub use set::{OrderedSet, SortOrder};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Compile the configured pattern, seed one task per root, run the worker
/// pool to quiescence, and return the populated (now frozen) result set.
///
/// # Errors
///
/// Returns [`CrawlexError::InvalidPattern`] if the pattern does not
/// compile, and [`CrawlexError::InvalidThreadCount`] for a zero worker
/// count. Per-directory I/O failures during the crawl are logged and
/// skipped, never returned.
pub fn crawl(config: &CrawlConfig) -> Result<OrderedSet, CrawlexError> {
    if config.threads == 0 {
        return Err(CrawlexError::InvalidThreadCount(0));
    }
    let matcher = PatternMatcher::compile(&config.pattern, config.case_insensitive)?;

    let order = if config.reverse {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };
    let results = OrderedSet::new(order);

    let queue = WorkQueue::new(config.threads);
    for root in &config.roots {
        queue.push(CrawlTask::new(root.clone(), config.max_depth));
    }

    let stats = crawler::run(config, &matcher, &queue, &results);
    log::debug!(
        "scanned {} dir(s), {} file(s) in {:?}",
        stats.dirs,
        stats.files,
        stats.duration
    );

    Ok(results)
}
