use clap::Parser;

use crate::config::{CrawlConfig, DEPTH_UNLIMITED};
use crate::error::CrawlexError;
use crate::matcher::glob_to_regex;
use crate::path::ensure_trailing_sep;

/// Multithreaded filesystem search.
#[derive(Debug, Parser)]
#[command(name = "crawlex", version)]
#[command(about = "Recursively search directories for entries matching a shell-glob pattern.")]
pub struct Cli {
    /// Shell-glob pattern to match entry names against (`*`, `?`, literal `.`).
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Do not ignore entries starting with '.'
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Conflicting search: report entries that do NOT match the pattern.
    #[arg(long, short = 'c')]
    pub conflict: bool,

    /// Recurse no more than N subdirectory levels below each search root.
    #[arg(long = "max-depth", short = 'D', value_name = "N", allow_negative_numbers = true)]
    pub max_depth: Option<i32>,

    /// Include folder names in the search.
    #[arg(long = "check-folders", short = 'F')]
    pub check_folders: bool,

    /// With --list, print human readable sizes (e.g. 16K, 8M, 4G).
    #[arg(long = "human-readable", short = 'H')]
    pub human_readable: bool,

    /// Case-insensitive search.
    #[arg(long = "ignore-case", short = 'i')]
    pub ignore_case: bool,

    /// Long list format: prefix each result with its size.
    #[arg(long, short = 'l')]
    pub list: bool,

    /// Display no more than N results (the total count is still reported).
    #[arg(long = "max-results", short = 'M', value_name = "N", allow_negative_numbers = true)]
    pub max_results: Option<i64>,

    /// Print only the number of matches, not the matches themselves.
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Reverse the sort order when displaying matches.
    #[arg(long, short = 'r')]
    pub reverse: bool,

    /// Add DIR to the search path. Repeatable; defaults to the current directory.
    #[arg(long, short = 's', value_name = "DIR")]
    pub scan: Vec<String>,

    /// Perform the search with N worker threads.
    #[arg(long, short = 'X', value_name = "N")]
    pub threads: Option<usize>,
}

impl Cli {
    /// Validates the parsed arguments and translates them into a
    /// [`CrawlConfig`]: glob → anchored regex, roots normalized to a
    /// trailing separator (default `./`), out-of-range depths clamped to
    /// unlimited.
    ///
    /// # Errors
    ///
    /// [`CrawlexError::InvalidThreadCount`] for an explicit zero thread
    /// count. Pattern syntax errors surface later, at compile time in
    /// [`PatternMatcher::compile`](crate::matcher::PatternMatcher::compile).
    pub fn into_config(self) -> Result<CrawlConfig, CrawlexError> {
        let threads = self.threads.unwrap_or(1);
        if threads == 0 {
            return Err(CrawlexError::InvalidThreadCount(threads));
        }

        let roots = if self.scan.is_empty() {
            vec![ensure_trailing_sep(".")]
        } else {
            self.scan.iter().map(|p| ensure_trailing_sep(p)).collect()
        };

        Ok(CrawlConfig {
            pattern: glob_to_regex(&self.pattern),
            roots,
            max_depth: self.max_depth.unwrap_or(DEPTH_UNLIMITED).max(DEPTH_UNLIMITED),
            threads,
            max_results: self.max_results.unwrap_or(0),
            show_hidden: self.all,
            invert_match: self.conflict,
            check_folders: self.check_folders,
            case_insensitive: self.ignore_case,
            quiet: self.quiet,
            reverse: self.reverse,
            list_format: self.list,
            human_sizes: self.human_readable,
        })
    }
}

/// Exit code for an argv parse failure: real usage errors are
/// configuration errors (exit 1, like a bad pattern or thread count),
/// while `--help`/`--version` output is a successful exit (0).
pub fn parse_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("crawlex").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&["*.txt"]).into_config().unwrap();
        assert_eq!(config.pattern, "^.*\\.txt$");
        assert_eq!(config.roots, vec![ensure_trailing_sep(".")]);
        assert_eq!(config.max_depth, DEPTH_UNLIMITED);
        assert_eq!(config.threads, 1);
        assert_eq!(config.max_results, 0);
        assert!(!config.show_hidden && !config.invert_match && !config.quiet);
    }

    #[test]
    fn roots_are_normalized() {
        let config = parse(&["x", "-s", "/tmp", "-s", "/var/"]).into_config().unwrap();
        assert_eq!(config.roots, vec!["/tmp/".to_string(), "/var/".to_string()]);
    }

    #[test]
    fn zero_threads_rejected() {
        let err = parse(&["x", "-X", "0"]).into_config().unwrap_err();
        assert!(matches!(err, CrawlexError::InvalidThreadCount(0)));
    }

    #[test]
    fn deep_negative_depth_clamped_to_unlimited() {
        let config = parse(&["x", "-D", "-5"]).into_config().unwrap();
        assert_eq!(config.max_depth, DEPTH_UNLIMITED);
    }

    #[test]
    fn malformed_argv_exits_1_but_help_exits_0() {
        let err = Cli::try_parse_from(["crawlex", "--bogus-flag"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), 1);

        let err = Cli::try_parse_from(["crawlex"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), 1, "missing pattern is a usage error");

        let help = Cli::try_parse_from(["crawlex", "--help"]).unwrap_err();
        assert_eq!(parse_exit_code(&help), 0);

        let version = Cli::try_parse_from(["crawlex", "--version"]).unwrap_err();
        assert_eq!(parse_exit_code(&version), 0);
    }

    #[test]
    fn flag_surface() {
        let config = parse(&["x", "-a", "-c", "-F", "-i", "-l", "-H", "-q", "-r"])
            .into_config()
            .unwrap();
        assert!(config.show_hidden);
        assert!(config.invert_match);
        assert!(config.check_folders);
        assert!(config.case_insensitive);
        assert!(config.list_format);
        assert!(config.human_sizes);
        assert!(config.quiet);
        assert!(config.reverse);
    }
}
