/// Depth value meaning "recurse without bound".
pub const DEPTH_UNLIMITED: i32 = -1;

/// Everything a crawl run needs, constructed once and shared read-only by
/// every worker and the reporter. No process-wide state: the CLI (or an
/// embedding caller) builds one of these and passes it down.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Anchored regex to match entry names against (already translated
    /// from shell-glob syntax, see [`matcher::glob_to_regex`](crate::matcher::glob_to_regex)).
    pub pattern: String,

    /// Directories to seed the crawl with. Each ends with the platform
    /// separator; defaults to `./` when none are given.
    pub roots: Vec<String>,

    /// Recursion budget per root: [`DEPTH_UNLIMITED`] for no bound, `0` to
    /// scan the root itself without descending, positive to descend that
    /// many levels.
    pub max_depth: i32,

    /// Worker thread count, at least 1.
    pub threads: usize,

    /// Cap on printed results; `<= 0` means unlimited. The reported total
    /// always reflects the full set regardless of this cap.
    pub max_results: i64,

    /// Do not skip entries whose name starts with `.`.
    pub show_hidden: bool,

    /// Report entries that do NOT match the pattern.
    pub invert_match: bool,

    /// Also test directory names against the pattern.
    pub check_folders: bool,

    pub case_insensitive: bool,

    /// Suppress per-match lines; the summary count still prints.
    pub quiet: bool,

    /// Sort results descending instead of ascending.
    pub reverse: bool,

    /// Prefix each printed result with its size (list format).
    pub list_format: bool,

    /// Render sizes as `16K` / `8M` / `4G` instead of raw bytes.
    pub human_sizes: bool,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            roots: Vec::new(),
            max_depth: DEPTH_UNLIMITED,
            threads: 1,
            max_results: 0,
            show_hidden: false,
            invert_match: false,
            check_folders: false,
            case_insensitive: false,
            quiet: false,
            reverse: false,
            list_format: false,
            human_sizes: false,
        }
    }
}
