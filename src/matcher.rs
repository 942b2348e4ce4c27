use regex::{Regex, RegexBuilder};

use crate::error::CrawlexError;

/// Decides whether an entry name is a match.
///
/// The crawl engine only ever sees this capability — it never touches the
/// pattern syntax or the regex machinery behind it. Implement it for custom
/// matching logic (substring search, extension filters, fuzzy matching);
/// the built-in [`PatternMatcher`] covers the shell-glob case.
///
/// # Thread Safety
///
/// `Send + Sync` are required — one matcher is shared across all crawl
/// workers and called concurrently on different names.
pub trait Matcher: Send + Sync {
    /// Returns `true` if an entry with this name should be reported.
    fn is_match(&self, name: &str) -> bool;
}

/// Regex-backed matcher built from an already-translated pattern.
///
/// The pattern is expected to be anchored regex (see [`glob_to_regex`]);
/// compilation happens once, before any worker starts.
#[derive(Debug)]
pub struct PatternMatcher {
    regex: Regex,
}

impl PatternMatcher {
    /// Compile `pattern`, optionally case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`CrawlexError::InvalidPattern`] carrying the regex engine's
    /// message when the pattern does not compile.
    pub fn compile(pattern: &str, case_insensitive: bool) -> Result<Self, CrawlexError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|e| CrawlexError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { regex })
    }
}

impl Matcher for PatternMatcher {
    fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Translates a shell-glob pattern into an anchored regex:
/// `*` → `.*`, `?` → `.`, literal `.` → `\.`, wrapped in `^`/`$`.
///
/// Other characters pass through untouched, so regex syntax mixed into the
/// glob still works (and still fails compilation if malformed).
pub fn glob_to_regex(glob: &str) -> String {
    let mut out = String::with_capacity(glob.len() + 2);
    out.push('^');
    for ch in glob.chars() {
        match ch {
            '.' => out.push_str("\\."),
            '?' => out.push('.'),
            '*' => out.push_str(".*"),
            _ => out.push(ch),
        }
    }
    out.push('$');
    out
}
