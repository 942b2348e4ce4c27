//! Path-string helpers for the crawl.
//!
//! Tasks and results travel as plain strings built by concatenation
//! (`parent + name + separator`), so roots must be normalized to carry a
//! trailing separator before seeding.

use std::path::MAIN_SEPARATOR;

/// Appends the platform separator to `path` if it is not already present.
pub fn ensure_trailing_sep(path: &str) -> String {
    if path.ends_with(MAIN_SEPARATOR) {
        path.to_string()
    } else {
        format!("{path}{MAIN_SEPARATOR}")
    }
}

/// Removes a single trailing platform separator from `path` if present.
/// Used when a stored directory result needs to be handed to `fs::metadata`.
pub fn strip_trailing_sep(path: &str) -> &str {
    path.strip_suffix(MAIN_SEPARATOR).unwrap_or(path)
}

/// Renders a byte count in the `ls -lh` style: `512`, `16K`, `8M`, `4G`, `2T`.
/// Values round to one decimal below 10 units, whole units above.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [char; 4] = ['K', 'M', 'G', 'T'];

    if bytes < 1024 {
        return bytes.to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }

    let rendered = if value < 10.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.0}")
    };
    let rendered = rendered.strip_suffix(".0").unwrap_or(&rendered);
    // `unit` counts completed divisions, so it is at least 1 here and
    // indexes the unit the value was last divided into.
    format!("{}{}", rendered, UNITS[unit - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_sep_added_once() {
        let sep = MAIN_SEPARATOR;
        assert_eq!(ensure_trailing_sep("foo"), format!("foo{sep}"));
        let already = format!("foo{sep}");
        assert_eq!(ensure_trailing_sep(&already), already);
    }

    #[test]
    fn strip_undoes_ensure() {
        let normalized = ensure_trailing_sep("some/dir");
        assert_eq!(strip_trailing_sep(&normalized), "some/dir");
        assert_eq!(strip_trailing_sep("plain"), "plain");
    }

    #[test]
    fn human_sizes() {
        assert_eq!(human_size(0), "0");
        assert_eq!(human_size(512), "512");
        assert_eq!(human_size(16 * 1024), "16K");
        assert_eq!(human_size(8 * 1024 * 1024), "8M");
        assert_eq!(human_size(4 * 1024 * 1024 * 1024), "4G");
        assert_eq!(human_size(1536), "1.5K");
    }

    #[test]
    fn human_sizes_above_terabytes_keep_the_unit() {
        let tib = 1024u64.pow(4);
        assert_eq!(human_size(2 * tib), "2T");
        // Past the last unit the number grows instead of the label.
        assert_eq!(human_size(1025 * tib), "1025T");
    }
}
