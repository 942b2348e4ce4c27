use std::fs;
use std::io::{self, Write};

use crate::config::CrawlConfig;
use crate::path::{human_size, strip_trailing_sep};
use crate::set::OrderedSet;

/// Renders the frozen result set to `out`.
///
/// Empty set: a lone "No matches found" line. Otherwise one path per line
/// in the set's comparator order — suppressed entirely in quiet mode,
/// truncated after `max_results` entries when the cap is positive — then a
/// blank line and the total count, which always reflects the full set no
/// matter how many lines were actually printed.
pub fn display<W: Write>(out: &mut W, results: &OrderedSet, config: &CrawlConfig) -> io::Result<()> {
    if results.is_empty() {
        writeln!(out, "\nNo matches found")?;
        return Ok(());
    }

    let total = results.len();

    if !config.quiet {
        for (printed, path) in results.snapshot().iter().enumerate() {
            if config.max_results > 0 && printed as i64 >= config.max_results {
                break;
            }
            if config.list_format {
                write_listed(out, path, config.human_sizes)?;
            } else {
                writeln!(out, "{path}")?;
            }
        }
    }

    writeln!(out, "\nFound {total} match(es)")
}

/// List format: size column then path. Entries whose metadata cannot be
/// read (removed since the crawl, permissions) print without a size.
fn write_listed<W: Write>(out: &mut W, path: &str, human: bool) -> io::Result<()> {
    match fs::metadata(strip_trailing_sep(path)) {
        Ok(meta) => {
            let size = if human {
                human_size(meta.len())
            } else {
                meta.len().to_string()
            };
            writeln!(out, "{size:>10} {path}")
        }
        Err(_) => writeln!(out, "{:>10} {path}", "-"),
    }
}
