//! crawlex CLI: search directories for names matching a shell-glob pattern.

use std::io::{self, Write};
use std::process;

use clap::Parser;

use crawlex::cli::{parse_exit_code, Cli};
use crawlex::{crawl, report, CrawlexError};

fn main() {
    // Diagnostic lines render as "LEVEL: message" on stderr, so worker
    // warnings and errors carry the documented "ERROR:"/"WARN:" prefixes.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();

    // Invalid arguments exit 1 like any other config error; clap's own
    // default of 2 is reserved here for unrecoverable system failures.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = parse_exit_code(&e);
            let _ = e.print();
            process::exit(code);
        }
    };
    if let Err(e) = run(cli) {
        eprintln!("ERROR: {e}");
        process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CrawlexError> {
    let config = cli.into_config()?;
    let results = crawl(&config)?;

    let stdout = io::stdout();
    report::display(&mut stdout.lock(), &results, &config).map_err(CrawlexError::Output)
}
