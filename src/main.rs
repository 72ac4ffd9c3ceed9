use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;

use regrep::{scan, Regex};

/// Search input lines for a regular expression.
#[derive(Parser, Debug)]
#[command(name = "regrep", version, about = "Search input lines for a regular expression")]
struct Cli {
    /// Interpret PATTERN as an extended regular expression
    #[arg(short = 'E', long = "extended-regexp")]
    extended: bool,

    /// Search every regular file under the named directories
    #[arg(short = 'r', long = "recursive")]
    recursive: bool,

    /// Trace match attempts on stderr
    #[arg(long)]
    debug: bool,

    /// Pattern to search for
    pattern: String,

    /// Files to search (directories with -r); reads one line from stdin when empty
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("regrep: {err:#}");
            process::exit(2);
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    if !cli.extended {
        bail!("only extended patterns are supported (pass -E)");
    }

    let mut regex = Regex::new(&cli.pattern)
        .map_err(|err| anyhow!("invalid pattern '{}': {err}", cli.pattern))?;
    if cli.debug {
        regex = regex.with_debug(true);
    }

    if cli.paths.is_empty() {
        if cli.recursive {
            bail!("-r requires at least one directory");
        }
        return match_stdin(&regex);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut matched = false;

    if cli.recursive {
        for root in &cli.paths {
            for file in scan::walk(root)? {
                matched |= scan::scan_file(&regex, &file, true, &mut out)?;
            }
        }
    } else {
        let prefix = cli.paths.len() > 1;
        for path in &cli.paths {
            if path.is_dir() {
                bail!("'{}' is a directory (use -r to search it)", path.display());
            }
            matched |= scan::scan_file(&regex, path, prefix, &mut out)?;
        }
    }
    Ok(matched)
}

fn match_stdin(regex: &Regex) -> Result<bool> {
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("cannot read stdin")?;
    let line = line.trim_end_matches(|c| c == '\n' || c == '\r');
    Ok(regex.is_match(line))
}
