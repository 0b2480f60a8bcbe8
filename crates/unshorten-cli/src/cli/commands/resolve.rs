//! `unshorten [URL]`: resolve one URL and print the result.

use anyhow::{Context, Result};
use std::io::{self, Read, Write};
use unshorten_core::config::UnshortenConfig;
use unshorten_core::resolver;

/// Read the URL from `input`: the first non-empty line, trimmed.
///
/// Returns an empty string for empty input; the resolver rejects it.
pub fn read_url<R: Read>(mut input: R) -> Result<String> {
    let mut data = String::new();
    input
        .read_to_string(&mut data)
        .context("reading URL from standard input")?;
    Ok(data
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string())
}

pub fn run_resolve(cfg: &UnshortenConfig, url: &str) -> Result<()> {
    let resolved = resolver::resolve(url, &cfg.probe_options())?;
    write_resolved(io::stdout().lock(), &resolved)
}

fn write_resolved<W: Write>(mut out: W, resolved: &str) -> Result<()> {
    writeln!(out, "{}", resolved).context("writing to standard output")?;
    out.flush().context("writing to standard output")
}
