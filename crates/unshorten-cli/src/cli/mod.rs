//! CLI for unshorten.

mod commands;

use anyhow::{anyhow, Result};
use clap::Parser;
use unshorten_core::config::{self, Settings};

use commands::{print_copyright, print_version, read_url, run_resolve};

/// Print the URL a shortened link points to.
#[derive(Debug, Parser)]
#[command(name = "unshorten")]
#[command(
    about = "Resolve a shortened URL with a single HEAD request",
    long_about = "Resolve a shortened URL with a single HEAD request.\n\n\
        Prints the redirect target for 3xx answers, the URL itself for 2xx answers, \
        and fails on anything else. Set UNSHORTEN_DEBUG=1 for diagnostics on stderr."
)]
pub struct Cli {
    /// Print name, version and revision, then exit.
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Print copyright and license notice, then exit.
    #[arg(short = 'c', long = "copyright")]
    pub copyright: bool,

    /// HTTP/HTTPS URL to resolve. Read from standard input when omitted.
    pub url: Option<String>,
}

/// Turn a clap usage error into a single-line error for the normal failure path.
///
/// Help output is not an error and exits 0 right here.
fn usage_error(err: clap::Error) -> anyhow::Error {
    if !err.use_stderr() {
        err.exit();
    }
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or("invalid arguments").trim();
    anyhow!("{}", first.strip_prefix("error: ").unwrap_or(first))
}

pub fn run_from_args(settings: &Settings) -> Result<()> {
    let argv: Vec<String> = std::env::args().collect();
    tracing::debug!("argv: {:?}", argv);
    tracing::debug!("settings: {:?}", settings);

    let cli = Cli::try_parse().map_err(usage_error)?;
    tracing::debug!("parsed arguments: {:?}", cli);

    if cli.version {
        return print_version();
    }
    if cli.copyright {
        return print_copyright();
    }

    let cfg = config::load()?;
    tracing::debug!("config: {:?}", cfg);

    let url = match cli.url {
        Some(url) => url,
        None => read_url(std::io::stdin().lock())?,
    };
    run_resolve(&cfg, &url)
}
