//! `-v` / `-c`: static banners, no network.

use anyhow::{Context, Result};
use std::io::{self, Write};

pub const REVISION: &str = env!("UNSHORTEN_REVISION");

pub const COPYRIGHT: &str = "\
Copyright (c) 2026 Unshorten Contributors
Licensed under either of the Apache License, Version 2.0 or the MIT license, at your option.
This program comes with ABSOLUTELY NO WARRANTY.";

pub fn version_line() -> String {
    format!("unshorten {} (rev {})", env!("CARGO_PKG_VERSION"), REVISION)
}

pub fn print_version() -> Result<()> {
    writeln!(io::stdout().lock(), "{}", version_line()).context("writing to standard output")
}

pub fn print_copyright() -> Result<()> {
    writeln!(io::stdout().lock(), "{}", COPYRIGHT).context("writing to standard output")
}
