use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::probe::ProbeOptions;

/// Environment variable that switches on debug diagnostics.
pub const DEBUG_ENV: &str = "UNSHORTEN_DEBUG";
/// Environment variable that points at an explicit config file.
pub const CONFIG_ENV: &str = "UNSHORTEN_CONFIG";

/// Optional configuration loaded from `~/.config/unshorten/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnshortenConfig {
    /// Seconds allowed for establishing the connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole probe, connect included.
    pub timeout_secs: u64,
    /// Hosts reached without any proxy from the environment (libcurl `NOPROXY` syntax).
    pub no_proxy: Option<String>,
}

impl Default for UnshortenConfig {
    fn default() -> Self {
        let opts = ProbeOptions::default();
        Self {
            connect_timeout_secs: opts.connect_timeout.as_secs(),
            timeout_secs: opts.timeout.as_secs(),
            no_proxy: opts.no_proxy,
        }
    }
}

impl UnshortenConfig {
    /// Reject values libcurl would read as "no limit".
    pub fn validate(&self) -> Result<()> {
        if self.connect_timeout_secs == 0 {
            bail!("connect_timeout_secs must be greater than zero");
        }
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be greater than zero");
        }
        Ok(())
    }

    pub fn probe_options(&self) -> ProbeOptions {
        ProbeOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            no_proxy: self.no_proxy.clone(),
        }
    }
}

/// Process-wide environment read once at startup and passed to logging and the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub debug: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            debug: debug_from_env(),
        }
    }
}

/// Whether `UNSHORTEN_DEBUG` holds a truthy value.
pub fn debug_from_env() -> bool {
    env::var(DEBUG_ENV).map(|v| is_truthy(&v)).unwrap_or(false)
}

/// Accepts 1, y, yes, true, on, j, ja (any case, surrounding whitespace ignored).
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "y" | "yes" | "true" | "on" | "j" | "ja"
    )
}

/// Config file location: `UNSHORTEN_CONFIG` if set, else the XDG config file if one exists.
///
/// Without a usable home directory there is no XDG file, which is not an error.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    match xdg::BaseDirectories::with_prefix("unshorten") {
        Ok(xdg_dirs) => xdg_dirs.find_config_file("config.toml"),
        Err(err) => {
            tracing::debug!("no XDG config directory ({}); using defaults", err);
            None
        }
    }
}

/// Load configuration, falling back to defaults when no file exists.
///
/// Never creates the file.
pub fn load() -> Result<UnshortenConfig> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(UnshortenConfig::default()),
    }
}

pub fn load_from(path: &Path) -> Result<UnshortenConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let cfg: UnshortenConfig = toml::from_str(&data)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config file {}", path.display()))?;
    tracing::debug!("loaded config from {}: {:?}", path.display(), cfg);
    Ok(cfg)
}
