//! Logging init: stderr only, quiet unless debug mode or `RUST_LOG` asks otherwise.

use tracing_subscriber::EnvFilter;

use crate::config::Settings;

/// Filter used for the given debug flag when `RUST_LOG` is not set.
fn default_filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("off")
    }
}

/// Initialize structured logging to stderr.
///
/// Debug mode always wins over `RUST_LOG` so diagnostics show up when asked for.
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(settings: &Settings) {
    let env_filter = if settings.debug {
        default_filter(true)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(false))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();

    tracing::debug!("debug logging enabled");
}
