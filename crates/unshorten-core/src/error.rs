//! Resolution failures.

/// Placeholder reason used when a status code has no registered reason phrase.
pub const UNRECOGNIZED_STATUS: &str = "Unrecognized HTTP status code";

/// Why a URL could not be resolved.
///
/// Every failure path of [`crate::resolver::resolve`] ends up here, so callers
/// handle input, remote, transport and interrupt cases from one `match`.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Input was empty or whitespace only.
    #[error("no URL given")]
    NoUrl,
    /// Input did not start with `http://` or `https://`.
    #[error("HTTP or HTTPS URLs only: {0}")]
    UnsupportedScheme(String),
    /// Server answered with a status outside 2xx/3xx.
    #[error("{code} {reason}: {url}")]
    Status {
        code: u32,
        reason: &'static str,
        url: String,
    },
    /// libcurl failed before a status code was available (DNS, connect, timeout, protocol).
    #[error(transparent)]
    Transport(#[from] curl::Error),
    /// SIGINT arrived while the probe was in flight.
    #[error("interrupted")]
    Interrupted,
}

impl ResolveError {
    /// True for failures that should end the process quietly with exit code 0.
    pub fn is_interruption(&self) -> bool {
        matches!(self, ResolveError::Interrupted)
    }
}
