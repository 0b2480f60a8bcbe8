//! HTTP HEAD probe.
//!
//! Uses the curl crate (libcurl) to send one HEAD request without following
//! redirects, and reports the status code plus the `Location` header of the
//! final response block.

mod parse;

use std::fmt;
use std::time::Duration;

use uuid::Uuid;

use crate::error::ResolveError;
use crate::interrupt;

/// Link embedded in the `User-Agent` so server operators can identify the client.
pub const REFERENCE_URL: &str = "https://crates.io/crates/unshorten";

/// Timeouts and proxy bypass applied to the probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    /// Hosts that skip any proxy from the environment, in libcurl `NOPROXY` syntax ("*" for all).
    pub no_proxy: Option<String>,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(30),
            no_proxy: None,
        }
    }
}

/// Headers sent with every probe. Build a fresh one per request.
#[derive(Debug, Clone)]
pub struct RequestHeaders {
    pub user_agent: String,
    pub request_id: Uuid,
    pub runtime: String,
}

impl RequestHeaders {
    /// New header set with a freshly generated request id.
    pub fn new() -> Self {
        Self {
            user_agent: format!(
                "unshorten/{} (+{})",
                env!("CARGO_PKG_VERSION"),
                REFERENCE_URL
            ),
            request_id: Uuid::new_v4(),
            runtime: format!("libcurl/{}", curl::Version::get().version()),
        }
    }

    /// Header lines in `Name: value` form, in the order they are sent.
    pub fn lines(&self) -> Vec<String> {
        vec![
            "DNT: 1".to_string(),
            format!("User-Agent: {}", self.user_agent),
            format!("X-Request-Id: {}", self.request_id),
            format!("X-Client-Runtime: {}", self.runtime),
        ]
    }
}

impl Default for RequestHeaders {
    fn default() -> Self {
        Self::new()
    }
}

/// What the server answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub code: u32,
    /// `Location` header value, if the final response carried a non-empty one.
    pub location: Option<String>,
}

impl fmt::Display for ProbeResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "HTTP {} -> {}", self.code, location),
            None => write!(f, "HTTP {}", self.code),
        }
    }
}

/// Anything that can answer a HEAD request for a URL.
///
/// The resolver only depends on this trait; tests substitute a canned prober.
pub trait Prober {
    fn head(&self, url: &str, headers: &RequestHeaders) -> Result<ProbeResponse, ResolveError>;
}

/// libcurl-backed prober.
#[derive(Debug, Clone, Default)]
pub struct CurlProber {
    opts: ProbeOptions,
}

impl CurlProber {
    pub fn new(opts: ProbeOptions) -> Self {
        Self { opts }
    }
}

impl Prober for CurlProber {
    /// Performs the HEAD request in the current thread.
    ///
    /// Redirects are not followed. SIGINT during the transfer yields
    /// [`ResolveError::Interrupted`].
    fn head(&self, url: &str, headers: &RequestHeaders) -> Result<ProbeResponse, ResolveError> {
        let mut lines: Vec<String> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.nobody(true)?; // HEAD request
        easy.follow_location(false)?;
        easy.connect_timeout(self.opts.connect_timeout)?;
        easy.timeout(self.opts.timeout)?;
        easy.progress(true)?;
        if let Some(hosts) = &self.opts.no_proxy {
            easy.noproxy(hosts)?;
        }

        let mut list = curl::easy::List::new();
        for line in headers.lines() {
            list.append(&line)?;
        }
        easy.http_headers(list)?;

        let _armed = interrupt::arm();
        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                lines.push(parse::header_line(data));
                true
            })?;
            transfer.progress_function(|_, _, _, _| !interrupt::requested())?;
            if let Err(err) = transfer.perform() {
                if err.is_aborted_by_callback() && interrupt::requested() {
                    return Err(ResolveError::Interrupted);
                }
                return Err(err.into());
            }
        }

        let code = easy.response_code()?;
        tracing::debug!("HEAD {} returned HTTP {} ({} header lines)", url, code, lines.len());

        Ok(ProbeResponse {
            code,
            location: parse::location(&lines),
        })
    }
}
