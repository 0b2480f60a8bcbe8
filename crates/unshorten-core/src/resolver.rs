//! Turn a possibly-shortened URL into the URL it points at.
//!
//! One HEAD probe, no redirect chasing: a 2xx keeps the input, a 3xx yields
//! its `Location`, everything else is an error.

use http::StatusCode;

use crate::error::{ResolveError, UNRECOGNIZED_STATUS};
use crate::probe::{CurlProber, ProbeOptions, ProbeResponse, Prober, RequestHeaders};

/// Resolve `url` with a libcurl probe.
pub fn resolve(url: &str, opts: &ProbeOptions) -> Result<String, ResolveError> {
    resolve_with(&CurlProber::new(opts.clone()), url)
}

/// Resolve `url` through any [`Prober`].
pub fn resolve_with<P: Prober>(prober: &P, url: &str) -> Result<String, ResolveError> {
    validate(url)?;

    let headers = RequestHeaders::new();
    tracing::debug!(?headers, "probing {}", url);

    let response = prober.head(url, &headers)?;
    tracing::debug!("{} answered {}", url, response);

    classify(url, response)
}

/// Reject input that must not reach the network.
pub fn validate(url: &str) -> Result<(), ResolveError> {
    if url.trim().is_empty() {
        return Err(ResolveError::NoUrl);
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ResolveError::UnsupportedScheme(url.to_string()));
    }
    Ok(())
}

/// Map a probe response onto the resolved URL or a status error.
pub fn classify(url: &str, response: ProbeResponse) -> Result<String, ResolveError> {
    match response.code {
        200..=299 => Ok(url.to_string()),
        300..=399 => match response.location {
            Some(location) => Ok(location),
            None => {
                tracing::debug!("HTTP {} without Location; keeping {}", response.code, url);
                Ok(url.to_string())
            }
        },
        code => Err(ResolveError::Status {
            code,
            reason: reason_phrase(code),
            url: url.to_string(),
        }),
    }
}

/// Canonical reason phrase for `code`, or a fixed placeholder when unregistered.
pub fn reason_phrase(code: u32) -> &'static str {
    u16::try_from(code)
        .ok()
        .and_then(|c| StatusCode::from_u16(c).ok())
        .and_then(|s| s.canonical_reason())
        .unwrap_or(UNRECOGNIZED_STATUS)
}
