//! URL handling for mailsift
//!
//! Provides scheme defaulting for spreadsheet-supplied URLs, host
//! extraction for the same-host crawl check and WHOIS lookups, and
//! normalization used as the crawl's visited-set key.

mod normalize;

pub use normalize::normalize_url;

use crate::{UrlError, UrlResult};
use url::Url;

/// Ensures a URL string carries an HTTP(S) scheme
///
/// Spreadsheet cells routinely hold bare hosts like `example.com`. Those
/// are prefixed with `http://` so they parse; URLs that already start with
/// `http://` or `https://` pass through unchanged.
///
/// # Examples
///
/// ```
/// use mailsift::url::ensure_scheme;
///
/// assert_eq!(ensure_scheme("example.com"), "http://example.com");
/// assert_eq!(ensure_scheme("https://example.com"), "https://example.com");
/// ```
pub fn ensure_scheme(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

/// Extracts the lowercased host from a URL string
///
/// A missing scheme is tolerated (see [`ensure_scheme`]).
///
/// # Arguments
///
/// * `raw` - The URL string
///
/// # Returns
///
/// * `Ok(String)` - The lowercased host
/// * `Err(UrlError)` - The URL does not parse or has no host
pub fn extract_host(raw: &str) -> UrlResult<String> {
    let with_scheme = ensure_scheme(raw);
    let url = Url::parse(&with_scheme).map_err(|e| UrlError::Parse(e.to_string()))?;
    url.host_str()
        .map(|h| h.to_lowercase())
        .ok_or(UrlError::MissingHost)
}

/// Returns true if two URLs share the same host
///
/// Used by the shallow crawl to decide whether an outbound link stays
/// within the seed site. Hosts are compared after lowercasing; a `www.`
/// prefix on either side is ignored.
pub fn same_host(a: &Url, b: &Url) -> bool {
    match (a.host_str(), b.host_str()) {
        (Some(ha), Some(hb)) => strip_www(&ha.to_lowercase()) == strip_www(&hb.to_lowercase()),
        _ => false,
    }
}

fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}
