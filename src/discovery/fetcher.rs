//! HTTP fetcher for the discovery strategies
//!
//! One GET per invocation, a fixed connection/read timeout, redirects
//! followed, and an identifying user-agent header. Network failures are
//! not faults here: scanning is best-effort, so every failure mode folds
//! into an explicit "no content" outcome.

use crate::config::UserAgentConfig;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Result of a fetch operation
///
/// Non-2xx statuses still carry their body: error pages get scanned like
/// any other content.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The server returned a body
    Content {
        /// Final URL after redirects
        final_url: Url,
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// Nothing to scan (network error, timeout, unreadable body)
    NoContent {
        /// Short description of what went wrong
        reason: String,
    },
}

/// Builds the HTTP client shared by all strategies
///
/// The user agent is `name/version (+contact-url; contact-email)` when
/// contact details are configured, `name/version` otherwise.
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout_secs` - Per-request connection/read timeout
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout_secs: u64,
) -> Result<Client, reqwest::Error> {
    let user_agent = if config.contact_url.is_empty() && config.contact_email.is_empty() {
        format!("{}/{}", config.client_name, config.client_version)
    } else {
        format!(
            "{}/{} (+{}; {})",
            config.client_name, config.client_version, config.contact_url, config.contact_email
        )
    };

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL once
///
/// Exactly one outbound GET. Redirects are followed by the client's
/// default policy. Any error, including the per-request timeout, becomes
/// `NoContent`; the caller never sees an Err.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &str) -> FetchOutcome {
    let response = match client.get(url).send().await {
        Ok(r) => r,
        Err(e) => {
            let reason = if e.is_timeout() {
                "request timeout".to_string()
            } else if e.is_connect() {
                "connection failed".to_string()
            } else {
                e.to_string()
            };
            tracing::debug!("Fetch failed for {}: {}", url, reason);
            return FetchOutcome::NoContent { reason };
        }
    };

    let status = response.status().as_u16();
    let final_url = response.url().clone();

    match response.text().await {
        Ok(body) => FetchOutcome::Content {
            final_url,
            status,
            body,
        },
        Err(e) => {
            tracing::debug!("Body read failed for {}: {}", url, e);
            FetchOutcome::NoContent {
                reason: e.to_string(),
            }
        }
    }
}
