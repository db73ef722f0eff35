//! The discovery engine: composed strategies under a wall-clock budget
//!
//! One call per website. The strategy pipeline runs on a spawned task
//! that writes into a shared accumulator; the caller waits on it with a
//! timeout equal to the per-site budget. If the budget expires the task
//! is aborted and whatever accumulated so far is returned. The engine
//! never raises a fault to the caller.

use crate::config::{Config, StrategyConfig};
use crate::discovery::crawl::crawl_same_host;
use crate::discovery::fetcher::{build_http_client, fetch_page, FetchOutcome};
use crate::discovery::strategies::{scan_slices, scan_subpages};
use crate::discovery::whois::whois_lookup;
use crate::discovery::Deadline;
use crate::extract::{slice_page, EmailPattern, PageSlices};
use crate::url::{ensure_scheme, extract_host};
use crate::Result;
use reqwest::Client;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use url::Url;

/// Outcome of discovery for one website
#[derive(Debug, Clone)]
pub struct DiscoveryReport {
    /// All distinct candidate addresses found within the budget
    pub emails: BTreeSet<String>,

    /// True if the site hit its wall-clock budget
    pub timed_out: bool,

    /// How long discovery took
    pub elapsed: Duration,
}

/// Runs the enabled strategies for one website at a time
pub struct DiscoveryEngine {
    client: Client,
    config: Arc<Config>,
    pattern: EmailPattern,
}

impl DiscoveryEngine {
    /// Creates an engine from a validated configuration
    pub fn new(config: Config) -> Result<Self> {
        let client = build_http_client(&config.user_agent, config.discovery.page_timeout_secs)?;
        Ok(Self {
            client,
            config: Arc::new(config),
            pattern: EmailPattern::new(),
        })
    }

    /// The engine's HTTP client, shared with the sheet loader
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Discovers email addresses for one website
    ///
    /// Always returns within the configured site budget plus scheduling
    /// slack. Partial results survive a budget expiry: the pipeline
    /// appends into a shared accumulator, so whatever was collected before
    /// the abort is what the report carries.
    ///
    /// # Arguments
    ///
    /// * `website` - The website URL as it appeared in the spreadsheet
    pub async fn discover(&self, website: &str) -> DiscoveryReport {
        let started = Instant::now();
        let budget = Duration::from_secs(self.config.discovery.site_budget_secs);

        let seed = match Url::parse(&ensure_scheme(website)) {
            Ok(u) => u,
            Err(e) => {
                tracing::warn!("Skipping unparseable website {}: {}", website, e);
                return DiscoveryReport {
                    emails: BTreeSet::new(),
                    timed_out: false,
                    elapsed: started.elapsed(),
                };
            }
        };

        let found: Arc<Mutex<BTreeSet<String>>> = Arc::new(Mutex::new(BTreeSet::new()));
        let deadline = Deadline::after(budget);

        let task = tokio::spawn(run_pipeline(
            self.client.clone(),
            Arc::clone(&self.config),
            self.pattern.clone(),
            seed,
            Arc::clone(&found),
            deadline,
        ));
        let abort_handle = task.abort_handle();

        let timed_out = match tokio::time::timeout(budget, task).await {
            Ok(Ok(())) => false,
            Ok(Err(join_error)) => {
                // A panicking strategy must not take the run down with it
                tracing::warn!("Discovery task failed: {}", join_error);
                false
            }
            Err(_) => {
                abort_handle.abort();
                true
            }
        };

        // Snapshot whatever the pipeline managed to collect
        let emails = found.lock().map(|set| set.clone()).unwrap_or_default();

        DiscoveryReport {
            emails,
            timed_out,
            elapsed: started.elapsed(),
        }
    }
}

/// The sequential strategy pipeline for one website
///
/// Results are pushed into `found` after each strategy, so an abort
/// between strategies loses nothing already collected. The deadline is
/// checked before every strategy that would start new network work.
async fn run_pipeline(
    client: Client,
    config: Arc<Config>,
    pattern: EmailPattern,
    seed: Url,
    found: Arc<Mutex<BTreeSet<String>>>,
    deadline: Deadline,
) {
    let strategies = &config.strategies;

    // Seed page fetch and slice scans. Skipped entirely when neither a
    // page strategy nor the crawl would read the result.
    let slices = if strategies.any_page_strategy() || strategies.crawl {
        match fetch_page(&client, seed.as_str()).await {
            FetchOutcome::Content {
                final_url, body, ..
            } => slice_page(&body, &final_url),
            FetchOutcome::NoContent { reason } => {
                tracing::debug!("No content for {}: {}", seed, reason);
                PageSlices::default()
            }
        }
    } else {
        PageSlices::default()
    };

    append(&found, scan_slices(&slices, strategies, &pattern));

    if strategies.subpages && !deadline.expired() {
        let emails = scan_subpages(&client, &seed, &pattern, &deadline).await;
        append(&found, emails);
    }

    if strategies.crawl && !deadline.expired() {
        let emails = crawl_same_host(
            &client,
            &seed,
            &slices.links,
            &pattern,
            &config.discovery,
            &deadline,
        )
        .await;
        append(&found, emails);
    }

    #[cfg(feature = "rendered")]
    if strategies.rendered && !deadline.expired() {
        let emails = crate::discovery::rendered::scan_rendered(
            &seed,
            Duration::from_millis(config.discovery.settle_delay_ms),
            deadline.remaining(),
            &pattern,
        )
        .await;
        append(&found, emails);
    }

    let nothing_found = found.lock().map(|set| set.is_empty()).unwrap_or(false);
    if should_attempt_whois(strategies, nothing_found, &deadline) {
        if let Ok(host) = extract_host(seed.as_str()) {
            let timeout = Duration::from_secs(config.discovery.page_timeout_secs);
            if let Some(record) = whois_lookup(&host, timeout).await {
                append(&found, pattern.extract(&record));
            }
        }
    }
}

/// Gate for the WHOIS fallback
///
/// WHOIS is strictly a fallback: it runs only when the strategy is
/// enabled, every other enabled strategy came up empty, and there is
/// budget left.
fn should_attempt_whois(
    strategies: &StrategyConfig,
    nothing_found: bool,
    deadline: &Deadline,
) -> bool {
    strategies.whois_fallback && nothing_found && !deadline.expired()
}

/// Merges a strategy's contribution into the shared accumulator
fn append(found: &Arc<Mutex<BTreeSet<String>>>, emails: BTreeSet<String>) {
    if emails.is_empty() {
        return;
    }
    if let Ok(mut set) = found.lock() {
        set.extend(emails);
    }
}
