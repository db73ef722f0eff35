//! Page-content extraction strategies
//!
//! Each strategy maps a slice of fetched content to a set of candidate
//! addresses through the shared [`EmailPattern`]. Strategies are
//! independent and compose by set union; a strategy that has nothing to
//! say contributes the empty set.

use crate::config::StrategyConfig;
use crate::discovery::fetcher::{fetch_page, FetchOutcome};
use crate::discovery::Deadline;
use crate::extract::{slice_page, EmailPattern, PageSlices};
use reqwest::Client;
use std::collections::BTreeSet;
use url::Url;

/// Well-known relative paths the subpage scan re-fetches
pub const SUBPAGE_PATHS: &[&str] = &["contact", "about", "team"];

/// Runs the enabled slice strategies over one parsed page
///
/// Covers body, metadata, script, comment, and mailto scans. The subpage
/// and crawl strategies trigger their own fetches and live elsewhere.
///
/// # Arguments
///
/// * `slices` - The pre-sliced page content
/// * `strategies` - Which strategies are enabled
/// * `pattern` - The shared email matcher
pub fn scan_slices(
    slices: &PageSlices,
    strategies: &StrategyConfig,
    pattern: &EmailPattern,
) -> BTreeSet<String> {
    let mut emails = BTreeSet::new();

    if strategies.body {
        emails.extend(pattern.extract(&slices.body_text));
    }

    if strategies.metadata {
        emails.extend(pattern.extract(&slices.metadata));
    }

    if strategies.scripts {
        emails.extend(pattern.extract(&slices.scripts));
    }

    if strategies.comments {
        emails.extend(pattern.extract(&slices.comments));
    }

    if strategies.mailto {
        // One address per anchor, validated whole rather than re-scanned
        for target in &slices.mailto_targets {
            if pattern.is_match(target) {
                emails.insert(target.clone());
            }
        }
    }

    emails
}

/// Re-runs the body and metadata scans against well-known subpages
///
/// Each of [`SUBPAGE_PATHS`] is resolved against the site's base URL and
/// fetched once. Fetch failures are swallowed; an expired deadline stops
/// further fetches.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `base_url` - The seed URL the paths are resolved against
/// * `pattern` - The shared email matcher
/// * `deadline` - The per-site budget deadline
pub async fn scan_subpages(
    client: &Client,
    base_url: &Url,
    pattern: &EmailPattern,
    deadline: &Deadline,
) -> BTreeSet<String> {
    let mut emails = BTreeSet::new();

    // Body + metadata only on subpages
    let subpage_strategies = StrategyConfig {
        body: true,
        metadata: true,
        scripts: false,
        comments: false,
        mailto: false,
        ..StrategyConfig::default()
    };

    for path in SUBPAGE_PATHS {
        if deadline.expired() {
            tracing::debug!("Deadline hit, skipping remaining subpages");
            break;
        }

        let subpage_url = match base_url.join(path) {
            Ok(u) => u,
            Err(_) => continue,
        };

        match fetch_page(client, subpage_url.as_str()).await {
            FetchOutcome::Content { body, final_url, .. } => {
                let slices = slice_page(&body, &final_url);
                emails.extend(scan_slices(&slices, &subpage_strategies, pattern));
            }
            FetchOutcome::NoContent { reason } => {
                tracing::debug!("Subpage {} yielded nothing: {}", subpage_url, reason);
            }
        }
    }

    emails
}
