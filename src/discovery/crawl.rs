//! Shallow same-domain crawl
//!
//! Starting from the seed page's outbound links, follows only links whose
//! host matches the seed host, up to a configured number of extra hops,
//! visiting each normalized URL at most once. Traversal is an explicit
//! worklist in link-appearance order; the per-site deadline is checked at
//! every dequeue.

use crate::config::DiscoveryConfig;
use crate::discovery::fetcher::{fetch_page, FetchOutcome};
use crate::discovery::Deadline;
use crate::extract::{slice_page, EmailPattern};
use crate::url::{normalize_url, same_host};
use reqwest::Client;
use std::collections::{BTreeSet, HashSet, VecDeque};
use url::Url;

/// Crawls same-host links reachable from the seed page
///
/// The seed page itself is assumed to be scanned already; this walks its
/// links. Each visited page gets the body scan. Stops when the worklist
/// drains, the page cap is hit, or the deadline expires.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `seed` - The seed URL (host reference for the same-host check)
/// * `seed_links` - Outbound links of the seed page, appearance order
/// * `pattern` - The shared email matcher
/// * `config` - Depth and page-count bounds
/// * `deadline` - The per-site budget deadline
pub async fn crawl_same_host(
    client: &Client,
    seed: &Url,
    seed_links: &[Url],
    pattern: &EmailPattern,
    config: &DiscoveryConfig,
    deadline: &Deadline,
) -> BTreeSet<String> {
    let mut emails = BTreeSet::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut worklist: VecDeque<(Url, u32)> = VecDeque::new();

    // The seed counts as visited so a self-link is never re-fetched
    if let Ok(normalized) = normalize_url(seed.as_str()) {
        visited.insert(normalized.to_string());
    }

    for link in seed_links {
        enqueue(link, 1, seed, &mut visited, &mut worklist);
    }

    let mut pages_visited = 0usize;

    while let Some((url, depth)) = worklist.pop_front() {
        if deadline.expired() {
            tracing::debug!("Deadline hit after {} crawled pages", pages_visited);
            break;
        }

        if pages_visited >= config.crawl_max_pages {
            tracing::debug!("Crawl page cap ({}) reached", config.crawl_max_pages);
            break;
        }

        let body = match fetch_page(client, url.as_str()).await {
            FetchOutcome::Content { body, .. } => body,
            FetchOutcome::NoContent { reason } => {
                tracing::debug!("Crawl fetch failed for {}: {}", url, reason);
                continue;
            }
        };
        pages_visited += 1;

        let slices = slice_page(&body, &url);
        emails.extend(pattern.extract(&slices.body_text));

        if depth < config.crawl_depth {
            for link in &slices.links {
                enqueue(link, depth + 1, seed, &mut visited, &mut worklist);
            }
        }
    }

    emails
}

/// Adds a link to the worklist if it is same-host and not yet seen
fn enqueue(
    link: &Url,
    depth: u32,
    seed: &Url,
    visited: &mut HashSet<String>,
    worklist: &mut VecDeque<(Url, u32)>,
) {
    if !same_host(link, seed) {
        return;
    }

    let key = match normalize_url(link.as_str()) {
        Ok(n) => n.to_string(),
        Err(_) => return,
    };

    if visited.insert(key) {
        worklist.push_back((link.clone(), depth));
    }
}
