//! Email discovery engine
//!
//! For one website this module composes the enabled extraction strategies
//! (page scan, subpage scan, shallow same-domain crawl, WHOIS fallback,
//! optional rendered-DOM scan) under a per-site wall-clock budget. Each
//! strategy contributes a set of candidate addresses; failures degrade to
//! the empty set and never abort sibling strategies or the run.

mod crawl;
mod engine;
mod fetcher;
#[cfg(feature = "rendered")]
mod rendered;
mod strategies;
mod whois;

pub use crawl::crawl_same_host;
pub use engine::{DiscoveryEngine, DiscoveryReport};
pub use fetcher::{build_http_client, fetch_page, FetchOutcome};
pub use strategies::{scan_slices, scan_subpages, SUBPAGE_PATHS};
pub use whois::whois_lookup;

use std::time::{Duration, Instant};

/// A wall-clock deadline threaded through the strategy pipeline
///
/// Checked cooperatively before each strategy call and at every crawl
/// dequeue. The hard stop is the engine's task abort; this check is what
/// usually returns control first.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// Creates a deadline `budget` from now
    pub fn after(budget: Duration) -> Self {
        Self {
            at: Instant::now() + budget,
        }
    }

    /// Returns true once the deadline has passed
    pub fn expired(&self) -> bool {
        Instant::now() >= self.at
    }

    /// Time left before the deadline, zero if already past
    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }
}
