use std::time::Duration;

/// A per-site progress snapshot handed to the reporter
#[derive(Debug, Clone)]
pub struct ProgressUpdate<'a> {
    /// The website just finished
    pub website: &'a str,

    /// Sites processed so far, this one included
    pub sites_done: usize,

    /// Total sites in the run
    pub sites_total: usize,

    /// Emails found for this site
    pub site_emails: usize,

    /// Running total of emails found
    pub total_emails: usize,

    /// Whether this site hit its time budget
    pub timed_out: bool,

    /// Estimated time remaining for the run
    pub estimated_remaining: Duration,
}

/// Receives progress as the run advances
///
/// Passed into the coordinator explicitly; there is no ambient progress
/// state. Implementations decide how to surface updates (console, UI).
pub trait ProgressReporter {
    /// Called after each site completes
    fn site_done(&mut self, update: &ProgressUpdate<'_>);
}

/// Reporter that logs progress through `tracing`
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn site_done(&mut self, update: &ProgressUpdate<'_>) {
        let percent = (update.sites_done * 100) / update.sites_total.max(1);
        tracing::info!(
            "Processing {}/{} ({}%) - {} - emails found: {} (total {}), ~{}s remaining",
            update.sites_done,
            update.sites_total,
            percent,
            update.website,
            update.site_emails,
            update.total_emails,
            update.estimated_remaining.as_secs()
        );

        if update.timed_out {
            tracing::warn!("{} hit its time budget; results may be partial", update.website);
        }
    }
}

/// Estimates the time remaining as `(elapsed / done) * remaining`
///
/// Refines as the run progresses: the per-site average improves with
/// every completed site. Zero sites done means no estimate yet.
pub fn estimate_remaining(elapsed: Duration, sites_done: usize, sites_total: usize) -> Duration {
    if sites_done == 0 || sites_total <= sites_done {
        return Duration::ZERO;
    }

    let remaining = (sites_total - sites_done) as u32;
    (elapsed / sites_done as u32) * remaining
}
