use crate::config::Config;
use crate::discovery::DiscoveryEngine;
use crate::runner::progress::{estimate_remaining, ProgressReporter, ProgressUpdate};
use crate::Result;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Placeholder for sites where no address was found
pub const NO_EMAILS_PLACEHOLDER: &str = "No emails found";

/// One row of the results table: a website and its discovered addresses
///
/// Created when processing of the row starts, finalized when discovery
/// returns, never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRecord {
    /// The website URL as supplied in the spreadsheet
    pub website: String,

    /// Distinct addresses discovered within the budget
    pub emails: BTreeSet<String>,
}

impl SiteRecord {
    /// The emails as a comma-joined string, or the explicit placeholder
    pub fn emails_joined(&self) -> String {
        if self.emails.is_empty() {
            NO_EMAILS_PLACEHOLDER.to_string()
        } else {
            self.emails.iter().cloned().collect::<Vec<_>>().join(", ")
        }
    }
}

/// Aggregate outcome of a run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// One record per input website, input order preserved
    pub records: Vec<SiteRecord>,

    /// Total distinct-per-site addresses found
    pub total_emails: usize,

    /// How many sites hit their time budget
    pub sites_timed_out: usize,

    /// Wall-clock duration of the whole run
    pub elapsed: Duration,
}

/// Processes the website list strictly sequentially
pub struct Coordinator {
    engine: DiscoveryEngine,
}

impl Coordinator {
    /// Creates a coordinator from a validated configuration
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            engine: DiscoveryEngine::new(config)?,
        })
    }

    /// The underlying discovery engine (shares its HTTP client)
    pub fn engine(&self) -> &DiscoveryEngine {
        &self.engine
    }

    /// Runs discovery for every website, in order
    ///
    /// Exactly one record is appended per input website, in input order,
    /// even when discovery fails or times out for some of them. The
    /// reporter is called after every site with refreshed counts and a
    /// remaining-time estimate.
    ///
    /// # Arguments
    ///
    /// * `websites` - The ordered website list from the spreadsheet
    /// * `reporter` - Progress sink, called once per completed site
    pub async fn run(
        &self,
        websites: &[String],
        reporter: &mut dyn ProgressReporter,
    ) -> RunSummary {
        let started = Instant::now();
        let mut records = Vec::with_capacity(websites.len());
        let mut total_emails = 0usize;
        let mut sites_timed_out = 0usize;

        for (index, website) in websites.iter().enumerate() {
            tracing::debug!("Processing {}/{}: {}", index + 1, websites.len(), website);

            let report = self.engine.discover(website).await;

            if report.timed_out {
                sites_timed_out += 1;
            }
            total_emails += report.emails.len();

            records.push(SiteRecord {
                website: website.clone(),
                emails: report.emails,
            });

            let done = index + 1;
            let update = ProgressUpdate {
                website,
                sites_done: done,
                sites_total: websites.len(),
                site_emails: records[index].emails.len(),
                total_emails,
                timed_out: report.timed_out,
                estimated_remaining: estimate_remaining(started.elapsed(), done, websites.len()),
            };
            reporter.site_done(&update);
        }

        RunSummary {
            records,
            total_emails,
            sites_timed_out,
            elapsed: started.elapsed(),
        }
    }
}
