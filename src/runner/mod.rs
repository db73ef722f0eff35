//! Run coordination
//!
//! Iterates the website list strictly sequentially, invokes the discovery
//! engine once per site, accumulates the results table, and reports
//! progress through an explicitly passed reporter. One site's failure or
//! timeout never aborts the run.

mod coordinator;
mod progress;

pub use coordinator::{Coordinator, RunSummary, SiteRecord, NO_EMAILS_PLACEHOLDER};
pub use progress::{estimate_remaining, ConsoleReporter, ProgressReporter, ProgressUpdate};
