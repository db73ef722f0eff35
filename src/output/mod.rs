//! Results export
//!
//! The results table is offered three ways: a CSV file for download, a
//! tab-separated block for pasting back into a spreadsheet, and a plain
//! table printed to the terminal. All three render from the same records
//! in processing order.

mod copy;
mod csv_export;

pub use copy::copy_block;
pub use csv_export::{export_csv, write_csv};

use crate::runner::SiteRecord;

/// Renders the results as a plain two-column terminal table
pub fn render_table(records: &[SiteRecord]) -> String {
    let website_width = records
        .iter()
        .map(|r| r.website.len())
        .chain(std::iter::once("Website".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{:<width$}  Emails\n", "Website", width = website_width));
    for record in records {
        out.push_str(&format!(
            "{:<width$}  {}\n",
            record.website,
            record.emails_joined(),
            width = website_width
        ));
    }
    out
}
