//! Source loader: shared spreadsheet link to website list
//!
//! A publicly shared Google Sheets link is rewritten to the sheet's CSV
//! export endpoint, fetched once, and parsed into a small in-memory table
//! from which the website column is selected. All failures here are input
//! errors: they surface immediately and no processing starts.

mod link;
mod table;

pub use link::export_url;
pub use table::{load_sheet, SheetTable};
