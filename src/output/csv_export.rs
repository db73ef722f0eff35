use crate::runner::SiteRecord;
use crate::Result;
use std::io::Write;
use std::path::Path;

/// Writes the results table as CSV to any writer
///
/// Header row `Website,Emails`, one row per processed site in processing
/// order, standard CSV quoting (fields containing commas are quoted).
/// Sites without results carry the explicit placeholder.
///
/// # Arguments
///
/// * `records` - The results table
/// * `writer` - Destination for the CSV bytes
pub fn write_csv<W: Write>(records: &[SiteRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["Website", "Emails"])?;
    for record in records {
        csv_writer.write_record([record.website.as_str(), record.emails_joined().as_str()])?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Writes the results table as a CSV file at `path`
///
/// # Arguments
///
/// * `records` - The results table
/// * `path` - Destination file path
pub fn export_csv(records: &[SiteRecord], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(records, file)?;
    tracing::info!("Results written to {}", path.display());
    Ok(())
}
