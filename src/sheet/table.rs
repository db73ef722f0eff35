use crate::sheet::export_url;
use crate::SheetError;
use reqwest::Client;

/// An in-memory copy of the loaded spreadsheet
///
/// Kept only for the duration of the run; there is no persistence.
#[derive(Debug, Clone)]
pub struct SheetTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// Parses CSV text into a table
    ///
    /// The first record is the header row. Records shorter than the header
    /// are padded with empty cells so column lookups stay in bounds.
    pub fn from_csv(data: &str) -> Result<Self, SheetError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(data.as_bytes());

        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row: Vec<String> = record.iter().map(|c| c.to_string()).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    /// The header row
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Selects the website column and returns its non-empty values in row order
    ///
    /// Header matching is case-insensitive. Rows with an empty or
    /// whitespace-only cell are skipped.
    ///
    /// # Arguments
    ///
    /// * `column` - Name of the column holding one URL per row
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - The website URLs, input order preserved
    /// * `Err(SheetError::MissingColumn)` - No header matches
    pub fn websites(&self, column: &str) -> Result<Vec<String>, SheetError> {
        let index = self
            .headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(column))
            .ok_or_else(|| SheetError::MissingColumn(column.to_string()))?;

        Ok(self
            .rows
            .iter()
            .filter_map(|row| {
                let cell = row[index].trim();
                if cell.is_empty() {
                    None
                } else {
                    Some(cell.to_string())
                }
            })
            .collect())
    }
}

/// Loads the spreadsheet behind a shared link
///
/// Rewrites the link to the CSV export endpoint, fetches it once, and
/// parses the body. A non-success status or network failure is an input
/// error: the run must not start.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `sheet_link` - The shared spreadsheet link
///
/// # Returns
///
/// * `Ok(SheetTable)` - The parsed table
/// * `Err(SheetError)` - Invalid link, fetch failure, or unparseable CSV
pub async fn load_sheet(client: &Client, sheet_link: &str) -> Result<SheetTable, SheetError> {
    let csv_url = export_url(sheet_link)?;

    tracing::debug!("Fetching spreadsheet export: {}", csv_url);
    let response = client
        .get(&csv_url)
        .send()
        .await
        .map_err(|e| SheetError::Load(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SheetError::Load(format!("HTTP {}", status.as_u16())));
    }

    let body = response
        .text()
        .await
        .map_err(|e| SheetError::Load(e.to_string()))?;

    SheetTable::from_csv(&body)
}
