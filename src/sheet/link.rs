use crate::SheetError;

/// Rewrites a shared Google Sheets link to its CSV export endpoint
///
/// A share link looks like
/// `https://docs.google.com/spreadsheets/d/<id>/edit#gid=0`; the document
/// identifier is the path segment after `/spreadsheets/d/`. The export
/// endpoint is a fixed template with that identifier substituted in.
///
/// # Arguments
///
/// * `sheet_link` - The link the user pasted
///
/// # Returns
///
/// * `Ok(String)` - The CSV export URL
/// * `Err(SheetError::InvalidLink)` - The link does not look like a shared sheet
///
/// # Examples
///
/// ```
/// use mailsift::sheet::export_url;
///
/// let url = export_url("https://docs.google.com/spreadsheets/d/abc123/edit").unwrap();
/// assert_eq!(url, "https://docs.google.com/spreadsheets/d/abc123/export?format=csv");
/// ```
pub fn export_url(sheet_link: &str) -> Result<String, SheetError> {
    let link = sheet_link.trim();

    if !link.contains("docs.google.com") {
        return Err(SheetError::InvalidLink(link.to_string()));
    }

    let sheet_id = link
        .split("spreadsheets/d/")
        .nth(1)
        .and_then(|rest| rest.split('/').next())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| SheetError::InvalidLink(link.to_string()))?;

    Ok(format!(
        "https://docs.google.com/spreadsheets/d/{}/export?format=csv",
        sheet_id
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_url_from_edit_link() {
        let url =
            export_url("https://docs.google.com/spreadsheets/d/1A2b3C/edit#gid=0").unwrap();
        assert_eq!(
            url,
            "https://docs.google.com/spreadsheets/d/1A2b3C/export?format=csv"
        );
    }

    #[test]
    fn test_export_url_without_trailing_path() {
        let url = export_url("https://docs.google.com/spreadsheets/d/1A2b3C").unwrap();
        assert_eq!(
            url,
            "https://docs.google.com/spreadsheets/d/1A2b3C/export?format=csv"
        );
    }

    #[test]
    fn test_invalid_host_rejected() {
        let result = export_url("https://example.com/spreadsheets/d/1A2b3C/edit");
        assert!(matches!(result, Err(SheetError::InvalidLink(_))));
    }

    #[test]
    fn test_missing_id_segment_rejected() {
        let result = export_url("https://docs.google.com/spreadsheets/");
        assert!(matches!(result, Err(SheetError::InvalidLink(_))));

        let result = export_url("https://docs.google.com/spreadsheets/d//edit");
        assert!(matches!(result, Err(SheetError::InvalidLink(_))));
    }

    #[test]
    fn test_empty_link_rejected() {
        assert!(matches!(export_url(""), Err(SheetError::InvalidLink(_))));
    }
}
