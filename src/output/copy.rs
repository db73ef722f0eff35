use crate::runner::SiteRecord;

/// Formats the results as a tab-separated block for manual copy
///
/// Tab separation pastes cleanly into spreadsheet applications: one
/// header line `Website\tEmails` and one line per site, processing order
/// preserved.
pub fn copy_block(records: &[SiteRecord]) -> String {
    let mut lines = vec!["Website\tEmails".to_string()];
    lines.extend(
        records
            .iter()
            .map(|record| format!("{}\t{}", record.website, record.emails_joined())),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_copy_block_format() {
        let records = vec![
            SiteRecord {
                website: "x.com".to_string(),
                emails: ["a@x.com".to_string(), "b@x.com".to_string()]
                    .into_iter()
                    .collect(),
            },
            SiteRecord {
                website: "y.com".to_string(),
                emails: BTreeSet::new(),
            },
        ];

        assert_eq!(
            copy_block(&records),
            "Website\tEmails\nx.com\ta@x.com, b@x.com\ny.com\tNo emails found"
        );
    }

    #[test]
    fn test_copy_block_empty_run() {
        assert_eq!(copy_block(&[]), "Website\tEmails");
    }
}
