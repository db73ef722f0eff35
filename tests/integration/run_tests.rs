//! End-to-end tests for the discovery run
//!
//! These tests use wiremock to stand in for the websites being scanned
//! and exercise the sheet-table parsing, the coordinator loop, and the
//! exported results together.

use mailsift::config::Config;
use mailsift::output::{copy_block, write_csv};
use mailsift::runner::{Coordinator, ProgressReporter, ProgressUpdate, NO_EMAILS_PLACEHOLDER};
use mailsift::sheet::SheetTable;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with tight timeouts
fn create_test_config() -> Config {
    let mut config = Config::default();
    config.discovery.page_timeout_secs = 2;
    config.discovery.site_budget_secs = 10;
    config
}

/// Reporter that only counts calls
#[derive(Default)]
struct CountingReporter {
    calls: usize,
}

impl ProgressReporter for CountingReporter {
    fn site_done(&mut self, _update: &ProgressUpdate<'_>) {
        self.calls += 1;
    }
}

#[tokio::test]
async fn test_sheet_to_results_end_to_end() {
    // A fixture site with one address in the body and one behind mailto
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body>
                <p>Questions? a@example.com</p>
                <a href="mailto:b@example.com?subject=Hello">Write us</a>
            </body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    // Spreadsheet rows: the fixture site and an unreachable host
    let csv_data = format!("Website\n{}/\nnosite.invalid\n", mock_server.uri());
    let table = SheetTable::from_csv(&csv_data).expect("CSV should parse");
    let websites = table.websites("Website").expect("column should exist");
    assert_eq!(websites.len(), 2);

    let coordinator = Coordinator::new(create_test_config()).expect("engine should build");
    let mut reporter = CountingReporter::default();
    let summary = coordinator.run(&websites, &mut reporter).await;

    // Exactly one record per input website, input order preserved
    assert_eq!(summary.records.len(), 2);
    assert_eq!(reporter.calls, 2);

    // Row 1: both addresses, mailto prefix and query stripped
    let first = &summary.records[0];
    assert_eq!(first.emails.len(), 2);
    assert!(first.emails.contains("a@example.com"));
    assert!(first.emails.contains("b@example.com"));

    // Row 2: unreachable host, empty result, explicit placeholder, no crash
    let second = &summary.records[1];
    assert!(second.emails.is_empty());
    assert_eq!(second.emails_joined(), NO_EMAILS_PLACEHOLDER);
}

#[tokio::test]
async fn test_results_export_round() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<p>a@x.com and b@x.com</p>"),
        )
        .mount(&mock_server)
        .await;

    let websites = vec![format!("{}/", mock_server.uri())];
    let coordinator = Coordinator::new(create_test_config()).unwrap();
    let mut reporter = CountingReporter::default();
    let summary = coordinator.run(&websites, &mut reporter).await;

    // CSV: header, one quoted row (the email list contains a comma)
    let mut buffer = Vec::new();
    write_csv(&summary.records, &mut buffer).unwrap();
    let csv_text = String::from_utf8(buffer).unwrap();
    assert!(csv_text.starts_with("Website,Emails\n"));
    assert!(csv_text.contains("\"a@x.com, b@x.com\""));

    // Copy block: tab separated, same order
    let block = copy_block(&summary.records);
    assert!(block.starts_with("Website\tEmails\n"));
    assert!(block.contains("\ta@x.com, b@x.com"));
}

#[tokio::test]
async fn test_crawl_strategy_end_to_end() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body>
                <a href="{0}/contact-page">Contact</a>
                <a href="https://elsewhere.invalid/page">External</a>
            </body></html>"#,
            mock_server.uri()
        )))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/contact-page"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>crawled@example.com</p>"))
        .mount(&mock_server)
        .await;

    let mut config = create_test_config();
    config.strategies.crawl = true;

    let websites = vec![format!("{}/", mock_server.uri())];
    let coordinator = Coordinator::new(config).unwrap();
    let mut reporter = CountingReporter::default();
    let summary = coordinator.run(&websites, &mut reporter).await;

    // The same-host link was followed, the foreign one was not
    assert!(summary.records[0].emails.contains("crawled@example.com"));
    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.url.host_str() != Some("elsewhere.invalid")));
}

#[tokio::test]
async fn test_run_continues_past_budget_expiry() {
    let mock_server = MockServer::start().await;
    // First site stalls past its budget, second answers immediately
    Mock::given(method("GET"))
        .and(path("/stall"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("never@example.com")
                .set_delay(std::time::Duration::from_secs(20)),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/fast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>ok@example.com</p>"))
        .mount(&mock_server)
        .await;

    let mut config = create_test_config();
    config.discovery.site_budget_secs = 1;
    config.discovery.page_timeout_secs = 10;

    let websites = vec![
        format!("{}/stall", mock_server.uri()),
        format!("{}/fast", mock_server.uri()),
    ];
    let coordinator = Coordinator::new(config).unwrap();
    let mut reporter = CountingReporter::default();
    let summary = coordinator.run(&websites, &mut reporter).await;

    // The stalled site is recorded empty and flagged; the run went on
    assert_eq!(summary.records.len(), 2);
    assert!(summary.records[0].emails.is_empty());
    assert_eq!(summary.sites_timed_out, 1);
    assert!(summary.records[1].emails.contains("ok@example.com"));
}
