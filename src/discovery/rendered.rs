//! Rendered-DOM scan via headless Chromium
//!
//! Some sites only materialize contact details after their scripts run.
//! This strategy loads the page in a headless browser, waits a fixed
//! settle delay, and applies the body scan to the rendered DOM. It is
//! strictly additive: any failure contributes nothing.

use crate::extract::{slice_page, EmailPattern};
use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use std::collections::BTreeSet;
use std::time::Duration;
use url::Url;

/// Loads `url` in headless Chromium and body-scans the rendered DOM
///
/// The whole operation, browser launch included, runs under `budget`.
/// Launch failures (no Chromium installed, sandbox restrictions) and
/// navigation failures all degrade to the empty set.
///
/// # Arguments
///
/// * `url` - The page to render
/// * `settle_delay` - Wait after navigation before reading the DOM
/// * `budget` - Hard cap on the entire render
/// * `pattern` - The shared email matcher
pub async fn scan_rendered(
    url: &Url,
    settle_delay: Duration,
    budget: Duration,
    pattern: &EmailPattern,
) -> BTreeSet<String> {
    match tokio::time::timeout(budget, render_page(url, settle_delay)).await {
        Ok(Ok(html)) => {
            let slices = slice_page(&html, url);
            pattern.extract(&slices.body_text)
        }
        Ok(Err(e)) => {
            tracing::debug!("Rendered scan failed for {}: {}", url, e);
            BTreeSet::new()
        }
        Err(_) => {
            tracing::debug!("Rendered scan timed out for {}", url);
            BTreeSet::new()
        }
    }
}

/// Launches a browser, navigates, waits, and returns the DOM HTML
async fn render_page(url: &Url, settle_delay: Duration) -> Result<String, String> {
    let config = BrowserConfig::builder()
        .no_sandbox()
        .arg("--disable-gpu")
        .arg("--disable-dev-shm-usage")
        .build()
        .map_err(|e| e.to_string())?;

    let (mut browser, mut handler) = Browser::launch(config)
        .await
        .map_err(|e| e.to_string())?;

    // Drive browser events until the handler stream ends
    let event_loop = tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            if event.is_err() {
                break;
            }
        }
    });

    let result = async {
        let page = browser
            .new_page(url.as_str())
            .await
            .map_err(|e| e.to_string())?;

        tokio::time::sleep(settle_delay).await;

        page.content().await.map_err(|e| e.to_string())
    }
    .await;

    let _ = browser.close().await;
    event_loop.abort();

    result
}
