use serde::Deserialize;

/// Main configuration structure for mailsift
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub strategies: StrategyConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Discovery engine timing and crawl bounds
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// Per-fetch connection/read timeout (seconds)
    #[serde(rename = "page-timeout-secs", default = "default_page_timeout")]
    pub page_timeout_secs: u64,

    /// Overall wall-clock budget per website (seconds)
    #[serde(rename = "site-budget-secs", default = "default_site_budget")]
    pub site_budget_secs: u64,

    /// Extra hops for the same-domain shallow crawl
    #[serde(rename = "crawl-depth", default = "default_crawl_depth")]
    pub crawl_depth: u32,

    /// Upper bound on pages visited per site by the shallow crawl
    #[serde(rename = "crawl-max-pages", default = "default_crawl_max_pages")]
    pub crawl_max_pages: usize,

    /// Settle delay before scanning a rendered DOM (milliseconds)
    #[serde(rename = "settle-delay-ms", default = "default_settle_delay")]
    pub settle_delay_ms: u64,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserAgentConfig {
    /// Name of the client
    #[serde(rename = "client-name", default = "default_client_name")]
    pub client_name: String,

    /// Version of the client
    #[serde(rename = "client-version", default = "default_client_version")]
    pub client_version: String,

    /// URL with information about the client
    #[serde(rename = "contact-url", default)]
    pub contact_url: String,

    /// Email address for client-related contact
    #[serde(rename = "contact-email", default)]
    pub contact_email: String,
}

/// Which extraction strategies run for each website
///
/// Strategies are independent: each contributes a set of candidate
/// addresses and the per-site result is the union of the enabled ones.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StrategyConfig {
    /// Scan the raw page text
    #[serde(default = "enabled")]
    pub body: bool,

    /// Scan `<meta>` tag markup
    #[serde(default = "enabled")]
    pub metadata: bool,

    /// Scan inline `<script>` tag markup
    #[serde(default = "enabled")]
    pub scripts: bool,

    /// Scan HTML comment nodes
    #[serde(default = "enabled")]
    pub comments: bool,

    /// Collect addresses from `mailto:` anchors
    #[serde(default = "enabled")]
    pub mailto: bool,

    /// Re-scan well-known subpages (contact, about, team)
    #[serde(default)]
    pub subpages: bool,

    /// Shallow same-domain crawl
    #[serde(default)]
    pub crawl: bool,

    /// WHOIS lookup, used only when page strategies find nothing
    #[serde(rename = "whois-fallback", default)]
    pub whois_fallback: bool,

    /// Headless-browser rendered-DOM scan (needs the `rendered` feature)
    #[serde(default)]
    pub rendered: bool,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Path the results CSV is written to
    #[serde(rename = "results-path", default = "default_results_path")]
    pub results_path: String,

    /// Name of the spreadsheet column holding one URL per row
    #[serde(rename = "website-column", default = "default_website_column")]
    pub website_column: String,
}

fn default_page_timeout() -> u64 {
    10
}

fn default_site_budget() -> u64 {
    60
}

fn default_crawl_depth() -> u32 {
    1
}

fn default_crawl_max_pages() -> usize {
    10
}

fn default_settle_delay() -> u64 {
    2000
}

fn default_client_name() -> String {
    "mailsift".to_string()
}

fn default_client_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_results_path() -> String {
    "./results.csv".to_string()
}

fn default_website_column() -> String {
    "Website".to_string()
}

fn enabled() -> bool {
    true
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            page_timeout_secs: default_page_timeout(),
            site_budget_secs: default_site_budget(),
            crawl_depth: default_crawl_depth(),
            crawl_max_pages: default_crawl_max_pages(),
            settle_delay_ms: default_settle_delay(),
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            client_name: default_client_name(),
            client_version: default_client_version(),
            contact_url: String::new(),
            contact_email: String::new(),
        }
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            body: true,
            metadata: true,
            scripts: true,
            comments: true,
            mailto: true,
            subpages: false,
            crawl: false,
            whois_fallback: false,
            rendered: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_path: default_results_path(),
            website_column: default_website_column(),
        }
    }
}

impl StrategyConfig {
    /// Returns true if any page-content strategy is enabled
    ///
    /// The WHOIS fallback only makes sense relative to these: it runs when
    /// all of them (plus crawl and rendered) came up empty.
    pub fn any_page_strategy(&self) -> bool {
        self.body || self.metadata || self.scripts || self.comments || self.mailto || self.subpages
    }
}
