use scraper::{Html, Node, Selector};
use url::Url;

/// The sub-locations of one fetched page that strategies scan
///
/// Produced in a single parse pass so the strategies stay pure functions
/// over pre-sliced text.
#[derive(Debug, Clone, Default)]
pub struct PageSlices {
    /// Concatenated text nodes of the document
    pub body_text: String,

    /// Concatenated `<meta>` tag markup
    pub metadata: String,

    /// Concatenated `<script>` tag markup
    pub scripts: String,

    /// Concatenated HTML comment nodes
    pub comments: String,

    /// `mailto:` anchor targets, prefix stripped and query dropped,
    /// not yet validated against the email pattern
    pub mailto_targets: Vec<String>,

    /// Outbound links resolved to absolute URLs, in appearance order
    pub links: Vec<Url>,
}

/// Parses HTML and carves it into the slices strategies consume
///
/// Parsing never fails: html5ever recovers from arbitrary input, so
/// malformed markup just yields emptier slices.
///
/// # Arguments
///
/// * `html` - The HTML content to slice
/// * `base_url` - The base URL for resolving relative links
pub fn slice_page(html: &str, base_url: &Url) -> PageSlices {
    let document = Html::parse_document(html);

    let mut slices = PageSlices {
        body_text: document.root_element().text().collect::<Vec<_>>().join(" "),
        ..Default::default()
    };

    if let Ok(meta_selector) = Selector::parse("meta") {
        for element in document.select(&meta_selector) {
            slices.metadata.push_str(&element.html());
            slices.metadata.push('\n');
        }
    }

    if let Ok(script_selector) = Selector::parse("script") {
        for element in document.select(&script_selector) {
            slices.scripts.push_str(&element.html());
            slices.scripts.push('\n');
        }
    }

    for node in document.tree.nodes() {
        if let Node::Comment(comment) = node.value() {
            slices.comments.push_str(comment);
            slices.comments.push('\n');
        }
    }

    if let Ok(anchor_selector) = Selector::parse("a[href]") {
        for element in document.select(&anchor_selector) {
            let href = match element.value().attr("href") {
                Some(h) => h.trim(),
                None => continue,
            };

            if let Some(target) = href.strip_prefix("mailto:") {
                // Drop any ?subject=... style query fragment
                let address = target.split('?').next().unwrap_or("");
                if !address.is_empty() {
                    slices.mailto_targets.push(address.to_string());
                }
                continue;
            }

            if let Some(link) = resolve_link(href, base_url) {
                slices.links.push(link);
            }
        }
    }

    slices
}

/// Resolves a link href to an absolute URL and validates it
///
/// Returns None if the link should be excluded:
/// - javascript:, tel:, data: schemes
/// - fragment-only links
/// - URLs that fail to resolve
/// - Non-HTTP(S) URLs after resolution
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    if href.is_empty() {
        return None;
    }

    if href.starts_with("javascript:") || href.starts_with("tel:") || href.starts_with("data:") {
        return None;
    }

    if href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute) if absolute.scheme() == "http" || absolute.scheme() == "https" => {
            Some(absolute)
        }
        _ => None,
    }
}
