//! Index-page link collection
//!
//! Fetches the ranked chart page once and derives the absolute detail-page
//! URL for every listed movie. Any failure here empties the whole run, so
//! the fetch error is logged explicitly rather than silently skipped.

use crate::config::SourceConfig;
use crate::scrape::fetcher::fetch_page;
use crate::scrape::MovieLink;
use reqwest::Client;
use scraper::{Html, Selector};

/// Fetches the index page and collects the detail-page links
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `source` - Source configuration (index URL and base origin)
///
/// # Returns
///
/// The detail links in document order; empty when the index page cannot be
/// fetched or does not contain the chart list.
pub async fn collect_links(client: &Client, source: &SourceConfig) -> Vec<MovieLink> {
    let body = match fetch_page(client, &source.index_url).await {
        Ok(body) => body,
        Err(err) => {
            tracing::error!("failed to fetch index page {}: {}", source.index_url, err);
            return Vec::new();
        }
    };

    parse_index(&body, &source.base_origin)
}

/// Parses an index-page body into detail links
///
/// Locates the chart container, then its first list, and derives one
/// absolute URL per list item by prefixing the base origin to the item's
/// relative href. Items without a hyperlink are skipped silently.
///
/// # Arguments
///
/// * `body` - The index-page HTML
/// * `base_origin` - Origin prefixed to relative hrefs
///
/// # Returns
///
/// The detail links in document order
pub fn parse_index(body: &str, base_origin: &str) -> Vec<MovieLink> {
    let document = Html::parse_document(body);

    let container_selector =
        match Selector::parse(r#"div[data-testid="chart-layout-main-column"]"#) {
            Ok(selector) => selector,
            Err(_) => return Vec::new(),
        };
    let list_selector = match Selector::parse("ul") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };
    let item_selector = match Selector::parse("li") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };
    let anchor_selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    let container = match document.select(&container_selector).next() {
        Some(container) => container,
        None => {
            tracing::warn!("chart container not found on index page");
            return Vec::new();
        }
    };

    let list = match container.select(&list_selector).next() {
        Some(list) => list,
        None => {
            tracing::warn!("chart list not found inside container");
            return Vec::new();
        }
    };

    let origin = base_origin.trim_end_matches('/');
    let mut links = Vec::new();

    for item in list.select(&item_selector) {
        if let Some(anchor) = item.select(&anchor_selector).next() {
            if let Some(href) = anchor.value().attr("href") {
                links.push(MovieLink::new(format!("{}{}", origin, href)));
            }
        }
    }

    links
}
