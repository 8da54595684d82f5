//! Scraping module for chart and detail-page processing
//!
//! This module contains the page-level building blocks of the pipeline:
//! - HTTP client construction and single-page fetching
//! - Detail-page field extraction
//! - Index-page link collection

mod collector;
mod extractor;
mod fetcher;

pub use collector::{collect_links, parse_index};
pub use extractor::extract_record;
pub use fetcher::{build_http_client, fetch_page, FetchError};

use std::fmt;

/// Absolute URL of one movie detail page
///
/// Produced by the link collector and treated as opaque from then on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovieLink(String);

impl MovieLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fully populated record for one movie
///
/// All four fields are mandatory and non-empty; the extractor never
/// constructs a partial record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovieRecord {
    pub title: String,
    pub date: String,
    pub rating: String,
    pub plot: String,
}
