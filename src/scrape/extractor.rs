//! Detail-page field extraction
//!
//! Four independent structured lookups against a parsed detail page. A
//! record is produced only when every lookup yields non-empty text; a page
//! missing any field is skipped, never treated as an error.

use crate::scrape::MovieRecord;
use scraper::{Html, Selector};

/// Extracts a complete movie record from a detail-page body
///
/// # Field lookups
///
/// - title: first `h1`, trimmed
/// - date: first link whose href contains `releaseinfo`, trimmed
/// - rating: the aggregate rating score element, trimmed
/// - plot: the short-form synopsis element, trimmed
///
/// # Returns
///
/// * `Some(MovieRecord)` - All four fields present and non-empty
/// * `None` - Any field absent or empty (silent skip)
///
/// # Example
///
/// ```
/// use marquee::scrape::extract_record;
///
/// let body = r#"<html><body>
///   <h1>Heat</h1>
///   <a href="/title/tt0113277/releaseinfo">December 15, 1995</a>
///   <div data-testid="hero-rating-bar__aggregate-rating__score">8.3</div>
///   <span data-testid="plot-xs_to_m">A crew of thieves.</span>
/// </body></html>"#;
///
/// let record = extract_record(body).unwrap();
/// assert_eq!(record.title, "Heat");
/// assert_eq!(record.rating, "8.3");
/// ```
pub fn extract_record(body: &str) -> Option<MovieRecord> {
    let document = Html::parse_document(body);

    let title = lookup(&document, "h1", "title")?;
    let date = lookup(&document, r#"a[href*="releaseinfo"]"#, "date")?;
    let rating = lookup(
        &document,
        r#"[data-testid="hero-rating-bar__aggregate-rating__score"]"#,
        "rating",
    )?;
    let plot = lookup(&document, r#"span[data-testid="plot-xs_to_m"]"#, "plot")?;

    Some(MovieRecord {
        title,
        date,
        rating,
        plot,
    })
}

/// Typed fallible lookup for one field
///
/// Returns the trimmed text of the first matching element, or None when the
/// element is absent or its text is empty. A selector that fails to compile
/// is reported and degrades to None rather than escaping as a fault.
fn lookup(document: &Html, selector: &str, field: &'static str) -> Option<String> {
    let parsed = match Selector::parse(selector) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!("selector for field '{}' failed to compile: {:?}", field, err);
            return None;
        }
    };

    let text = document
        .select(&parsed)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty());

    if text.is_none() {
        tracing::debug!("field '{}' missing or empty, skipping page", field);
    }

    text
}
