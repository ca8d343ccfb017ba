//! Quote extraction from rendered page markup
//!
//! Extraction is a pure function over already-fetched HTML: the driver
//! hands over the page source and this module pulls out quote records
//! and the next-page marker.

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single scraped quote
///
/// Field names match the output format exactly: `text`, `by`, `tags`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub text: String,
    pub by: String,
    pub tags: Vec<String>,
}

/// Errors that can occur during extraction
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A quote container was missing a required sub-element. This aborts
    /// extraction for the whole page rather than emitting a partial record.
    #[error("Quote container {index} is missing its '{field}' element")]
    MissingField { field: &'static str, index: usize },
}

fn selector(css: &str) -> Selector {
    // The selectors below are literals; parse failure is a programmer error
    Selector::parse(css).unwrap_or_else(|_| panic!("invalid selector: {}", css))
}

/// Extracts all quote records from a page, in document order
///
/// Each `.quote` container must hold exactly one `.text` and one `.author`
/// element and zero or more `.tag` elements. A container missing a required
/// element fails the whole page.
///
/// # Example
///
/// ```
/// use quotelines::crawler::extract_quotes;
///
/// let html = r#"<div class="quote">
///     <span class="text">Simplicity is the ultimate sophistication.</span>
///     <small class="author">Leonardo da Vinci</small>
///     <a class="tag">design</a>
/// </div>"#;
/// let records = extract_quotes(html).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].by, "Leonardo da Vinci");
/// ```
pub fn extract_quotes(html: &str) -> Result<Vec<QuoteRecord>, ExtractError> {
    let document = Html::parse_document(html);

    let quote_selector = selector(".quote");
    let text_selector = selector(".text");
    let author_selector = selector(".author");
    let tag_selector = selector(".tag");

    let mut records = Vec::new();

    for (index, container) in document.select(&quote_selector).enumerate() {
        let text = element_text(&container, &text_selector)
            .ok_or(ExtractError::MissingField { field: "text", index })?;

        let by = element_text(&container, &author_selector)
            .ok_or(ExtractError::MissingField { field: "author", index })?;

        let tags = container
            .select(&tag_selector)
            .map(|tag| tag.text().collect::<String>().trim().to_string())
            .collect();

        records.push(QuoteRecord { text, by, tags });
    }

    Ok(records)
}

/// Returns the trimmed text of the first element matching the selector
fn element_text(container: &ElementRef, sel: &Selector) -> Option<String> {
    container
        .select(sel)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}

/// Checks the page markup for the next-page marker (`li.next`)
pub fn has_next_page(html: &str) -> bool {
    let document = Html::parse_document(html);
    let next_selector = selector("li.next");
    document.select(&next_selector).next().is_some()
}
